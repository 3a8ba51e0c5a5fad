// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// An error indicating that a cycle was detected in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError;

/// Orders the nodes of a directed graph so every parent precedes its children.
///
/// This is Kahn's algorithm. Roots are visited in the order `nodes` yields
/// them, so the output is deterministic for a given input order. Edges that
/// reference a node missing from `nodes` are ignored.
///
/// # Arguments
///
/// * `nodes`: The unique nodes of the graph.
/// * `edges`: Directed `(parent, child)` edges.
///
/// # Returns
///
/// * `Ok(Vec<T>)`: The nodes in a valid topological order.
/// * `Err(CycleError)`: If the graph contains one or more cycles.
pub fn topological_sort<T>(
    nodes: impl IntoIterator<Item = T>,
    edges: impl IntoIterator<Item = (T, T)>,
) -> Result<Vec<T>, CycleError>
where
    T: Copy + Eq + Hash,
{
    let node_list: Vec<T> = nodes.into_iter().collect();
    if node_list.is_empty() {
        return Ok(Vec::new());
    }

    let mut children: HashMap<T, Vec<T>> = HashMap::new();
    let mut in_degree: HashMap<T, usize> = node_list.iter().map(|id| (*id, 0)).collect();

    for (parent, child) in edges {
        if !in_degree.contains_key(&parent) {
            continue;
        }
        if let Some(degree) = in_degree.get_mut(&child) {
            *degree += 1;
            children.entry(parent).or_default().push(child);
        }
    }

    let mut queue: VecDeque<T> = node_list
        .iter()
        .copied()
        .filter(|node| in_degree.get(node).copied().unwrap_or(0) == 0)
        .collect();

    let mut sorted = Vec::with_capacity(node_list.len());
    while let Some(parent) = queue.pop_front() {
        sorted.push(parent);
        for &child in children.get(&parent).into_iter().flatten() {
            if let Some(degree) = in_degree.get_mut(&child) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(child);
                }
            }
        }
    }

    if sorted.len() != node_list.len() {
        Err(CycleError)
    } else {
        Ok(sorted)
    }
}
