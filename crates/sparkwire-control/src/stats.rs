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

use serde::Serialize;

/// Counters describing what the propagation engine has done this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PropagationStats {
    /// Top-level firings that started a cascade.
    pub fires: u64,
    /// Events routed, including every cascaded emission.
    pub events_routed: u64,
    /// Wired methods that ran.
    pub invocations: u64,
    /// Firings and interactions swallowed because the session was stopped.
    pub suppressed: u64,
    /// Connections skipped because their target no longer exists.
    pub stale_targets: u64,
    /// Connections skipped because the target no longer has the method.
    pub stale_methods: u64,
    /// Cascades cut short by the configured depth limit.
    pub depth_limit_hits: u64,
    /// The deepest cascade observed (0 for a firing with no chained events).
    pub max_depth: u32,
}

impl PropagationStats {
    pub(crate) fn observe_depth(&mut self, depth: u32) {
        self.max_depth = self.max_depth.max(depth);
    }
}
