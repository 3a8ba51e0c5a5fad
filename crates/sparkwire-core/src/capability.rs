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

//! Capability declarations and their flattened form.
//!
//! A component type declares a [`CapabilityDecl`]: the events it can emit
//! and the methods it can receive. Declarations compose additively down a
//! type hierarchy. The registry folds a type's declaration onto its parent's
//! [`CapabilitySet`] once, at registration time, so the engine only ever
//! consults a single flat table per type.

use crate::ids::{EventId, MethodId};

/// A static capability declaration: the delta a type contributes on top of
/// whatever its parent already declares.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityDecl {
    /// `(event, human label)` pairs this type can emit.
    pub events: &'static [(&'static str, &'static str)],
    /// Methods this type can receive.
    pub methods: &'static [&'static str],
}

impl CapabilityDecl {
    /// A declaration that adds nothing.
    pub const EMPTY: Self = Self {
        events: &[],
        methods: &[],
    };
}

/// The effective, flattened capability table of a component type.
///
/// Entries keep declaration order (ancestors first), which is the order the
/// presentation layer shows them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapabilitySet {
    events: Vec<(EventId, String)>,
    methods: Vec<MethodId>,
}

impl CapabilitySet {
    /// Creates an empty capability set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the capability set of a root type.
    pub fn from_decl(decl: &CapabilityDecl) -> Self {
        Self::new().extended(decl)
    }

    /// Returns the union of `self` and `decl`.
    ///
    /// An event the declaration re-declares keeps its position but takes the
    /// new label. Nothing is ever removed.
    pub fn extended(&self, decl: &CapabilityDecl) -> Self {
        let mut merged = self.clone();
        for &(event, label) in decl.events {
            match merged.events.iter_mut().find(|(id, _)| id == event) {
                Some((_, existing)) => *existing = label.to_string(),
                None => merged
                    .events
                    .push((EventId::from_static(event), label.to_string())),
            }
        }
        for &method in decl.methods {
            if !merged.declares_method(method) {
                merged.methods.push(MethodId::from_static(method));
            }
        }
        merged
    }

    /// Returns `true` if `event` is one of the declared events.
    pub fn declares_event(&self, event: &str) -> bool {
        self.events.iter().any(|(id, _)| id == event)
    }

    /// Returns `true` if `method` is one of the declared methods.
    pub fn declares_method(&self, method: &str) -> bool {
        self.methods.iter().any(|id| id == method)
    }

    /// Returns the human label of an event, if it is declared.
    pub fn event_label(&self, event: &str) -> Option<&str> {
        self.events
            .iter()
            .find(|(id, _)| id == event)
            .map(|(_, label)| label.as_str())
    }

    /// Returns the declared events with their labels, in declaration order.
    pub fn events(&self) -> &[(EventId, String)] {
        &self.events
    }

    /// Returns the declared methods, in declaration order.
    pub fn methods(&self) -> &[MethodId] {
        &self.methods
    }

    /// Returns `true` if the type declares neither events nor methods.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.methods.is_empty()
    }
}
