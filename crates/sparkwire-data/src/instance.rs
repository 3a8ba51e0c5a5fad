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

//! A placed, stateful component.

use crate::connection::Connection;
use sparkwire_core::{Behavior, CapabilitySet, EventId, InstanceId, MethodId, Position};
use std::sync::Arc;

/// One placed node of the circuit.
///
/// The instance owns the connections leaving it (the source side of every
/// wire). Its capability table is shared with every other instance of the
/// same type and never changes after creation.
#[derive(Debug)]
pub struct ComponentInstance {
    id: InstanceId,
    type_name: &'static str,
    position: Position,
    capabilities: Arc<CapabilitySet>,
    behavior: Box<dyn Behavior>,
    outgoing: Vec<Connection>,
}

impl ComponentInstance {
    /// Assembles an instance. Normally called by the registry.
    pub fn new(
        id: InstanceId,
        type_name: &'static str,
        position: Position,
        capabilities: Arc<CapabilitySet>,
        behavior: Box<dyn Behavior>,
    ) -> Self {
        Self {
            id,
            type_name,
            position,
            capabilities,
            behavior,
            outgoing: Vec::new(),
        }
    }

    /// The instance's unique id.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// The registered name of the instance's type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// A display label such as `Switch #0`.
    pub fn label(&self) -> String {
        format!("{} {}", self.type_name, self.id)
    }

    /// The opaque placement data.
    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// The flattened capability table of the instance's type.
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// The events this instance can emit, with their labels.
    pub fn declared_events(&self) -> &[(EventId, String)] {
        self.capabilities.events()
    }

    /// The methods this instance can receive.
    pub fn declared_methods(&self) -> &[MethodId] {
        self.capabilities.methods()
    }

    /// The instance's internal logic.
    pub fn behavior(&self) -> &dyn Behavior {
        self.behavior.as_ref()
    }

    /// Mutable access to the instance's internal logic.
    pub fn behavior_mut(&mut self) -> &mut dyn Behavior {
        self.behavior.as_mut()
    }

    /// Downcasts the behavior to a concrete component type.
    pub fn behavior_as<T: Behavior + 'static>(&self) -> Option<&T> {
        self.behavior.as_any().downcast_ref::<T>()
    }

    /// The connections owned by this instance, in creation order.
    pub fn connections(&self) -> &[Connection] {
        &self.outgoing
    }

    /// The owned connections triggered by `event`, in creation order.
    pub fn connections_for<'a>(
        &'a self,
        event: &'a str,
    ) -> impl Iterator<Item = &'a Connection> + 'a {
        self.outgoing.iter().filter(move |c| c.event == event)
    }

    pub(crate) fn push_connection(&mut self, connection: Connection) {
        self.outgoing.push(connection);
    }

    /// Drops every owned connection aimed at `target`, returning them.
    pub(crate) fn detach_target(&mut self, target: InstanceId) -> Vec<Connection> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.outgoing)
            .into_iter()
            .partition(|c| c.target == target);
        self.outgoing = kept;
        removed
    }

    /// Drops every owned connection, returning them.
    pub(crate) fn detach_all(&mut self) -> Vec<Connection> {
        std::mem::take(&mut self.outgoing)
    }
}
