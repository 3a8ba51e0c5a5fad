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

//! Storage for instances, their connections, and instance ids.

use crate::connection::Connection;
use crate::instance::ComponentInstance;
use crate::registry::ComponentRegistry;
use sparkwire_core::{EventId, InstanceId, MethodId, Position, RegistryError, WiringError};
use std::collections::HashMap;

/// Hands out instance ids.
///
/// Ids increase monotonically and are never recycled; only [`GraphStore::clear`]
/// rewinds the counter.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub(crate) fn allocate(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    pub(crate) fn peek(&self) -> InstanceId {
        InstanceId(self.next)
    }

    pub(crate) fn reset(&mut self) {
        self.next = 0;
    }
}

/// Instances and connections removed together by [`GraphStore::remove`].
#[derive(Debug)]
pub struct Removal {
    /// The instance that was removed.
    pub instance: ComponentInstance,
    /// Every connection discarded by the cascade: the ones the instance owned
    /// first, then the ones other instances aimed at it.
    pub connections: Vec<Connection>,
}

/// The set of all instances, keyed by id, and the connections they own.
#[derive(Debug, Default)]
pub struct GraphStore {
    instances: HashMap<InstanceId, ComponentInstance>,
    ids: IdAllocator,
}

impl GraphStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and inserts a new instance of `type_name`.
    ///
    /// The type is checked before an id is consumed, so a failed creation
    /// leaves the allocator untouched.
    pub fn spawn(
        &mut self,
        registry: &ComponentRegistry,
        type_name: &str,
        position: Position,
    ) -> Result<InstanceId, RegistryError> {
        let instance = registry.instantiate(type_name, self.ids.peek(), position)?;
        let id = self.ids.allocate();
        debug_assert_eq!(id, instance.id());
        self.instances.insert(id, instance);
        Ok(id)
    }

    /// Resolves an instance by id.
    pub fn get(&self, id: InstanceId) -> Option<&ComponentInstance> {
        self.instances.get(&id)
    }

    /// Resolves an instance by id, mutably.
    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut ComponentInstance> {
        self.instances.get_mut(&id)
    }

    /// Returns `true` if `id` is alive.
    pub fn contains(&self, id: InstanceId) -> bool {
        self.instances.contains_key(&id)
    }

    /// Returns the number of live instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if the store holds no instances.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Live instance ids, in creation order.
    pub fn ids(&self) -> Vec<InstanceId> {
        let mut ids: Vec<InstanceId> = self.instances.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Live instances, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentInstance> + '_ {
        self.ids().into_iter().filter_map(move |id| self.instances.get(&id))
    }

    /// Updates the opaque position of an instance. Returns `false` if it is gone.
    pub fn set_position(&mut self, id: InstanceId, position: Position) -> bool {
        match self.instances.get_mut(&id) {
            Some(instance) => {
                instance.set_position(position);
                true
            }
            None => false,
        }
    }

    /// Validates and appends a connection to the source's owned list.
    ///
    /// Either the connection is stored and returned, or nothing changes.
    pub fn connect(
        &mut self,
        source: InstanceId,
        target: InstanceId,
        event: EventId,
        method: MethodId,
    ) -> Result<Connection, WiringError> {
        if source == target {
            return Err(WiringError::SelfConnection(source));
        }
        let source_instance = self
            .instances
            .get(&source)
            .ok_or(WiringError::UnknownInstance(source))?;
        if !source_instance.capabilities().declares_event(event.as_str()) {
            return Err(WiringError::InvalidSource { source, event });
        }
        let target_instance = self
            .instances
            .get(&target)
            .ok_or(WiringError::UnknownInstance(target))?;
        if !target_instance.capabilities().declares_method(method.as_str()) {
            return Err(WiringError::InvalidTarget { target, method });
        }

        let connection = Connection {
            source,
            event,
            target,
            method,
        };
        if let Some(owner) = self.instances.get_mut(&source) {
            owner.push_connection(connection.clone());
        }
        Ok(connection)
    }

    /// Every connection in the graph, grouped by source in creation order.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> + '_ {
        self.iter().flat_map(|instance| instance.connections().iter())
    }

    /// Connections with `id` at either end; the ones to redraw when it moves.
    pub fn connections_involving(&self, id: InstanceId) -> Vec<Connection> {
        self.connections()
            .filter(|c| c.involves(id))
            .cloned()
            .collect()
    }

    /// Removes an instance and every connection touching it.
    ///
    /// Returns `None` when `id` is not alive, which makes a repeated removal a
    /// no-op.
    pub fn remove(&mut self, id: InstanceId) -> Option<Removal> {
        let mut instance = self.instances.remove(&id)?;
        let mut connections = instance.detach_all();
        for other in self.ids() {
            if let Some(other) = self.instances.get_mut(&other) {
                connections.extend(other.detach_target(id));
            }
        }
        log::debug!(
            "Removed {} and {} connection(s).",
            instance.label(),
            connections.len()
        );
        Some(Removal {
            instance,
            connections,
        })
    }

    /// Drops every instance at once and rewinds the id allocator.
    pub fn clear(&mut self) {
        self.instances.clear();
        self.ids.reset();
    }
}
