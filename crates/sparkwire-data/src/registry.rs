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

//! The component registry: type names to factories and capability tables.
//!
//! Component types are described by static [`ComponentDescriptor`]s. The
//! registry is assembled once from those descriptors and is immutable
//! afterwards. While assembling, each type's capability declaration is folded
//! onto its parent's flattened table (parents are processed first), so a
//! subtype's effective capabilities are the union of its own declaration and
//! every ancestor's.
//!
//! Besides the built-in catalogue, other crates can contribute types with
//! `inventory::submit!`; [`ComponentRegistry::discover`] picks them up.

use crate::components::BUILTIN;
use crate::instance::ComponentInstance;
use sparkwire_core::graph::topological_sort;
use sparkwire_core::{
    Behavior, CapabilityDecl, CapabilitySet, InstanceId, Position, RegistryError,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Builds the initial internal state of a new instance.
pub type Factory = fn() -> Box<dyn Behavior>;

/// The static description of a component type.
#[derive(Debug, Clone, Copy)]
pub struct ComponentDescriptor {
    /// The unique type name (e.g. `Lightbulb`).
    pub type_name: &'static str,
    /// The type this one extends, if any.
    pub parent: Option<&'static str>,
    /// The capabilities this type adds on top of its parent's.
    pub capabilities: CapabilityDecl,
    /// Constructor for the initial internal state.
    pub factory: Factory,
}

inventory::collect!(ComponentDescriptor);

/// A registered type with its flattened capability table.
#[derive(Debug, Clone)]
pub struct RegisteredType {
    name: &'static str,
    parent: Option<&'static str>,
    capabilities: Arc<CapabilitySet>,
    factory: Factory,
}

impl RegisteredType {
    /// The type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The direct parent type, if any.
    pub fn parent(&self) -> Option<&'static str> {
        self.parent
    }

    /// The effective capability table (own declaration plus all ancestors).
    pub fn capabilities(&self) -> &Arc<CapabilitySet> {
        &self.capabilities
    }
}

/// An immutable map from type names to factories and capability tables.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    types: HashMap<&'static str, RegisteredType>,
    /// Type names in the order they were described (the palette order).
    order: Vec<&'static str>,
}

impl ComponentRegistry {
    /// The registry of the built-in catalogue.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_descriptors(BUILTIN.iter().copied())
    }

    /// The built-in catalogue plus every descriptor submitted through
    /// `inventory`.
    pub fn discover() -> Result<Self, RegistryError> {
        Self::from_descriptors(
            BUILTIN
                .iter()
                .copied()
                .chain(inventory::iter::<ComponentDescriptor>),
        )
    }

    /// Assembles a registry from an explicit set of descriptors.
    ///
    /// Fails if a name is used twice, a parent is missing, or the parent
    /// relation loops.
    pub fn from_descriptors<'a>(
        descriptors: impl IntoIterator<Item = &'a ComponentDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut by_name: HashMap<&'static str, &ComponentDescriptor> = HashMap::new();
        let mut order = Vec::new();
        for descriptor in descriptors {
            if by_name.insert(descriptor.type_name, descriptor).is_some() {
                return Err(RegistryError::DuplicateType(descriptor.type_name.to_string()));
            }
            order.push(descriptor.type_name);
        }

        for descriptor in by_name.values() {
            if let Some(parent) = descriptor.parent {
                if !by_name.contains_key(parent) {
                    return Err(RegistryError::UnknownParent {
                        type_name: descriptor.type_name.to_string(),
                        parent: parent.to_string(),
                    });
                }
            }
        }

        let edges = order
            .iter()
            .filter_map(|name| by_name[name].parent.map(|parent| (parent, *name)));
        let resolution_order = topological_sort(order.iter().copied(), edges)
            .map_err(|_| RegistryError::CyclicInheritance)?;

        let mut types: HashMap<&'static str, RegisteredType> = HashMap::new();
        for name in resolution_order {
            let descriptor = by_name[name];
            let capabilities = match descriptor.parent.and_then(|parent| types.get(parent)) {
                Some(parent) => parent.capabilities.extended(&descriptor.capabilities),
                None => CapabilitySet::from_decl(&descriptor.capabilities),
            };
            log::trace!(
                "Registered component type '{}' ({} events, {} methods).",
                name,
                capabilities.events().len(),
                capabilities.methods().len()
            );
            types.insert(
                name,
                RegisteredType {
                    name,
                    parent: descriptor.parent,
                    capabilities: Arc::new(capabilities),
                    factory: descriptor.factory,
                },
            );
        }

        log::debug!("Component registry ready with {} types.", types.len());
        Ok(Self { types, order })
    }

    /// Looks up a registered type.
    pub fn get(&self, type_name: &str) -> Option<&RegisteredType> {
        self.types.get(type_name)
    }

    /// Returns `true` if `type_name` is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// The effective capability table of a type.
    pub fn capabilities(&self, type_name: &str) -> Result<&Arc<CapabilitySet>, RegistryError> {
        self.get(type_name)
            .map(RegisteredType::capabilities)
            .ok_or_else(|| RegistryError::UnknownType(type_name.to_string()))
    }

    /// Registered type names, in palette order.
    pub fn type_names(&self) -> &[&'static str] {
        &self.order
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Creates a new instance of `type_name` with the given id.
    pub fn instantiate(
        &self,
        type_name: &str,
        id: InstanceId,
        position: Position,
    ) -> Result<ComponentInstance, RegistryError> {
        let registered = self
            .get(type_name)
            .ok_or_else(|| RegistryError::UnknownType(type_name.to_string()))?;
        Ok(ComponentInstance::new(
            id,
            registered.name,
            position,
            Arc::clone(&registered.capabilities),
            (registered.factory)(),
        ))
    }
}
