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

//! Defines the error types for component registration and wiring.

use crate::ids::{EventId, InstanceId, MethodId};
use std::fmt;

/// An error raised while building or querying the component registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No component type is registered under this name.
    UnknownType(String),
    /// A type names a parent that was never registered.
    UnknownParent {
        /// The type declaring the parent.
        type_name: String,
        /// The missing parent name.
        parent: String,
    },
    /// Two descriptors share the same type name.
    DuplicateType(String),
    /// The declared parent relations form a cycle.
    CyclicInheritance,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownType(name) => write!(f, "Unknown component type '{name}'"),
            RegistryError::UnknownParent { type_name, parent } => {
                write!(
                    f,
                    "Component type '{type_name}' extends unregistered type '{parent}'"
                )
            }
            RegistryError::DuplicateType(name) => {
                write!(f, "Component type '{name}' is registered twice")
            }
            RegistryError::CyclicInheritance => {
                write!(f, "Component type hierarchy contains a cycle")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// A connection request that cannot be honored.
///
/// No partial state is created when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WiringError {
    /// The source does not declare the requested event.
    InvalidSource {
        /// The source instance.
        source: InstanceId,
        /// The event that is not declared.
        event: EventId,
    },
    /// The target does not declare the requested method.
    InvalidTarget {
        /// The target instance.
        target: InstanceId,
        /// The method that is not declared.
        method: MethodId,
    },
    /// Source and target are the same instance.
    SelfConnection(InstanceId),
    /// An endpoint is not present in the graph.
    UnknownInstance(InstanceId),
}

impl fmt::Display for WiringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WiringError::InvalidSource { source, event } => {
                write!(f, "Instance {source} does not emit event '{event}'")
            }
            WiringError::InvalidTarget { target, method } => {
                write!(f, "Instance {target} has no method '{method}()'")
            }
            WiringError::SelfConnection(id) => {
                write!(f, "Instance {id} cannot be wired to itself")
            }
            WiringError::UnknownInstance(id) => write!(f, "Instance {id} does not exist"),
        }
    }
}

impl std::error::Error for WiringError {}
