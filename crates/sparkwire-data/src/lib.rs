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

//! # Sparkwire Data
//!
//! The graph store that holds every placed instance and the connections they
//! own, the component registry, and the built-in component catalogue.

#![warn(missing_docs)]

pub mod components;
pub mod connection;
pub mod instance;
pub mod registry;
pub mod store;


pub use connection::Connection;
pub use instance::ComponentInstance;
pub use registry::{ComponentDescriptor, ComponentRegistry, Factory, RegisteredType};
pub use store::{GraphStore, Removal};

// Lets downstream crates contribute component types with `inventory::submit!`.
pub use inventory;
