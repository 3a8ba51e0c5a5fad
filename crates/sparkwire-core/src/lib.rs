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

//! # Sparkwire Core
//!
//! Foundational crate containing the identifiers, capability contracts and
//! behavior trait shared by the graph store and the propagation engine.

#![warn(missing_docs)]

pub mod behavior;
pub mod capability;
pub mod error;
pub mod event;
pub mod graph;
pub mod ids;
pub mod run_mode;
pub mod settings;

pub use behavior::{Behavior, Effect, MethodContext, MethodOutcome, Tone, Waveform};
pub use capability::{CapabilityDecl, CapabilitySet};
pub use error::{RegistryError, WiringError};
pub use ids::{EventId, InstanceId, MethodId, Position};
pub use run_mode::RunMode;
pub use settings::SessionSettings;

/// Positional arguments forwarded from a firing to every invoked method.
///
/// Events currently carry no payload of their own; this slice is passed
/// through untouched by the engine.
pub type Args = [serde_json::Value];
