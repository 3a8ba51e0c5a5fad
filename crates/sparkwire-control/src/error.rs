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

//! Errors surfaced by session operations.

use sparkwire_core::{InstanceId, RegistryError, WiringError};
use thiserror::Error;

/// An operation on a [`Session`](crate::Session) that was refused.
///
/// A refused operation never leaves partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Component creation failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// A connection request was invalid.
    #[error(transparent)]
    Wiring(#[from] WiringError),
    /// The referenced instance does not exist.
    #[error("Instance {0} does not exist")]
    UnknownInstance(InstanceId),
    /// The operation is only allowed while the session is stopped.
    #[error("Operation refused while the session is running")]
    SessionRunning,
}
