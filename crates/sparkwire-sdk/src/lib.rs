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

//! The public-facing Software Development Kit (SDK) for Sparkwire.
//!
//! Front ends (a canvas editor, a headless test harness) only need this crate:
//! it re-exports the session, the built-in catalogue and the identifiers, and
//! takes care of the start-up chores.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

pub use sparkwire_control::{
    PropagationStats, Session, SessionError, SessionEvent, WiringProposal,
};
pub use sparkwire_core::{RunMode, SessionSettings};
pub use sparkwire_data::{ComponentDescriptor, ComponentRegistry};
pub use {sparkwire_control, sparkwire_core, sparkwire_data};

/// The types most front ends need.
pub mod prelude {
    pub use sparkwire_control::{Session, SessionError, SessionEvent, WiringProposal};
    pub use sparkwire_core::{
        Behavior, CapabilityDecl, Effect, EventId, InstanceId, MethodContext, MethodId, Position,
        RunMode, SessionSettings, Tone, Waveform,
    };
    pub use sparkwire_data::components::names;
    pub use sparkwire_data::{ComponentDescriptor, ComponentRegistry, Connection};
}

/// Installs the `env_logger` backend, defaulting to `info`.
///
/// Calling it more than once is harmless.
pub fn init_logging() {
    use env_logger::{Builder, Env};

    if Builder::from_env(Env::default().default_filter_or("info"))
        .try_init()
        .is_err()
    {
        log::debug!("A logger was already installed.");
    }
}

/// Reads settings from `path`, or the defaults when no path is given.
pub fn load_settings(path: Option<&Path>) -> Result<SessionSettings> {
    match path {
        Some(path) => SessionSettings::load(path),
        None => Ok(SessionSettings::default()),
    }
}

/// Starts a session over the built-in catalogue and every type submitted
/// through `inventory`.
pub fn start_session(settings: SessionSettings) -> Result<Session> {
    let registry =
        ComponentRegistry::discover().context("Failed to assemble the component registry")?;
    Ok(Session::new(Arc::new(registry), settings))
}
