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

//! Settings for an editing session.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A collection of settings that tune how a session behaves.
///
/// Every field is optional in the JSON form; missing fields fall back to
/// [`SessionSettings::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Maximum nesting of cascaded firings. `None` leaves recursion unbounded.
    pub max_propagation_depth: Option<u32>,
    /// If `true`, stopping the session switches every binary component off.
    pub reset_on_stop: bool,
    /// If `true`, the session pushes notifications onto its event bus.
    pub publish_notifications: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_propagation_depth: None,
            reset_on_stop: true,
            publish_notifications: true,
        }
    }
}

impl SessionSettings {
    /// Parses settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid session settings document")
    }

    /// Reads settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from '{}'", path.display()))?;
        let settings = Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse settings in '{}'", path.display()))?;
        log::info!("Loaded session settings from '{}'.", path.display());
        Ok(settings)
    }
}
