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

use serde::{Deserialize, Serialize};
use std::fmt;

/// The session-wide gate controlling whether events propagate.
///
/// While `Stopped`, firing is a no-op and user interaction is swallowed at the
/// instance boundary. Editing the graph is allowed in either mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RunMode {
    /// Editing mode: no propagation.
    #[default]
    Stopped,
    /// Simulation mode: events propagate through connections.
    Running,
}

impl RunMode {
    /// Returns `true` in [`RunMode::Running`].
    pub fn is_running(self) -> bool {
        self == RunMode::Running
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
