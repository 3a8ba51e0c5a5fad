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
use sparkwire_core::{EventId, InstanceId, MethodId};

/// A directed wire from one instance's event to another instance's method.
///
/// Both endpoints are held by id only. The target is resolved through the
/// graph store every time the connection fires, so removing the target can
/// never leave a live reference behind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    /// The instance owning this connection.
    pub source: InstanceId,
    /// The event that triggers the connection.
    pub event: EventId,
    /// The receiving instance.
    pub target: InstanceId,
    /// The method invoked on the receiver.
    pub method: MethodId,
}

impl Connection {
    /// The text drawn next to the wire, e.g. `toggle()`.
    pub fn label(&self) -> String {
        format!("{}()", self.method)
    }

    /// Returns `true` if either endpoint is `id`.
    pub fn involves(&self, id: InstanceId) -> bool {
        self.source == id || self.target == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_and_endpoints() {
        let connection = Connection {
            source: InstanceId(0),
            event: EventId::from("turnOn"),
            target: InstanceId(1),
            method: MethodId::from("turnOn"),
        };
        assert_eq!(connection.label(), "turnOn()");
        assert!(connection.involves(InstanceId(0)));
        assert!(connection.involves(InstanceId(1)));
        assert!(!connection.involves(InstanceId(2)));
    }
}
