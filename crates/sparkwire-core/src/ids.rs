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

//! Identifier types for instances, events and methods.

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// A unique identifier for a placed component instance.
///
/// Identifiers are handed out monotonically by the graph store and are never
/// reused while the instance lives. The allocator only rewinds when the whole
/// graph is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Returns the raw numeric value of the identifier.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

macro_rules! capability_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            /// Creates an identifier from a static string, usable in `const` items.
            pub const fn from_static(name: &'static str) -> Self {
                Self(Cow::Borrowed(name))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&'static str> for $name {
            fn from(name: &'static str) -> Self {
                Self::from_static(name)
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(Cow::Owned(name))
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

capability_name!(
    /// The name of an event a component type can emit (e.g. `turnOn`).
    EventId
);

capability_name!(
    /// The name of a method a component type can receive (e.g. `toggle`).
    MethodId
);

/// Opaque placement data owned by the presentation layer.
///
/// The core stores it alongside the instance and hands it back untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate, in presentation units.
    pub x: f64,
    /// Vertical coordinate, in presentation units.
    pub y: f64,
}

impl Position {
    /// Creates a new position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_instance_id_display() {
        assert_eq!(InstanceId(7).to_string(), "#7");
        assert_eq!(InstanceId(7).get(), 7);
    }

    #[test]
    fn test_static_and_owned_names_are_equal() {
        const TURN_ON: EventId = EventId::from_static("turnOn");
        let owned = EventId::from(String::from("turnOn"));
        assert_eq!(TURN_ON, owned);
        assert_eq!(owned, "turnOn");
    }

    #[test]
    fn test_names_can_be_looked_up_by_str() {
        let mut labels: HashMap<MethodId, &str> = HashMap::new();
        labels.insert(MethodId::from("toggle"), "toggle()");
        assert_eq!(labels.get("toggle"), Some(&"toggle()"));
    }

    #[test]
    fn test_names_serialize_as_plain_strings() {
        let json = serde_json::to_string(&EventId::from("click")).unwrap();
        assert_eq!(json, "\"click\"");
        let back: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, "click");
    }
}
