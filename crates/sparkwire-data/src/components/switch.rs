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

use super::names::{TURN_OFF, TURN_ON};
use crate::registry::ComponentDescriptor;
use serde_json::json;
use sparkwire_core::{Behavior, CapabilityDecl, MethodContext, MethodId};
use std::any::Any;

pub(super) const DESCRIPTOR: ComponentDescriptor = ComponentDescriptor {
    type_name: Switch::TYPE_NAME,
    parent: None,
    capabilities: CapabilityDecl {
        events: &[(TURN_ON, "When turned ON"), (TURN_OFF, "When turned OFF")],
        methods: &[],
    },
    factory: create,
};

fn create() -> Box<dyn Behavior> {
    Box::new(Switch::default())
}

/// A latching switch flipped by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Switch {
    is_on: bool,
}

impl Switch {
    /// The registered type name.
    pub const TYPE_NAME: &'static str = "Switch";

    /// Whether the switch is latched on.
    pub fn is_on(&self) -> bool {
        self.is_on
    }
}

impl Behavior for Switch {
    fn invoke(&mut self, _method: &MethodId, _ctx: &mut MethodContext<'_>) -> bool {
        false
    }

    fn interact(&mut self, ctx: &mut MethodContext<'_>) {
        self.is_on = !self.is_on;
        ctx.request_redraw();
        ctx.emit(if self.is_on { TURN_ON } else { TURN_OFF });
    }

    fn binary_state(&self) -> Option<bool> {
        Some(self.is_on)
    }

    fn reset(&mut self) -> bool {
        self.is_on = false;
        true
    }

    fn snapshot(&self) -> serde_json::Value {
        json!({ "isOn": self.is_on })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparkwire_core::EventId;

    #[test]
    fn test_interaction_alternates_direction() {
        let mut switch = Switch::default();

        let mut ctx = MethodContext::new(&[]);
        switch.interact(&mut ctx);
        assert!(switch.is_on());
        assert_eq!(ctx.finish().emitted, vec![EventId::from(TURN_ON)]);

        let mut ctx = MethodContext::new(&[]);
        switch.interact(&mut ctx);
        assert!(!switch.is_on());
        assert_eq!(ctx.finish().emitted, vec![EventId::from(TURN_OFF)]);
    }

    #[test]
    fn test_switch_receives_no_methods() {
        let mut switch = Switch::default();
        let mut ctx = MethodContext::new(&[]);
        assert!(!switch.invoke(&MethodId::from(TURN_ON), &mut ctx));
        assert!(!switch.is_on());
    }
}
