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

use super::names::{TOGGLE, TURN_OFF, TURN_ON};
use crate::registry::ComponentDescriptor;
use serde_json::json;
use sparkwire_core::{Behavior, CapabilityDecl, MethodContext, MethodId};
use std::any::Any;

pub(super) const DESCRIPTOR: ComponentDescriptor = ComponentDescriptor {
    type_name: Lightbulb::TYPE_NAME,
    parent: None,
    capabilities: CapabilityDecl {
        events: &[
            (TURN_ON, "When turned ON"),
            (TURN_OFF, "When turned OFF"),
            (TOGGLE, "When toggled"),
        ],
        methods: &[TURN_ON, TURN_OFF, TOGGLE],
    },
    factory: create,
};

fn create() -> Box<dyn Behavior> {
    Box::new(Lightbulb::default())
}

/// A bulb that can be switched, and reports every change it goes through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbulb {
    is_on: bool,
}

impl Lightbulb {
    /// The registered type name.
    pub const TYPE_NAME: &'static str = "Lightbulb";

    /// Resumes `toggle` once the `toggle` event has been routed.
    const AFTER_TOGGLE: u32 = 0;

    /// Whether the bulb is lit.
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    fn switch_to(&mut self, on: bool, ctx: &mut MethodContext<'_>) {
        self.is_on = on;
        ctx.request_redraw();
        ctx.emit(if on { TURN_ON } else { TURN_OFF });
    }

    fn toggle(&mut self, ctx: &mut MethodContext<'_>) {
        self.is_on = !self.is_on;
        ctx.request_redraw();
        ctx.emit(TOGGLE);
        // The cascade may switch this bulb again before the directional
        // follow-up, which reports the state it left behind.
        ctx.then(Self::AFTER_TOGGLE);
    }
}

impl Behavior for Lightbulb {
    fn invoke(&mut self, method: &MethodId, ctx: &mut MethodContext<'_>) -> bool {
        match method.as_str() {
            TURN_ON => self.switch_to(true, ctx),
            TURN_OFF => self.switch_to(false, ctx),
            TOGGLE => self.toggle(ctx),
            _ => return false,
        }
        true
    }

    fn resume(&mut self, step: u32, ctx: &mut MethodContext<'_>) {
        if step == Self::AFTER_TOGGLE {
            ctx.emit(if self.is_on { TURN_ON } else { TURN_OFF });
        }
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
