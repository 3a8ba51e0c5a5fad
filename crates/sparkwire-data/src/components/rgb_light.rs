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

use super::lightbulb::Lightbulb;
use super::names::CHANGE_COLOR;
use crate::registry::ComponentDescriptor;
use rand::seq::SliceRandom;
use serde_json::json;
use sparkwire_core::{Behavior, CapabilityDecl, MethodContext, MethodId};
use std::any::Any;

pub(super) const DESCRIPTOR: ComponentDescriptor = ComponentDescriptor {
    type_name: RgbLight::TYPE_NAME,
    parent: Some(Lightbulb::TYPE_NAME),
    capabilities: CapabilityDecl {
        events: &[(CHANGE_COLOR, "When color changes")],
        methods: &[CHANGE_COLOR],
    },
    factory: create,
};

fn create() -> Box<dyn Behavior> {
    Box::new(RgbLight::default())
}

/// A [`Lightbulb`] that can also change color.
///
/// Everything a plain bulb does is delegated to the inner bulb, so the
/// inherited methods behave identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbLight {
    bulb: Lightbulb,
    color: String,
}

impl Default for RgbLight {
    fn default() -> Self {
        Self {
            bulb: Lightbulb::default(),
            color: Self::INITIAL_COLOR.to_string(),
        }
    }
}

impl RgbLight {
    /// The registered type name.
    pub const TYPE_NAME: &'static str = "RgbLight";

    /// The color a fresh light starts with.
    pub const INITIAL_COLOR: &'static str = "#ffffff";

    /// The colors `changeColor` picks from.
    pub const PALETTE: [&'static str; 5] = ["#e74c3c", "#3498db", "#2ecc71", "#f1c40f", "#9b59b6"];

    /// Whether the light is lit.
    pub fn is_on(&self) -> bool {
        self.bulb.is_on()
    }

    /// The current color as a `#rrggbb` string.
    pub fn color(&self) -> &str {
        &self.color
    }

    fn change_color(&mut self, ctx: &mut MethodContext<'_>) {
        if let Some(color) = Self::PALETTE.choose(&mut rand::thread_rng()) {
            self.color = (*color).to_string();
        }
        ctx.request_redraw();
        ctx.emit(CHANGE_COLOR);
    }
}

impl Behavior for RgbLight {
    fn invoke(&mut self, method: &MethodId, ctx: &mut MethodContext<'_>) -> bool {
        if method == CHANGE_COLOR {
            self.change_color(ctx);
            return true;
        }
        self.bulb.invoke(method, ctx)
    }

    fn resume(&mut self, step: u32, ctx: &mut MethodContext<'_>) {
        self.bulb.resume(step, ctx);
    }

    fn binary_state(&self) -> Option<bool> {
        self.bulb.binary_state()
    }

    fn reset(&mut self) -> bool {
        self.bulb.reset()
    }

    fn snapshot(&self) -> serde_json::Value {
        json!({ "isOn": self.bulb.is_on(), "color": self.color })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
