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

use super::names::CLICK;
use crate::registry::ComponentDescriptor;
use sparkwire_core::{Behavior, CapabilityDecl, MethodContext, MethodId};
use std::any::Any;

pub(super) const DESCRIPTOR: ComponentDescriptor = ComponentDescriptor {
    type_name: Button::TYPE_NAME,
    parent: None,
    capabilities: CapabilityDecl {
        events: &[(CLICK, "When clicked")],
        methods: &[],
    },
    factory: create,
};

fn create() -> Box<dyn Behavior> {
    Box::new(Button)
}

/// A stateless push button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Button;

impl Button {
    /// The registered type name.
    pub const TYPE_NAME: &'static str = "Button";
}

impl Behavior for Button {
    fn invoke(&mut self, _method: &MethodId, _ctx: &mut MethodContext<'_>) -> bool {
        false
    }

    fn interact(&mut self, ctx: &mut MethodContext<'_>) {
        ctx.emit(CLICK);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
