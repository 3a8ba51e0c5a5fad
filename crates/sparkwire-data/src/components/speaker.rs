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

use super::names::PLAY_SOUND;
use crate::registry::ComponentDescriptor;
use serde_json::json;
use sparkwire_core::{Behavior, CapabilityDecl, Effect, MethodContext, MethodId, Tone, Waveform};
use std::any::Any;
use std::time::Duration;

pub(super) const DESCRIPTOR: ComponentDescriptor = ComponentDescriptor {
    type_name: Speaker::TYPE_NAME,
    parent: None,
    capabilities: CapabilityDecl {
        events: &[],
        methods: &[PLAY_SOUND],
    },
    factory: create,
};

fn create() -> Box<dyn Behavior> {
    Box::new(Speaker::default())
}

/// Plays a short beep whenever `playSound` is invoked.
///
/// The audio itself is produced by the presentation layer from the
/// [`Effect::PlayTone`] request; the speaker only counts its beeps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Speaker {
    plays: u32,
}

impl Speaker {
    /// The registered type name.
    pub const TYPE_NAME: &'static str = "Speaker";

    /// The tone requested by `playSound`.
    pub const TONE: Tone = Tone {
        waveform: Waveform::Triangle,
        frequency_hz: 440.0,
        duration: Duration::from_millis(500),
    };

    /// How many times `playSound` ran.
    pub fn plays(&self) -> u32 {
        self.plays
    }
}

impl Behavior for Speaker {
    fn invoke(&mut self, method: &MethodId, ctx: &mut MethodContext<'_>) -> bool {
        if method != PLAY_SOUND {
            return false;
        }
        self.plays += 1;
        ctx.effect(Effect::PlayTone(Self::TONE));
        true
    }

    fn snapshot(&self) -> serde_json::Value {
        json!({ "plays": self.plays })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
