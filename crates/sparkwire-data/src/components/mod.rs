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

//! The built-in component catalogue.

mod button;
mod lightbulb;
mod rgb_light;
mod speaker;
mod switch;

pub use button::Button;
pub use lightbulb::Lightbulb;
pub use rgb_light::RgbLight;
pub use speaker::Speaker;
pub use switch::Switch;

use crate::registry::ComponentDescriptor;

/// Event and method names shared across the catalogue.
pub mod names {
    /// Emitted by a button when clicked.
    pub const CLICK: &str = "click";
    /// Switches a component on / emitted when switched on.
    pub const TURN_ON: &str = "turnOn";
    /// Switches a component off / emitted when switched off.
    pub const TURN_OFF: &str = "turnOff";
    /// Flips a component / emitted when flipped.
    pub const TOGGLE: &str = "toggle";
    /// Picks a new color / emitted when the color changes.
    pub const CHANGE_COLOR: &str = "changeColor";
    /// Plays a short tone.
    pub const PLAY_SOUND: &str = "playSound";
}

/// Every built-in type, in palette order.
pub static BUILTIN: [&ComponentDescriptor; 5] = [
    &button::DESCRIPTOR,
    &lightbulb::DESCRIPTOR,
    &switch::DESCRIPTOR,
    &speaker::DESCRIPTOR,
    &rgb_light::DESCRIPTOR,
];
