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

//! The contract between a component's internal logic and the engine.
//!
//! A [`Behavior`] owns an instance's internal state. The engine hands it a
//! [`MethodContext`] when a wired method is invoked or when the user
//! interacts with the instance directly. The behavior never touches the graph
//! itself: it records the events it wants to emit, whether its visuals are
//! stale, and any fire-and-forget effects.
//!
//! A method body runs in phases. The events a phase emits are routed to
//! completion, in order, as soon as that phase returns. A body that has to
//! observe what its own emissions caused (a cascade may loop back and invoke
//! another method on the same instance) ends the phase with
//! [`MethodContext::then`] and carries on in [`Behavior::resume`]. A phase
//! must not read its own state after its first `emit`.

use crate::ids::{EventId, MethodId};
use crate::Args;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt::Debug;
use std::time::Duration;

/// The internal logic and state of one component instance.
pub trait Behavior: Debug + Send {
    /// Executes `method` against this instance.
    ///
    /// Returns `false` if this behavior has no implementation for `method`,
    /// in which case the engine treats the invocation as a no-op.
    fn invoke(&mut self, method: &MethodId, ctx: &mut MethodContext<'_>) -> bool;

    /// Runs the next phase of a method that ended its previous phase with
    /// [`MethodContext::then`].
    ///
    /// Called once every event emitted so far has been routed to completion,
    /// with the same arguments as the phase that scheduled it.
    fn resume(&mut self, _step: u32, _ctx: &mut MethodContext<'_>) {}

    /// Reacts to direct user interaction (a click on the placed node).
    ///
    /// Only called while the session is running.
    fn interact(&mut self, _ctx: &mut MethodContext<'_>) {}

    /// The on/off state of components that have one.
    fn binary_state(&self) -> Option<bool> {
        None
    }

    /// Returns binary state to "off" when the session stops.
    ///
    /// Returns `true` if a binary state exists and visuals must be refreshed.
    fn reset(&mut self) -> bool {
        false
    }

    /// A JSON snapshot of the visual state, consumed by the presentation layer.
    fn snapshot(&self) -> serde_json::Value {
        serde_json::Value::Null
    }

    /// Allows downcasting to concrete behavior types.
    fn as_any(&self) -> &dyn Any;

    /// Allows mutable downcasting to concrete behavior types.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Waveform of a synthesized tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    /// A sine wave.
    Sine,
    /// A square wave.
    Square,
    /// A triangle wave.
    Triangle,
    /// A sawtooth wave.
    Sawtooth,
}

/// A short synthesized tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    /// The oscillator shape.
    pub waveform: Waveform,
    /// Pitch, in hertz.
    pub frequency_hz: f32,
    /// How long the tone plays.
    pub duration: Duration,
}

/// An external side effect requested by a method body.
///
/// Effects are fire-and-forget: the engine forwards them to the presentation
/// layer and never waits on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Play a tone on the audio output.
    PlayTone(Tone),
}

/// Everything a method body recorded while it ran.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MethodOutcome {
    /// Events to fire from the executing instance, in emission order.
    pub emitted: Vec<EventId>,
    /// Whether the instance's visuals must be refreshed.
    pub redraw: bool,
    /// Side effects to forward, in request order.
    pub effects: Vec<Effect>,
    /// The phase to resume once `emitted` has been routed.
    pub resume: Option<u32>,
}

/// The handle a [`Behavior`] uses to talk back to the engine.
#[derive(Debug)]
pub struct MethodContext<'a> {
    args: &'a Args,
    outcome: MethodOutcome,
}

impl<'a> MethodContext<'a> {
    /// Creates a context forwarding `args` to the method body.
    pub fn new(args: &'a Args) -> Self {
        Self {
            args,
            outcome: MethodOutcome::default(),
        }
    }

    /// The arguments the triggering event was fired with.
    pub fn args(&self) -> &Args {
        self.args
    }

    /// Emits `event` from the executing instance.
    ///
    /// Emitted events are routed in order as soon as the current phase
    /// returns.
    pub fn emit(&mut self, event: impl Into<EventId>) {
        self.outcome.emitted.push(event.into());
    }

    /// Marks the instance's visuals as stale.
    pub fn request_redraw(&mut self) {
        self.outcome.redraw = true;
    }

    /// Requests a fire-and-forget external effect.
    pub fn effect(&mut self, effect: Effect) {
        self.outcome.effects.push(effect);
    }

    /// Ends the current phase and asks for [`Behavior::resume`] to be called
    /// with `step` once the events emitted so far have been routed.
    pub fn then(&mut self, step: u32) {
        self.outcome.resume = Some(step);
    }

    /// Consumes the context, returning what the body recorded.
    pub fn finish(self) -> MethodOutcome {
        self.outcome
    }
}
