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

//! Notifications pushed to the presentation layer.

use serde::Serialize;
use sparkwire_core::{Effect, EventId, InstanceId, MethodId, Position, RunMode};
use sparkwire_data::Connection;

/// Something the presentation layer may want to react to.
///
/// The core decides *when* each notification is sent; what gets drawn or
/// played in response is up to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SessionEvent {
    /// An instance was placed.
    InstanceCreated {
        /// The new instance.
        id: InstanceId,
        /// Its type name.
        type_name: &'static str,
        /// Where it was dropped.
        position: Position,
    },
    /// An instance's opaque position changed.
    InstanceMoved {
        /// The moved instance.
        id: InstanceId,
        /// The new position.
        position: Position,
    },
    /// An instance was removed.
    InstanceRemoved {
        /// The removed instance.
        id: InstanceId,
    },
    /// A wire was committed.
    ConnectionAdded(Connection),
    /// A wire was discarded by a removal cascade.
    ConnectionRemoved(Connection),
    /// An event started propagating from `source`.
    EventFired {
        /// The emitting instance.
        source: InstanceId,
        /// The emitted event.
        event: EventId,
    },
    /// A wired method ran on `target`.
    MethodInvoked {
        /// The receiving instance.
        target: InstanceId,
        /// The executed method.
        method: MethodId,
    },
    /// An instance's internal state changed and its visuals are stale.
    VisualsChanged {
        /// The instance to redraw.
        id: InstanceId,
        /// A snapshot of the state to draw.
        state: serde_json::Value,
    },
    /// A method requested an external side effect.
    Effect {
        /// The instance that requested it.
        source: InstanceId,
        /// The effect to perform.
        effect: Effect,
    },
    /// The run mode changed.
    RunModeChanged(RunMode),
    /// Every instance was discarded.
    Cleared,
}
