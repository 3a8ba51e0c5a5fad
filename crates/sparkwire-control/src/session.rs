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

//! The editing session: the single context object owning the graph, the
//! run mode, and the notification bus.

use crate::error::SessionError;
use crate::notification::SessionEvent;
use crate::stats::PropagationStats;
use sparkwire_core::event::EventBus;
use sparkwire_core::{EventId, InstanceId, MethodId, Position, RunMode, SessionSettings};
use sparkwire_data::{ComponentInstance, ComponentRegistry, Connection, GraphStore};
use std::sync::Arc;

/// What a wiring dialog offers for a `(source, target)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct WiringProposal {
    /// The instance the wire starts from.
    pub source: InstanceId,
    /// The instance the wire ends at.
    pub target: InstanceId,
    /// The source's events with their labels.
    pub events: Vec<(EventId, String)>,
    /// The target's methods.
    pub methods: Vec<MethodId>,
}

impl WiringProposal {
    /// Returns `false` when the source has no events or the target has no
    /// methods, i.e. no connection can be made between them.
    pub fn is_wireable(&self) -> bool {
        !self.events.is_empty() && !self.methods.is_empty()
    }

    /// Method choices as displayed, e.g. `turnOn()`.
    pub fn method_labels(&self) -> Vec<String> {
        self.methods.iter().map(|m| format!("{m}()")).collect()
    }
}

/// One editing session over a circuit.
///
/// The session is constructed at start-up and owns everything that used to
/// be process-wide: the instances, the id allocator, and the run mode. Only
/// [`Session::clear`] resets it.
#[derive(Debug)]
pub struct Session {
    pub(crate) registry: Arc<ComponentRegistry>,
    pub(crate) graph: GraphStore,
    pub(crate) run_mode: RunMode,
    pub(crate) settings: SessionSettings,
    pub(crate) bus: EventBus<SessionEvent>,
    pub(crate) stats: PropagationStats,
}

impl Session {
    /// Creates an empty, stopped session.
    pub fn new(registry: Arc<ComponentRegistry>, settings: SessionSettings) -> Self {
        log::info!("Session started with {} component types.", registry.len());
        Self {
            registry,
            graph: GraphStore::new(),
            run_mode: RunMode::Stopped,
            settings,
            bus: EventBus::new(),
            stats: PropagationStats::default(),
        }
    }

    /// Creates a session over the built-in catalogue with default settings.
    pub fn with_builtin() -> Result<Self, SessionError> {
        let registry = ComponentRegistry::builtin()?;
        Ok(Self::new(Arc::new(registry), SessionSettings::default()))
    }

    /// The registry this session creates instances from.
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Registered type names, in palette order.
    pub fn component_types(&self) -> &[&'static str] {
        self.registry.type_names()
    }

    /// The active settings.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Read access to the graph.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// Resolves an instance by id.
    pub fn instance(&self, id: InstanceId) -> Option<&ComponentInstance> {
        self.graph.get(id)
    }

    /// The current run mode.
    pub fn run_mode(&self) -> RunMode {
        self.run_mode
    }

    /// Propagation counters since the session started or was last cleared.
    pub fn stats(&self) -> PropagationStats {
        self.stats
    }

    /// The receiving end of the notification bus.
    pub fn notifications(&self) -> &flume::Receiver<SessionEvent> {
        self.bus.receiver()
    }

    /// Removes and returns every pending notification.
    pub fn drain_notifications(&self) -> Vec<SessionEvent> {
        self.bus.drain()
    }

    pub(crate) fn publish(&self, event: SessionEvent) {
        if self.settings.publish_notifications {
            self.bus.publish(event);
        }
    }

    /// Places a new instance of `type_name`.
    pub fn create(
        &mut self,
        type_name: &str,
        position: Position,
    ) -> Result<InstanceId, SessionError> {
        let id = self.graph.spawn(&self.registry, type_name, position)?;
        let instance = self.instance(id).ok_or(SessionError::UnknownInstance(id))?;
        log::debug!("Created {}.", instance.label());
        self.publish(SessionEvent::InstanceCreated {
            id,
            type_name: instance.type_name(),
            position,
        });
        self.publish(SessionEvent::VisualsChanged {
            id,
            state: instance.behavior().snapshot(),
        });
        Ok(id)
    }

    /// Records a new opaque position for `id`.
    ///
    /// Returns the connections touching the instance, which need redrawing.
    /// Nodes stay put while the session is running.
    pub fn move_instance(
        &mut self,
        id: InstanceId,
        position: Position,
    ) -> Result<Vec<Connection>, SessionError> {
        self.ensure_stopped("move")?;
        if !self.graph.set_position(id, position) {
            return Err(SessionError::UnknownInstance(id));
        }
        self.publish(SessionEvent::InstanceMoved { id, position });
        Ok(self.graph.connections_involving(id))
    }

    /// Lists what can be wired from `source` to `target`.
    ///
    /// Wiring is only offered while the session is stopped.
    pub fn propose_connection(
        &self,
        source: InstanceId,
        target: InstanceId,
    ) -> Result<WiringProposal, SessionError> {
        self.ensure_stopped("wiring")?;
        if source == target {
            return Err(sparkwire_core::WiringError::SelfConnection(source).into());
        }
        let from = self
            .instance(source)
            .ok_or(SessionError::UnknownInstance(source))?;
        let to = self
            .instance(target)
            .ok_or(SessionError::UnknownInstance(target))?;
        Ok(WiringProposal {
            source,
            target,
            events: from.declared_events().to_vec(),
            methods: to.declared_methods().to_vec(),
        })
    }

    /// Wires `event` on `source` to `method` on `target`.
    ///
    /// The connection is appended to the source's owned list; on failure
    /// nothing changes. Refused while the session is running.
    pub fn commit_connection(
        &mut self,
        source: InstanceId,
        target: InstanceId,
        event: impl Into<EventId>,
        method: impl Into<MethodId>,
    ) -> Result<Connection, SessionError> {
        self.ensure_stopped("wiring")?;
        let connection = self
            .graph
            .connect(source, target, event.into(), method.into())
            .inspect_err(|e| log::debug!("Wiring refused: {e}"))?;
        log::debug!(
            "Wired {}.{} -> {}.{}",
            connection.source,
            connection.event,
            connection.target,
            connection.label()
        );
        self.publish(SessionEvent::ConnectionAdded(connection.clone()));
        Ok(connection)
    }

    /// Removes `id` and every connection touching it.
    ///
    /// Returns `false` if the instance was already gone; removing twice is
    /// harmless.
    pub fn remove_instance(&mut self, id: InstanceId) -> bool {
        let Some(removal) = self.graph.remove(id) else {
            return false;
        };
        for connection in removal.connections {
            self.publish(SessionEvent::ConnectionRemoved(connection));
        }
        self.publish(SessionEvent::InstanceRemoved { id });
        true
    }

    /// Discards every instance and rewinds the id allocator.
    ///
    /// Refused while the session is running.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.ensure_stopped("clear")?;
        let count = self.graph.len();
        self.graph.clear();
        self.stats = PropagationStats::default();
        log::info!("Cleared {count} instance(s).");
        self.publish(SessionEvent::Cleared);
        Ok(())
    }

    fn ensure_stopped(&self, operation: &str) -> Result<(), SessionError> {
        if self.run_mode.is_running() {
            log::warn!("Refused {operation} while running.");
            return Err(SessionError::SessionRunning);
        }
        Ok(())
    }

    /// Switches between editing and simulation.
    ///
    /// Stopping a running session switches every binary component off (unless
    /// disabled in the settings) without firing any event.
    pub fn set_run_mode(&mut self, mode: RunMode) {
        if mode == self.run_mode {
            return;
        }
        let previous = std::mem::replace(&mut self.run_mode, mode);
        log::info!("Run mode {previous} -> {mode}.");
        self.publish(SessionEvent::RunModeChanged(mode));

        if previous.is_running() && !mode.is_running() && self.settings.reset_on_stop {
            self.reset_binary_state();
        }
    }

    fn reset_binary_state(&mut self) {
        for id in self.graph.ids() {
            let Some(instance) = self.graph.get_mut(id) else {
                continue;
            };
            if instance.behavior_mut().reset() {
                let state = instance.behavior().snapshot();
                self.publish(SessionEvent::VisualsChanged { id, state });
            }
        }
    }
}
