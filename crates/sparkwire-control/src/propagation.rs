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

//! The propagation engine.
//!
//! Firing an event walks the source's owned connections in creation order,
//! resolves each target by id, and invokes the wired method. A method body
//! may emit further events; those are routed depth-first, in emission order,
//! as soon as the phase that emitted them returns, and the method's next
//! phase only runs once that cascade is over. The instance is back in the
//! store between phases, so a cascade can re-enter it. Propagation is
//! synchronous and runs to completion. Missing targets and missing methods
//! only skip their own edge.

use crate::notification::SessionEvent;
use crate::session::Session;
use sparkwire_core::{Args, EventId, InstanceId, MethodContext, MethodId, MethodOutcome};

impl Session {
    /// Fires `event` from `source`, passing `args` to every invoked method.
    ///
    /// A no-op while the session is stopped or when `source` does not exist.
    pub fn fire(&mut self, source: InstanceId, event: &str, args: &Args) {
        if !self.run_mode.is_running() {
            log::debug!("Suppressed '{event}' from {source}: session stopped.");
            self.stats.suppressed += 1;
            return;
        }
        self.stats.fires += 1;
        self.route(source, &EventId::from(event.to_owned()), args, 0);
    }

    /// Handles direct user interaction with an instance (a click on it).
    ///
    /// While the session is stopped the interaction is swallowed before the
    /// instance sees it, so its state does not change.
    pub fn interact(&mut self, id: InstanceId) -> Result<(), crate::SessionError> {
        let running = self.run_mode.is_running();
        let instance = self
            .graph
            .get_mut(id)
            .ok_or(crate::SessionError::UnknownInstance(id))?;
        if !running {
            log::debug!("Ignored interaction with {}: session stopped.", instance.label());
            self.stats.suppressed += 1;
            return Ok(());
        }

        let mut ctx = MethodContext::new(&[]);
        instance.behavior_mut().interact(&mut ctx);
        let outcome = ctx.finish();
        self.stats.fires += outcome.emitted.len() as u64;
        self.apply(id, outcome, &[], 0);
        Ok(())
    }

    fn route(&mut self, source: InstanceId, event: &EventId, args: &Args, depth: u32) {
        if let Some(limit) = self.settings.max_propagation_depth {
            if depth > limit {
                log::warn!("Dropped '{event}' from {source}: cascade deeper than {limit}.");
                self.stats.depth_limit_hits += 1;
                return;
            }
        }

        let Some(instance) = self.graph.get(source) else {
            log::debug!("Dropped '{event}': source {source} no longer exists.");
            return;
        };
        // Snapshot the matching edges: the invoked methods can't change the
        // graph, but they do need `self` mutably.
        let edges: Vec<(InstanceId, MethodId)> = instance
            .connections_for(event.as_str())
            .map(|c| (c.target, c.method.clone()))
            .collect();

        self.stats.events_routed += 1;
        self.stats.observe_depth(depth);
        self.publish(SessionEvent::EventFired {
            source,
            event: event.clone(),
        });
        log::trace!("Routing '{event}' from {source} over {} edge(s).", edges.len());

        for (target, method) in edges {
            self.invoke(target, &method, args, depth);
        }
    }

    fn invoke(&mut self, target: InstanceId, method: &MethodId, args: &Args, depth: u32) {
        let Some(instance) = self.graph.get_mut(target) else {
            log::debug!("Skipped {method}() on {target}: target removed.");
            self.stats.stale_targets += 1;
            return;
        };
        if !instance.capabilities().declares_method(method.as_str()) {
            log::debug!("Skipped {method}() on {target}: method not declared.");
            self.stats.stale_methods += 1;
            return;
        }

        let mut ctx = MethodContext::new(args);
        if !instance.behavior_mut().invoke(method, &mut ctx) {
            log::debug!("Skipped {method}() on {target}: no implementation.");
            self.stats.stale_methods += 1;
            return;
        }
        let outcome = ctx.finish();

        self.stats.invocations += 1;
        self.publish(SessionEvent::MethodInvoked {
            target,
            method: method.clone(),
        });
        self.apply(target, outcome, args, depth + 1);
    }

    /// Publishes what a phase recorded, routes its emissions, then runs the
    /// next phase if one was scheduled.
    fn apply(&mut self, id: InstanceId, outcome: MethodOutcome, args: &Args, depth: u32) {
        let mut outcome = outcome;
        loop {
            if outcome.redraw {
                if let Some(instance) = self.graph.get(id) {
                    let state = instance.behavior().snapshot();
                    self.publish(SessionEvent::VisualsChanged { id, state });
                }
            }
            for effect in outcome.effects {
                self.publish(SessionEvent::Effect { source: id, effect });
            }
            for event in &outcome.emitted {
                self.route(id, event, &[], depth);
            }

            let Some(step) = outcome.resume else {
                return;
            };
            let Some(instance) = self.graph.get_mut(id) else {
                log::debug!("Dropped phase {step} of {id}: instance removed.");
                return;
            };
            let mut ctx = MethodContext::new(args);
            instance.behavior_mut().resume(step, &mut ctx);
            outcome = ctx.finish();
        }
    }
}
