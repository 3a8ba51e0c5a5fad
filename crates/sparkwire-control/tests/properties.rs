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

use sparkwire_control::{Session, SessionError, SessionEvent};
use sparkwire_core::{
    Behavior, CapabilityDecl, InstanceId, MethodContext, MethodId, Position, RunMode,
    SessionSettings, WiringError,
};
use sparkwire_data::components::BUILTIN;
use sparkwire_data::{ComponentDescriptor, ComponentRegistry};
use std::any::Any;
use std::sync::Arc;

// --- DUMMY COMPONENTS FOR THESE TESTS ---

/// Declares `poke` but never implements it.
#[derive(Debug, Default)]
struct Dud;

impl Behavior for Dud {
    fn invoke(&mut self, _method: &MethodId, _ctx: &mut MethodContext<'_>) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn create_dud() -> Box<dyn Behavior> {
    Box::new(Dud)
}

const DUD: ComponentDescriptor = ComponentDescriptor {
    type_name: "Dud",
    parent: None,
    capabilities: CapabilityDecl {
        events: &[],
        methods: &["poke"],
    },
    factory: create_dud,
};

/// Re-emits `ping` every time it is pinged: wiring two of these together
/// forms an endless cycle.
#[derive(Debug, Default)]
struct Echo {
    pings: u32,
}

impl Behavior for Echo {
    fn invoke(&mut self, method: &MethodId, ctx: &mut MethodContext<'_>) -> bool {
        if method != "ping" {
            return false;
        }
        self.pings += 1;
        ctx.emit("ping");
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn create_echo() -> Box<dyn Behavior> {
    Box::new(Echo::default())
}

sparkwire_data::inventory::submit! {
    ComponentDescriptor {
        type_name: "Echo",
        parent: None,
        capabilities: CapabilityDecl {
            events: &[("ping", "When pinged")],
            methods: &["ping"],
        },
        factory: create_echo,
    }
}

// --- HELPERS ---

fn session_with(settings: SessionSettings) -> Session {
    let registry = ComponentRegistry::discover().expect("Registry should assemble");
    Session::new(Arc::new(registry), settings)
}

fn running_session() -> Session {
    let mut session = session_with(SessionSettings::default());
    session.set_run_mode(RunMode::Running);
    session
}

fn invoked_targets(notifications: &[SessionEvent]) -> Vec<InstanceId> {
    notifications
        .iter()
        .filter_map(|n| match n {
            SessionEvent::MethodInvoked { target, .. } => Some(*target),
            _ => None,
        })
        .collect()
}

// --- WIRING ---

#[test]
fn test_self_connection_always_fails() {
    let mut session = Session::with_builtin().unwrap();
    for type_name in ["Button", "Lightbulb", "Switch", "Speaker", "RgbLight"] {
        let id = session.create(type_name, Position::default()).unwrap();
        for (event, method) in [("turnOn", "turnOn"), ("click", "nothing")] {
            assert_eq!(
                session.commit_connection(id, id, event, method),
                Err(SessionError::Wiring(WiringError::SelfConnection(id)))
            );
        }
        assert!(session.instance(id).unwrap().connections().is_empty());
    }
}

#[test]
fn test_invalid_endpoints_create_nothing() {
    let mut session = Session::with_builtin().unwrap();
    let button = session.create("Button", Position::default()).unwrap();
    let speaker = session.create("Speaker", Position::default()).unwrap();
    session.drain_notifications();

    assert!(matches!(
        session.commit_connection(button, speaker, "turnOn", "playSound"),
        Err(SessionError::Wiring(WiringError::InvalidSource { .. }))
    ));
    assert!(matches!(
        session.commit_connection(button, speaker, "click", "toggle"),
        Err(SessionError::Wiring(WiringError::InvalidTarget { .. }))
    ));
    assert!(session.graph().connections().next().is_none());
    assert!(session.drain_notifications().is_empty());
}

#[test]
fn test_unknown_type_is_reported() {
    let mut session = Session::with_builtin().unwrap();
    let err = session.create("Toaster", Position::default()).unwrap_err();
    assert_eq!(err.to_string(), "Unknown component type 'Toaster'");
}

#[test]
fn test_proposal_lists_capabilities() {
    let mut session = Session::with_builtin().unwrap();
    let button = session.create("Button", Position::default()).unwrap();
    let rgb = session.create("RgbLight", Position::default()).unwrap();
    let speaker = session.create("Speaker", Position::default()).unwrap();

    let proposal = session.propose_connection(button, rgb).unwrap();
    assert!(proposal.is_wireable());
    assert_eq!(proposal.events.len(), 1);
    assert_eq!(proposal.events[0].1, "When clicked");
    assert_eq!(
        proposal.method_labels(),
        vec!["turnOn()", "turnOff()", "toggle()", "changeColor()"]
    );

    // A speaker emits nothing, a button receives nothing.
    assert!(!session.propose_connection(speaker, button).unwrap().is_wireable());
    assert_eq!(
        session.propose_connection(rgb, rgb),
        Err(SessionError::Wiring(WiringError::SelfConnection(rgb)))
    );
    assert_eq!(
        session.propose_connection(rgb, InstanceId(42)),
        Err(SessionError::UnknownInstance(InstanceId(42)))
    );
}

// --- PROPAGATION ---

#[test]
fn test_stopped_session_invokes_nothing() {
    // --- 1. ARRANGE ---
    let mut session = Session::with_builtin().unwrap();
    let switch = session.create("Switch", Position::default()).unwrap();
    let bulb = session.create("Lightbulb", Position::default()).unwrap();
    session.commit_connection(switch, bulb, "turnOn", "turnOn").unwrap();
    session.drain_notifications();

    // --- 2. ACT ---
    session.fire(switch, "turnOn", &[]);
    session.interact(switch).unwrap();

    // --- 3. ASSERT ---
    let switch_state = session.instance(switch).unwrap().behavior().binary_state();
    assert_eq!(switch_state, Some(false), "Interaction is swallowed while stopped");
    assert!(invoked_targets(&session.drain_notifications()).is_empty());
    assert_eq!(session.stats().invocations, 0);
    assert_eq!(session.stats().suppressed, 2);
}

#[test]
fn test_fan_out_follows_creation_order() {
    // --- 1. ARRANGE ---
    let mut session = Session::with_builtin().unwrap();
    let button = session.create("Button", Position::default()).unwrap();
    let c = session.create("Speaker", Position::default()).unwrap();
    let a = session.create("Speaker", Position::default()).unwrap();
    let b = session.create("Speaker", Position::default()).unwrap();

    session.commit_connection(button, a, "click", "playSound").unwrap();
    session.commit_connection(button, b, "click", "playSound").unwrap();
    session.commit_connection(button, c, "click", "playSound").unwrap();
    session.set_run_mode(RunMode::Running);
    session.drain_notifications();

    // --- 2. ACT ---
    session.fire(button, "click", &[]);

    // --- 3. ASSERT ---
    assert_eq!(invoked_targets(&session.drain_notifications()), vec![a, b, c]);
}

#[test]
fn test_duplicate_connections_both_fire() {
    let mut session = Session::with_builtin().unwrap();
    let button = session.create("Button", Position::default()).unwrap();
    let bulb = session.create("Lightbulb", Position::default()).unwrap();
    session.commit_connection(button, bulb, "click", "toggle").unwrap();
    session.commit_connection(button, bulb, "click", "toggle").unwrap();
    session.set_run_mode(RunMode::Running);

    session.interact(button).unwrap();

    let state = session.instance(bulb).unwrap().behavior().binary_state();
    assert_eq!(state, Some(false), "Two toggles cancel out");
    assert_eq!(session.stats().invocations, 2);
}

#[test]
fn test_args_reach_the_method() {
    let mut session = Session::with_builtin().unwrap();
    let button = session.create("Button", Position::default()).unwrap();
    let speaker = session.create("Speaker", Position::default()).unwrap();
    session.commit_connection(button, speaker, "click", "playSound").unwrap();
    session.set_run_mode(RunMode::Running);

    session.fire(button, "click", &[serde_json::json!("ignored payload")]);
    assert_eq!(session.stats().invocations, 1);
}

#[test]
fn test_stale_method_skips_only_its_edge() {
    let registry = ComponentRegistry::from_descriptors(BUILTIN.iter().copied().chain([&DUD]))
        .expect("Registry should assemble");
    let mut session = Session::new(Arc::new(registry), SessionSettings::default());

    let button = session.create("Button", Position::default()).unwrap();
    let dud = session.create("Dud", Position::default()).unwrap();
    let bulb = session.create("Lightbulb", Position::default()).unwrap();
    session.commit_connection(button, dud, "click", "poke").unwrap();
    session.commit_connection(button, bulb, "click", "turnOn").unwrap();
    session.set_run_mode(RunMode::Running);

    session.interact(button).unwrap();

    assert_eq!(session.stats().stale_methods, 1);
    let state = session.instance(bulb).unwrap().behavior().binary_state();
    assert_eq!(state, Some(true), "Sibling edges still fire");
}

#[test]
fn test_removed_target_is_never_invoked() {
    let mut session = Session::with_builtin().unwrap();
    let button = session.create("Button", Position::default()).unwrap();
    let gone = session.create("Speaker", Position::default()).unwrap();
    let kept = session.create("Speaker", Position::default()).unwrap();
    session.commit_connection(button, gone, "click", "playSound").unwrap();
    session.commit_connection(button, kept, "click", "playSound").unwrap();
    session.set_run_mode(RunMode::Running);

    assert!(session.remove_instance(gone));
    session.drain_notifications();
    session.interact(button).unwrap();

    assert_eq!(invoked_targets(&session.drain_notifications()), vec![kept]);
}

#[test]
fn test_depth_guard_breaks_cycles() {
    // --- 1. ARRANGE ---
    let mut session = session_with(SessionSettings {
        max_propagation_depth: Some(8),
        ..SessionSettings::default()
    });
    let left = session.create("Echo", Position::default()).unwrap();
    let right = session.create("Echo", Position::default()).unwrap();
    session.commit_connection(left, right, "ping", "ping").unwrap();
    session.commit_connection(right, left, "ping", "ping").unwrap();
    session.set_run_mode(RunMode::Running);

    // --- 2. ACT ---
    session.fire(left, "ping", &[]);

    // --- 3. ASSERT ---
    let pings = |id| {
        session
            .instance(id)
            .unwrap()
            .behavior_as::<Echo>()
            .unwrap()
            .pings
    };
    // Depths 0..=8 each invoke one method.
    assert_eq!(pings(left) + pings(right), 9);
    assert_eq!(session.stats().depth_limit_hits, 1);
    assert_eq!(session.stats().max_depth, 8);
}

// --- REMOVAL & LIFECYCLE ---

#[test]
fn test_removal_cascades_and_is_idempotent() {
    // --- 1. ARRANGE ---
    let mut session = Session::with_builtin().unwrap();
    let switch = session.create("Switch", Position::default()).unwrap();
    let bulb = session.create("Lightbulb", Position::default()).unwrap();
    let speaker = session.create("Speaker", Position::default()).unwrap();
    session.commit_connection(switch, bulb, "turnOn", "turnOn").unwrap();
    session.commit_connection(bulb, speaker, "toggle", "playSound").unwrap();
    session.drain_notifications();

    // --- 2. ACT ---
    assert!(session.remove_instance(bulb));

    // --- 3. ASSERT ---
    assert!(session.graph().connections().all(|c| c.target != bulb));
    assert!(session.graph().connections().all(|c| c.source != bulb));
    assert!(session.instance(bulb).is_none());
    let removed = session
        .drain_notifications()
        .into_iter()
        .filter(|n| matches!(n, SessionEvent::ConnectionRemoved(_)))
        .count();
    assert_eq!(removed, 2);

    assert!(!session.remove_instance(bulb));
    assert!(session.drain_notifications().is_empty());
    assert_eq!(session.graph().len(), 2);
}

#[test]
fn test_editing_refused_while_running() {
    // --- 1. ARRANGE ---
    let mut session = Session::with_builtin().unwrap();
    let switch = session.create("Switch", Position::default()).unwrap();
    let bulb = session.create("Lightbulb", Position::default()).unwrap();
    session.set_run_mode(RunMode::Running);
    session.drain_notifications();

    // --- 2. ACT ---
    let wired = session.commit_connection(switch, bulb, "turnOn", "turnOn");
    let proposed = session.propose_connection(switch, bulb);
    let moved = session.move_instance(bulb, Position::new(1.0, 2.0));

    // --- 3. ASSERT ---
    assert_eq!(wired, Err(SessionError::SessionRunning));
    assert_eq!(proposed, Err(SessionError::SessionRunning));
    assert_eq!(moved, Err(SessionError::SessionRunning));
    assert!(session.graph().connections().next().is_none());
    assert_eq!(session.instance(bulb).unwrap().position(), Position::default());
    assert!(session.drain_notifications().is_empty());

    session.set_run_mode(RunMode::Stopped);
    assert!(session.commit_connection(switch, bulb, "turnOn", "turnOn").is_ok());
}

#[test]
fn test_clear_refused_while_running() {
    let mut session = running_session();
    session.create("Button", Position::default()).unwrap();

    assert_eq!(session.clear(), Err(SessionError::SessionRunning));
    assert_eq!(session.graph().len(), 1);

    session.set_run_mode(RunMode::Stopped);
    session.clear().unwrap();
    assert!(session.graph().is_empty());
    let id = session.create("Button", Position::default()).unwrap();
    assert_eq!(id, InstanceId(0), "Clear rewinds the id allocator");
}

#[test]
fn test_reset_on_stop_can_be_disabled() {
    let mut session = session_with(SessionSettings {
        reset_on_stop: false,
        ..SessionSettings::default()
    });
    session.set_run_mode(RunMode::Running);
    let switch = session.create("Switch", Position::default()).unwrap();
    session.interact(switch).unwrap();

    session.set_run_mode(RunMode::Stopped);
    let state = session.instance(switch).unwrap().behavior().binary_state();
    assert_eq!(state, Some(true));
}

#[test]
fn test_move_reports_connections_to_redraw() {
    let mut session = Session::with_builtin().unwrap();
    let switch = session.create("Switch", Position::default()).unwrap();
    let bulb = session.create("Lightbulb", Position::default()).unwrap();
    let other = session.create("Lightbulb", Position::default()).unwrap();
    let wire = session.commit_connection(switch, bulb, "turnOn", "turnOn").unwrap();
    session.commit_connection(switch, other, "turnOff", "turnOff").unwrap();

    let to_redraw = session.move_instance(bulb, Position::new(5.0, 6.0)).unwrap();
    assert_eq!(to_redraw, vec![wire]);
    assert_eq!(session.instance(bulb).unwrap().position(), Position::new(5.0, 6.0));
    assert_eq!(
        session.move_instance(InstanceId(99), Position::default()),
        Err(SessionError::UnknownInstance(InstanceId(99)))
    );
}

#[test]
fn test_notifications_can_be_silenced() {
    let mut session = session_with(SessionSettings {
        publish_notifications: false,
        ..SessionSettings::default()
    });
    session.create("Button", Position::default()).unwrap();
    assert!(session.drain_notifications().is_empty());
}

#[test]
fn test_discovered_types_are_listed() {
    let session = session_with(SessionSettings::default());
    assert!(session.component_types().contains(&"Echo"));
    assert!(session.component_types().contains(&"RgbLight"));
}
