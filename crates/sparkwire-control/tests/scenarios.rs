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

use sparkwire_control::{Session, SessionEvent};
use sparkwire_core::{EventId, InstanceId, Position, RunMode};

fn is_on(session: &Session, id: InstanceId) -> bool {
    session
        .instance(id)
        .and_then(|instance| instance.behavior().binary_state())
        .expect("Instance should have a binary state")
}

fn fired_by(events: &[SessionEvent], source: InstanceId) -> Vec<EventId> {
    events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::EventFired { source: s, event } if *s == source => Some(event.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_reference_circuit() {
    // --- 1. ARRANGE ---
    let mut session = Session::with_builtin().expect("Built-in session");
    let switch = session.create("Switch", Position::new(10.0, 10.0)).unwrap();
    let bulb = session.create("Lightbulb", Position::new(200.0, 10.0)).unwrap();
    assert_eq!((switch, bulb), (InstanceId(0), InstanceId(1)));

    session.commit_connection(switch, bulb, "turnOn", "turnOn").unwrap();
    session.commit_connection(switch, bulb, "turnOff", "turnOff").unwrap();
    session.set_run_mode(RunMode::Running);

    // --- 2. ACT / 3. ASSERT ---
    session.interact(switch).unwrap();
    assert!(is_on(&session, switch));
    assert!(is_on(&session, bulb), "Switching on should light the bulb");

    session.interact(switch).unwrap();
    assert!(!is_on(&session, switch));
    assert!(!is_on(&session, bulb), "Switching off should darken the bulb");

    // --- RgbLight#2 exposes the union of its own and inherited events ---
    let rgb = session.create("RgbLight", Position::default()).unwrap();
    assert_eq!(rgb, InstanceId(2));
    let events: Vec<&str> = session
        .instance(rgb)
        .unwrap()
        .declared_events()
        .iter()
        .map(|(e, _)| e.as_str())
        .collect();
    assert_eq!(events, vec!["turnOn", "turnOff", "toggle", "changeColor"]);

    // --- Button#3 toggles the bulb exactly once, with cascading emissions ---
    let button = session.create("Button", Position::default()).unwrap();
    assert_eq!(button, InstanceId(3));
    session.set_run_mode(RunMode::Stopped);
    session.commit_connection(button, bulb, "click", "toggle").unwrap();
    session.set_run_mode(RunMode::Running);
    session.drain_notifications();

    session.interact(button).unwrap();
    assert!(is_on(&session, bulb), "Bulb should flip exactly once");

    let notifications = session.drain_notifications();
    assert_eq!(fired_by(&notifications, button), vec![EventId::from("click")]);
    assert_eq!(
        fired_by(&notifications, bulb),
        vec![EventId::from("toggle"), EventId::from("turnOn")]
    );

    // --- Stopping alone switches the lit bulb off ---
    session.set_run_mode(RunMode::Stopped);
    assert!(!is_on(&session, bulb));
    let notifications = session.drain_notifications();
    assert!(fired_by(&notifications, bulb).is_empty(), "No event causes the reset");
    assert!(notifications.contains(&SessionEvent::RunModeChanged(RunMode::Stopped)));
    assert!(notifications.iter().any(|n| matches!(
        n,
        SessionEvent::VisualsChanged { id, state } if *id == bulb && state["isOn"] == false
    )));
}

#[test]
fn test_fire_drives_method_directly() {
    let mut session = Session::with_builtin().unwrap();
    let button = session.create("Button", Position::default()).unwrap();
    let bulb = session.create("Lightbulb", Position::default()).unwrap();
    session.commit_connection(button, bulb, "click", "turnOn").unwrap();
    session.set_run_mode(RunMode::Running);

    session.fire(button, "click", &[]);

    assert!(is_on(&session, bulb));
    let stats = session.stats();
    assert_eq!(stats.fires, 1);
    assert_eq!(stats.invocations, 1);
    // click, then the bulb's own turnOn.
    assert_eq!(stats.events_routed, 2);
    assert_eq!(stats.max_depth, 1);
}

#[test]
fn test_chain_across_three_components() {
    let mut session = Session::with_builtin().unwrap();
    let switch = session.create("Switch", Position::default()).unwrap();
    let bulb = session.create("Lightbulb", Position::default()).unwrap();
    let rgb = session.create("RgbLight", Position::default()).unwrap();
    let speaker = session.create("Speaker", Position::default()).unwrap();

    session.commit_connection(switch, bulb, "turnOn", "turnOn").unwrap();
    session.commit_connection(bulb, rgb, "turnOn", "turnOn").unwrap();
    session.commit_connection(rgb, speaker, "turnOn", "playSound").unwrap();
    session.set_run_mode(RunMode::Running);
    session.drain_notifications();

    session.interact(switch).unwrap();

    assert!(is_on(&session, bulb));
    assert!(is_on(&session, rgb));
    let effects: Vec<_> = session
        .drain_notifications()
        .into_iter()
        .filter(|n| matches!(n, SessionEvent::Effect { source, .. } if *source == speaker))
        .collect();
    assert_eq!(effects.len(), 1, "The speaker should beep once");
    assert_eq!(session.stats().max_depth, 2);
}

#[test]
fn test_toggle_direction_follows_its_own_cascade() {
    // --- 1. ARRANGE ---
    // The bulb's `toggle` cascade loops back and switches it off again
    // before the directional follow-up is emitted.
    let mut session = Session::with_builtin().unwrap();
    let button = session.create("Button", Position::default()).unwrap();
    let looped = session.create("Lightbulb", Position::default()).unwrap();
    let relay = session.create("Lightbulb", Position::default()).unwrap();
    let speaker = session.create("Speaker", Position::default()).unwrap();

    session.commit_connection(button, looped, "click", "toggle").unwrap();
    session.commit_connection(looped, relay, "toggle", "turnOn").unwrap();
    session.commit_connection(relay, looped, "turnOn", "turnOff").unwrap();
    session.commit_connection(looped, speaker, "turnOn", "playSound").unwrap();
    session.set_run_mode(RunMode::Running);
    session.drain_notifications();

    // --- 2. ACT ---
    session.interact(button).unwrap();

    // --- 3. ASSERT ---
    let notifications = session.drain_notifications();
    assert_eq!(
        fired_by(&notifications, looped),
        vec![
            EventId::from("toggle"),
            EventId::from("turnOff"),
            EventId::from("turnOff")
        ]
    );
    assert!(!is_on(&session, looped));
    assert!(is_on(&session, relay));
    assert!(
        !notifications
            .iter()
            .any(|n| matches!(n, SessionEvent::Effect { .. })),
        "The bulb never reports turnOn while it is off"
    );
    assert_eq!(session.stats().invocations, 3);
}
