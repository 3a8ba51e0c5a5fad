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

// Sparkwire Sandbox
// Builds a small circuit, runs it, and logs what a front end would see.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sparkwire_sdk::prelude::*;

#[derive(Debug, Parser)]
#[command(version, about = "Drive a reference circuit without a canvas")]
struct Cli {
    /// Session settings as JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// How many times to flip the switch.
    #[arg(long, default_value_t = 2)]
    flips: u32,

    /// Print notifications as JSON lines instead of logging them.
    #[arg(long)]
    json: bool,
}

struct Circuit {
    switch: InstanceId,
    bulb: InstanceId,
    rgb: InstanceId,
    button: InstanceId,
}

/// Switch -> Lightbulb -> RgbLight -> Speaker, plus a Button toggling the bulb.
fn build(session: &mut Session) -> Result<Circuit> {
    let switch = session.create("Switch", Position::new(40.0, 40.0))?;
    let bulb = session.create("Lightbulb", Position::new(200.0, 40.0))?;
    let rgb = session.create("RgbLight", Position::new(360.0, 40.0))?;
    let speaker = session.create("Speaker", Position::new(520.0, 40.0))?;
    let button = session.create("Button", Position::new(40.0, 160.0))?;

    session.commit_connection(switch, bulb, names::TURN_ON, names::TURN_ON)?;
    session.commit_connection(switch, bulb, names::TURN_OFF, names::TURN_OFF)?;
    session.commit_connection(bulb, rgb, names::TURN_ON, names::CHANGE_COLOR)?;
    session.commit_connection(rgb, speaker, names::CHANGE_COLOR, names::PLAY_SOUND)?;
    session.commit_connection(button, bulb, names::CLICK, names::TOGGLE)?;

    let proposal = session.propose_connection(speaker, button)?;
    log::info!(
        "Speaker -> Button wireable: {} (events: {}, methods: {})",
        proposal.is_wireable(),
        proposal.events.len(),
        proposal.methods.len()
    );

    Ok(Circuit {
        switch,
        bulb,
        rgb,
        button,
    })
}

fn flush(session: &Session, json: bool) -> Result<()> {
    for event in session.drain_notifications() {
        if json {
            println!("{}", serde_json::to_string(&event)?);
        } else {
            log::info!("{event:?}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    sparkwire_sdk::init_logging();
    let cli = Cli::parse();

    let settings = sparkwire_sdk::load_settings(cli.config.as_deref())?;
    let mut session = sparkwire_sdk::start_session(settings)?;
    log::info!("Palette: {}", session.component_types().join(", "));

    let circuit = build(&mut session)?;
    flush(&session, cli.json)?;

    session.set_run_mode(RunMode::Running);
    for _ in 0..cli.flips {
        session.interact(circuit.switch)?;
        flush(&session, cli.json)?;
    }
    session.interact(circuit.button)?;
    flush(&session, cli.json)?;

    if let Some(rgb) = session
        .instance(circuit.rgb)
        .and_then(|i| i.behavior_as::<sparkwire_sdk::sparkwire_data::components::RgbLight>())
    {
        log::info!("RgbLight color is now {}", rgb.color());
    }

    session.set_run_mode(RunMode::Stopped);
    flush(&session, cli.json)?;

    let stats = session.stats();
    log::info!(
        "{} fire(s), {} event(s) routed, {} invocation(s), deepest cascade {}",
        stats.fires,
        stats.events_routed,
        stats.invocations,
        stats.max_depth
    );

    session.remove_instance(circuit.bulb);
    flush(&session, cli.json)?;
    session.clear()?;
    Ok(())
}
