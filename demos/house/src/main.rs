//! house: one character living through a day in a five-room house.
//!
//! Needs rise every tick; when one crosses its threshold the character
//! walks room by room to where it can be satisfied.  Run with
//! `RUST_LOG=debug` to see every arbitration decision, or `trace` for each
//! motion step.
//!
//! An optional first argument names a TOML config file; otherwise the
//! embedded defaults below are used.

mod house;

use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use bdi_agent::{Agent, TickReport};
use bdi_core::Tick;
use bdi_sim::{SimBuilder, SimObserver};

// ── Config ────────────────────────────────────────────────────────────────────

const DEFAULT_CONFIG: &str = "\
start_unix_secs       = 1_700_000_000
tick_duration_secs    = 60
total_ticks           = 240
agent_speed           = 2.0
output_interval_ticks = 30
";

// ── Console observer ──────────────────────────────────────────────────────────

/// Prints a line whenever the chosen activity changes or a walk ends, plus
/// a belief summary at every snapshot.
struct ConsoleObserver {
    /// Room names indexed by `RoomId`.
    rooms:     Vec<String>,
    last:      Option<String>,
    arrivals:  usize,
    decisions: usize,
}

impl ConsoleObserver {
    fn new(rooms: Vec<String>) -> Self {
        Self { rooms, last: None, arrivals: 0, decisions: 0 }
    }
}

impl SimObserver for ConsoleObserver {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        if report.intention.is_some() && report.intention != self.last {
            self.decisions += 1;
            println!(
                "{tick:>6}  start {:<8} at {}",
                report.intention.as_deref().unwrap_or("-"),
                report.position
            );
        }
        if report.arrived {
            self.arrivals += 1;
            let room = self.rooms.get(report.room.index()).map_or("?", String::as_str);
            println!("{tick:>6}  arrived in {room} at {}", report.position);
        }
        self.last = report.intention.clone();
    }

    fn on_snapshot(&mut self, tick: Tick, agent: &Agent) {
        let needs: Vec<String> = agent
            .beliefs()
            .iter()
            .map(|b| format!("{}={:>3}", b.name(), b.value()))
            .collect();
        println!("{tick:>6}  [{}]", needs.join("  "));
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => bdi_sim::load_config(Path::new(&path))?,
        None => bdi_sim::parse_config(DEFAULT_CONFIG)?,
    };

    println!("=== house: BDI household agent ===");
    let scene = house::build_scene()?;
    println!("Scene: {} rooms, {} locations", scene.room_count(), scene.location_count());

    let agent = house::build_agent(&scene, config.agent_speed)?;
    println!(
        "Agent: {}  |  Ticks: {}  |  Speed: {}",
        agent.name(),
        config.total_ticks,
        config.agent_speed
    );
    println!();

    let rooms = scene.rooms().iter().map(|r| r.name().to_owned()).collect();
    let mut obs = ConsoleObserver::new(rooms);
    let mut sim = SimBuilder::new(config, scene, agent).build()?;
    sim.run(&mut obs)?;

    println!();
    println!("Simulation ended at {}", sim.clock);
    println!("  activities started : {}", obs.decisions);
    println!("  walks completed    : {}", obs.arrivals);
    let room = sim
        .scene
        .room(sim.agent.motion().current_room())
        .map_or("?", |r| r.name());
    println!("  final room         : {room} at {}", sim.agent.motion().position());
    Ok(())
}
