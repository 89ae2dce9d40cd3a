//! Integration tests for bdi-sim.

use bdi_agent::{Action, Agent, AgentBuilder, Desire, Intention};
use bdi_belief::{Belief, BeliefStore, DeltaUpdater};
use bdi_core::{SimConfig, Vec2};
use bdi_motion::Motion;
use bdi_scene::{Scene, SceneBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        start_unix_secs:       0,
        tick_duration_secs:    60,
        total_ticks,
        agent_speed:           5.0,
        output_interval_ticks: 2,
    }
}

/// Kitchen (0,0,10,10) ↔ Bedroom (10,0,10,10); fridge and bed at the room
/// centres.
fn flat() -> Scene {
    let mut b = SceneBuilder::new();
    b.create_room("Kitchen", 0.0, 0.0, 10.0, 10.0).unwrap();
    b.create_room("Bedroom", 10.0, 0.0, 10.0, 10.0).unwrap();
    b.create_location("Fridge", Vec2::new(5.0, 5.0), "Kitchen").unwrap();
    b.create_location("Bed", Vec2::new(5.0, 5.0), "Bedroom").unwrap();
    b.connect("Kitchen", "Bedroom").unwrap();
    b.build().unwrap()
}

/// Agent in bed whose hunger rises 10 per tick; above 50 it walks to the
/// fridge and eats (−30).
fn hungry_agent(scene: &Scene, initial_hunger: f64, speed: f64) -> Agent {
    let fridge = scene.location_in("Kitchen", "Fridge").unwrap().id();
    let bed = scene.location_in("Bedroom", "Bed").unwrap().id();

    let mut beliefs = BeliefStore::new();
    beliefs.add(Belief::percentage("Hunger", initial_hunger).unwrap()).unwrap();
    beliefs.register_updater(DeltaUpdater::new("Hunger", 10.0).unwrap()).unwrap();

    AgentBuilder::new("Alex", beliefs, Motion::at_location(scene, bed, speed).unwrap())
        .desire(Desire::new("Hunger", |v| v.value_or("Hunger", 0) > 50, 10.0))
        .intention(
            Intention::new("Hunger")
                .at(fridge)
                .action(Action::MoveToTarget)
                .effect(|b| b.decrease_by("Hunger", 30.0).map(drop)),
        )
        .build()
        .unwrap()
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::{SimBuilder, SimError};

    #[test]
    fn builds_with_valid_inputs() {
        let scene = flat();
        let agent = hungry_agent(&scene, 0.0, 5.0);
        let sim = SimBuilder::new(test_config(10), scene, agent).build().unwrap();
        assert_eq!(sim.current_tick().0, 0);
        assert_eq!(sim.agent.name(), "Alex");
    }

    #[test]
    fn zero_tick_duration_rejected() {
        let scene = flat();
        let agent = hungry_agent(&scene, 0.0, 5.0);
        let mut config = test_config(10);
        config.tick_duration_secs = 0;
        assert!(matches!(
            SimBuilder::new(config, scene, agent).build(),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn agent_from_another_scene_rejected() {
        let big = flat();
        // Bedroom is RoomId(1); the single-room scene has only RoomId(0).
        let agent = hungry_agent(&big, 0.0, 5.0);
        let mut b = SceneBuilder::new();
        b.create_room("Studio", 0.0, 0.0, 5.0, 5.0).unwrap();
        let small = b.build().unwrap();
        assert!(matches!(
            SimBuilder::new(test_config(1), small, agent).build(),
            Err(SimError::Config(_))
        ));
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use bdi_core::Tick;

    use super::*;
    use crate::{NoopObserver, RecordingObserver, SimBuilder, SimObserver};

    #[test]
    fn hungry_agent_walks_to_kitchen_and_eats() {
        let scene = flat();
        let agent = hungry_agent(&scene, 45.0, 5.0);
        let mut sim = SimBuilder::new(test_config(3), scene, agent).build().unwrap();
        let mut obs = RecordingObserver::new();
        sim.run(&mut obs).unwrap();

        let (_, first) = &obs.reports[0];
        assert_eq!(first.desire.as_deref(), Some("Hunger"));
        assert_eq!(first.intention.as_deref(), Some("Hunger"));

        // Bedroom centre on tick 0, doorway on tick 1, fridge on tick 2.
        assert_eq!(obs.arrivals().collect::<Vec<_>>(), [Tick(2)]);
        assert_eq!(sim.agent.motion().position(), Vec2::new(5.0, 5.0));

        // 45 → 55 → 25 (ate) → 35 → 45.
        assert_eq!(sim.agent.belief("Hunger").unwrap().value(), 45);
        let kitchen = sim.scene.room_by_name("Kitchen").unwrap().id();
        assert_eq!(sim.agent.motion().current_room(), kitchen);
    }

    #[test]
    fn observer_hooks_fire_in_order() {
        #[derive(Default)]
        struct Log(Vec<String>);
        impl SimObserver for Log {
            fn on_tick_start(&mut self, tick: Tick) {
                self.0.push(format!("start {tick}"));
            }
            fn on_tick_end(&mut self, tick: Tick, _: &bdi_agent::TickReport) {
                self.0.push(format!("end {tick}"));
            }
            fn on_snapshot(&mut self, tick: Tick, _: &Agent) {
                self.0.push(format!("snap {tick}"));
            }
            fn on_sim_end(&mut self, tick: Tick) {
                self.0.push(format!("done {tick}"));
            }
        }

        let scene = flat();
        let agent = hungry_agent(&scene, 0.0, 5.0);
        let mut sim = SimBuilder::new(test_config(3), scene, agent).build().unwrap();
        let mut log = Log::default();
        sim.run(&mut log).unwrap();

        assert_eq!(
            log.0,
            [
                "start T0", "end T0", "snap T0",
                "start T1", "end T1",
                "start T2", "end T2", "snap T2",
                "done T3",
            ]
        );
    }

    #[test]
    fn run_ticks_ignores_end_tick() {
        let scene = flat();
        let agent = hungry_agent(&scene, 0.0, 5.0);
        let mut sim = SimBuilder::new(test_config(2), scene, agent).build().unwrap();
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.current_tick(), Tick(5));
        assert_eq!(sim.clock.elapsed_secs(), 300);
    }

    #[test]
    fn run_resumes_after_run_ticks() {
        let scene = flat();
        let agent = hungry_agent(&scene, 0.0, 5.0);
        let mut sim = SimBuilder::new(test_config(4), scene, agent).build().unwrap();
        let mut obs = RecordingObserver::new();
        sim.run_ticks(1, &mut obs).unwrap();
        sim.run(&mut obs).unwrap();
        assert_eq!(obs.reports.len(), 4);
        assert_eq!(obs.ended_at, Some(Tick(4)));
        assert_eq!(obs.snapshots, [Tick(0), Tick(2)]);
    }
}

// ── TOML config ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use std::io::Write;

    use crate::{load_config, parse_config, SimError};

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, bdi_core::SimConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = parse_config("total_ticks = 480\nagent_speed = 1.5\n").unwrap();
        assert_eq!(config.total_ticks, 480);
        assert_eq!(config.agent_speed, 1.5);
        assert_eq!(config.tick_duration_secs, 60);
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(matches!(parse_config("agent_speed = -2.0"), Err(SimError::Config(_))));
        assert!(matches!(parse_config("total_ticks = \"many\""), Err(SimError::Toml(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "total_ticks = 12").unwrap();
        writeln!(file, "output_interval_ticks = 3").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.total_ticks, 12);
        assert_eq!(config.output_interval_ticks, 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(std::path::Path::new("/nonexistent/bdi.toml")).unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}
