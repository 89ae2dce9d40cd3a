//! The demo house layout and the character that lives in it.

use std::io::Cursor;

use anyhow::{Context, Result};

use bdi_agent::{Action, Agent, AgentBuilder, Desire, Intention, Priority};
use bdi_belief::{Belief, BeliefStore, DeltaUpdater, ThresholdUpdater};
use bdi_core::LocationId;
use bdi_motion::Motion;
use bdi_scene::{Scene, load_scene_reader};

// ── Layout ────────────────────────────────────────────────────────────────────

//   0        10                 30
//   ┌────────┬──────────────────┐ 0
//   │Kitchen │   Living Room    │
//   ├────────┴──────────────────┤ 10
//   │          Hallway          │
//   ├──────────────┬────────────┤ 15
//   │   Bedroom    │  Bathroom  │
//   └──────────────┴────────────┘ 25
const HOUSE_CSV: &str = "\
kind,name,room,x,y,w,h
room,Kitchen,,0,0,10,10
room,Living Room,,10,0,20,10
room,Hallway,,0,10,30,5
room,Bedroom,,0,15,15,10
room,Bathroom,,15,15,15,10
location,Fridge,Kitchen,2,2,,
location,Sofa,Living Room,10,5,,
location,Bed,Bedroom,3,5,,
location,Shower,Bathroom,12,8,,
door,Hallway,Kitchen,,,,
door,Hallway,Living Room,,,,
door,Hallway,Bedroom,,,,
door,Hallway,Bathroom,,,,
door,Kitchen,Living Room,,,,
";

pub fn build_scene() -> Result<Scene> {
    load_scene_reader(Cursor::new(HOUSE_CSV)).context("loading house layout")
}

fn location(scene: &Scene, room: &str, name: &str) -> Result<LocationId> {
    scene
        .location_in(room, name)
        .map(|l| l.id())
        .with_context(|| format!("house has no {name} in the {room}"))
}

// ── Character ─────────────────────────────────────────────────────────────────

fn beliefs() -> Result<BeliefStore> {
    let mut store = BeliefStore::new();
    store.add(Belief::percentage("Hunger", 30.0)?)?;
    store.add(Belief::percentage("Fatigue", 10.0)?)?;
    store.add(Belief::percentage("Boredom", 40.0)?)?;
    store.add(Belief::percentage("Hygiene", 80.0)?)?;

    store.register_updater(DeltaUpdater::new("Hunger", 2.0)?)?;
    // Tiredness plateaus instead of pinning at 100.
    store.register_updater(ThresholdUpdater::new("Fatigue", 1.0, 95)?)?;
    store.register_updater(DeltaUpdater::new("Boredom", 3.0)?)?;
    store.register_updater(DeltaUpdater::new("Hygiene", -1.0)?)?;
    Ok(store)
}

fn desires() -> Vec<Desire> {
    vec![
        Desire::new(
            "Hunger",
            |v| v.value_or("Hunger", 0) > 60,
            Priority::dynamic(|v| v.value_or("Hunger", 0) as f64),
        ),
        Desire::new(
            "Fatigue",
            |v| v.value_or("Fatigue", 0) > 70,
            Priority::dynamic(|v| v.value_or("Fatigue", 0) as f64),
        ),
        Desire::new("Boredom", |v| v.value_or("Boredom", 0) > 50, 30.0),
        Desire::new(
            "Hygiene",
            |v| v.value_or("Hygiene", 100) < 40,
            Priority::dynamic(|v| (100 - v.value_or("Hygiene", 100)) as f64),
        ),
    ]
}

/// Walk to `at`, adjusting `belief` by `delta` on the tick the walk starts.
fn errand(name: &str, at: LocationId, belief: &'static str, delta: f64) -> Intention {
    Intention::new(name)
        .at(at)
        .action(Action::MoveToTarget)
        .precondition(|v| !v.is_moving())
        .effect(move |b| {
            let result = if delta < 0.0 {
                b.decrease_by(belief, -delta)
            } else {
                b.increase_by(belief, delta)
            };
            result.map(drop)
        })
}

pub fn build_agent(scene: &Scene, speed: f64) -> Result<Agent> {
    let fridge = location(scene, "Kitchen", "Fridge")?;
    let sofa = location(scene, "Living Room", "Sofa")?;
    let bed = location(scene, "Bedroom", "Bed")?;
    let shower = location(scene, "Bathroom", "Shower")?;

    let motion = Motion::at_location(scene, bed, speed)?;

    let agent = AgentBuilder::new("Sam", beliefs()?, motion)
        .desires(desires())
        .intentions([
            errand("Hunger", fridge, "Hunger", -50.0),
            errand("Fatigue", bed, "Fatigue", -70.0),
            errand("Boredom", sofa, "Boredom", -45.0),
            errand("Hygiene", shower, "Hygiene", 60.0),
        ])
        .build()?;
    Ok(agent)
}
