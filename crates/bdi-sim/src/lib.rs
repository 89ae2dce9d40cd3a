//! `bdi-sim`: the time driver for one agent in one scene.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   observer.on_tick_start(tick)
//!   report = agent.run(&scene)        beliefs → desires → intention → motion
//!   observer.on_tick_end(tick, &report)
//!   every output_interval_ticks:  observer.on_snapshot(tick, &agent)
//!   clock.advance()
//! observer.on_sim_end(final_tick)
//! ```
//!
//! # Driving a run
//!
//! ```rust,ignore
//! let config = bdi_sim::load_config(Path::new("house.toml"))?;
//! let mut sim = SimBuilder::new(config, scene, agent).build()?;
//! let mut log = RecordingObserver::new();
//! sim.run(&mut log)?;
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use config::{load_config, parse_config};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RecordingObserver, SimObserver};
pub use sim::Sim;
