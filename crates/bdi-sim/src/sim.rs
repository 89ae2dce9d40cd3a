//! The tick loop.

use tracing::{debug, info_span};

use bdi_agent::Agent;
use bdi_core::{SimClock, SimConfig, Tick};
use bdi_scene::Scene;

use crate::{SimObserver, SimResult};

/// Runs one agent in one scene.
///
/// Each tick calls [`Agent::run`] exactly once.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,

    pub clock: SimClock,

    /// The house.  Read-only for the whole run.
    pub scene: Scene,

    pub agent: Agent,
}

impl Sim {
    /// Step until `config.end_tick()`, then fire `on_sim_end`.
    ///
    /// Stops at the first agent error; the clock stays on the failing tick.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        debug!(ticks = self.clock.current_tick.0, "simulation finished");
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Step `n` ticks regardless of `end_tick`.  Does not fire `on_sim_end`.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }


    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        let _span = info_span!("tick", tick = now.0).entered();

        observer.on_tick_start(now);
        let report = self.agent.run(&self.scene)?;
        observer.on_tick_end(now, &report);

        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.agent);
        }

        self.clock.advance();
        Ok(())
    }
}
