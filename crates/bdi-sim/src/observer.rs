//! Hooks for watching a run: console output, recording, assertions.

use bdi_agent::{Agent, TickReport};
use bdi_core::Tick;

/// Callbacks fired by [`Sim`][crate::Sim] around every agent cycle.
///
/// Every hook defaults to doing nothing.
///
/// # Example: desire printer
///
/// ```rust,ignore
/// struct DesirePrinter;
///
/// impl SimObserver for DesirePrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
///         println!("{tick}: {:?} at {}", report.desire, report.position);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Before the agent runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// After the agent has run, with what it decided.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Every `output_interval_ticks` ticks, after `on_tick_end`.
    fn on_snapshot(&mut self, _tick: Tick, _agent: &Agent) {}

    /// Once, when [`Sim::run`][crate::Sim::run] reaches the end tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// Observer for runs nobody watches.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Keeps every [`TickReport`] for later inspection.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub reports:   Vec<(Tick, TickReport)>,
    pub snapshots: Vec<Tick>,
    pub ended_at:  Option<Tick>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks on which a journey finished.
    pub fn arrivals(&self) -> impl Iterator<Item = Tick> + '_ {
        self.reports
            .iter()
            .filter(|(_, r)| r.arrived)
            .map(|(t, _)| *t)
    }
}

impl SimObserver for RecordingObserver {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        self.reports.push((tick, report.clone()));
    }

    fn on_snapshot(&mut self, tick: Tick, _agent: &Agent) {
        self.snapshots.push(tick);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended_at = Some(final_tick);
    }
}
