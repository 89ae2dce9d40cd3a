//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one full
//! belief → desire → intention → motion cycle.  The core never looks at the
//! wall clock; `SimClock` only exists so drivers can map ticks to a
//! human-readable time of day:
//!
//!   wall_time = start_unix_secs + tick * tick_duration_secs

use std::fmt;

use crate::{BdiError, BdiResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of completed agent cycles since the run began.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, ticks: u64) -> Tick {
        Tick(self.0 + ticks)
    }
}

/// Ticks between two instants; saturates at zero.
impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// Simulated day number (from 0) and clock time.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TimeOfDay {
    pub day:    u64,
    pub hour:   u8,
    pub minute: u8,
}

impl TimeOfDay {
    const SECS_PER_DAY: u64 = 24 * 60 * 60;

    fn from_secs(secs: u64) -> Self {
        let in_day = secs % Self::SECS_PER_DAY;
        Self {
            day:    secs / Self::SECS_PER_DAY,
            hour:   (in_day / 3_600) as u8,
            minute: (in_day % 3_600 / 60) as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} {:02}:{:02}", self.day, self.hour, self.minute)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The current tick plus the mapping from ticks to simulated time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Unix timestamp of tick 0.
    pub start_unix_secs: i64,
    pub tick_duration_secs: u32,
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(start_unix_secs: i64, tick_duration_secs: u32) -> Self {
        Self { start_unix_secs, tick_duration_secs, current_tick: Tick::default() }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.next();
    }

    /// Simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0 * u64::from(self.tick_duration_secs)
    }

    #[inline]
    pub fn now_unix_secs(&self) -> i64 {
        self.start_unix_secs.saturating_add_unsigned(self.elapsed_secs())
    }

    /// Day and clock time relative to the start of the run.
    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_secs(self.elapsed_secs())
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.current_tick, self.time_of_day())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Loaded from TOML by `bdi_sim::config` or built in code.  Every field has
/// a default so a config file only needs to mention what it changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Unix timestamp for tick 0.
    pub start_unix_secs: i64,

    /// Simulated seconds per tick.  Default: 60.
    pub tick_duration_secs: u32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Walking speed in scene units per tick.
    pub agent_speed: f64,

    /// Notify `SimObserver::on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_unix_secs:       0,
            tick_duration_secs:    60,
            total_ticks:           1_440,
            agent_speed:           1.0,
            output_interval_ticks: 60,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_secs, self.tick_duration_secs)
    }

    /// Reject values the tick loop cannot work with.
    pub fn validate(&self) -> BdiResult<()> {
        if self.tick_duration_secs == 0 {
            return Err(BdiError::Config("tick_duration_secs must be positive".into()));
        }
        if !self.agent_speed.is_finite() || self.agent_speed <= 0.0 {
            return Err(BdiError::Config(format!(
                "agent_speed must be a positive finite number, got {}",
                self.agent_speed
            )));
        }
        Ok(())
    }
}
