//! Per-tick belief update rules.
//!
//! An updater is bound to one belief by name and is invoked once per tick by
//! [`BeliefStore::update`][crate::BeliefStore::update].  Updaters hold no
//! mutable state of their own; everything they change lives in the belief.

use crate::{Belief, BeliefError, BeliefResult};

/// Pluggable per-tick rule for a single belief.
///
/// Implementations must be `Send + Sync` so an agent can be moved to (or
/// shared with) another thread between ticks.
pub trait BeliefUpdater: Send + Sync {
    /// Name of the belief this rule is bound to.
    fn belief(&self) -> &str;

    /// Mutate `belief` for the current tick.
    ///
    /// Only the clamping mutators on [`Belief`] are available, so the value
    /// stays inside its range no matter what the rule computes.
    fn update(&self, belief: &mut Belief) -> BeliefResult<()>;
}

fn check_delta(belief: &str, delta: f64) -> BeliefResult<()> {
    if delta.is_finite() {
        Ok(())
    } else {
        Err(BeliefError::InvalidDelta { belief: belief.to_owned(), delta })
    }
}

// ── DeltaUpdater ──────────────────────────────────────────────────────────────

/// Adds a fixed signed delta every tick (e.g. hunger `+1`).
#[derive(Clone, Debug, PartialEq)]
pub struct DeltaUpdater {
    belief: String,
    delta:  f64,
}

impl DeltaUpdater {
    /// # Errors
    ///
    /// [`BeliefError::InvalidDelta`] if `delta` is NaN or infinite.
    pub fn new(belief: impl Into<String>, delta: f64) -> BeliefResult<Self> {
        let belief = belief.into();
        check_delta(&belief, delta)?;
        Ok(Self { belief, delta })
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }
}

impl BeliefUpdater for DeltaUpdater {
    fn belief(&self) -> &str {
        &self.belief
    }

    fn update(&self, belief: &mut Belief) -> BeliefResult<()> {
        belief.adjust(self.delta).map(|_| ())
    }
}

// ── ThresholdUpdater ──────────────────────────────────────────────────────────

/// Adds a signed delta every tick but never pushes the value past `limit`.
///
/// A rising rule (`delta > 0`) stops at `limit` from below; a falling rule
/// stops at `limit` from above.  A value already beyond the limit is left
/// alone.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdUpdater {
    belief: String,
    delta:  f64,
    limit:  i64,
}

impl ThresholdUpdater {
    pub fn new(belief: impl Into<String>, delta: f64, limit: i64) -> BeliefResult<Self> {
        let belief = belief.into();
        check_delta(&belief, delta)?;
        Ok(Self { belief, delta, limit })
    }
}

impl BeliefUpdater for ThresholdUpdater {
    fn belief(&self) -> &str {
        &self.belief
    }

    fn update(&self, belief: &mut Belief) -> BeliefResult<()> {
        let headroom = (self.limit - belief.value()) as f64;
        if self.delta > 0.0 && headroom > 0.0 {
            belief.increase(self.delta.min(headroom))?;
        } else if self.delta < 0.0 && headroom < 0.0 {
            belief.decrease((-self.delta).min(-headroom))?;
        }
        Ok(())
    }
}
