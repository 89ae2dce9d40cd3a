//! A single named belief with an integer value clamped to a range.

use crate::{BeliefError, BeliefResult};

// ── BeliefRange ───────────────────────────────────────────────────────────────

/// The closed interval a belief's value is clamped to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BeliefRange {
    /// `[0, 100]`, the common case for needs such as hunger or fatigue.
    #[default]
    Percentage,
    /// An arbitrary closed integer interval.
    Bounded { min: i64, max: i64 },
}

impl BeliefRange {
    /// `(min, max)` of the interval.
    #[inline]
    pub fn bounds(self) -> (i64, i64) {
        match self {
            BeliefRange::Percentage => (0, 100),
            BeliefRange::Bounded { min, max } => (min, max),
        }
    }

    /// Round `raw` to the nearest integer and clamp it into the interval.
    #[inline]
    fn clamp(self, raw: f64) -> i64 {
        let (min, max) = self.bounds();
        raw.round().clamp(min as f64, max as f64) as i64
    }
}

// ── Belief ────────────────────────────────────────────────────────────────────

/// Named scalar state belonging to exactly one agent.
///
/// The value is private: the only mutators are [`increase`](Self::increase)
/// and [`decrease`](Self::decrease), both of which clamp.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Belief {
    name:  String,
    value: i64,
    range: BeliefRange,
}

impl Belief {
    /// A `[0, 100]` belief starting at `initial`.
    ///
    /// # Errors
    ///
    /// [`BeliefError::EmptyName`] for an empty name,
    /// [`BeliefError::OutOfRange`] if `initial` is not finite or lies
    /// outside `[0, 100]`.
    pub fn percentage(name: impl Into<String>, initial: f64) -> BeliefResult<Self> {
        Self::with_range(name, initial, BeliefRange::Percentage)
    }

    /// A belief clamped to `[min, max]`, starting at `initial`.
    pub fn bounded(name: impl Into<String>, initial: f64, min: i64, max: i64) -> BeliefResult<Self> {
        if min > max {
            return Err(BeliefError::InvalidRange { min, max });
        }
        Self::with_range(name, initial, BeliefRange::Bounded { min, max })
    }

    fn with_range(name: impl Into<String>, initial: f64, range: BeliefRange) -> BeliefResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BeliefError::EmptyName);
        }
        let (min, max) = range.bounds();
        if !initial.is_finite() || initial < min as f64 || initial > max as f64 {
            return Err(BeliefError::OutOfRange { belief: name, value: initial, min, max });
        }
        let value = range.clamp(initial);
        Ok(Self { name, value, range })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    #[inline]
    pub fn range(&self) -> BeliefRange {
        self.range
    }

    /// Add `amount`, then round and clamp.  Returns the new value.
    ///
    /// # Errors
    ///
    /// [`BeliefError::InvalidAmount`] if `amount` is negative, NaN or
    /// infinite.  The value is left untouched on error.
    pub fn increase(&mut self, amount: f64) -> BeliefResult<i64> {
        self.check_amount(amount)?;
        self.value = self.range.clamp(self.value as f64 + amount);
        Ok(self.value)
    }

    /// Subtract `amount`, then round and clamp.  Returns the new value.
    pub fn decrease(&mut self, amount: f64) -> BeliefResult<i64> {
        self.check_amount(amount)?;
        self.value = self.range.clamp(self.value as f64 - amount);
        Ok(self.value)
    }

    /// Apply a signed delta: positive increases, negative decreases.
    pub fn adjust(&mut self, delta: f64) -> BeliefResult<i64> {
        if delta.is_sign_negative() && delta.is_finite() {
            self.decrease(-delta)
        } else {
            self.increase(delta)
        }
    }

    /// `true` if the value sits at the top of its range.
    pub fn is_saturated(&self) -> bool {
        self.value == self.range.bounds().1
    }

    fn check_amount(&self, amount: f64) -> BeliefResult<()> {
        if amount.is_finite() && amount >= 0.0 {
            Ok(())
        } else {
            Err(BeliefError::InvalidAmount { belief: self.name.clone(), amount })
        }
    }
}
