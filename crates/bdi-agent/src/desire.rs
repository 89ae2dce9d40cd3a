//! Desires and the ranked arbitration over them.
//!
//! # Ranking
//!
//! Each tick every desire's condition is evaluated against an
//! [`AgentView`].  The desires whose condition holds form the *active set*,
//! which is stably sorted by priority, highest first:
//!
//! - equal priorities keep registration order, so the earlier desire wins;
//! - a `NaN` priority ranks below every real number.
//!
//! The head of the sorted set is the *best desire*.  An empty active set
//! clears the best desire rather than keeping the previous one.

use std::cmp::Ordering;

use tracing::debug;

use crate::{AgentError, AgentResult, AgentView};

type Condition = Box<dyn Fn(&AgentView<'_>) -> bool + Send + Sync>;
type PriorityFn = Box<dyn Fn(&AgentView<'_>) -> f64 + Send + Sync>;

// ── Priority ──────────────────────────────────────────────────────────────────

/// How urgent a desire is while active.
pub enum Priority {
    /// Constant priority.
    Fixed(f64),

    /// Re-evaluated every tick against the current view.
    Dynamic(PriorityFn),
}

impl Priority {
    pub fn dynamic(f: impl Fn(&AgentView<'_>) -> f64 + Send + Sync + 'static) -> Self {
        Priority::Dynamic(Box::new(f))
    }

    #[inline]
    pub fn evaluate(&self, view: &AgentView<'_>) -> f64 {
        match self {
            Priority::Fixed(p) => *p,
            Priority::Dynamic(f) => f(view),
        }
    }
}

impl From<f64> for Priority {
    fn from(p: f64) -> Self {
        Priority::Fixed(p)
    }
}

impl std::fmt::Debug for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Fixed(p) => f.debug_tuple("Fixed").field(p).finish(),
            Priority::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

// ── Desire ────────────────────────────────────────────────────────────────────

/// A named, condition-gated goal.  Immutable once built.
pub struct Desire {
    name:      String,
    condition: Condition,
    priority:  Priority,
}

impl Desire {
    pub fn new(
        name:      impl Into<String>,
        condition: impl Fn(&AgentView<'_>) -> bool + Send + Sync + 'static,
        priority:  impl Into<Priority>,
    ) -> Self {
        Self {
            name:      name.into(),
            condition: Box::new(condition),
            priority:  priority.into(),
        }
    }

    /// A desire that is always active.
    pub fn always(name: impl Into<String>, priority: impl Into<Priority>) -> Self {
        Self::new(name, |_| true, priority)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> &Priority {
        &self.priority
    }

    #[inline]
    pub fn is_active(&self, view: &AgentView<'_>) -> bool {
        (self.condition)(view)
    }
}

impl std::fmt::Debug for Desire {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Desire")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish()
    }
}

// ── DesireSet ─────────────────────────────────────────────────────────────────

/// All of an agent's desires plus the result of the latest arbitration.
#[derive(Debug, Default)]
pub struct DesireSet {
    desires: Vec<Desire>,
    /// `(index into desires, priority)`, best first.  Rebuilt by `update`.
    active:  Vec<(usize, f64)>,
}

impl DesireSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// [`AgentError::DuplicateDesire`] if the name is already registered.
    pub fn add_desire(&mut self, desire: Desire) -> AgentResult<()> {
        if self.get(desire.name()).is_some() {
            return Err(AgentError::DuplicateDesire(desire.name.clone()));
        }
        self.desires.push(desire);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Desire> {
        self.desires.iter().find(|d| d.name == name)
    }

    /// Re-run arbitration against `view` and return the new best desire.
    pub fn update(&mut self, view: &AgentView<'_>) -> Option<&Desire> {
        self.active.clear();
        for (i, desire) in self.desires.iter().enumerate() {
            if desire.is_active(view) {
                self.active.push((i, desire.priority.evaluate(view)));
            }
        }
        self.active.sort_by(|a, b| rank(a.1, b.1));

        debug!(
            best = self.best().map(Desire::name),
            active = self.active.len(),
            "desires ranked"
        );
        self.best()
    }

    /// Highest-ranked active desire from the latest [`update`](Self::update).
    pub fn best(&self) -> Option<&Desire> {
        self.active.first().map(|&(i, _)| &self.desires[i])
    }

    /// The active set, best first.
    pub fn active(&self) -> impl Iterator<Item = &Desire> + '_ {
        self.active.iter().map(|&(i, _)| &self.desires[i])
    }

    /// The active set with the priority each desire was ranked by.
    pub fn ranked(&self) -> impl Iterator<Item = (&Desire, f64)> + '_ {
        self.active.iter().map(|&(i, p)| (&self.desires[i], p))
    }

    /// All desires in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Desire> + '_ {
        self.desires.iter()
    }

    pub fn len(&self) -> usize {
        self.desires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.desires.is_empty()
    }
}

/// Descending by priority; `NaN` last.
fn rank(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    }
}
