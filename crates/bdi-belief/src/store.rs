//! The `BeliefStore`: one agent's beliefs plus its per-tick update rules.

use std::collections::HashMap;

use tracing::trace;

use crate::{Belief, BeliefError, BeliefResult, BeliefUpdater};

/// Insertion-ordered set of beliefs keyed by name, plus the updater rules
/// that drive them each tick.
///
/// Beliefs are never removed once added.  Updaters run in registration
/// order, each touching exactly the belief it is bound to.
#[derive(Default)]
pub struct BeliefStore {
    beliefs:  Vec<Belief>,
    by_name:  HashMap<String, usize>,
    /// `(index into beliefs, rule)` in registration order.
    updaters: Vec<(usize, Box<dyn BeliefUpdater>)>,
}

impl BeliefStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a belief.
    ///
    /// # Errors
    ///
    /// [`BeliefError::Duplicate`] if a belief with the same name exists.
    pub fn add(&mut self, belief: Belief) -> BeliefResult<()> {
        if self.by_name.contains_key(belief.name()) {
            return Err(BeliefError::Duplicate(belief.name().to_owned()));
        }
        self.by_name.insert(belief.name().to_owned(), self.beliefs.len());
        self.beliefs.push(belief);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Belief> {
        self.by_name.get(name).map(|&i| &self.beliefs[i])
    }

    /// Mutable access for effects.  Only the clamping mutators are exposed
    /// on [`Belief`], so this cannot break the range invariant.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Belief> {
        self.by_name.get(name).map(|&i| &mut self.beliefs[i])
    }

    /// Shorthand for `get(name).map(Belief::value)`.
    #[inline]
    pub fn value(&self, name: &str) -> Option<i64> {
        self.get(name).map(Belief::value)
    }

    /// Increase the named belief by `amount`.  Returns the new value.
    pub fn increase_by(&mut self, name: &str, amount: f64) -> BeliefResult<i64> {
        self.require_mut(name)?.increase(amount)
    }

    /// Decrease the named belief by `amount`.  Returns the new value.
    pub fn decrease_by(&mut self, name: &str, amount: f64) -> BeliefResult<i64> {
        self.require_mut(name)?.decrease(amount)
    }

    /// Bind an update rule to its belief.
    ///
    /// # Errors
    ///
    /// - [`BeliefError::UnknownBelief`] if the belief has not been added.
    /// - [`BeliefError::DuplicateUpdater`] if the belief already has a rule.
    pub fn register_updater<U: BeliefUpdater + 'static>(&mut self, updater: U) -> BeliefResult<()> {
        let name = updater.belief();
        let Some(&index) = self.by_name.get(name) else {
            return Err(BeliefError::UnknownBelief(name.to_owned()));
        };
        if self.updaters.iter().any(|(i, _)| *i == index) {
            return Err(BeliefError::DuplicateUpdater(name.to_owned()));
        }
        self.updaters.push((index, Box::new(updater)));
        Ok(())
    }

    /// Run every registered rule once, in registration order.
    pub fn update(&mut self) -> BeliefResult<()> {
        for (index, updater) in &self.updaters {
            let belief = &mut self.beliefs[*index];
            updater.update(belief)?;
            trace!(belief = belief.name(), value = belief.value(), "belief updated");
        }
        Ok(())
    }

    /// Beliefs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Belief> + '_ {
        self.beliefs.iter()
    }

    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }

    pub fn updater_count(&self) -> usize {
        self.updaters.len()
    }

    fn require_mut(&mut self, name: &str) -> BeliefResult<&mut Belief> {
        match self.by_name.get(name) {
            Some(&i) => Ok(&mut self.beliefs[i]),
            None => Err(BeliefError::UnknownBelief(name.to_owned())),
        }
    }
}

impl std::fmt::Debug for BeliefStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeliefStore")
            .field("beliefs", &self.beliefs)
            .field("updaters", &self.updaters.len())
            .finish()
    }
}
