//! Borrowed views of one agent's state handed to user closures.

use bdi_belief::{BeliefResult, BeliefStore};
use bdi_core::{LocationId, Vec2};
use bdi_motion::{Motion, MotionResult};
use bdi_scene::Scene;

/// Read-only snapshot of an agent passed to desire conditions, dynamic
/// priorities and intention preconditions.
///
/// Exposes beliefs and motion only, never the arbitration state.
#[derive(Clone, Copy)]
pub struct AgentView<'a> {
    beliefs: &'a BeliefStore,
    motion:  &'a Motion,
}

impl<'a> AgentView<'a> {
    #[inline]
    pub fn new(beliefs: &'a BeliefStore, motion: &'a Motion) -> Self {
        Self { beliefs, motion }
    }

    pub fn beliefs(&self) -> &'a BeliefStore {
        self.beliefs
    }

    pub fn motion(&self) -> &'a Motion {
        self.motion
    }

    /// Value of the named belief, `None` if the agent has no such belief.
    #[inline]
    pub fn value(&self, belief: &str) -> Option<i64> {
        self.beliefs.value(belief)
    }

    /// Value of the named belief, or `default` when it is missing.
    #[inline]
    pub fn value_or(&self, belief: &str, default: i64) -> i64 {
        self.value(belief).unwrap_or(default)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.motion.position()
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.motion.is_moving()
    }
}

/// Mutable context for one intention execution.
///
/// Built by [`Agent::run`](crate::Agent::run) for the duration of a single
/// tick.  `location` is the executing intention's target.
pub struct ActionContext<'a> {
    pub(crate) beliefs:  &'a mut BeliefStore,
    pub(crate) motion:   &'a mut Motion,
    pub(crate) scene:    &'a Scene,
    pub(crate) location: Option<LocationId>,
}

impl<'a> ActionContext<'a> {
    pub fn new(beliefs: &'a mut BeliefStore, motion: &'a mut Motion, scene: &'a Scene) -> Self {
        Self { beliefs, motion, scene, location: None }
    }

    pub fn view(&self) -> AgentView<'_> {
        AgentView::new(&*self.beliefs, &*self.motion)
    }

    pub fn beliefs(&self) -> &BeliefStore {
        &*self.beliefs
    }

    pub fn beliefs_mut(&mut self) -> &mut BeliefStore {
        self.beliefs
    }

    pub fn motion(&self) -> &Motion {
        &*self.motion
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    /// Target location of the executing intention, if it has one.
    pub fn location(&self) -> Option<LocationId> {
        self.location
    }

    /// Start walking to `destination`, replacing any journey in progress.
    pub fn move_to(&mut self, destination: LocationId) -> MotionResult<()> {
        self.motion.move_to(self.scene, destination)
    }

    pub fn stop(&mut self) {
        self.motion.stop();
    }

    /// Shorthand for `beliefs_mut().increase_by(..)`.
    pub fn increase(&mut self, belief: &str, amount: f64) -> BeliefResult<i64> {
        self.beliefs.increase_by(belief, amount)
    }

    /// Shorthand for `beliefs_mut().decrease_by(..)`.
    pub fn decrease(&mut self, belief: &str, amount: f64) -> BeliefResult<i64> {
        self.beliefs.decrease_by(belief, amount)
    }
}
