//! The `Agent` orchestrator and its builder.

use tracing::debug;

use bdi_belief::{Belief, BeliefStore};
use bdi_core::{RoomId, Vec2};
use bdi_motion::Motion;
use bdi_scene::Scene;

use crate::{
    ActionContext, AgentError, AgentResult, AgentView, Desire, DesireSet, Execution, Intention,
    IntentionSet,
};

// ── TickReport ────────────────────────────────────────────────────────────────

/// What one call to [`Agent::run`] decided and did.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// Best desire after arbitration, if any was active.
    pub desire:    Option<String>,
    /// Intention selected for that desire; `None` is the null intention.
    pub intention: Option<String>,
    pub execution: Execution,
    /// `true` on the tick a journey finished.
    pub arrived:   bool,
    /// Position after the motion step.
    pub position:  Vec2,
    /// Room whose waypoint the agent last reached.
    pub room:      RoomId,
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One BDI agent: beliefs, desires, intentions and motion.
///
/// The agent owns all of its state; the scene is borrowed per call.
#[derive(Debug)]
pub struct Agent {
    name:       String,
    beliefs:    BeliefStore,
    desires:    DesireSet,
    intentions: IntentionSet,
    motion:     Motion,
}

impl Agent {
    /// Run one full cycle.
    ///
    /// Order is fixed: belief rules, desire ranking, intention selection
    /// and execution, then one motion step.
    ///
    /// # Errors
    ///
    /// Belief and motion errors raised by updaters, actions or effects.
    pub fn run(&mut self, scene: &Scene) -> AgentResult<TickReport> {
        self.beliefs.update()?;

        let view = AgentView::new(&self.beliefs, &self.motion);
        let desire = self.desires.update(&view).map(|d| d.name().to_owned());
        let intention = self
            .intentions
            .update(&view, self.desires.best())
            .map(|i| i.name().to_owned());

        let mut ctx = ActionContext::new(&mut self.beliefs, &mut self.motion, scene);
        let execution = self.intentions.execute(&mut ctx)?;

        let arrived = self.motion.update(scene);

        debug!(
            agent = %self.name,
            desire = desire.as_deref(),
            intention = intention.as_deref(),
            ?execution,
            arrived,
            "agent ran"
        );

        Ok(TickReport {
            desire,
            intention,
            execution,
            arrived,
            position: self.motion.position(),
            room:     self.motion.current_room(),
        })
    }

    // ── Inspection ────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn belief(&self, name: &str) -> Option<&Belief> {
        self.beliefs.get(name)
    }

    pub fn beliefs(&self) -> &BeliefStore {
        &self.beliefs
    }

    /// Mutable access for applications that inject beliefs from outside
    /// the cycle.
    pub fn beliefs_mut(&mut self) -> &mut BeliefStore {
        &mut self.beliefs
    }

    pub fn current_best_desire(&self) -> Option<&Desire> {
        self.desires.best()
    }

    /// The active desires from the latest run, best first.
    pub fn active_desires(&self) -> impl Iterator<Item = &Desire> + '_ {
        self.desires.active()
    }

    pub fn desires(&self) -> &DesireSet {
        &self.desires
    }

    pub fn current_intention(&self) -> Option<&Intention> {
        self.intentions.current()
    }

    pub fn intentions(&self) -> &IntentionSet {
        &self.intentions
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn view(&self) -> AgentView<'_> {
        AgentView::new(&self.beliefs, &self.motion)
    }
}

// ── AgentBuilder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Agent`].
///
/// # Required inputs
///
/// - a name (for logs and reports)
/// - [`BeliefStore`]: beliefs plus their updater rules
/// - [`Motion`]: placed in the scene the agent will run in
///
/// Desires and intentions are added with [`desire`](Self::desire) and
/// [`intention`](Self::intention); all validation happens in
/// [`build`](Self::build).
///
/// # Example
///
/// ```rust,ignore
/// let agent = AgentBuilder::new("Alex", beliefs, motion)
///     .desire(Desire::new("Hunger", |v| v.value_or("Hunger", 0) > 50, 10.0))
///     .intention(Intention::new("Hunger").at(fridge).action(Action::MoveToTarget))
///     .build()?;
/// ```
pub struct AgentBuilder {
    name:       String,
    beliefs:    BeliefStore,
    motion:     Motion,
    desires:    Vec<Desire>,
    intentions: Vec<Intention>,
}

impl AgentBuilder {
    pub fn new(name: impl Into<String>, beliefs: BeliefStore, motion: Motion) -> Self {
        Self {
            name: name.into(),
            beliefs,
            motion,
            desires:    Vec::new(),
            intentions: Vec::new(),
        }
    }

    pub fn desire(mut self, desire: Desire) -> Self {
        self.desires.push(desire);
        self
    }

    pub fn desires(mut self, desires: impl IntoIterator<Item = Desire>) -> Self {
        self.desires.extend(desires);
        self
    }

    pub fn intention(mut self, intention: Intention) -> Self {
        self.intentions.push(intention);
        self
    }

    pub fn intentions(mut self, intentions: impl IntoIterator<Item = Intention>) -> Self {
        self.intentions.extend(intentions);
        self
    }

    /// Validate the catalogs and return a ready-to-run [`Agent`].
    ///
    /// # Errors
    ///
    /// - [`AgentError::DuplicateDesire`] / [`AgentError::DuplicateIntention`]
    /// - [`AgentError::UnmatchedIntention`] if an intention's name matches no
    ///   desire.
    /// - [`AgentError::MissingLocation`] if an intention uses
    ///   [`Action::MoveToTarget`](crate::Action::MoveToTarget) without a
    ///   location.
    pub fn build(self) -> AgentResult<Agent> {
        let mut desires = DesireSet::new();
        for desire in self.desires {
            desires.add_desire(desire)?;
        }

        let mut intentions = IntentionSet::new();
        for intention in self.intentions {
            if desires.get(intention.name()).is_none() {
                return Err(AgentError::UnmatchedIntention(intention.name().to_owned()));
            }
            if intention.needs_location() && intention.location().is_none() {
                return Err(AgentError::MissingLocation(intention.name().to_owned()));
            }
            intentions.add_intention(intention)?;
        }

        debug!(
            agent = %self.name,
            beliefs = self.beliefs.len(),
            desires = desires.len(),
            intentions = intentions.len(),
            "agent built"
        );

        Ok(Agent {
            name: self.name,
            beliefs: self.beliefs,
            desires,
            intentions,
            motion: self.motion,
        })
    }
}
