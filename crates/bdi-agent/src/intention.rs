//! Intentions: the concrete plans that satisfy a desire.
//!
//! An intention is selected when its name equals the best desire's name and
//! its precondition holds.  Executing it runs its actions in order and then
//! its effects, all on the same tick; effects do not wait for the agent to
//! arrive anywhere.

use tracing::debug;

use bdi_belief::{BeliefResult, BeliefStore};
use bdi_core::LocationId;

use crate::{ActionContext, AgentError, AgentResult, AgentView, Desire};

type Precondition = Box<dyn Fn(&AgentView<'_>) -> bool + Send + Sync>;
type Effect = Box<dyn Fn(&mut BeliefStore) -> BeliefResult<()> + Send + Sync>;
type CustomAction = Box<dyn Fn(&mut ActionContext<'_>) -> AgentResult<()> + Send + Sync>;

// ── Action ────────────────────────────────────────────────────────────────────

/// One step of an intention.
pub enum Action {
    /// Walk to the intention's own location.
    MoveToTarget,

    /// Walk to a fixed location.
    MoveTo(LocationId),

    /// Stop where the agent stands.
    Stop,

    Custom(CustomAction),
}

impl Action {
    pub fn custom(f: impl Fn(&mut ActionContext<'_>) -> AgentResult<()> + Send + Sync + 'static) -> Self {
        Action::Custom(Box::new(f))
    }

    fn run(&self, ctx: &mut ActionContext<'_>) -> AgentResult<()> {
        match self {
            Action::MoveToTarget => match ctx.location {
                Some(location) => ctx.move_to(location).map_err(AgentError::from),
                None => Ok(()),
            },
            Action::MoveTo(location) => ctx.move_to(*location).map_err(AgentError::from),
            Action::Stop => {
                ctx.stop();
                Ok(())
            }
            Action::Custom(f) => f(ctx),
        }
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::MoveToTarget => f.write_str("MoveToTarget"),
            Action::MoveTo(l) => f.debug_tuple("MoveTo").field(l).finish(),
            Action::Stop => f.write_str("Stop"),
            Action::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

// ── Intention ─────────────────────────────────────────────────────────────────

/// A named plan: an optional target location, ordered actions, a
/// precondition and belief effects.
///
/// # Example
///
/// ```
/// use bdi_agent::{Action, Intention};
/// use bdi_core::LocationId;
///
/// let eat = Intention::new("Hunger")
///     .at(LocationId(0))
///     .action(Action::MoveToTarget)
///     .precondition(|view| view.value_or("Hunger", 0) > 20)
///     .effect(|beliefs| beliefs.decrease_by("Hunger", 30.0).map(drop));
/// assert_eq!(eat.actions().len(), 1);
/// ```
pub struct Intention {
    name:         String,
    location:     Option<LocationId>,
    actions:      Vec<Action>,
    precondition: Precondition,
    effects:      Vec<Effect>,
}

impl Intention {
    /// An intention with no location, no actions, no effects and an
    /// always-true precondition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:         name.into(),
            location:     None,
            actions:      Vec::new(),
            precondition: Box::new(|_| true),
            effects:      Vec::new(),
        }
    }

    pub fn at(mut self, location: LocationId) -> Self {
        self.location = Some(location);
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn precondition(mut self, f: impl Fn(&AgentView<'_>) -> bool + Send + Sync + 'static) -> Self {
        self.precondition = Box::new(f);
        self
    }

    pub fn effect(mut self, f: impl Fn(&mut BeliefStore) -> BeliefResult<()> + Send + Sync + 'static) -> Self {
        self.effects.push(Box::new(f));
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn location(&self) -> Option<LocationId> {
        self.location
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    #[inline]
    pub fn can_execute(&self, view: &AgentView<'_>) -> bool {
        (self.precondition)(view)
    }

    /// Re-check the precondition, then run actions and effects.
    ///
    /// Nothing runs when the precondition fails.
    pub fn execute(&self, ctx: &mut ActionContext<'_>) -> AgentResult<Execution> {
        if !self.can_execute(&ctx.view()) {
            return Ok(Execution::PreconditionFailed);
        }
        ctx.location = self.location;
        for action in &self.actions {
            action.run(ctx)?;
        }
        for effect in &self.effects {
            effect(&mut *ctx.beliefs)?;
        }
        Ok(Execution::Executed)
    }

    /// `true` if any action walks to this intention's own location.
    pub(crate) fn needs_location(&self) -> bool {
        self.actions.iter().any(|a| matches!(a, Action::MoveToTarget))
    }
}

impl std::fmt::Debug for Intention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Intention")
            .field("name", &self.name)
            .field("location", &self.location)
            .field("actions", &self.actions)
            .field("effects", &self.effects.len())
            .finish()
    }
}

/// Outcome of [`IntentionSet::execute`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Execution {
    /// No intention selected (the null intention).
    Idle,
    Executed,
    /// An intention was selected but its precondition no longer held.
    PreconditionFailed,
}

// ── IntentionSet ──────────────────────────────────────────────────────────────

/// All of an agent's intentions plus the currently selected one.
#[derive(Debug, Default)]
pub struct IntentionSet {
    intentions: Vec<Intention>,
    current:    Option<usize>,
}

impl IntentionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// [`AgentError::DuplicateIntention`] if the name is already registered.
    pub fn add_intention(&mut self, intention: Intention) -> AgentResult<()> {
        if self.get(intention.name()).is_some() {
            return Err(AgentError::DuplicateIntention(intention.name.clone()));
        }
        self.intentions.push(intention);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Intention> {
        self.intentions.iter().find(|i| i.name == name)
    }

    /// Select the intention for `desire`.
    ///
    /// No desire, no same-named intention, or a failing precondition all
    /// select the null intention (`None`).
    pub fn update(&mut self, view: &AgentView<'_>, desire: Option<&Desire>) -> Option<&Intention> {
        self.current = desire.and_then(|d| {
            self.intentions
                .iter()
                .position(|i| i.name == d.name() && i.can_execute(view))
        });
        if let Some(d) = desire {
            debug!(desire = d.name(), selected = self.current.is_some(), "intention selected");
        }
        self.current()
    }

    /// The intention picked by the latest [`update`](Self::update).
    pub fn current(&self) -> Option<&Intention> {
        self.current.map(|i| &self.intentions[i])
    }

    /// Execute the current intention; [`Execution::Idle`] for the null
    /// intention.
    pub fn execute(&self, ctx: &mut ActionContext<'_>) -> AgentResult<Execution> {
        match self.current() {
            Some(intention) => intention.execute(ctx),
            None => Ok(Execution::Idle),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intention> + '_ {
        self.intentions.iter()
    }

    pub fn len(&self) -> usize {
        self.intentions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intentions.is_empty()
    }
}
