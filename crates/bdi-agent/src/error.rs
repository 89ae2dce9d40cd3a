use bdi_belief::BeliefError;
use bdi_motion::MotionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("desire {0:?} is already registered")]
    DuplicateDesire(String),

    #[error("intention {0:?} is already registered")]
    DuplicateIntention(String),

    #[error("intention {0:?} has no desire with the same name")]
    UnmatchedIntention(String),

    #[error("intention {0:?} moves to its target but has no location")]
    MissingLocation(String),

    #[error("belief error: {0}")]
    Belief(#[from] BeliefError),

    #[error("motion error: {0}")]
    Motion(#[from] MotionError),
}

pub type AgentResult<T> = Result<T, AgentError>;
