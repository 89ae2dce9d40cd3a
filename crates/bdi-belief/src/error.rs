use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BeliefError {
    #[error("belief name must not be empty")]
    EmptyName,

    #[error("belief {0:?} is already registered")]
    Duplicate(String),

    #[error("belief {0:?} not found")]
    UnknownBelief(String),

    #[error("belief {0:?} already has an updater bound to it")]
    DuplicateUpdater(String),

    #[error("invalid amount {amount} for belief {belief:?}: must be finite and non-negative")]
    InvalidAmount { belief: String, amount: f64 },

    #[error("invalid per-tick delta {delta} for belief {belief:?}: must be finite")]
    InvalidDelta { belief: String, delta: f64 },

    #[error("initial value {value} for belief {belief:?} is outside [{min}, {max}]")]
    OutOfRange { belief: String, value: f64, min: i64, max: i64 },

    #[error("invalid range [{min}, {max}]: min must not exceed max")]
    InvalidRange { min: i64, max: i64 },
}

pub type BeliefResult<T> = Result<T, BeliefError>;
