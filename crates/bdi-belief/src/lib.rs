//! `bdi-belief`: the agent's numeric belief store.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`belief`]  | `Belief`, `BeliefRange`: named, clamped integer state      |
//! | [`updater`] | `BeliefUpdater` trait, `DeltaUpdater`, `ThresholdUpdater`  |
//! | [`store`]   | `BeliefStore`: insertion-ordered beliefs + updater rules   |
//! | [`error`]   | `BeliefError`, `BeliefResult<T>`                           |
//!
//! # Clamping
//!
//! Every write goes through [`Belief::increase`] / [`Belief::decrease`],
//! which round to an integer and clamp to the belief's range.  Updaters and
//! intention effects never touch the raw value, so they all inherit the
//! same guarantee.

pub mod belief;
pub mod error;
pub mod store;
pub mod updater;


pub use belief::{Belief, BeliefRange};
pub use error::{BeliefError, BeliefResult};
pub use store::BeliefStore;
pub use updater::{BeliefUpdater, DeltaUpdater, ThresholdUpdater};
