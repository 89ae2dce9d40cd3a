//! `bdi-agent`: the Belief–Desire–Intention cycle for one agent.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`view`]      | `AgentView` (read-only), `ActionContext` (mutable, per run)  |
//! | [`desire`]    | `Desire`, `Priority`, `DesireSet`: ranked arbitration        |
//! | [`intention`] | `Intention`, `Action`, `IntentionSet`, `Execution`           |
//! | [`agent`]     | `Agent`, `AgentBuilder`, `TickReport`                        |
//! | [`error`]     | `AgentError`, `AgentResult<T>`                               |
//!
//! # One tick
//!
//! ```text
//! Agent::run(&scene):
//!   ① beliefs   : every updater rule fires once
//!   ② desires   : active set re-ranked, best desire chosen (or none)
//!   ③ intention : same-named intention whose precondition holds (or none)
//!   ④ execute   : actions in order, then effects
//!   ⑤ motion    : one step towards the current waypoint
//! ```
//!
//! Desires and intentions are paired by name.  [`AgentBuilder::build`]
//! rejects an intention whose name matches no desire, so a typo fails at
//! construction instead of silently never firing.

pub mod agent;
pub mod desire;
pub mod error;
pub mod intention;
pub mod view;


pub use agent::{Agent, AgentBuilder, TickReport};
pub use desire::{Desire, DesireSet, Priority};
pub use error::{AgentError, AgentResult};
pub use intention::{Action, Execution, Intention, IntentionSet};
pub use view::{ActionContext, AgentView};
