//! Kernel error type.
//!
//! The taxonomy distinguishes programmer errors (bugs in callers or level
//! configuration — surfaced as `Err` so no half-applied state escapes a
//! step) from "nothing to do" cases, which systems swallow silently by
//! leaving the state unchanged.

use thiserror::Error;

use crate::EntityId;

/// Failure cases surfaced by state construction and by `step`.
#[derive(Debug, Error)]
pub enum GwError {
    /// `step` was called on a state whose agent store is empty.
    #[error("state contains no agent")]
    NoAgent,

    /// A damager carries a negative damage amount — a level-construction
    /// bug, never a legal runtime condition.
    #[error("damager {entity} has negative damage: {amount}")]
    NegativeDamage { entity: EntityId, amount: i32 },

    /// State construction violated an invariant.
    #[error("invalid level configuration: {0}")]
    Config(String),
}

/// Result alias used throughout the workspace.
pub type GwResult<T> = Result<T, GwError>;
