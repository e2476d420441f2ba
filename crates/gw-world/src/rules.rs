//! The pluggable rule traits — the main extension points for callers.
//!
//! Movement and objectives are data carried by the snapshot, not behavior
//! baked into the kernel: the reducer consults whatever implementations
//! the state was built with.  Implementations must be pure with respect to
//! the state they receive (they get `&State` and must not cache world data
//! between calls).

use gw_core::{Direction, EntityId, Pos};

use crate::state::State;

// ── MoveFn ────────────────────────────────────────────────────────────────────

/// Pluggable movement rule.
///
/// Given the snapshot, the moving entity and a direction, return the
/// sequence of candidate tiles the entity should attempt this sub-step —
/// a single adjacent cell for the default rule, a whole slide path for
/// slippery variants, possibly empty when no move is expressible.
///
/// Returning the entity's *current* position signals "nowhere to go"; the
/// reducer treats the resulting no-op as a blocked sub-step.
///
/// # Thread safety
///
/// Rules are shared behind `Arc` across cloned snapshots, so
/// implementations must be `Send + Sync` and are almost always stateless
/// unit structs.
pub trait MoveFn: Send + Sync + 'static {
    /// Candidate next tiles, in the order they should be attempted.
    fn next_positions(&self, state: &State, entity: EntityId, dir: Direction) -> Vec<Pos>;

    /// `true` if this rule wraps coordinates toroidally.
    ///
    /// Push resolution consults this: a wrapping rule wraps the shove
    /// destination instead of rejecting out-of-bounds pushes.
    fn wraps(&self) -> bool {
        false
    }
}

// ── ObjectiveFn ───────────────────────────────────────────────────────────────

/// Pluggable win predicate, evaluated by the terminal system after every
/// step for a live agent.
pub trait ObjectiveFn: Send + Sync + 'static {
    /// `true` once the objective is satisfied.
    fn is_met(&self, state: &State, agent: EntityId) -> bool;
}
