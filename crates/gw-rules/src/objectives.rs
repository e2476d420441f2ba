//! Built-in objective predicates.
//!
//! Objectives read the snapshot and decide whether the agent has won; the
//! terminal system consults the one carried by the state after every step.

use std::sync::Arc;

use gw_core::EntityId;
use gw_world::query::entities_with_store_at;
use gw_world::rules::ObjectiveFn;
use gw_world::state::State;

/// `true` once every Required entity has been collected.
fn all_required_collected(state: &State) -> bool {
    state.required.keys().all(|id| !state.collectible.contains_key(id))
}

/// `true` if the agent stands on an Exit tile.
fn agent_on_exit(state: &State, agent: EntityId) -> bool {
    match state.position.get(&agent) {
        Some(pos) => !entities_with_store_at(state, *pos, &state.exit).is_empty(),
        None => false,
    }
}

// ── Variants ──────────────────────────────────────────────────────────────────

/// Collect every Required entity, then reach an Exit.
pub struct DefaultObjective;

impl ObjectiveFn for DefaultObjective {
    fn is_met(&self, state: &State, agent: EntityId) -> bool {
        all_required_collected(state) && agent_on_exit(state, agent)
    }
}

/// Reach any Exit tile.
pub struct ExitObjective;

impl ObjectiveFn for ExitObjective {
    fn is_met(&self, state: &State, agent: EntityId) -> bool {
        agent_on_exit(state, agent)
    }
}

/// Collect every Required entity.
pub struct CollectObjective;

impl ObjectiveFn for CollectObjective {
    fn is_met(&self, state: &State, _agent: EntityId) -> bool {
        all_required_collected(state)
    }
}

/// Open every lock.
pub struct UnlockObjective;

impl ObjectiveFn for UnlockObjective {
    fn is_met(&self, state: &State, _agent: EntityId) -> bool {
        state.locked.is_empty()
    }
}

/// Park every pushable on an Exit tile.
pub struct PushObjective;

impl ObjectiveFn for PushObjective {
    fn is_met(&self, state: &State, _agent: EntityId) -> bool {
        state.pushable.keys().all(|id| {
            state
                .position
                .get(id)
                .is_some_and(|pos| !entities_with_store_at(state, *pos, &state.exit).is_empty())
        })
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Names accepted by [`objective_fn_by_name`], in registry order.
pub const OBJECTIVE_FN_NAMES: [&str; 5] = ["default", "exit", "collect", "unlock", "push"];

/// Look up a built-in objective by its registry name.
pub fn objective_fn_by_name(name: &str) -> Option<Arc<dyn ObjectiveFn>> {
    match name {
        "default" => Some(Arc::new(DefaultObjective)),
        "exit" => Some(Arc::new(ExitObjective)),
        "collect" => Some(Arc::new(CollectObjective)),
        "unlock" => Some(Arc::new(UnlockObjective)),
        "push" => Some(Arc::new(PushObjective)),
        _ => None,
    }
}
