//! Terminal transitions: win and lose flags.

use std::sync::Arc;

use gw_core::EntityId;
use gw_world::state::State;
use tracing::debug;

/// Set `win` when the objective holds for a live, positioned agent.
pub fn win_system(state: &mut State, agent: EntityId) {
    if state.dead.contains_key(&agent) || state.agent.is_empty() {
        return;
    }
    if !state.position.contains_key(&agent) || state.win {
        return;
    }

    let objective = Arc::clone(&state.objective_fn);
    if objective.is_met(state, agent) {
        debug!(turn = state.turn, "objective met");
        state.win = true;
    }
}

/// Set `lose` when the agent is dead.
pub fn lose_system(state: &mut State, agent: EntityId) {
    if state.dead.contains_key(&agent) && !state.lose {
        debug!(turn = state.turn, "agent dead");
        state.lose = true;
    }
}
