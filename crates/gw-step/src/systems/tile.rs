//! Floor economics: reward tiles and cost tiles.
//!
//! Reward runs after every movement sub-step so a sliding agent scores
//! each coin tile it crosses; cost runs once per step so faster movement
//! is not double-charged for floor upkeep.

use gw_core::EntityId;
use gw_world::query::entities_with_store_at;
use gw_world::state::State;

/// Add the amounts of every non-collectible Rewardable on the agent's tile.
pub fn tile_reward_system(state: &mut State, agent: EntityId) {
    if !state.is_valid(agent) || state.is_terminal(agent) {
        return;
    }
    let Some(&pos) = state.position.get(&agent) else {
        return;
    };

    let total: i64 = entities_with_store_at(state, pos, &state.rewardable)
        .into_iter()
        .filter(|id| !state.collectible.contains_key(id))
        .map(|id| state.rewardable[&id].amount)
        .sum();
    state.score += total;
}

/// Subtract the amounts of every non-collectible Cost on the agent's tile.
pub fn tile_cost_system(state: &mut State, agent: EntityId) {
    if !state.is_valid(agent) || state.is_terminal(agent) {
        return;
    }
    let Some(&pos) = state.position.get(&agent) else {
        return;
    };

    let total: i64 = entities_with_store_at(state, pos, &state.cost)
        .into_iter()
        .filter(|id| !state.collectible.contains_key(id))
        .map(|id| state.cost[&id].amount)
        .sum();
    state.score -= total;
}
