//! Plain agent movement into a candidate tile.

use gw_core::{EntityId, Pos};
use gw_world::components::EffectKind;
use gw_world::query::is_blocked_at;
use gw_world::state::State;
use gw_world::status::{is_usage_limited, use_effect};

/// Try to move `entity` onto `next`.
///
/// Returns `true` only if the attempt changed the state — the reducer's
/// blocked test.  A move onto the tile the entity already occupies counts
/// as blocked unless it spent a Phasing charge (the consumption is a real
/// state change, matching the reducer's semantics for multi-step rules
/// that return the current position when nothing else is reachable).
///
/// Only agents move this way; phasing ignores every occupant, otherwise
/// Blocking and Pushable obstruct (Collidable does not).
pub fn movement_system(state: &mut State, entity: EntityId, next: Pos) -> bool {
    if !state.agent.contains_key(&entity) {
        return false;
    }
    if !state.in_bounds(next) {
        return false;
    }

    if let Some(fx) = use_effect(state, entity, EffectKind::Phasing) {
        let consumed = is_usage_limited(state, fx);
        let prev = state.position.insert(entity, next);
        return consumed || prev != Some(next);
    }

    if is_blocked_at(state, next, false) {
        return false;
    }

    let prev = state.position.insert(entity, next);
    prev != Some(next)
}
