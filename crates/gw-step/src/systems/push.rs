//! Shoving pushable occupants.

use gw_core::{EntityId, Pos};
use gw_world::query::{entities_with_store_at, is_blocked_at, push_destination};
use gw_world::state::State;

/// Try to push a pushable occupant of `next` one tile further along the
/// vector `next − current`, advancing `entity` into the vacated tile.
///
/// Returns `true` if the push happened.  Only the lowest-id pushable at
/// `next` is considered — there is no chain pushing, and the destination
/// must be free of Blocking, Pushable and Collidable occupants.  The
/// destination wraps when the installed movement rule is toroidal,
/// otherwise an off-grid destination fails the push.
pub fn push_system(state: &mut State, entity: EntityId, next: Pos) -> bool {
    let Some(&current) = state.position.get(&entity) else {
        return false;
    };

    let pushables = entities_with_store_at(state, next, &state.pushable);
    let Some(&pushable) = pushables.first() else {
        return false;
    };

    let Some(dest) = push_destination(state, current, next) else {
        return false;
    };
    if is_blocked_at(state, dest, true) {
        return false;
    }

    state.position.insert(pushable, dest);
    state.position.insert(entity, next);
    true
}
