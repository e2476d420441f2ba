//! Tile-occupancy queries and collision predicates.
//!
//! Pure helpers over the snapshot used by movement, pushing, pathfinding
//! and the interaction systems.  All results are in ascending entity-id
//! order because the position store iterates sorted.

use gw_core::{EntityId, Pos};

use crate::state::{State, Store};

/// All entity ids whose position equals `pos`, ascending.
pub fn entities_at(state: &State, pos: Pos) -> Vec<EntityId> {
    state
        .position
        .iter()
        .filter(|(_, p)| **p == pos)
        .map(|(id, _)| *id)
        .collect()
}

/// Entity ids at `pos` that also appear in `store`, ascending.
pub fn entities_with_store_at<C>(state: &State, pos: Pos, store: &Store<C>) -> Vec<EntityId> {
    state
        .position
        .iter()
        .filter(|(id, p)| **p == pos && store.contains_key(*id))
        .map(|(id, _)| *id)
        .collect()
}

/// `true` if any occupant of `pos` obstructs movement.
///
/// Blocking and Pushable always obstruct; Collidable obstructs only when
/// `check_collidable` is set (pushing and autonomous blocking movers care,
/// plain agent movement does not).
pub fn is_blocked_at(state: &State, pos: Pos, check_collidable: bool) -> bool {
    state.position.iter().any(|(id, p)| {
        *p == pos
            && (state.blocking.contains_key(id)
                || state.pushable.contains_key(id)
                || (check_collidable && state.collidable.contains_key(id)))
    })
}

/// The tile a pushable lands on when shoved from `next` along the vector
/// `next − current`.
///
/// Wraps toroidally when the installed movement rule wraps; otherwise
/// returns `None` for out-of-bounds destinations.
pub fn push_destination(state: &State, current: Pos, next: Pos) -> Option<Pos> {
    let (dx, dy) = next.delta(current);
    let dest = next.offset(dx, dy);

    if state.move_fn.wraps() {
        return Some(dest.wrapped(state.width, state.height));
    }
    state.in_bounds(dest).then_some(dest)
}
