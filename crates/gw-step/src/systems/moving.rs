//! Autonomous directional motion.

use gw_core::EntityId;
use gw_world::query::is_blocked_at;
use gw_world::state::State;

/// Advance every entity with a `Moving` component by up to its speed.
///
/// Movers are processed in ascending id order and occupancy checks see the
/// partially updated position map, so two movers aiming at the same tile
/// cannot both claim it — the later one is turned away (and reverses if it
/// bounces).
///
/// The direction used for all of a mover's sub-moves this step is the one
/// it entered the step with; a bounce takes effect on the next step.
pub fn moving_system(state: &mut State) {
    let ids: Vec<EntityId> = state.moving.keys().copied().collect();

    for id in ids {
        let Some(entered) = state.moving.get(&id).copied() else { continue };
        if !state.position.contains_key(&id) {
            continue;
        }

        // A mover that is itself blocking also refuses collidable tiles.
        let check_collidable = state.blocking.contains_key(&id);
        let (dx, dy) = entered.delta();

        for _ in 0..entered.speed {
            let Some(&pos) = state.position.get(&id) else { break };
            let next = pos.offset(dx, dy);

            let obstructed =
                !state.in_bounds(next) || is_blocked_at(state, next, check_collidable);

            let Some(moving) = state.moving.get_mut(&id) else { break };
            if obstructed {
                if entered.bounce {
                    moving.dir = entered.dir.flipped();
                }
                moving.prev = Some(pos);
            } else {
                moving.prev = Some(pos);
                state.position.insert(id, next);
            }
        }
    }
}
