//! Portal teleportation.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use gw_core::{EntityId, Pos};
use gw_world::state::State;
use tracing::trace;

/// Teleport collidable entities that reached or crossed a portal tile this
/// step to the paired portal's position.
///
/// The crossing index — trail tiles plus every collidable's current tile —
/// is computed once per invocation, then portals are processed in id order
/// against that snapshot.  A teleport destination that is itself a portal
/// therefore does not re-fire within the same sub-step; multi-step
/// movement may relocate the entity on the next sub-step.
///
/// Entities that were already standing on the portal (previous position
/// equals current) stay put.
pub fn portal_system(state: &mut State) {
    // Candidate ids per tile, deduplicated and id-ordered.
    let mut crossings: FxHashMap<Pos, BTreeSet<EntityId>> = FxHashMap::default();
    for id in state.collidable.keys() {
        if let Some(pos) = state.position.get(id) {
            crossings.entry(*pos).or_default().insert(*id);
        }
    }
    for (pos, ids) in &state.trail {
        for id in ids {
            if state.collidable.contains_key(id) {
                crossings.entry(*pos).or_default().insert(*id);
            }
        }
    }

    let portal_ids: Vec<EntityId> = state.portal.keys().copied().collect();
    for portal_id in portal_ids {
        let Some(portal) = state.portal.get(&portal_id).copied() else { continue };
        let Some(&portal_pos) = state.position.get(&portal_id) else { continue };
        let Some(&pair_pos) = state.position.get(&portal.pair) else { continue };
        let Some(candidates) = crossings.get(&portal_pos) else { continue };

        for &id in candidates {
            // Only entities that moved this step enter the portal.
            let current = state.position.get(&id).copied();
            let previous = state.prev_position.get(&id).copied();
            if current == previous {
                continue;
            }
            trace!(%id, from = %portal_pos, to = %pair_pos, "teleport");
            state.position.insert(id, pair_pos);
        }
    }
}
