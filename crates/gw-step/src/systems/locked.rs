//! Unlocking adjacent locked entities with held keys.

use gw_core::{EntityId, Pos};
use gw_world::inventory::{find_key, remove_item};
use gw_world::query::entities_with_store_at;
use gw_world::state::State;

/// Neighbor probe order for the unlock action.
const UNLOCK_NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Try to unlock every locked entity on the four tiles around `entity`.
pub fn unlock_system(state: &mut State, entity: EntityId) {
    let Some(&pos) = state.position.get(&entity) else {
        return;
    };
    for (dx, dy) in UNLOCK_NEIGHBORS {
        unlock_at(state, entity, pos.offset(dx, dy));
    }
}

/// Unlock the locked entities at `pos` for which `entity` holds a matching
/// key.  Each opened lock consumes one key: the key leaves the inventory,
/// the key store, and the entity registry.  Opening also removes the
/// lock's Blocking component, if any.
fn unlock_at(state: &mut State, entity: EntityId, pos: Pos) {
    let locked_ids = entities_with_store_at(state, pos, &state.locked);
    if locked_ids.is_empty() || !state.inventory.contains_key(&entity) {
        return;
    }

    for locked_id in locked_ids {
        let Some(locked) = state.locked.get(&locked_id) else { continue };
        let key_id = locked.key_id.clone();

        let Some(inventory) = state.inventory.get(&entity) else { return };
        let Some(key) = find_key(inventory, &state.key, &key_id) else {
            continue; // no matching key; the lock stays
        };

        state.locked.remove(&locked_id);
        state.blocking.remove(&locked_id);
        if let Some(inventory) = state.inventory.get_mut(&entity) {
            remove_item(inventory, key);
        }
        state.key.remove(&key);
        state.entities.remove(&key);
    }
}
