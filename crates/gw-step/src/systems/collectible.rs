//! Picking things up.

use gw_core::EntityId;
use gw_world::inventory::add_item;
use gw_world::query::entities_with_store_at;
use gw_world::state::State;
use gw_world::status::{add_status_effect, effect_is_valid};

/// Collect everything collectible on `entity`'s tile.
///
/// Per collectible, in ascending id order:
/// - an unexpired effect goes into the holder's Status (requires the
///   holder to have one — otherwise the effect is left on the floor);
/// - a non-effect item goes into the Inventory (same caveat);
/// - a Rewardable amount is scored either way.
///
/// Collected entities lose their Position and Collectible components and
/// live on only through the status/inventory reference that holds them.
pub fn collectible_system(state: &mut State, entity: EntityId) {
    let Some(&pos) = state.position.get(&entity) else {
        return;
    };

    let collectible_ids = entities_with_store_at(state, pos, &state.collectible);
    if collectible_ids.is_empty() {
        return;
    }

    let has_inventory = state.inventory.contains_key(&entity);
    let has_status = state.status.contains_key(&entity);
    let mut collected: Vec<EntityId> = Vec::new();

    for id in collectible_ids {
        let is_effect = state.is_effect(id);

        if has_status && is_effect && effect_is_valid(state, id) {
            if let Some(status) = state.status.get_mut(&entity) {
                add_status_effect(status, id);
            }
            collected.push(id);
        } else if has_inventory && !is_effect {
            if let Some(inventory) = state.inventory.get_mut(&entity) {
                add_item(inventory, id);
            }
            collected.push(id);
        }

        // Rewardable scores even when the pickup itself was an effect.
        if let Some(&reward) = state.rewardable.get(&id) {
            state.score += reward.amount;
            if !collected.contains(&id) {
                collected.push(id);
            }
        }
    }

    for id in collected {
        state.position.remove(&id);
        state.collectible.remove(&id);
    }
}
