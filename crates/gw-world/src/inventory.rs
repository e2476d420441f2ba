//! Inventory manipulation and key lookup.

use gw_core::EntityId;

use crate::components::{Inventory, Key};
use crate::state::Store;

/// Add `item_id` to the inventory (no-op if already held).
pub fn add_item(inventory: &mut Inventory, item_id: EntityId) {
    inventory.item_ids.insert(item_id);
}

/// Remove `item_id` from the inventory.
pub fn remove_item(inventory: &mut Inventory, item_id: EntityId) {
    inventory.item_ids.remove(&item_id);
}

/// The lowest-id held key whose `key_id` matches, or `None`.
///
/// Ascending-id iteration makes "which key gets consumed" deterministic
/// when several identical keys are held.
pub fn find_key(inventory: &Inventory, keys: &Store<Key>, key_id: &str) -> Option<EntityId> {
    inventory
        .item_ids
        .iter()
        .copied()
        .find(|item| keys.get(item).is_some_and(|k| k.key_id == key_id))
}
