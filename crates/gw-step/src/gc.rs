//! End-of-step orphan collection.

use std::collections::BTreeSet;

use gw_core::EntityId;
use gw_world::state::State;

/// The live set: registered entities plus everything a status or an
/// inventory still references.
pub fn live_entities(state: &State) -> BTreeSet<EntityId> {
    let mut live = state.entities.clone();
    for status in state.status.values() {
        live.extend(&status.effect_ids);
    }
    for inventory in state.inventory.values() {
        live.extend(&inventory.item_ids);
    }
    live
}

/// Remove every component keyed by an id outside the live set, and clear
/// the per-step trail.
///
/// Runs as the last stage of each step, so a snapshot handed back to the
/// caller never contains dangling component rows.
pub fn run_garbage_collector(state: &mut State) {
    let live = live_entities(state);
    state.retain_entities(|id| live.contains(&id));
    state.trail.clear();
}
