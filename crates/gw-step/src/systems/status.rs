//! Effect lifecycle: time-limit ticking and expired-effect cleanup.

use gw_core::EntityId;
use gw_world::state::State;
use gw_world::status::effect_is_valid;

/// Tick and clean every status set.
///
/// For each entity with a `Status`: decrement the time limit of every
/// attached effect, then drop effect ids that no longer name an effect
/// entity or whose time/usage limit has run out.  Dropped effects are also
/// retired from the entity registry so the end-of-step collector reclaims
/// their remaining components.
pub fn status_system(state: &mut State) {
    let holders: Vec<EntityId> = state.status.keys().copied().collect();

    for holder in holders {
        let Some(status) = state.status.get(&holder) else { continue };
        let effect_ids: Vec<EntityId> = status.effect_ids.iter().copied().collect();

        for fx in &effect_ids {
            if let Some(t) = state.time_limit.get_mut(fx) {
                t.amount -= 1;
            }
        }

        let expired: Vec<EntityId> = effect_ids
            .into_iter()
            .filter(|fx| !state.is_effect(*fx) || !effect_is_valid(state, *fx))
            .collect();

        if expired.is_empty() {
            continue;
        }
        if let Some(status) = state.status.get_mut(&holder) {
            for fx in &expired {
                status.effect_ids.remove(fx);
            }
        }
        for fx in &expired {
            state.entities.remove(fx);
        }
    }
}
