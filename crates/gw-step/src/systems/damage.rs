//! Unified contact damage: plain, lethal, and immunity-negated.

use std::collections::BTreeSet;

use gw_core::{EntityId, GwError, GwResult};
use gw_world::components::EffectKind;
use gw_world::health::apply_damage;
use gw_world::query::entities_with_store_at;
use gw_world::state::State;
use gw_world::status::use_effect;
use tracing::trace;

/// Apply contact damage to every entity with health.
///
/// Targets are processed in ascending id order; for each, the damagers on
/// its tile (Damage or LethalDamage bearers) apply in ascending id order.
/// An active Immunity effect negates one damager per selection — so a
/// usage-limited immunity burns one charge per damager, not per step.
///
/// A damager with a negative amount aborts the step: that is a level
/// construction bug, not a runtime condition.
pub fn damage_system(state: &mut State) -> GwResult<()> {
    let targets: Vec<EntityId> = state.health.keys().copied().collect();
    for target in targets {
        damage_entity(state, target)?;
    }
    Ok(())
}

fn damage_entity(state: &mut State, target: EntityId) -> GwResult<()> {
    let Some(&pos) = state.position.get(&target) else {
        return Ok(());
    };
    if state.dead.contains_key(&target) {
        return Ok(());
    }

    let mut damagers: BTreeSet<EntityId> =
        entities_with_store_at(state, pos, &state.damage).into_iter().collect();
    damagers.extend(entities_with_store_at(state, pos, &state.lethal_damage));

    for damager in damagers {
        if use_effect(state, target, EffectKind::Immunity).is_some() {
            continue;
        }

        let amount = state.damage.get(&damager).map_or(0, |d| d.amount);
        if amount < 0 {
            return Err(GwError::NegativeDamage { entity: damager, amount });
        }
        let lethal = state.lethal_damage.contains_key(&damager);

        apply_damage(&mut state.health, &mut state.dead, target, amount, lethal);
        if state.dead.contains_key(&target) {
            trace!(%target, %damager, "entity died");
        }
    }
    Ok(())
}
