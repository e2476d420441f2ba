//! Health mutation and death marking.

use gw_core::EntityId;

use crate::components::{Dead, Health};
use crate::state::Store;

/// Apply `amount` damage to `target`, marking death when health reaches
/// zero or the hit is lethal.
///
/// Targets without a `Health` entry only die to lethal hits.  Health never
/// goes below zero, and a dead target's hp is pinned at zero.
pub fn apply_damage(
    health: &mut Store<Health>,
    dead: &mut Store<Dead>,
    target: EntityId,
    amount: i32,
    lethal: bool,
) {
    match health.get_mut(&target) {
        Some(h) => {
            h.hp = (h.hp - amount).max(0);
            if h.hp == 0 || lethal {
                h.hp = 0;
                dead.insert(target, Dead);
            }
        }
        None => {
            if lethal {
                dead.insert(target, Dead);
            }
        }
    }
}
