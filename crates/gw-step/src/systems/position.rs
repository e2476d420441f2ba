//! Pre-step position snapshot.

use gw_world::state::State;

/// Record every entity's current position as its previous position.
///
/// Runs before any motion so later systems (trail recording, portal entry
/// detection) can tell movers from entities that merely stood still.
pub fn position_system(state: &mut State) {
    state.prev_position = state.position.clone();
}
