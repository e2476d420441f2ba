//! The step reducer: one action in, one successor snapshot out.
//!
//! # Pipeline
//!
//! 1. `position_system` — snapshot previous positions
//! 2. `moving_system` — autonomous directional movers
//! 3. `pathfinding_system` — target-seeking movers
//! 4. `status_system` — effect time tick + expired-effect cleanup
//! 5. `trail_system` — record crossings since the snapshot
//! 6. Action dispatch (move / use-key / pick-up / wait)
//! 7. Post-substep interactions: portal → damage → tile reward
//!    (per sub-step for moves, once for everything else)
//! 8. Finalization: tile cost → win → lose → turn increment → orphan GC
//!
//! The incoming snapshot is cloned once at entry; every system mutates the
//! private copy, so callers observe a pure transition and may keep or
//! replay old snapshots freely.

use std::sync::Arc;

use gw_core::{Action, Direction, EntityId, GwError, GwResult};
use gw_world::components::EffectKind;
use gw_world::state::State;
use gw_world::status::use_effect;
use tracing::debug;

use crate::gc::run_garbage_collector;
use crate::systems::{
    collectible_system, damage_system, lose_system, movement_system, moving_system,
    pathfinding_system, portal_system, position_system, push_system, status_system,
    tile_cost_system, tile_reward_system, trail_system, unlock_system, win_system,
};

/// Apply `action` for the designated agent and return the successor state.
///
/// With `agent_id` omitted, the lowest-id agent acts.  Short-circuits:
/// no agent at all is an error; a dead agent yields `lose = true` with no
/// systems run; a terminal or invalid snapshot is returned unchanged.
pub fn step(state: &State, action: Action, agent_id: Option<EntityId>) -> GwResult<State> {
    let agent = match agent_id.or_else(|| state.first_agent()) {
        Some(agent) => agent,
        None => return Err(GwError::NoAgent),
    };

    if state.dead.contains_key(&agent) {
        let mut out = state.clone();
        out.lose = true;
        return Ok(out);
    }
    if !state.is_valid(agent) || state.is_terminal(agent) {
        return Ok(state.clone());
    }

    let mut s = state.clone();
    debug!(turn = s.turn, ?action, %agent, "step");

    position_system(&mut s);
    moving_system(&mut s);
    pathfinding_system(&mut s);
    status_system(&mut s);
    trail_system(&mut s);

    match action.direction() {
        Some(dir) => step_move(&mut s, dir, agent)?,
        None => {
            match action {
                Action::UseKey => unlock_system(&mut s, agent),
                Action::PickUp => collectible_system(&mut s, agent),
                _ => {} // Wait
            }
            after_substep(&mut s, agent)?;
        }
    }

    after_step(&mut s, agent);
    Ok(s)
}

/// The movement action: resolve the speed multiplier, then attempt each
/// candidate tile of each sub-step, with interactions after every attempt.
fn step_move(state: &mut State, dir: Direction, agent: EntityId) -> GwResult<()> {
    if !state.position.contains_key(&agent) {
        return Ok(());
    }

    // One consultation per step: a usage-limited Speed effect is spent
    // once here, not once per sub-step.
    let mut move_count = 1;
    if let Some(fx) = use_effect(state, agent, EffectKind::Speed) {
        if let Some(speed) = state.speed.get(&fx) {
            move_count *= speed.multiplier;
        }
    }

    for _ in 0..move_count {
        let rule = Arc::clone(&state.move_fn);
        for next in rule.next_positions(state, agent, dir) {
            // Push first; plain movement only if there was nothing to shove.
            let moved = push_system(state, agent, next) || movement_system(state, agent, next);

            after_substep(state, agent)?;

            if state.win || state.lose || state.dead.contains_key(&agent) || !moved {
                return Ok(());
            }
        }
    }
    Ok(())
}

/// Interactions that run after every sub-step, in fixed order.
fn after_substep(state: &mut State, agent: EntityId) -> GwResult<()> {
    portal_system(state);
    damage_system(state)?;
    tile_reward_system(state, agent);
    Ok(())
}

/// Finalization common to every action.
fn after_step(state: &mut State, agent: EntityId) {
    tile_cost_system(state, agent);
    win_system(state, agent);
    lose_system(state, agent);
    state.turn += 1;
    run_garbage_collector(state);
}
