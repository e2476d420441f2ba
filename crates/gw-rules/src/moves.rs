//! Built-in movement rules.
//!
//! Each rule is a stateless unit struct implementing [`MoveFn`]; levels
//! select one by name via [`move_fn_by_name`] and carry it in the snapshot.
//! Rules return *candidate* tiles only — collision, pushing and phasing are
//! resolved by the movement systems, so a rule is free to propose tiles
//! the agent will turn out not to reach.

use std::sync::Arc;

use gw_core::{Direction, EntityId, Pos, SimRng};
use gw_world::rules::MoveFn;
use gw_world::state::State;

/// Probability that the windy rule appends a perpendicular push.
const WIND_PROBABILITY: f64 = 0.3;

/// `true` if a blocking entity stands on `pos`.
///
/// Sliding rules stop only at Blocking occupants: a pushable in the path is
/// proposed as a candidate so the push system can try to shove it.
fn blocking_at(state: &State, pos: Pos) -> bool {
    state
        .position
        .iter()
        .any(|(id, p)| *p == pos && state.blocking.contains_key(id))
}

// ── Default ───────────────────────────────────────────────────────────────────

/// One adjacent cell in the commanded direction.
pub struct DefaultMove;

impl MoveFn for DefaultMove {
    fn next_positions(&self, state: &State, entity: EntityId, dir: Direction) -> Vec<Pos> {
        match state.position.get(&entity) {
            Some(pos) => vec![pos.step(dir)],
            None => vec![],
        }
    }
}

// ── Wrap ──────────────────────────────────────────────────────────────────────

/// One adjacent cell with toroidal wrapping at the edges.
pub struct WrapMove;

impl MoveFn for WrapMove {
    fn next_positions(&self, state: &State, entity: EntityId, dir: Direction) -> Vec<Pos> {
        match state.position.get(&entity) {
            Some(pos) => vec![pos.step(dir).wrapped(state.width, state.height)],
            None => vec![],
        }
    }

    fn wraps(&self) -> bool {
        true
    }
}

// ── Mirror ────────────────────────────────────────────────────────────────────

/// Left and right are swapped; vertical moves pass through unchanged.
pub struct MirrorMove;

impl MoveFn for MirrorMove {
    fn next_positions(&self, state: &State, entity: EntityId, dir: Direction) -> Vec<Pos> {
        let mirrored = match dir {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up | Direction::Down => dir,
        };
        DefaultMove.next_positions(state, entity, mirrored)
    }
}

// ── Slippery ──────────────────────────────────────────────────────────────────

/// Slide in the commanded direction until the edge or a blocking occupant.
///
/// Every crossed tile is a candidate, so per-tile interactions (portals,
/// coin tiles) fire along the whole slide.
pub struct SlipperyMove;

impl MoveFn for SlipperyMove {
    fn next_positions(&self, state: &State, entity: EntityId, dir: Direction) -> Vec<Pos> {
        let Some(&pos) = state.position.get(&entity) else {
            return vec![];
        };

        let mut path = Vec::new();
        let mut next = pos.step(dir);
        while state.in_bounds(next) && !blocking_at(state, next) {
            path.push(next);
            next = next.step(dir);
        }

        if path.is_empty() { vec![pos] } else { path }
    }
}

// ── Windy ─────────────────────────────────────────────────────────────────────

/// One adjacent cell, with a 30 % chance of a perpendicular wind push.
///
/// The draw is derived from `(seed, turn, current position)`, so replaying
/// an action sequence from the same initial snapshot reproduces every gust
/// while distinct sub-steps of one turn see independent draws.
pub struct WindyMove;

impl MoveFn for WindyMove {
    fn next_positions(&self, state: &State, entity: EntityId, dir: Direction) -> Vec<Pos> {
        let Some(&pos) = state.position.get(&entity) else {
            return vec![];
        };

        let first = pos.step(dir);
        if !state.in_bounds(first) {
            // Out-of-bounds first move: wind does not apply either.
            return vec![pos];
        }

        let mut path = vec![first];
        let mut rng = SimRng::derived(
            state.seed.unwrap_or(0),
            &[state.turn, pos.x as i64 as u64, pos.y as i64 as u64],
        );
        if rng.gen_bool(WIND_PROBABILITY) {
            let gust = dir.perpendicular()[rng.gen_range(0..2usize)];
            let pushed = first.step(gust);
            if state.in_bounds(pushed) {
                path.push(pushed);
            }
        }
        path
    }
}

// ── Gravity ───────────────────────────────────────────────────────────────────

/// One step in the commanded direction, then fall downward until resting
/// on the floor or a blocking occupant.
pub struct GravityMove;

impl MoveFn for GravityMove {
    fn next_positions(&self, state: &State, entity: EntityId, dir: Direction) -> Vec<Pos> {
        let Some(&pos) = state.position.get(&entity) else {
            return vec![];
        };

        let can_enter = |p: Pos| state.in_bounds(p) && !blocking_at(state, p);

        let first = pos.step(dir);
        if !can_enter(first) {
            return vec![pos];
        }

        let mut path = vec![first];
        loop {
            let below = path[path.len() - 1].offset(0, 1);
            if !can_enter(below) {
                break;
            }
            path.push(below);
        }
        path
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

/// Names accepted by [`move_fn_by_name`], in registry order.
pub const MOVE_FN_NAMES: [&str; 6] = ["default", "wrap", "mirror", "slippery", "windy", "gravity"];

/// Look up a built-in movement rule by its registry name.
pub fn move_fn_by_name(name: &str) -> Option<Arc<dyn MoveFn>> {
    match name {
        "default" => Some(Arc::new(DefaultMove)),
        "wrap" => Some(Arc::new(WrapMove)),
        "mirror" => Some(Arc::new(MirrorMove)),
        "slippery" => Some(Arc::new(SlipperyMove)),
        "windy" => Some(Arc::new(WindyMove)),
        "gravity" => Some(Arc::new(GravityMove)),
        _ => None,
    }
}
