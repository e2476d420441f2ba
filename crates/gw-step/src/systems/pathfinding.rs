//! Target-seeking motion: greedy straight-line steps and A* planning.
//!
//! # Determinism
//!
//! Both planners resolve ties through the fixed [`NEIGHBOR_ORDER`], and the
//! A* frontier carries a strictly increasing counter next to the priority,
//! so heap ordering never falls through to an unspecified comparison.
//! Frontier bookkeeping uses `FxHashMap` — its iteration order is never
//! observed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use gw_core::{EntityId, Pos, NEIGHBOR_ORDER};
use gw_world::components::{EffectKind, PathfindKind};
use gw_world::query::is_blocked_at;
use gw_world::state::State;
use gw_world::status::use_effect;

/// Advance every pathfinding entity by one tile toward its target.
///
/// A pursuer is deterred — takes no step — while its target holds an
/// active Phasing effect; the check consumes a usage from the target per
/// the standard selection rule.
pub fn pathfinding_system(state: &mut State) {
    let ids: Vec<EntityId> = state.pathfinding.keys().copied().collect();
    for id in ids {
        entity_pathfinding(state, id);
    }
}

fn entity_pathfinding(state: &mut State, id: EntityId) {
    let Some(pf) = state.pathfinding.get(&id).copied() else { return };
    if !state.position.contains_key(&id) || !state.position.contains_key(&pf.target) {
        return;
    }

    // A phased target cannot be tracked.
    if use_effect(state, pf.target, EffectKind::Phasing).is_some() {
        return;
    }

    let next = match pf.kind {
        PathfindKind::StraightLine => straight_line_next(state, id, pf.target),
        PathfindKind::Path => astar_next(state, id, pf.target),
    };

    let Some(next) = next else { return };
    if !state.in_bounds(next) || is_blocked_at(state, next, false) {
        return;
    }
    state.position.insert(id, next);
}

// ── Straight line ─────────────────────────────────────────────────────────────

/// The neighbor maximizing dot-product progress toward the target.
///
/// May propose a blocked or off-grid tile; the caller rejects it and the
/// pursuer stays put.
fn straight_line_next(state: &State, id: EntityId, target: EntityId) -> Option<Pos> {
    let pos = *state.position.get(&id)?;
    let goal = *state.position.get(&target)?;
    let (dx, dy) = goal.delta(pos);

    let mut best = NEIGHBOR_ORDER[0];
    let mut best_dot = i32::MIN;
    for (nx, ny) in NEIGHBOR_ORDER {
        let dot = nx * dx + ny * dy;
        if dot > best_dot {
            best_dot = dot;
            best = (nx, ny);
        }
    }
    Some(pos.offset(best.0, best.1))
}

// ── A* ────────────────────────────────────────────────────────────────────────

/// First tile of a shortest 4-neighborhood path from `id` to `target`.
///
/// Manhattan heuristic, unit step cost, passable = in-bounds and free of
/// Blocking/Pushable occupants (collidables do not obstruct planning, the
/// same rule plain movement uses).  Returns `None` when already at the
/// goal or no path exists.
fn astar_next(state: &State, id: EntityId, target: EntityId) -> Option<Pos> {
    let start = *state.position.get(&id)?;
    let goal = *state.position.get(&target)?;
    if start == goal {
        return None;
    }

    let passable = |p: Pos| state.in_bounds(p) && !is_blocked_at(state, p, false);

    // Min-heap of (f-score, tiebreak, tile).  Reverse makes BinaryHeap
    // (max) behave as min-heap; the counter keeps frontier order stable.
    let mut frontier: BinaryHeap<Reverse<(i32, u64, Pos)>> = BinaryHeap::new();
    let mut came_from: FxHashMap<Pos, Pos> = FxHashMap::default();
    let mut cost_so_far: FxHashMap<Pos, i32> = FxHashMap::default();
    let mut tiebreak: u64 = 0;

    cost_so_far.insert(start, 0);
    frontier.push(Reverse((0, tiebreak, start)));

    while let Some(Reverse((_, _, current))) = frontier.pop() {
        if current == goal {
            break;
        }
        let current_cost = cost_so_far[&current];
        for (dx, dy) in NEIGHBOR_ORDER {
            let next = current.offset(dx, dy);
            if !passable(next) {
                continue;
            }
            let new_cost = current_cost + 1;
            if cost_so_far.get(&next).is_none_or(|&c| new_cost < c) {
                cost_so_far.insert(next, new_cost);
                came_from.insert(next, current);
                tiebreak += 1;
                frontier.push(Reverse((new_cost + next.manhattan(goal), tiebreak, next)));
            }
        }
    }

    if !came_from.contains_key(&goal) {
        return None; // unreachable goal
    }

    // Walk back from the goal to the tile adjacent to the start.
    let mut cur = goal;
    while came_from[&cur] != start {
        cur = came_from[&cur];
    }
    Some(cur)
}
