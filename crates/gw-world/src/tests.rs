//! Unit tests for the world snapshot, builder validation, and store helpers.

use std::sync::Arc;

use gw_core::{Direction, EntityId, GwError, Pos};

use crate::builder::StateBuilder;
use crate::components::{
    Cost, Damage, EffectKind, Health, Inventory, Key, Portal, Rewardable, Speed, Status, TimeLimit,
    UsageLimit,
};
use crate::rules::{MoveFn, ObjectiveFn};
use crate::state::State;
use crate::{health, inventory, query, status};

// ── Test rules ────────────────────────────────────────────────────────────────

/// Single-adjacent-cell movement, enough for fixtures.
struct StepMove;

impl MoveFn for StepMove {
    fn next_positions(&self, state: &State, entity: EntityId, dir: Direction) -> Vec<Pos> {
        match state.position.get(&entity) {
            Some(p) => vec![p.step(dir)],
            None => vec![],
        }
    }
}

/// Same, but toroidal.
struct WrapStepMove;

impl MoveFn for WrapStepMove {
    fn next_positions(&self, state: &State, entity: EntityId, dir: Direction) -> Vec<Pos> {
        match state.position.get(&entity) {
            Some(p) => vec![p.step(dir).wrapped(state.width, state.height)],
            None => vec![],
        }
    }

    fn wraps(&self) -> bool {
        true
    }
}

/// Never satisfied.
struct NoObjective;

impl ObjectiveFn for NoObjective {
    fn is_met(&self, _state: &State, _agent: EntityId) -> bool {
        false
    }
}

fn builder(width: i32, height: i32) -> StateBuilder {
    StateBuilder::new(width, height, Arc::new(StepMove), Arc::new(NoObjective))
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn minimal_state_builds() {
        let mut b = builder(3, 3);
        let agent = b.spawn();
        b.add_position(agent, Pos::new(0, 0));
        b.add_agent(agent);
        let state = b.build().unwrap();
        assert_eq!(state.first_agent(), Some(agent));
        assert_eq!(state.turn, 0);
        assert!(!state.win && !state.lose);
    }

    #[test]
    fn rejects_degenerate_grid() {
        let b = builder(0, 3);
        assert!(matches!(b.build(), Err(GwError::Config(_))));
    }

    #[test]
    fn rejects_component_on_unspawned_entity() {
        let mut b = builder(3, 3);
        b.add_position(EntityId(99), Pos::new(0, 0));
        assert!(matches!(b.build(), Err(GwError::Config(_))));
    }

    #[test]
    fn rejects_asymmetric_portal_pair() {
        let mut b = builder(5, 1);
        let a = b.spawn();
        let c = b.spawn();
        let d = b.spawn();
        for (e, x) in [(a, 0), (c, 2), (d, 4)] {
            b.add_position(e, Pos::new(x, 0));
        }
        b.add_portal(a, Portal { pair: c });
        b.add_portal(c, Portal { pair: d }); // c points elsewhere
        b.add_portal(d, Portal { pair: c });
        assert!(matches!(b.build(), Err(GwError::Config(_))));
    }

    #[test]
    fn rejects_zero_health_without_dead() {
        let mut b = builder(3, 3);
        let e = b.spawn();
        b.add_position(e, Pos::new(0, 0));
        b.add_health(e, Health { hp: 0, max: 5 });
        assert!(matches!(b.build(), Err(GwError::Config(_))));
    }

    #[test]
    fn accepts_zero_health_with_dead() {
        let mut b = builder(3, 3);
        let e = b.spawn();
        b.add_position(e, Pos::new(0, 0));
        b.add_health(e, Health { hp: 0, max: 5 });
        b.add_dead(e);
        assert!(b.build().is_ok());
    }

    #[test]
    fn rejects_negative_damage() {
        let mut b = builder(3, 3);
        let e = b.spawn();
        b.add_position(e, Pos::new(1, 1));
        b.add_damage(e, Damage { amount: -1 });
        assert!(matches!(b.build(), Err(GwError::Config(_))));
    }

    #[test]
    fn rejects_status_referencing_non_effect() {
        let mut b = builder(3, 3);
        let agent = b.spawn();
        let junk = b.spawn();
        b.add_position(agent, Pos::new(0, 0));
        b.add_agent(agent);
        b.add_status(agent, Status { effect_ids: [junk].into() });
        assert!(matches!(b.build(), Err(GwError::Config(_))));
    }

    #[test]
    fn rejects_non_positive_speed_multiplier() {
        let mut b = builder(3, 3);
        let fx = b.spawn();
        b.add_speed(fx, Speed { multiplier: 0 });
        assert!(matches!(b.build(), Err(GwError::Config(_))));
    }

    #[test]
    fn spawn_allocates_ascending_ids() {
        let mut b = builder(3, 3);
        let a = b.spawn();
        let c = b.spawn();
        assert!(a < c);
    }
}

// ── Effect selection & consumption ────────────────────────────────────────────

#[cfg(test)]
mod status_tests {
    use super::*;

    /// Agent plus two speed effects: one usage-limited, one time-limited.
    fn state_with_two_speeds() -> (State, EntityId, EntityId, EntityId) {
        let mut b = builder(5, 5);
        let agent = b.spawn();
        let used = b.spawn();
        let timed = b.spawn();
        b.add_position(agent, Pos::new(0, 0));
        b.add_agent(agent);
        b.add_speed(used, Speed { multiplier: 2 });
        b.add_usage_limit(used, UsageLimit { amount: 2 });
        b.add_speed(timed, Speed { multiplier: 3 });
        b.add_time_limit(timed, TimeLimit { amount: 5 });
        b.add_status(agent, Status { effect_ids: [used, timed].into() });
        (b.build().unwrap(), agent, used, timed)
    }

    #[test]
    fn prefers_effect_without_usage_limit() {
        let (state, agent, _used, timed) = state_with_two_speeds();
        assert_eq!(status::select_effect(&state, agent, EffectKind::Speed), Some(timed));
    }

    #[test]
    fn selection_does_not_consume_free_effects() {
        let (mut state, agent, used, timed) = state_with_two_speeds();
        let chosen = status::use_effect(&mut state, agent, EffectKind::Speed);
        assert_eq!(chosen, Some(timed));
        assert_eq!(state.usage_limit[&used].amount, 2, "usage-limited effect untouched");
    }

    #[test]
    fn falls_back_to_usage_limited_and_consumes() {
        let (mut state, agent, used, timed) = state_with_two_speeds();
        state.time_limit.get_mut(&timed).unwrap().amount = 0; // expire the free one
        let chosen = status::use_effect(&mut state, agent, EffectKind::Speed);
        assert_eq!(chosen, Some(used));
        assert_eq!(state.usage_limit[&used].amount, 1);
    }

    #[test]
    fn expired_usage_is_never_selected() {
        let (mut state, agent, used, timed) = state_with_two_speeds();
        state.time_limit.get_mut(&timed).unwrap().amount = 0;
        state.usage_limit.get_mut(&used).unwrap().amount = 0;
        assert_eq!(status::use_effect(&mut state, agent, EffectKind::Speed), None);
    }

    #[test]
    fn wrong_kind_is_not_selected() {
        let (state, agent, _, _) = state_with_two_speeds();
        assert_eq!(status::select_effect(&state, agent, EffectKind::Phasing), None);
        assert_eq!(status::select_effect(&state, agent, EffectKind::Immunity), None);
    }

    #[test]
    fn holder_without_status_has_no_effects() {
        let mut b = builder(3, 3);
        let agent = b.spawn();
        b.add_position(agent, Pos::new(0, 0));
        b.add_agent(agent);
        let state = b.build().unwrap();
        assert_eq!(status::select_effect(&state, agent, EffectKind::Speed), None);
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod query_tests {
    use super::*;

    #[test]
    fn entities_at_returns_ascending_ids() {
        let mut b = builder(3, 3);
        let e1 = b.spawn();
        let e2 = b.spawn();
        let e3 = b.spawn();
        b.add_position(e1, Pos::new(1, 1));
        b.add_position(e2, Pos::new(1, 1));
        b.add_position(e3, Pos::new(0, 0));
        let state = b.build().unwrap();
        assert_eq!(query::entities_at(&state, Pos::new(1, 1)), vec![e1, e2]);
    }

    #[test]
    fn blocked_predicate_matrix() {
        let mut b = builder(4, 1);
        let wall = b.spawn();
        let boxx = b.spawn();
        let ghost = b.spawn();
        b.add_position(wall, Pos::new(1, 0));
        b.add_blocking(wall);
        b.add_position(boxx, Pos::new(2, 0));
        b.add_pushable(boxx);
        b.add_position(ghost, Pos::new(3, 0));
        b.add_collidable(ghost);
        let state = b.build().unwrap();

        assert!(query::is_blocked_at(&state, Pos::new(1, 0), false));
        assert!(query::is_blocked_at(&state, Pos::new(2, 0), false));
        assert!(!query::is_blocked_at(&state, Pos::new(3, 0), false));
        assert!(query::is_blocked_at(&state, Pos::new(3, 0), true));
        assert!(!query::is_blocked_at(&state, Pos::new(0, 0), true));
    }

    #[test]
    fn push_destination_rejects_out_of_bounds() {
        let mut b = builder(3, 1);
        let agent = b.spawn();
        b.add_position(agent, Pos::new(1, 0));
        let state = b.build().unwrap();
        // Pushing from (1,0) onto (2,0) would land on (3,0): off-grid.
        assert_eq!(query::push_destination(&state, Pos::new(1, 0), Pos::new(2, 0)), None);
        assert_eq!(
            query::push_destination(&state, Pos::new(1, 0), Pos::new(0, 0)),
            None,
            "left edge"
        );
    }

    #[test]
    fn push_destination_wraps_under_toroidal_rule() {
        let mut b = StateBuilder::new(3, 1, Arc::new(WrapStepMove), Arc::new(NoObjective));
        let agent = b.spawn();
        b.add_position(agent, Pos::new(1, 0));
        let state = b.build().unwrap();
        assert_eq!(
            query::push_destination(&state, Pos::new(1, 0), Pos::new(2, 0)),
            Some(Pos::new(0, 0))
        );
    }
}

// ── Inventory & health helpers ────────────────────────────────────────────────

#[cfg(test)]
mod helper_tests {
    use super::*;

    #[test]
    fn find_key_matches_id_string() {
        let mut b = builder(3, 3);
        let red = b.spawn();
        let blue = b.spawn();
        b.add_key(red, Key { key_id: "red".into() });
        b.add_key(blue, Key { key_id: "blue".into() });
        let state = b.build().unwrap();

        let inv = Inventory { item_ids: [red, blue].into() };
        assert_eq!(inventory::find_key(&inv, &state.key, "blue"), Some(blue));
        assert_eq!(inventory::find_key(&inv, &state.key, "green"), None);
    }

    #[test]
    fn find_key_prefers_lowest_id() {
        let mut b = builder(3, 3);
        let k1 = b.spawn();
        let k2 = b.spawn();
        b.add_key(k1, Key { key_id: "red".into() });
        b.add_key(k2, Key { key_id: "red".into() });
        let state = b.build().unwrap();

        let inv = Inventory { item_ids: [k2, k1].into() };
        assert_eq!(inventory::find_key(&inv, &state.key, "red"), Some(k1));
    }

    #[test]
    fn damage_clamps_at_zero_and_marks_dead() {
        let mut b = builder(3, 3);
        let e = b.spawn();
        b.add_health(e, Health { hp: 3, max: 5 });
        let mut state = b.build().unwrap();

        health::apply_damage(&mut state.health, &mut state.dead, e, 10, false);
        assert_eq!(state.health[&e].hp, 0);
        assert!(state.dead.contains_key(&e));
    }

    #[test]
    fn lethal_kills_regardless_of_remaining_hp() {
        let mut b = builder(3, 3);
        let e = b.spawn();
        b.add_health(e, Health { hp: 100, max: 100 });
        let mut state = b.build().unwrap();

        health::apply_damage(&mut state.health, &mut state.dead, e, 1, true);
        assert_eq!(state.health[&e].hp, 0);
        assert!(state.dead.contains_key(&e));
    }

    #[test]
    fn lethal_without_health_still_kills() {
        let mut b = builder(3, 3);
        let e = b.spawn();
        b.add_position(e, Pos::new(0, 0));
        let mut state = b.build().unwrap();

        health::apply_damage(&mut state.health, &mut state.dead, e, 0, true);
        assert!(state.dead.contains_key(&e));
    }
}

// ── Snapshot semantics ────────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use super::*;

    #[test]
    fn retain_entities_filters_every_store() {
        let mut b = builder(3, 3);
        let keep = b.spawn();
        let drop = b.spawn();
        b.add_position(keep, Pos::new(0, 0));
        b.add_position(drop, Pos::new(1, 1));
        b.add_rewardable(drop, Rewardable { amount: 5 });
        b.add_cost(drop, Cost { amount: 1 });
        b.add_collectible(drop);
        let mut state = b.build().unwrap();

        state.retain_entities(|id| id == keep);
        assert!(state.position.contains_key(&keep));
        assert!(!state.position.contains_key(&drop));
        assert!(state.rewardable.is_empty());
        assert!(state.cost.is_empty());
        assert!(state.collectible.is_empty());
        assert!(!state.entities.contains(&drop));
    }

    #[test]
    fn clone_is_independent() {
        let mut b = builder(3, 3);
        let agent = b.spawn();
        b.add_position(agent, Pos::new(0, 0));
        b.add_agent(agent);
        let state = b.build().unwrap();

        let mut copy = state.clone();
        copy.position.insert(agent, Pos::new(2, 2));
        copy.score = 99;
        assert_eq!(state.position[&agent], Pos::new(0, 0));
        assert_eq!(state.score, 0);
    }
}
