//! Fluent construction of a validated [`State`].
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut b = StateBuilder::new(9, 9, Arc::new(DefaultMove), Arc::new(DefaultObjective));
//! let agent = b.spawn();
//! b.add_position(agent, Pos::new(0, 0));
//! b.add_agent(agent);
//! b.add_collidable(agent);
//! let state = b.build()?;
//! ```
//!
//! `build()` is the configuration-error seam: every invariant the kernel
//! relies on at runtime is checked here once, so the systems can stay
//! panic-free on the happy path.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Arc;

use gw_core::{EntityId, GwError, GwResult, Pos};

use crate::components::{
    Agent, Appearance, Blocking, Collectible, Collidable, Cost, Damage, Dead, Exit, Health,
    Immunity, Inventory, Key, LethalDamage, Locked, Moving, Pathfinding, Phasing, Portal, Pushable,
    Required, Rewardable, Speed, Status, TimeLimit, UsageLimit,
};
use crate::rules::{MoveFn, ObjectiveFn};
use crate::state::State;

/// Fluent builder for [`State`].
///
/// `spawn()` allocates ascending entity ids; the `add_*` helpers populate
/// one store each; `build()` validates and returns the snapshot.
pub struct StateBuilder {
    state: State,
    next_id: u32,
}

impl StateBuilder {
    /// Create a builder for a `width × height` level with the given rules.
    pub fn new(
        width: i32,
        height: i32,
        move_fn: Arc<dyn MoveFn>,
        objective_fn: Arc<dyn ObjectiveFn>,
    ) -> Self {
        Self {
            state: State {
                width,
                height,
                move_fn,
                objective_fn,
                seed: None,
                entities: BTreeSet::new(),
                immunity: BTreeMap::new(),
                phasing: BTreeMap::new(),
                speed: BTreeMap::new(),
                time_limit: BTreeMap::new(),
                usage_limit: BTreeMap::new(),
                agent: BTreeMap::new(),
                appearance: BTreeMap::new(),
                blocking: BTreeMap::new(),
                collectible: BTreeMap::new(),
                collidable: BTreeMap::new(),
                cost: BTreeMap::new(),
                damage: BTreeMap::new(),
                dead: BTreeMap::new(),
                exit: BTreeMap::new(),
                health: BTreeMap::new(),
                inventory: BTreeMap::new(),
                key: BTreeMap::new(),
                lethal_damage: BTreeMap::new(),
                locked: BTreeMap::new(),
                moving: BTreeMap::new(),
                pathfinding: BTreeMap::new(),
                portal: BTreeMap::new(),
                position: BTreeMap::new(),
                pushable: BTreeMap::new(),
                required: BTreeMap::new(),
                rewardable: BTreeMap::new(),
                status: BTreeMap::new(),
                prev_position: BTreeMap::new(),
                trail: BTreeMap::new(),
                turn: 0,
                score: 0,
                win: false,
                lose: false,
                message: None,
            },
            next_id: 0,
        }
    }

    /// Set the RNG seed for stochastic movement rules.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.state.seed = Some(seed);
        self
    }

    /// Allocate a fresh entity id and register it.
    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.state.entities.insert(id);
        id
    }

    // ── Component helpers ─────────────────────────────────────────────────

    pub fn add_position(&mut self, e: EntityId, pos: Pos) {
        self.state.position.insert(e, pos);
    }

    pub fn add_agent(&mut self, e: EntityId) {
        self.state.agent.insert(e, Agent);
    }

    pub fn add_appearance(&mut self, e: EntityId, appearance: Appearance) {
        self.state.appearance.insert(e, appearance);
    }

    pub fn add_blocking(&mut self, e: EntityId) {
        self.state.blocking.insert(e, Blocking);
    }

    pub fn add_collectible(&mut self, e: EntityId) {
        self.state.collectible.insert(e, Collectible);
    }

    pub fn add_collidable(&mut self, e: EntityId) {
        self.state.collidable.insert(e, Collidable);
    }

    pub fn add_cost(&mut self, e: EntityId, cost: Cost) {
        self.state.cost.insert(e, cost);
    }

    pub fn add_damage(&mut self, e: EntityId, damage: Damage) {
        self.state.damage.insert(e, damage);
    }

    pub fn add_dead(&mut self, e: EntityId) {
        self.state.dead.insert(e, Dead);
    }

    pub fn add_exit(&mut self, e: EntityId) {
        self.state.exit.insert(e, Exit);
    }

    pub fn add_health(&mut self, e: EntityId, health: Health) {
        self.state.health.insert(e, health);
    }

    pub fn add_inventory(&mut self, e: EntityId, inventory: Inventory) {
        self.state.inventory.insert(e, inventory);
    }

    pub fn add_key(&mut self, e: EntityId, key: Key) {
        self.state.key.insert(e, key);
    }

    pub fn add_lethal_damage(&mut self, e: EntityId) {
        self.state.lethal_damage.insert(e, LethalDamage);
    }

    pub fn add_locked(&mut self, e: EntityId, locked: Locked) {
        self.state.locked.insert(e, locked);
    }

    pub fn add_moving(&mut self, e: EntityId, moving: Moving) {
        self.state.moving.insert(e, moving);
    }

    pub fn add_pathfinding(&mut self, e: EntityId, pathfinding: Pathfinding) {
        self.state.pathfinding.insert(e, pathfinding);
    }

    pub fn add_portal(&mut self, e: EntityId, portal: Portal) {
        self.state.portal.insert(e, portal);
    }

    pub fn add_pushable(&mut self, e: EntityId) {
        self.state.pushable.insert(e, Pushable);
    }

    pub fn add_required(&mut self, e: EntityId) {
        self.state.required.insert(e, Required);
    }

    pub fn add_rewardable(&mut self, e: EntityId, rewardable: Rewardable) {
        self.state.rewardable.insert(e, rewardable);
    }

    pub fn add_status(&mut self, e: EntityId, status: Status) {
        self.state.status.insert(e, status);
    }

    pub fn add_immunity(&mut self, e: EntityId) {
        self.state.immunity.insert(e, Immunity);
    }

    pub fn add_phasing(&mut self, e: EntityId) {
        self.state.phasing.insert(e, Phasing);
    }

    pub fn add_speed(&mut self, e: EntityId, speed: Speed) {
        self.state.speed.insert(e, speed);
    }

    pub fn add_time_limit(&mut self, e: EntityId, limit: TimeLimit) {
        self.state.time_limit.insert(e, limit);
    }

    pub fn add_usage_limit(&mut self, e: EntityId, limit: UsageLimit) {
        self.state.usage_limit.insert(e, limit);
    }

    // ── Build & validate ──────────────────────────────────────────────────

    /// Validate all construction invariants and return the snapshot.
    pub fn build(self) -> GwResult<State> {
        let state = self.state;
        validate(&state)?;
        Ok(state)
    }
}

fn validate(state: &State) -> GwResult<()> {
    if state.width < 1 || state.height < 1 {
        return Err(GwError::Config(format!(
            "grid must be at least 1x1, got {}x{}",
            state.width, state.height
        )));
    }

    // Every component must belong to a spawned entity.
    for id in state.component_ids() {
        if !state.entities.contains(&id) {
            return Err(GwError::Config(format!("component on unspawned entity {id}")));
        }
    }

    // Portal pairing must be symmetric and positioned.
    for (id, portal) in &state.portal {
        match state.portal.get(&portal.pair) {
            None => {
                return Err(GwError::Config(format!(
                    "portal {id} pairs with non-portal {}",
                    portal.pair
                )));
            }
            Some(back) if back.pair != *id => {
                return Err(GwError::Config(format!(
                    "portal pairing is not symmetric: {id} -> {} -> {}",
                    portal.pair, back.pair
                )));
            }
            Some(_) => {}
        }
    }

    // Health bounds; zero health entails the Dead marker.
    for (id, h) in &state.health {
        if h.hp < 0 || h.hp > h.max {
            return Err(GwError::Config(format!(
                "health of {id} out of range: {} not in [0, {}]",
                h.hp, h.max
            )));
        }
        if h.hp == 0 && !state.dead.contains_key(id) {
            return Err(GwError::Config(format!("{id} has zero health but is not dead")));
        }
    }

    // Damage must be non-negative from the start.
    for (id, d) in &state.damage {
        if d.amount < 0 {
            return Err(GwError::Config(format!(
                "damager {id} configured with negative damage {}",
                d.amount
            )));
        }
    }

    // Speed multipliers must be positive (zero would nullify move actions).
    for (id, s) in &state.speed {
        if s.multiplier < 1 {
            return Err(GwError::Config(format!(
                "speed effect {id} has non-positive multiplier {}",
                s.multiplier
            )));
        }
    }

    // Autonomous movers cannot have negative speed.
    for (id, m) in &state.moving {
        if m.speed < 0 {
            return Err(GwError::Config(format!(
                "moving entity {id} has negative speed {}",
                m.speed
            )));
        }
    }

    // Status references must name actual effect entities.
    for (holder, status) in &state.status {
        for effect_id in &status.effect_ids {
            if !state.is_effect(*effect_id) {
                return Err(GwError::Config(format!(
                    "status of {holder} references {effect_id}, which bears no effect"
                )));
            }
        }
    }

    // Inventory references must name spawned entities.
    for (holder, inventory) in &state.inventory {
        for item_id in &inventory.item_ids {
            if !state.entities.contains(item_id) {
                return Err(GwError::Config(format!(
                    "inventory of {holder} references unspawned entity {item_id}"
                )));
            }
        }
    }

    // Pathfinding targets must exist.
    for (id, pf) in &state.pathfinding {
        if !state.entities.contains(&pf.target) {
            return Err(GwError::Config(format!(
                "pathfinder {id} targets unspawned entity {}",
                pf.target
            )));
        }
    }

    Ok(())
}
