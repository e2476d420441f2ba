//! The immutable world snapshot.
//!
//! # Design
//!
//! One ordered map per component kind, keyed by [`EntityId`].  `BTreeMap`
//! gives sorted-by-id iteration everywhere, which is the reproducibility
//! requirement: any system that walks a store visits entities in the same
//! order on every run.
//!
//! `State` is a plain `Clone` value.  The step reducer clones the incoming
//! snapshot once and mutates its private copy, so callers observe pure
//! value semantics — a retained snapshot is never changed by a later step,
//! and alternative actions can be evaluated from the same state freely.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use gw_core::{EntityId, Pos};

use crate::components::{
    Agent, Appearance, Blocking, Collectible, Collidable, Cost, Damage, Dead, EffectKind, Exit,
    Health, Immunity, Inventory, Key, LethalDamage, Locked, Moving, Pathfinding, Phasing, Portal,
    Pushable, Required, Rewardable, Speed, Status, TimeLimit, UsageLimit,
};
use crate::rules::{MoveFn, ObjectiveFn};

/// A component store: ordered map from entity id to component value.
pub type Store<C> = BTreeMap<EntityId, C>;

// ── State ─────────────────────────────────────────────────────────────────────

/// The complete world snapshot consumed and produced by `step`.
#[derive(Clone)]
pub struct State {
    // Level
    pub width: i32,
    pub height: i32,
    /// Movement rule consulted for candidate tiles on move actions.
    pub move_fn: Arc<dyn MoveFn>,
    /// Win predicate consulted by the terminal system.
    pub objective_fn: Arc<dyn ObjectiveFn>,
    /// Seed for the stochastic movement rules; `None` behaves as 0.
    pub seed: Option<u64>,

    /// Entity registry — one id per allocated entity, the GC root set.
    pub entities: BTreeSet<EntityId>,

    // Effects
    pub immunity: Store<Immunity>,
    pub phasing: Store<Phasing>,
    pub speed: Store<Speed>,
    pub time_limit: Store<TimeLimit>,
    pub usage_limit: Store<UsageLimit>,

    // Properties
    pub agent: Store<Agent>,
    pub appearance: Store<Appearance>,
    pub blocking: Store<Blocking>,
    pub collectible: Store<Collectible>,
    pub collidable: Store<Collidable>,
    pub cost: Store<Cost>,
    pub damage: Store<Damage>,
    pub dead: Store<Dead>,
    pub exit: Store<Exit>,
    pub health: Store<Health>,
    pub inventory: Store<Inventory>,
    pub key: Store<Key>,
    pub lethal_damage: Store<LethalDamage>,
    pub locked: Store<Locked>,
    pub moving: Store<Moving>,
    pub pathfinding: Store<Pathfinding>,
    pub portal: Store<Portal>,
    pub position: Store<Pos>,
    pub pushable: Store<Pushable>,
    pub required: Store<Required>,
    pub rewardable: Store<Rewardable>,
    pub status: Store<Status>,

    // Per-step bookkeeping
    /// Position of every entity as of the start of the current step.
    pub prev_position: Store<Pos>,
    /// Tiles crossed (exclusive of endpoints) by each entity this step.
    pub trail: BTreeMap<Pos, BTreeSet<EntityId>>,

    // Episode status
    pub turn: u64,
    pub score: i64,
    pub win: bool,
    pub lose: bool,
    pub message: Option<String>,
}

impl State {
    /// The lowest-id agent, if any.
    #[inline]
    pub fn first_agent(&self) -> Option<EntityId> {
        self.agent.keys().next().copied()
    }

    /// `true` once the episode is decided for `agent`.
    #[inline]
    pub fn is_terminal(&self, agent: EntityId) -> bool {
        self.win || self.lose || self.dead.contains_key(&agent)
    }

    /// `true` if the snapshot can be stepped at all for `agent`.
    #[inline]
    pub fn is_valid(&self, agent: EntityId) -> bool {
        !self.agent.is_empty() && self.position.contains_key(&agent)
    }

    /// `true` if `pos` lies inside the level rectangle.
    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.in_bounds(self.width, self.height)
    }

    /// Membership test against the effect store selected by `kind`.
    #[inline]
    pub fn effect_kind_contains(&self, kind: EffectKind, id: EntityId) -> bool {
        match kind {
            EffectKind::Immunity => self.immunity.contains_key(&id),
            EffectKind::Phasing => self.phasing.contains_key(&id),
            EffectKind::Speed => self.speed.contains_key(&id),
        }
    }

    /// `true` if `id` bears any of the three effect components.
    #[inline]
    pub fn is_effect(&self, id: EntityId) -> bool {
        EffectKind::ALL.iter().any(|k| self.effect_kind_contains(*k, id))
    }

    /// All ids present in any id-keyed component store.
    ///
    /// Used by construction-time validation; the orphan collector computes
    /// its live set from the registry and reference fields instead.
    pub fn component_ids(&self) -> BTreeSet<EntityId> {
        let mut ids = BTreeSet::new();
        self.for_each_store_key(|id| {
            ids.insert(id);
        });
        ids
    }

    /// Drop every component whose entity id fails `keep`.
    ///
    /// This is the single place that enumerates all id-keyed stores, so
    /// adding a component kind cannot silently escape the collector.
    pub fn retain_entities(&mut self, mut keep: impl FnMut(EntityId) -> bool) {
        self.entities.retain(|id| keep(*id));

        self.immunity.retain(|id, _| keep(*id));
        self.phasing.retain(|id, _| keep(*id));
        self.speed.retain(|id, _| keep(*id));
        self.time_limit.retain(|id, _| keep(*id));
        self.usage_limit.retain(|id, _| keep(*id));

        self.agent.retain(|id, _| keep(*id));
        self.appearance.retain(|id, _| keep(*id));
        self.blocking.retain(|id, _| keep(*id));
        self.collectible.retain(|id, _| keep(*id));
        self.collidable.retain(|id, _| keep(*id));
        self.cost.retain(|id, _| keep(*id));
        self.damage.retain(|id, _| keep(*id));
        self.dead.retain(|id, _| keep(*id));
        self.exit.retain(|id, _| keep(*id));
        self.health.retain(|id, _| keep(*id));
        self.inventory.retain(|id, _| keep(*id));
        self.key.retain(|id, _| keep(*id));
        self.lethal_damage.retain(|id, _| keep(*id));
        self.locked.retain(|id, _| keep(*id));
        self.moving.retain(|id, _| keep(*id));
        self.pathfinding.retain(|id, _| keep(*id));
        self.portal.retain(|id, _| keep(*id));
        self.position.retain(|id, _| keep(*id));
        self.pushable.retain(|id, _| keep(*id));
        self.required.retain(|id, _| keep(*id));
        self.rewardable.retain(|id, _| keep(*id));
        self.status.retain(|id, _| keep(*id));

        self.prev_position.retain(|id, _| keep(*id));
    }

    fn for_each_store_key(&self, mut f: impl FnMut(EntityId)) {
        for id in self.immunity.keys() { f(*id); }
        for id in self.phasing.keys() { f(*id); }
        for id in self.speed.keys() { f(*id); }
        for id in self.time_limit.keys() { f(*id); }
        for id in self.usage_limit.keys() { f(*id); }

        for id in self.agent.keys() { f(*id); }
        for id in self.appearance.keys() { f(*id); }
        for id in self.blocking.keys() { f(*id); }
        for id in self.collectible.keys() { f(*id); }
        for id in self.collidable.keys() { f(*id); }
        for id in self.cost.keys() { f(*id); }
        for id in self.damage.keys() { f(*id); }
        for id in self.dead.keys() { f(*id); }
        for id in self.exit.keys() { f(*id); }
        for id in self.health.keys() { f(*id); }
        for id in self.inventory.keys() { f(*id); }
        for id in self.key.keys() { f(*id); }
        for id in self.lethal_damage.keys() { f(*id); }
        for id in self.locked.keys() { f(*id); }
        for id in self.moving.keys() { f(*id); }
        for id in self.pathfinding.keys() { f(*id); }
        for id in self.portal.keys() { f(*id); }
        for id in self.position.keys() { f(*id); }
        for id in self.pushable.keys() { f(*id); }
        for id in self.required.keys() { f(*id); }
        for id in self.rewardable.keys() { f(*id); }
        for id in self.status.keys() { f(*id); }

        for id in self.prev_position.keys() { f(*id); }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("size", &(self.width, self.height))
            .field("entities", &self.entities.len())
            .field("turn", &self.turn)
            .field("score", &self.score)
            .field("win", &self.win)
            .field("lose", &self.lose)
            .finish()
    }
}
