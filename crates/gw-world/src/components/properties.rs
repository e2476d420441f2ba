//! Property components: the persistent, data-only state of world entities.
//!
//! Every type here is a plain value; systems interpret them during the
//! step pipeline.  Marker components are unit structs whose presence in a
//! store is the whole signal.

use std::collections::BTreeSet;

use gw_core::{EntityId, Pos};

// ── Markers ───────────────────────────────────────────────────────────────────

/// The controllable entity.  Exactly one agent acts per step.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent;

/// Occupies its tile against movement.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Blocking;

/// Can be picked up from the agent's tile.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collectible;

/// Participates in collision: portal entry, push-target occupancy.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Collidable;

/// Terminal marker; a dead agent loses the game.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dead;

/// Goal tile consulted by exit-style objectives.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exit;

/// Contact with this entity kills outright, regardless of remaining health.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LethalDamage;

/// May be displaced by another entity's movement.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pushable;

/// Must be collected before exit-style objectives are satisfied.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Required;

// ── Presentation ──────────────────────────────────────────────────────────────

/// Sprite catalogue consumed by renderers; the kernel only owns the names
/// so grouping rules stay stable across frontends.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AppearanceName {
    None,
    Boots,
    Box,
    Coin,
    Core,
    Door,
    Exit,
    Floor,
    Gem,
    Ghost,
    Human,
    Key,
    Lava,
    Lock,
    Monster,
    Portal,
    Shield,
    Spike,
    Wall,
}

/// Presentation-only component: how an entity is drawn.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Appearance {
    pub name: AppearanceName,
    /// Draw order among co-located entities; higher draws on top.
    pub priority: i32,
    /// Render as a small overlay icon rather than a full tile.
    pub icon: bool,
    /// Render beneath every non-background entity.
    pub background: bool,
}

// ── Vitals & hazards ──────────────────────────────────────────────────────────

/// Mutable vitals.  `hp` is clamped to `[0, max]`; `hp == 0` implies the
/// entity is also marked [`Dead`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    pub hp: i32,
    pub max: i32,
}

/// Damage applied on contact.  Negative amounts are a configuration bug.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Damage {
    pub amount: i32,
}

// ── Economy ───────────────────────────────────────────────────────────────────

/// Score granted when collected (on a collectible) or stood on (on a tile).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rewardable {
    pub amount: i64,
}

/// Score deducted once per step while the agent stands on this tile.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost {
    pub amount: i64,
}

// ── Items, keys, locks ────────────────────────────────────────────────────────

/// Collected non-effect items, by entity id.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub item_ids: BTreeSet<EntityId>,
}

/// A key item; unlocks `Locked` entities with a matching id.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
    pub key_id: String,
}

/// Locked until opened with a matching [`Key`].
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locked {
    pub key_id: String,
}

// ── Autonomous motion ─────────────────────────────────────────────────────────

/// Axis of autonomous directional motion.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveAxis {
    Horizontal,
    Vertical,
}

/// Sense of travel along the axis: +1 or −1 tiles per sub-move.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisDir {
    Plus,
    Minus,
}

impl AxisDir {
    /// The signed unit step this direction represents.
    #[inline]
    pub fn signum(self) -> i32 {
        match self {
            AxisDir::Plus => 1,
            AxisDir::Minus => -1,
        }
    }

    /// The reversed direction (used when a bouncing mover hits an obstacle).
    #[inline]
    pub fn flipped(self) -> AxisDir {
        match self {
            AxisDir::Plus => AxisDir::Minus,
            AxisDir::Minus => AxisDir::Plus,
        }
    }
}

/// Autonomous directional motion: the entity advances up to `speed` tiles
/// along `axis` each step, optionally reversing on obstruction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Moving {
    pub axis: MoveAxis,
    pub dir: AxisDir,
    /// Tiles attempted per step.
    pub speed: i32,
    /// Reverse direction instead of parking when obstructed.
    pub bounce: bool,
    /// Tile occupied before the most recent sub-move.
    pub prev: Option<Pos>,
}

impl Moving {
    /// The `(dx, dy)` unit vector of the next sub-move.
    #[inline]
    pub fn delta(&self) -> (i32, i32) {
        match self.axis {
            MoveAxis::Horizontal => (self.dir.signum(), 0),
            MoveAxis::Vertical => (0, self.dir.signum()),
        }
    }
}

// ── Target seeking ────────────────────────────────────────────────────────────

/// How a pursuer plans its next tile.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathfindKind {
    /// Greedy single step maximizing progress toward the target.
    StraightLine,
    /// One step along an A* shortest path.
    Path,
}

/// Target-seeking motion: one tile per step toward `target`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pathfinding {
    pub target: EntityId,
    pub kind: PathfindKind,
}

// ── Portals ───────────────────────────────────────────────────────────────────

/// Teleport link.  Pairing is bidirectional: `a.pair == b` requires
/// `b.pair == a` at rest (validated at construction).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Portal {
    pub pair: EntityId,
}

// ── Status ────────────────────────────────────────────────────────────────────

/// The set of effect entities currently attached to an entity.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status {
    pub effect_ids: BTreeSet<EntityId>,
}
