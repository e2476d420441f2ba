//! Component value types.
//!
//! Split into *properties* (persistent entity state: position, vitals,
//! locks, motion, …) and *effects* (temporary modifiers held in a `Status`
//! set, with time/usage limits).  All are plain data; the systems in
//! `gw-step` carry every behavior.

pub mod effects;
pub mod properties;

pub use effects::{EffectKind, Immunity, Phasing, Speed, TimeLimit, UsageLimit};
pub use properties::{
    Agent, Appearance, AppearanceName, AxisDir, Blocking, Collectible, Collidable, Cost, Damage,
    Dead, Exit, Health, Inventory, Key, LethalDamage, Locked, MoveAxis, Moving, PathfindKind,
    Pathfinding, Portal, Pushable, Required, Rewardable, Status,
};
