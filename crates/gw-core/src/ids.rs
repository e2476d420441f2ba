//! Entity identity.
//!
//! One id type is enough for this kernel: entities, effects, portals and
//! items all share the same id space, and an entity "has" a component
//! exactly when some store maps its id to a value.

use std::fmt;

/// Opaque identifier naming a world entity.
///
/// Plain `Copy` integer, ordered by allocation, so ids double as ordered-map
/// keys and as the deterministic tie-break wherever several entities qualify.
/// The inner value is `pub` for literal construction in tests and level code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
