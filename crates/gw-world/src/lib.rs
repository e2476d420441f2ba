//! `gw-world` — component model and world snapshot for the gridworld
//! simulation kernel.
//!
//! # What lives here
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`components`] | Property and effect component value types            |
//! | [`state`]      | The `State` snapshot and its ordered stores          |
//! | [`rules`]      | `MoveFn` / `ObjectiveFn` pluggable rule traits       |
//! | [`builder`]    | `StateBuilder` — validated construction              |
//! | [`query`]      | Tile occupancy and collision predicates              |
//! | [`status`]     | Effect selection-and-consumption rule                |
//! | [`inventory`]  | Item add/remove and key lookup                       |
//! | [`health`]     | Damage application and death marking                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to component types + ids. |

pub mod builder;
pub mod components;
pub mod health;
pub mod inventory;
pub mod query;
pub mod rules;
pub mod state;
pub mod status;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::StateBuilder;
pub use rules::{MoveFn, ObjectiveFn};
pub use state::{State, Store};
