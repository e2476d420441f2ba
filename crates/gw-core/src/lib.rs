//! `gw-core` — foundational types for the gridworld simulation kernel.
//!
//! Everything the higher layers share without depending on each other:
//! ids, grid geometry, the action vocabulary, deterministic RNG derivation
//! and the common error type.  External surface is kept small on purpose
//! (`rand`, `thiserror`, and `serde` behind a feature).
//!
//! # What lives here
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`ids`]    | `EntityId`                                      |
//! | [`grid`]   | `Pos`, `Direction`, bounds/wrap helpers         |
//! | [`action`] | `Action`                                        |
//! | [`rng`]    | `SimRng` (derived deterministic streams)        |
//! | [`error`]  | `GwError`, `GwResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the types above.    |

pub mod action;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::Action;
pub use error::{GwError, GwResult};
pub use grid::{Direction, Pos, NEIGHBOR_ORDER};
pub use ids::EntityId;
pub use rng::SimRng;
