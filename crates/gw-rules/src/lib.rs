//! `gw-rules` — the built-in movement rules and objective predicates.
//!
//! The kernel (`gw-step`) only ever sees the [`MoveFn`]/[`ObjectiveFn`]
//! trait objects carried by the snapshot; this crate provides the standard
//! implementations and the name-keyed registries used by level
//! configuration.
//!
//! | Movement rule | Behavior                                           |
//! |---------------|----------------------------------------------------|
//! | `default`     | Single adjacent cell                               |
//! | `wrap`        | Adjacent cell, toroidal edges                      |
//! | `mirror`      | Left and right swapped                             |
//! | `slippery`    | Slide until the edge or a blocking occupant        |
//! | `windy`       | Adjacent cell + perpendicular gust (p = 0.3)       |
//! | `gravity`     | Step, then fall downward until resting             |
//!
//! | Objective  | Wins when                                             |
//! |------------|-------------------------------------------------------|
//! | `default`  | All Required collected and the agent is on an Exit    |
//! | `exit`     | The agent is on an Exit                               |
//! | `collect`  | All Required collected                                |
//! | `unlock`   | No Locked entities remain                             |
//! | `push`     | Every Pushable rests on an Exit                       |

pub mod moves;
pub mod objectives;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use moves::{
    move_fn_by_name, DefaultMove, GravityMove, MirrorMove, SlipperyMove, WindyMove, WrapMove,
    MOVE_FN_NAMES,
};
pub use objectives::{
    objective_fn_by_name, CollectObjective, DefaultObjective, ExitObjective, PushObjective,
    UnlockObjective, OBJECTIVE_FN_NAMES,
};

#[doc(inline)]
pub use gw_world::rules::{MoveFn, ObjectiveFn};
