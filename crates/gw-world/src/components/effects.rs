//! Effect components: temporary modifiers attached to entities via `Status`.
//!
//! Effects are themselves entities — an effect entity bears exactly one of
//! the marker/value components below, plus optionally a [`TimeLimit`] or
//! [`UsageLimit`].  A holder's `Status` set references effect entities by
//! id; the selection-and-consumption rule in [`crate::status`] is the only
//! place a usage is ever spent.

// ── Effect markers ────────────────────────────────────────────────────────────

/// Negates incoming damage instances while active.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Immunity;

/// The holder moves through blocking occupants while active.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phasing;

/// Multiplies the number of movement sub-steps per move action.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Speed {
    /// Positive integer factor applied to the base single sub-step.
    pub multiplier: i32,
}

// ── Limits ────────────────────────────────────────────────────────────────────

/// Remaining steps before the effect expires.  Decremented once per step by
/// the status system; `amount <= 0` means expired.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeLimit {
    pub amount: i32,
}

/// Remaining discrete consumptions.  Decremented on each successful use;
/// `amount <= 0` means expired.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsageLimit {
    pub amount: i32,
}

// ── EffectKind ────────────────────────────────────────────────────────────────

/// Discriminates the three effect stores for kind-generic lookups.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    Immunity,
    Phasing,
    Speed,
}

impl EffectKind {
    /// All effect kinds, in store order.
    pub const ALL: [EffectKind; 3] = [EffectKind::Immunity, EffectKind::Phasing, EffectKind::Speed];
}
