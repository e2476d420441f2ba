//! Effect attachment and the selection-and-consumption rule.
//!
//! This module is the *sole* place a usage-limited effect is ever spent.
//! Damage (Immunity), plain movement (Phasing), the move-count computation
//! (Speed) and the pathfinding deterrent (target's Phasing) all funnel
//! through [`use_effect`], so the accounting invariant — exactly one
//! decrement per successful consumption event — holds by construction.

use gw_core::EntityId;

use crate::components::{EffectKind, Status};
use crate::state::State;

// ── Validity ──────────────────────────────────────────────────────────────────

/// `true` while neither limit on `effect_id` has run out.
///
/// An absent limit is unlimited; `amount <= 0` on either limit means the
/// effect is expired and must not be selected again.
pub fn effect_is_valid(state: &State, effect_id: EntityId) -> bool {
    if let Some(t) = state.time_limit.get(&effect_id) {
        if t.amount <= 0 {
            return false;
        }
    }
    if let Some(u) = state.usage_limit.get(&effect_id) {
        if u.amount <= 0 {
            return false;
        }
    }
    true
}

// ── Attachment ────────────────────────────────────────────────────────────────

/// Attach `effect_id` to `holder`'s status set (no-op if already present).
pub fn add_status_effect(status: &mut Status, effect_id: EntityId) {
    status.effect_ids.insert(effect_id);
}

/// Detach `effect_id` from `holder`'s status set.
pub fn remove_status_effect(status: &mut Status, effect_id: EntityId) {
    status.effect_ids.remove(&effect_id);
}

// ── Selection & consumption ───────────────────────────────────────────────────

/// Select the active effect of `kind` among `holder`'s status, if any.
///
/// Candidates are the status ids present in the `kind` store, minus
/// expired ones.  Effects without a usage limit are preferred (they cost
/// nothing to use); otherwise the lowest-id usage-limited candidate wins,
/// which is the deterministic fallback order.
pub fn select_effect(state: &State, holder: EntityId, kind: EffectKind) -> Option<EntityId> {
    let status = state.status.get(&holder)?;

    let valid: Vec<EntityId> = status
        .effect_ids
        .iter()
        .copied()
        .filter(|id| state.effect_kind_contains(kind, *id))
        .filter(|id| effect_is_valid(state, *id))
        .collect();

    valid
        .iter()
        .copied()
        .find(|id| !state.usage_limit.contains_key(id))
        .or_else(|| valid.first().copied())
}

/// Select and, for usage-limited effects, consume one use.
///
/// Returns the chosen effect id, or `None` when no effect of `kind` is
/// active on `holder`.  Time-limited and unlimited effects are selected
/// without any state change.
pub fn use_effect(state: &mut State, holder: EntityId, kind: EffectKind) -> Option<EntityId> {
    let effect_id = select_effect(state, holder, kind)?;
    if let Some(u) = state.usage_limit.get_mut(&effect_id) {
        u.amount -= 1;
    }
    Some(effect_id)
}

/// `true` if using `effect_id` decrements a usage limit.
///
/// Lets the movement system distinguish "consumed a charge" (a real state
/// change) from a free selection when deciding whether a sub-step counted
/// as blocked.
#[inline]
pub fn is_usage_limited(state: &State, effect_id: EntityId) -> bool {
    state.usage_limit.contains_key(&effect_id)
}
