//! Crossing recorder for multi-tile motion.

use gw_core::{EntityId, Pos};
use gw_world::state::State;

/// Tiles strictly between `from` and `to`, walking the x axis first.
///
/// Endpoints are excluded: the entity's start-of-step tile is already its
/// `prev_position`, and its current tile enters the portal crossing index
/// directly.
fn between(from: Pos, to: Pos) -> Vec<Pos> {
    let mut out = Vec::new();
    let mut x = from.x;
    let y0 = from.y;

    let sx = (to.x - x).signum();
    while x != to.x {
        x += sx;
        let p = Pos::new(x, y0);
        if p != to {
            out.push(p);
        }
    }

    let mut y = y0;
    let sy = (to.y - y).signum();
    while y != to.y {
        y += sy;
        let p = Pos::new(x, y);
        if p != to {
            out.push(p);
        }
    }
    out
}

/// Record the tiles each entity crossed since the pre-step snapshot.
///
/// Entities without a previous position (spawned into this step) record
/// nothing.
pub fn trail_system(state: &mut State) {
    let crossings: Vec<(EntityId, Vec<Pos>)> = state
        .position
        .iter()
        .filter_map(|(id, cur)| {
            let prev = state.prev_position.get(id)?;
            Some((*id, between(*cur, *prev)))
        })
        .collect();

    for (id, tiles) in crossings {
        for pos in tiles {
            state.trail.entry(pos).or_default().insert(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::between;
    use gw_core::Pos;

    #[test]
    fn excludes_both_endpoints() {
        assert_eq!(between(Pos::new(0, 0), Pos::new(3, 0)), vec![Pos::new(1, 0), Pos::new(2, 0)]);
        assert_eq!(between(Pos::new(0, 0), Pos::new(0, 3)), vec![Pos::new(0, 1), Pos::new(0, 2)]);
    }

    #[test]
    fn adjacent_tiles_have_no_crossings() {
        assert!(between(Pos::new(0, 0), Pos::new(1, 0)).is_empty());
        assert!(between(Pos::new(2, 2), Pos::new(2, 2)).is_empty());
    }

    #[test]
    fn walks_x_axis_before_y() {
        assert_eq!(
            between(Pos::new(0, 0), Pos::new(2, 2)),
            vec![Pos::new(1, 0), Pos::new(2, 0), Pos::new(2, 1)]
        );
    }
}
