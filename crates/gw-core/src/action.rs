//! The agent-facing action vocabulary.

use crate::grid::Direction;

/// One discrete command for the controlled agent.
///
/// The four movement actions delegate to the state's pluggable movement
/// rule; the remainder dispatch directly to their system.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    /// Try to unlock every locked entity on the four orthogonal neighbors.
    UseKey,
    /// Collect everything collectible on the agent's tile.
    PickUp,
    /// Do nothing (interaction systems still run).
    Wait,
}

impl Action {
    /// The movement direction this action encodes, if it is a move action.
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Action::Up    => Some(Direction::Up),
            Action::Down  => Some(Direction::Down),
            Action::Left  => Some(Direction::Left),
            Action::Right => Some(Direction::Right),
            Action::UseKey | Action::PickUp | Action::Wait => None,
        }
    }

    /// `true` for the four movement actions.
    #[inline]
    pub fn is_move(self) -> bool {
        self.direction().is_some()
    }
}
