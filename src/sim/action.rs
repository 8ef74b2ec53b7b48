//! Abstract intents the simulations accept

use serde::{Deserialize, Serialize};

/// Movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// One of the four axis-aligned directions (screen space: +y is down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::X,
            Direction::Up | Direction::Down => Axis::Y,
        }
    }

    /// -1 toward the origin, +1 away from it
    pub fn sign(self) -> i32 {
        match self {
            Direction::Left | Direction::Up => -1,
            Direction::Right | Direction::Down => 1,
        }
    }
}

/// What the player asked the falling piece to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockAction {
    /// Shift one column (-1 left, +1 right)
    Move(i32),
    /// Soft drop one row
    Drop,
    /// Rotate clockwise with wall kicks
    Rotate,
}

impl From<Direction> for BlockAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => BlockAction::Move(-1),
            Direction::Right => BlockAction::Move(1),
            Direction::Down => BlockAction::Drop,
            Direction::Up => BlockAction::Rotate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_and_sign() {
        assert_eq!(Direction::Left.axis(), Axis::X);
        assert_eq!(Direction::Left.sign(), -1);
        assert_eq!(Direction::Down.axis(), Axis::Y);
        assert_eq!(Direction::Down.sign(), 1);
    }

    #[test]
    fn test_arrow_up_rotates_pieces() {
        assert_eq!(BlockAction::from(Direction::Up), BlockAction::Rotate);
        assert_eq!(BlockAction::from(Direction::Down), BlockAction::Drop);
        assert_eq!(BlockAction::from(Direction::Right), BlockAction::Move(1));
    }
}
