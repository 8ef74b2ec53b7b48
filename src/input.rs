//! Input mapping: keys and touch gestures to game intents
//!
//! Nothing here touches the DOM; the platform layer feeds in key names and
//! touch coordinates.

use glam::Vec2;

use crate::sim::{BlockAction, Direction};

/// Arrow keys by their `KeyboardEvent.key` name
pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        _ => None,
    }
}

/// A finished touch gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Moved less than the threshold on both axes
    Tap,
    /// Dominant-axis direction of the displacement
    Toward(Direction),
}

impl Swipe {
    /// Block game: taps rotate, swipes act like arrow keys
    pub fn block_action(self) -> BlockAction {
        match self {
            Swipe::Tap => BlockAction::Rotate,
            Swipe::Toward(direction) => direction.into(),
        }
    }

    /// Snake game: taps do nothing
    pub fn snake_direction(self) -> Option<Direction> {
        match self {
            Swipe::Tap => None,
            Swipe::Toward(direction) => Some(direction),
        }
    }
}

/// Classify a gesture by its end-minus-start displacement (+y is down)
pub fn classify_swipe(delta: Vec2, threshold: f32) -> Swipe {
    let abs = delta.abs();
    if abs.x < threshold && abs.y < threshold {
        return Swipe::Tap;
    }
    let direction = if abs.x > abs.y {
        if delta.x > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Swipe::Toward(direction)
}

/// Remembers where the current touch started
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    threshold: f32,
    start: Option<Vec2>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    pub fn begin(&mut self, pos: Vec2) {
        self.start = Some(pos);
    }

    /// True between `begin` and `end`; the host should suppress scrolling
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Finish the gesture. None if no gesture was in progress.
    pub fn end(&mut self, pos: Vec2) -> Option<Swipe> {
        let start = self.start.take()?;
        Some(classify_swipe(pos - start, self.threshold))
    }
}
