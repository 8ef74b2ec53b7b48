//! Snake simulation
//!
//! Positions are pixel coordinates snapped to the grid, so a step moves the
//! head by exactly one grid size. The board is a torus: leaving one edge
//! re-enters at the opposite one.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::action::{Axis, Direction};
use super::score::{GameEvent, ResetCause, Scoreboard};
use crate::settings::SnakeSettings;

/// Authoritative snake state, everything the renderer reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnakeState {
    pub head: IVec2,
    /// Axis-aligned, magnitude equal to the grid size
    pub velocity: IVec2,
    /// Segments, head first. Empty until the first step after a reset.
    pub body: Vec<IVec2>,
    pub max_length: usize,
    pub apple: IVec2,
    pub scoreboard: Scoreboard,
}

impl SnakeState {
    pub fn new(settings: &SnakeSettings) -> Self {
        Self {
            head: settings.start,
            velocity: IVec2::new(settings.grid, 0),
            body: Vec::with_capacity(settings.initial_length * 2),
            max_length: settings.initial_length,
            apple: settings.apple_start,
            scoreboard: Scoreboard::new(),
        }
    }
}

/// What happened during a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepInfo {
    pub ate_apple: bool,
    pub reset: Option<ResetCause>,
}

/// A snake session: state plus the pieces needed to advance it
pub struct SnakeGame<R = Pcg32> {
    pub state: SnakeState,
    settings: SnakeSettings,
    rng: R,
    events: Vec<GameEvent>,
}

impl SnakeGame<Pcg32> {
    /// Session with a seeded PCG stream
    pub fn from_seed(settings: SnakeSettings, seed: u64) -> Self {
        Self::new(settings, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> SnakeGame<R> {
    pub fn new(settings: SnakeSettings, rng: R) -> Self {
        Self {
            state: SnakeState::new(&settings),
            settings,
            rng,
            events: Vec::new(),
        }
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    /// Turn onto `direction`'s axis, unless already moving along that axis.
    ///
    /// Blocking same-axis changes is what rules out a 180° turn into the
    /// body. Takes effect on the next [`Self::step`].
    pub fn set_direction(&mut self, direction: Direction) {
        let speed = direction.sign() * self.settings.grid;
        let velocity = &mut self.state.velocity;
        match direction.axis() {
            Axis::X if velocity.x == 0 => *velocity = IVec2::new(speed, 0),
            Axis::Y if velocity.y == 0 => *velocity = IVec2::new(0, speed),
            _ => {}
        }
    }

    /// Advance one logical tick
    pub fn step(&mut self) -> StepInfo {
        let mut info = StepInfo::default();
        let width = self.settings.width();
        let height = self.settings.height();
        let grid = self.settings.grid;

        let state = &mut self.state;
        state.head += state.velocity;

        if state.head.x < 0 {
            state.head.x = width - grid;
        } else if state.head.x >= width {
            state.head.x = 0;
        }
        if state.head.y < 0 {
            state.head.y = height - grid;
        } else if state.head.y >= height {
            state.head.y = 0;
        }

        state.body.insert(0, state.head);
        if state.body.len() > state.max_length {
            state.body.pop();
        }

        // Apple may have respawned under the body; only the head eats it
        if state.head == state.apple {
            state.max_length += 1;
            self.events.extend(state.scoreboard.add(1));
            self.relocate_apple();
            info.ate_apple = true;
        }

        if self.body_overlaps() {
            self.reset(ResetCause::SelfCollision);
            info.reset = Some(ResetCause::SelfCollision);
        }

        info
    }

    /// True if any two segments share a cell
    fn body_overlaps(&self) -> bool {
        let body = &self.state.body;
        body.iter()
            .enumerate()
            .any(|(i, segment)| body[i + 1..].contains(segment))
    }

    /// Uniform over the whole board; overlap with the body is allowed
    fn relocate_apple(&mut self) {
        let grid = self.settings.grid;
        let x = self.rng.random_range(0..self.settings.cols);
        let y = self.rng.random_range(0..self.settings.rows);
        self.state.apple = IVec2::new(x * grid, y * grid);
    }

    /// Back to the start position and length. Best score and apple survive.
    fn reset(&mut self, cause: ResetCause) {
        log::info!(
            "Snake reset ({:?}) at length {}, score {}",
            cause,
            self.state.body.len(),
            self.state.scoreboard.score
        );

        let state = &mut self.state;
        state.head = self.settings.start;
        state.body.clear();
        state.max_length = self.settings.initial_length;
        state.velocity = IVec2::new(self.settings.grid, 0);
        self.events.extend(state.scoreboard.reset());
        self.events.push(GameEvent::Reset { cause });
    }

    /// Take every event raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
