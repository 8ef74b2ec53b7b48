//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Steps are driven by the host (frames or timestamps), never by wall clock
//! - Randomness comes only from the injected RNG
//! - No rendering or platform dependencies

pub mod action;
pub mod blocks;
pub mod clock;
pub mod score;
pub mod snake;

pub use action::{Axis, BlockAction, Direction};
pub use blocks::{BlocksGame, BlocksState, Board, Piece, Tetromino};
pub use clock::{DropTimer, FrameDivider};
pub use score::{GameEvent, ResetCause, Scoreboard};
pub use snake::{SnakeGame, SnakeState, StepInfo};
