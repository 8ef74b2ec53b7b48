//! Grid Arcade - Snake and a falling-block puzzle on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulations (grid state, stepping, collisions, scoring)
//! - `input`: Raw key/touch events to game intents
//! - `renderer`: Scene building and the drawing-surface seam
//! - `platform`: Browser host (canvas, DOM score display, event wiring)
//! - `settings`: Data-driven game configuration

pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::InitError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Snake cell size in pixels; velocity steps by exactly this much
    pub const SNAKE_GRID: i32 = 20;
    /// Snake board dimensions in cells
    pub const SNAKE_COLS: i32 = 20;
    pub const SNAKE_ROWS: i32 = 20;
    /// Rendered frames per snake step (simulation runs at 1/10 refresh rate)
    pub const SNAKE_FRAMES_PER_STEP: u32 = 10;
    /// Snake head start position (pixels)
    pub const SNAKE_START: (i32, i32) = (160, 160);
    /// Snake length after a reset
    pub const SNAKE_INITIAL_LENGTH: usize = 4;
    /// Where the first apple sits before any is eaten
    pub const APPLE_START: (i32, i32) = (320, 320);

    /// Block board dimensions in cells
    pub const BLOCK_COLS: usize = 20;
    pub const BLOCK_ROWS: usize = 20;
    /// Block cell size in pixels
    pub const BLOCK_SIZE: i32 = 20;
    /// Milliseconds between forced drops
    pub const DROP_INTERVAL_MS: f64 = 600.0;

    /// Minimum swipe displacement (CSS pixels) before a gesture counts as a move
    pub const SWIPE_THRESHOLD: f32 = 24.0;

    /// Points for clearing 0..=4 rows at once
    pub const LINE_CLEAR_POINTS: [u32; 5] = [0, 40, 100, 300, 1200];
}
