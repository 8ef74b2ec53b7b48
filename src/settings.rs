//! Game settings
//!
//! Loaded from LocalStorage on the web, from a JSON file natively.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::InitError;

/// Snake board and pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeSettings {
    /// Cell size in pixels (also the per-step velocity magnitude)
    pub grid: i32,
    /// Board width in cells
    pub cols: i32,
    /// Board height in cells
    pub rows: i32,
    /// Rendered frames per simulation step
    pub frames_per_step: u32,
    /// Head position after startup and after every reset (pixels)
    pub start: IVec2,
    /// Body length cap after a reset
    pub initial_length: usize,
    /// First apple position (pixels)
    pub apple_start: IVec2,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid: SNAKE_GRID,
            cols: SNAKE_COLS,
            rows: SNAKE_ROWS,
            frames_per_step: SNAKE_FRAMES_PER_STEP,
            start: IVec2::new(SNAKE_START.0, SNAKE_START.1),
            initial_length: SNAKE_INITIAL_LENGTH,
            apple_start: IVec2::new(APPLE_START.0, APPLE_START.1),
        }
    }
}

impl SnakeSettings {
    /// Board width in pixels
    pub fn width(&self) -> i32 {
        self.cols * self.grid
    }

    /// Board height in pixels
    pub fn height(&self) -> i32 {
        self.rows * self.grid
    }

    fn on_board(&self, pos: IVec2) -> bool {
        pos.x >= 0
            && pos.x < self.width()
            && pos.y >= 0
            && pos.y < self.height()
            && pos.x % self.grid == 0
            && pos.y % self.grid == 0
    }
}

/// Block board and drop pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlocksSettings {
    pub cols: usize,
    pub rows: usize,
    /// Cell size in pixels
    pub cell: i32,
    /// Time units (ms on the web) between forced drops
    pub drop_interval: f64,
}

impl Default for BlocksSettings {
    fn default() -> Self {
        Self {
            cols: BLOCK_COLS,
            rows: BLOCK_ROWS,
            cell: BLOCK_SIZE,
            drop_interval: DROP_INTERVAL_MS,
        }
    }
}

/// Touch gesture tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub swipe_threshold: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

/// All game settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub snake: SnakeSettings,
    pub blocks: BlocksSettings,
    pub input: InputSettings,
}

impl Settings {
    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, InitError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the simulations cannot run with
    pub fn validate(&self) -> Result<(), InitError> {
        let snake = &self.snake;
        if snake.grid <= 0 {
            return Err(InitError::InvalidSettings("snake grid must be positive"));
        }
        if snake.cols <= 0 || snake.rows <= 0 {
            return Err(InitError::InvalidSettings("snake board must not be empty"));
        }
        if snake.frames_per_step == 0 {
            return Err(InitError::InvalidSettings("frames per step must be at least 1"));
        }
        if !snake.on_board(snake.start) || !snake.on_board(snake.apple_start) {
            return Err(InitError::InvalidSettings(
                "snake start and apple must sit on the board grid",
            ));
        }

        let blocks = &self.blocks;
        // Every tetromino is 4 cells wide when flat
        if blocks.cols < 4 || blocks.rows < 4 {
            return Err(InitError::InvalidSettings("block board must be at least 4x4"));
        }
        if blocks.cell <= 0 {
            return Err(InitError::InvalidSettings("block cell size must be positive"));
        }
        if blocks.drop_interval.is_nan() || blocks.drop_interval <= 0.0 {
            return Err(InitError::InvalidSettings("drop interval must be positive"));
        }

        if self.input.swipe_threshold.is_nan() || self.input.swipe_threshold < 0.0 {
            return Err(InitError::InvalidSettings("swipe threshold must not be negative"));
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "grid_arcade_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
