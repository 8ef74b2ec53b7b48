//! Loop pacing
//!
//! The host calls in once per display refresh; these decide when the
//! simulations actually advance.

use serde::{Deserialize, Serialize};

/// Fires once every `frames_per_step` rendered frames
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameDivider {
    frames_per_step: u32,
    count: u32,
}

impl FrameDivider {
    pub fn new(frames_per_step: u32) -> Self {
        Self {
            frames_per_step: frames_per_step.max(1),
            count: 0,
        }
    }

    /// Count one frame. Returns true when the simulation should step.
    pub fn advance(&mut self) -> bool {
        self.count += 1;
        if self.count < self.frames_per_step {
            return false;
        }
        self.count = 0;
        true
    }
}

/// Accumulates elapsed time and fires once it passes the drop interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropTimer {
    interval: f64,
    counter: f64,
    last_time: f64,
}

impl DropTimer {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            counter: 0.0,
            last_time: 0.0,
        }
    }

    /// Feed the host timestamp. Returns true when a forced drop is due.
    ///
    /// The counter is not cleared here; the drop itself calls [`Self::reset`],
    /// so player-initiated drops restart the countdown too.
    pub fn update(&mut self, time: f64) -> bool {
        let delta = time - self.last_time;
        self.last_time = time;
        self.counter += delta;
        self.counter > self.interval
    }

    pub fn reset(&mut self) {
        self.counter = 0.0;
    }

    /// Time accumulated since the last drop
    pub fn elapsed(&self) -> f64 {
        self.counter
    }
}
