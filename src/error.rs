//! Startup errors
//!
//! Only host initialization can fail. In-game failures (self-collision, a
//! blocked spawn) reset the simulation in place and are reported as
//! [`crate::sim::GameEvent::Reset`] instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InitError {
    /// No canvas element with the requested id (or the element is not a canvas)
    #[error("drawing surface `{id}` not found")]
    SurfaceMissing { id: String },

    /// The canvas exists but refused to hand out a 2D context
    #[error("2D drawing context unavailable on `{id}`")]
    ContextUnavailable { id: String },

    #[error("invalid settings: {0}")]
    InvalidSettings(&'static str),

    #[error("could not parse settings: {0}")]
    SettingsParse(#[from] serde_json::Error),
}
