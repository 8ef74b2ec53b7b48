//! 2D rendering
//!
//! Scenes are plain rectangle lists; the canvas backend only exists on wasm.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::{Rect, Scene, Surface, blocks_scene, snake_scene};
