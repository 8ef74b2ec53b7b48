//! Platform layer
//!
//! The browser host lives in `web`; native builds run the simulations
//! headless from `main.rs`.

#[cfg(target_arch = "wasm32")]
pub mod web;
