//! Platform layer
//!
//! - `input`: key bindings and held/pressed tracking (all targets)
//! - `web`: browser frontend (wasm32 only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{Command, Keyboard};
