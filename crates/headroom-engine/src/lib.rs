//! Headroom engine crate.
//!
//! Owns the renderer-agnostic pieces used by the UI layer: geometry,
//! colors, the recorded draw stream and logger setup.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
