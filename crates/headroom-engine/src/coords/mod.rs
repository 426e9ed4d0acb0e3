//! Coordinate and geometry types shared across the draw stream and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Scroll deltas use the same axes: a negative `y` moves content up.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
