//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - track scissor regions for scroll containers

mod cmd;
mod list;

pub use cmd::{DrawCmd, RectCmd};
pub use list::{DrawItem, DrawList, ZIndex};
