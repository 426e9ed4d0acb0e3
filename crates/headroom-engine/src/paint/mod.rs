//! Paint types for the draw stream.

mod color;

pub use color::Color;
