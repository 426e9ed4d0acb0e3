use crate::coords::Rect;
use crate::paint::Color;

/// Solid rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

/// Renderer-agnostic draw command stream.
///
/// Only solid rects are recorded; a renderer back end is expected to map
/// each variant onto its own pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
}
