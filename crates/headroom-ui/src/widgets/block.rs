use headroom_engine::coords::{Rect, Vec2};
use headroom_engine::paint::Color;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

/// A solid filled box — list rows, header backgrounds, placeholders.
///
/// Fills the available width. Without an explicit height it fills the
/// available height too (or collapses to zero when unbounded).
///
/// # Example
/// ```rust,ignore
/// Block::new(Color::from_straight(0.2, 0.4, 0.9, 1.0)).height(48.0)
/// ```
pub struct Block {
    color: Color,
    height: Option<f32>,
}

impl Block {
    pub fn new(color: Color) -> Self {
        Self { color, height: None }
    }

    pub fn height(mut self, v: f32) -> Self { self.height = Some(v.max(0.0)); self }
}

impl Widget for Block {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        let w = constraints.finite_width_or(0.0);
        let h = self.height.unwrap_or_else(|| constraints.finite_height_or(0.0));
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if !rect.is_empty() {
            painter.fill_rect(rect, self.color);
        }
    }
}
