use headroom_engine::coords::Rect;
use headroom_engine::paint::Color;
use headroom_engine::scene::{DrawList, ZIndex};

use crate::constraints::LayoutCtx;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList`, handing out increasing z-indices so later
/// paints land on top of earlier ones.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    /// Physical-to-logical pixel ratio for this frame.
    pub scale: f32,
    z: i32,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList, scale: f32) -> Self {
        Self { draw_list, scale, z: 0 }
    }

    // ── layout context ────────────────────────────────────────────────────

    /// Returns a [`LayoutCtx`] for re-measuring children inside `paint`.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx {
        LayoutCtx { scale: self.scale }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_rect(z, rect, color);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    /// End the most recent scissor region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
