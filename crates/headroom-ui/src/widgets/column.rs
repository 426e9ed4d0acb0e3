use headroom_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Stacks children top to bottom, each at its natural height.
///
/// Children are measured with unbounded height and stretched to the
/// column's width.
pub struct Column {
    children: Vec<Element>,
    gap: f32,
}

impl Column {
    pub fn new() -> Self {
        Self { children: Vec::new(), gap: 0.0 }
    }

    pub fn child(mut self, w: impl Into<Element>) -> Self {
        self.children.push(w.into());
        self
    }

    pub fn children<I, E>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        self.children.extend(items.into_iter().map(Into::into));
        self
    }

    pub fn gap(mut self, v: f32) -> Self { self.gap = v.max(0.0); self }

    fn child_rects(&self, rect: Rect, ctx: &LayoutCtx) -> Vec<Rect> {
        let c = Constraints::loose(Vec2::new(rect.size.x, f32::INFINITY));
        let mut y = rect.origin.y;
        self.children
            .iter()
            .map(|child| {
                let h = child.measure(c, ctx).y;
                let r = Rect::new(rect.origin.x, y, rect.size.x, h);
                y += h + self.gap;
                r
            })
            .collect()
    }
}

impl Default for Column { fn default() -> Self { Self::new() } }

impl Widget for Column {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let child_c = constraints.with_infinite_height();
        let mut w: f32 = 0.0;
        let mut h: f32 = 0.0;
        for child in &self.children {
            let s = child.measure(child_c, ctx);
            w = w.max(s.x);
            h += s.y;
        }
        h += self.gap * self.children.len().saturating_sub(1) as f32;
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = painter.layout_ctx();
        for (child, r) in self.children.iter().zip(self.child_rects(rect, &ctx)) {
            child.paint(painter, r);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let rects = self.child_rects(rect, ctx);
        for (child, r) in self.children.iter_mut().zip(rects) {
            if child.on_event(event, r, ctx).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}
