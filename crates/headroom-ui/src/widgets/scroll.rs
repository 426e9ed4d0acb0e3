use std::cell::Cell;

use headroom_engine::coords::{Rect, Vec2};
use headroom_engine::paint::Color;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// A vertically scrollable single-child container.
///
/// Clips its child to the visible viewport and translates it by the current
/// scroll offset. Optionally draws a thin scrollbar on the right edge.
///
/// Used standalone it handles wheel, drag and fling events itself. Inside a
/// [`CollapsibleHeader`](super::collapsible_header::CollapsibleHeader) the
/// header routes those through [`scroll_by`](Self::scroll_by) after its own
/// pre-scroll pass.
///
/// # Example
/// ```rust,ignore
/// ScrollView::new(
///     Column::new()
///         .child(Block::new(grey).height(48.0))
///         .child(Block::new(grey).height(48.0))
/// )
/// .line_height(28.0)
/// ```
pub struct ScrollView {
    child: Element,
    /// Current scroll offset in logical pixels (>=0, content shifted up by this amount).
    pub scroll_offset: f32,
    /// Pixels scrolled per wheel line.
    line_height: f32,
    show_scrollbar: bool,
    /// Cached from the most recent paint / event pass.
    cached_content_height: Cell<f32>,
    cached_viewport_height: Cell<f32>,
    drag: DragTracker,
    /// Called when the scroll offset changes.
    on_scroll: Option<Box<dyn FnMut(f32)>>,
}

impl ScrollView {
    pub fn new(child: impl Into<Element>) -> Self {
        Self {
            child: child.into(),
            scroll_offset: 0.0,
            line_height: 24.0,
            show_scrollbar: true,
            cached_content_height: Cell::new(0.0),
            cached_viewport_height: Cell::new(0.0),
            drag: DragTracker::default(),
            on_scroll: None,
        }
    }

    pub fn line_height(mut self, v: f32) -> Self {
        self.line_height = v;
        self
    }

    pub fn show_scrollbar(mut self, v: bool) -> Self {
        self.show_scrollbar = v;
        self
    }

    pub fn on_scroll(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.on_scroll = Some(Box::new(f));
        self
    }

    /// Wheel lines → scroll-space delta (`y < 0` pushes content up).
    #[inline]
    pub(crate) fn wheel_delta(&self, lines: f32) -> f32 {
        -lines * self.line_height
    }

    /// Largest valid offset for the cached content / viewport heights.
    pub fn max_offset(&self) -> f32 {
        (self.cached_content_height.get() - self.cached_viewport_height.get()).max(0.0)
    }

    /// Current offset clamped to `[0, max_offset()]` for the cached heights.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.scroll_offset.clamp(0.0, self.max_offset())
    }

    /// Applies a scroll-space delta and returns the part consumed.
    ///
    /// `delta.y < 0` moves content up (offset grows). The offset stays in
    /// `[0, max_offset()]`; whatever would cross an edge is left unconsumed.
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        if delta.is_nan() {
            return 0.0;
        }
        let max = self.max_offset();
        let prev = self.scroll_offset.clamp(0.0, max);
        let next = (prev - delta).clamp(0.0, max);
        self.scroll_offset = next;
        if next != prev {
            if let Some(f) = &mut self.on_scroll {
                f(next);
            }
        }
        prev - next
    }

    /// Refresh cached heights for a viewport of `rect`.
    pub(crate) fn sync_viewport(&self, rect: Rect, ctx: &LayoutCtx) {
        let content_h = self.measure_content(rect.size.x, ctx).y;
        self.cached_content_height.set(content_h);
        self.cached_viewport_height.set(rect.size.y);
    }

    // ── helpers ───────────────────────────────────────────────────────────

    fn measure_content(&self, viewport_w: f32, ctx: &LayoutCtx) -> Vec2 {
        let c = Constraints::loose(Vec2::new(viewport_w, f32::INFINITY));
        self.child.measure(c, ctx)
    }

    fn clamped_offset(&self, content_h: f32, viewport_h: f32) -> f32 {
        let max = (content_h - viewport_h).max(0.0);
        self.scroll_offset.clamp(0.0, max)
    }

    fn content_rect(&self, rect: Rect, content_h: f32) -> Rect {
        let offset = self.clamped_offset(content_h, rect.size.y);
        Rect::new(rect.origin.x, rect.origin.y - offset, rect.size.x, content_h)
    }

    fn scrollbar_rects(&self, rect: Rect, content_h: f32) -> Option<(Rect, Rect)> {
        if !self.show_scrollbar || content_h <= rect.size.y || rect.is_empty() {
            return None;
        }
        let bar_w: f32 = 6.0;
        let bar_x = rect.origin.x + rect.size.x - bar_w;

        let track = Rect::new(bar_x, rect.origin.y, bar_w, rect.size.y);

        // Thumb: proportional to viewport / content ratio, never below 24 px.
        let ratio = rect.size.y / content_h;
        let thumb_h = (rect.size.y * ratio).max(24.0).min(rect.size.y);
        let offset = self.clamped_offset(content_h, rect.size.y);
        let scroll_range = content_h - rect.size.y;
        let thumb_y = rect.origin.y + (offset / scroll_range) * (rect.size.y - thumb_h);

        let thumb = Rect::new(bar_x, thumb_y, bar_w, thumb_h);
        Some((track, thumb))
    }
}

impl Widget for ScrollView {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let max_w = constraints.finite_width_or(0.0);
        let content = self.measure_content(max_w, ctx);
        self.cached_content_height.set(content.y);
        let h = if constraints.max.y.is_finite() {
            content.y.min(constraints.max.y)
        } else {
            content.y
        };
        Vec2::new(content.x.min(constraints.max.x.max(0.0)), h)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = painter.layout_ctx();
        self.sync_viewport(rect, &ctx);
        let content_h = self.cached_content_height.get();
        let content_rect = self.content_rect(rect, content_h);

        painter.push_clip(rect);
        self.child.paint(painter, content_rect);
        painter.pop_clip();

        if let Some((track, thumb)) = self.scrollbar_rects(rect, content_h) {
            painter.fill_rect(track, Color::from_straight(0.15, 0.15, 0.15, 0.8));
            painter.fill_rect(thumb, Color::from_straight(0.55, 0.55, 0.55, 0.9));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        self.sync_viewport(rect, ctx);

        let delta = match event {
            UiEvent::ScrollWheel { delta } => Some(self.wheel_delta(*delta)),
            UiEvent::Fling { delta } => Some(delta.y),
            UiEvent::Drag { .. } | UiEvent::DragEnd { .. } => self.drag.track(event, rect),
            UiEvent::Hover { .. } => None,
        };

        match delta {
            Some(d) => {
                self.scroll_by(d);
                EventResult::Consumed
            }
            None => {
                let content_rect = self.content_rect(rect, self.cached_content_height.get());
                self.child.on_event(event, content_rect, ctx)
            }
        }
    }
}

// ── DragTracker ───────────────────────────────────────────────────────────

/// Turns absolute drag positions into per-event vertical deltas.
///
/// Only drags that started inside the owning rect produce deltas.
#[derive(Debug, Default)]
pub(crate) struct DragTracker {
    last: Option<Vec2>,
}

impl DragTracker {
    /// Returns the vertical movement since the previous drag event, in
    /// scroll space (finger moving up → negative).
    pub(crate) fn track(&mut self, event: &UiEvent, rect: Rect) -> Option<f32> {
        match *event {
            UiEvent::Drag { pos, start } if rect.contains(start) => {
                let prev = self.last.unwrap_or(start);
                self.last = Some(pos);
                Some(pos.y - prev.y)
            }
            UiEvent::DragEnd { .. } => {
                self.last = None;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::block::Block;
    use crate::widgets::column::Column;

    fn list(rows: usize) -> ScrollView {
        let grey = Color::from_straight(0.4, 0.4, 0.4, 1.0);
        ScrollView::new(Column::new().children((0..rows).map(|_| Block::new(grey).height(50.0))))
    }

    /// 10 rows of 50 px in a 200 px viewport → max offset 300.
    fn synced(rows: usize) -> ScrollView {
        let sv = list(rows);
        sv.sync_viewport(Rect::new(0.0, 0.0, 100.0, 200.0), &LayoutCtx::default());
        sv
    }

    // ── scroll_by ─────────────────────────────────────────────────────────

    #[test]
    fn scroll_by_moves_offset_and_reports_consumed() {
        let mut sv = synced(10);
        assert_eq!(sv.max_offset(), 300.0);
        assert_eq!(sv.scroll_by(-120.0), -120.0);
        assert_eq!(sv.scroll_offset, 120.0);
        assert_eq!(sv.scroll_by(20.0), 20.0);
        assert_eq!(sv.scroll_offset, 100.0);
    }

    #[test]
    fn scroll_by_leaves_overflow_unconsumed() {
        let mut sv = synced(10);
        assert_eq!(sv.scroll_by(-1000.0), -300.0);
        assert_eq!(sv.scroll_offset, 300.0);
        assert_eq!(sv.scroll_by(500.0), 300.0);
        assert_eq!(sv.scroll_offset, 0.0);
        assert_eq!(sv.scroll_by(10.0), 0.0);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut sv = synced(2);
        assert_eq!(sv.scroll_by(-50.0), 0.0);
        assert_eq!(sv.scroll_offset, 0.0);
    }

    #[test]
    fn offset_is_clamped_to_cached_range() {
        let mut sv = synced(10);
        sv.scroll_offset = 5000.0;
        assert_eq!(sv.offset(), 300.0);
        sv.scroll_offset = -20.0;
        assert_eq!(sv.offset(), 0.0);

        let mut short = synced(2);
        short.scroll_offset = 80.0;
        assert_eq!(short.offset(), 0.0);
    }

    #[test]
    fn on_scroll_fires_only_on_change() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut sv = list(10).on_scroll(move |o| sink.borrow_mut().push(o));
        sv.sync_viewport(Rect::new(0.0, 0.0, 100.0, 200.0), &LayoutCtx::default());

        sv.scroll_by(-40.0);
        sv.scroll_by(100.0); // clamps at 0: one change
        sv.scroll_by(5.0); // already at the top: no change
        assert_eq!(*seen.borrow(), vec![40.0, 0.0]);
    }

    // ── events ────────────────────────────────────────────────────────────

    #[test]
    fn wheel_scrolls_by_line_height() {
        let mut sv = list(10).line_height(30.0);
        let rect = Rect::new(0.0, 0.0, 100.0, 200.0);
        let r = sv.on_event(&UiEvent::ScrollWheel { delta: 2.0 }, rect, &LayoutCtx::default());
        assert!(r.is_consumed());
        assert_eq!(sv.scroll_offset, 60.0);
    }

    #[test]
    fn drag_up_reveals_content_below() {
        let mut sv = list(10);
        let rect = Rect::new(0.0, 0.0, 100.0, 200.0);
        let ctx = LayoutCtx::default();
        let start = Vec2::new(50.0, 150.0);
        sv.on_event(&UiEvent::Drag { pos: Vec2::new(50.0, 130.0), start }, rect, &ctx);
        sv.on_event(&UiEvent::Drag { pos: Vec2::new(50.0, 100.0), start }, rect, &ctx);
        assert_eq!(sv.scroll_offset, 50.0);
        sv.on_event(&UiEvent::DragEnd { pos: Vec2::new(50.0, 100.0), start }, rect, &ctx);
        assert!(sv.drag.last.is_none());
    }

    #[test]
    fn drag_started_outside_is_ignored() {
        let mut tracker = DragTracker::default();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let ev = UiEvent::Drag { pos: Vec2::new(10.0, 10.0), start: Vec2::new(10.0, 300.0) };
        assert_eq!(tracker.track(&ev, rect), None);
    }

    // ── scrollbar ─────────────────────────────────────────────────────────

    #[test]
    fn thumb_tracks_offset() {
        let mut sv = synced(10);
        let rect = Rect::new(0.0, 0.0, 100.0, 200.0);
        let (_, thumb) = sv.scrollbar_rects(rect, 500.0).unwrap();
        assert_eq!(thumb.origin.y, 0.0);
        assert_eq!(thumb.size.y, 80.0); // 200 * 200/500

        sv.scroll_by(-300.0);
        let (_, thumb) = sv.scrollbar_rects(rect, 500.0).unwrap();
        assert_eq!(thumb.origin.y + thumb.size.y, 200.0);
    }

    #[test]
    fn no_scrollbar_when_content_fits() {
        let sv = synced(2);
        assert!(sv.scrollbar_rects(Rect::new(0.0, 0.0, 100.0, 200.0), 100.0).is_none());
    }
}
