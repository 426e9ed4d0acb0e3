use headroom_engine::coords::{Rect, Vec2};
use log::debug;

use crate::collapsible::{CollapsibleHeaderState, HeaderFrame};
use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::nested_scroll::{dispatch_scroll, ScrollOutcome, ScrollSource};
use crate::painter::Painter;
use crate::widget::{Element, Widget};
use crate::widgets::scroll::{DragTracker, ScrollView};

/// A header that collapses as its body scrolls, stacked above that body.
///
/// The header is rebuilt every paint from a [`HeaderFrame`] and laid out at
/// `min_extent + progress_extent`; the body fills the rest. Wheel, drag and
/// fling deltas are offered to the [`CollapsibleHeaderState`] first, and only
/// the remainder scrolls the body.
///
/// # Example
/// ```rust,ignore
/// let state = CollapsibleHeaderState::expanded(HeaderExtents::new(56.0, 200.0))?;
/// CollapsibleHeader::new(
///     state,
///     |f: HeaderFrame| Block::new(collapsed.lerp(expanded, f.progress)).into(),
///     ScrollView::new(rows),
/// )
/// .on_progress(|f| log::info!("header at {}", f.progress))
/// ```
pub struct CollapsibleHeader {
    state: CollapsibleHeaderState,
    header: Box<dyn Fn(HeaderFrame) -> Element>,
    body: ScrollView,
    drag: DragTracker,
    on_progress: Option<Box<dyn FnMut(HeaderFrame)>>,
}

impl CollapsibleHeader {
    pub fn new(
        state: CollapsibleHeaderState,
        header: impl Fn(HeaderFrame) -> Element + 'static,
        body: ScrollView,
    ) -> Self {
        Self {
            state,
            header: Box::new(header),
            body,
            drag: DragTracker::default(),
            on_progress: None,
        }
    }

    /// Called with the new frame whenever header progress changes.
    pub fn on_progress(mut self, f: impl FnMut(HeaderFrame) + 'static) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn state(&self) -> &CollapsibleHeaderState {
        &self.state
    }

    #[inline]
    pub fn body(&self) -> &ScrollView {
        &self.body
    }

    /// Routes one scroll-space delta through the header, then the body.
    ///
    /// `rect` is the widget's full rect; the body viewport is recomputed
    /// after the header has taken its share.
    pub fn dispatch(
        &mut self,
        available: Vec2,
        source: ScrollSource,
        rect: Rect,
        ctx: &LayoutCtx,
    ) -> ScrollOutcome {
        let before = self.state.progress();
        let (_, body_rect) = self.split(rect);
        self.body.sync_viewport(body_rect, ctx);
        let inner_offset = self.body.offset();

        let body = &mut self.body;
        let outcome = dispatch_scroll(&mut self.state, available, source, inner_offset, |state, left| {
            let (_, body_rect) = rect.split_top(state.header_height());
            body.sync_viewport(body_rect, ctx);
            body.scroll_by(left)
        });

        if self.state.progress() != before {
            let frame = self.state.frame();
            debug!(
                "header progress {:.3} -> {:.3} ({:?}), height {:.1}",
                before,
                frame.progress,
                source,
                frame.height()
            );
            if let Some(f) = &mut self.on_progress {
                f(frame);
            }
        }
        outcome
    }

    fn split(&self, rect: Rect) -> (Rect, Rect) {
        rect.split_top(self.state.header_height())
    }
}

impl Widget for CollapsibleHeader {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let w = constraints.finite_width_or(0.0);
        let header_h = self.state.header_height();
        let h = if constraints.max.y.is_finite() {
            constraints.max.y
        } else {
            let body = self.body.measure(Constraints::loose(Vec2::new(w, f32::INFINITY)), ctx);
            header_h + body.y
        };
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let (header_rect, body_rect) = self.split(rect);

        self.body.paint(painter, body_rect);

        let header = (self.header)(self.state.frame());
        painter.push_clip(header_rect);
        header.paint(painter, header_rect);
        painter.pop_clip();
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        let (available, source) = match event {
            UiEvent::ScrollWheel { delta } => {
                (Vec2::new(0.0, self.body.wheel_delta(*delta)), ScrollSource::Wheel)
            }
            UiEvent::Fling { delta } => (*delta, ScrollSource::Fling),
            UiEvent::Drag { .. } | UiEvent::DragEnd { .. } => match self.drag.track(event, rect) {
                Some(dy) => (Vec2::new(0.0, dy), ScrollSource::Drag),
                None => return EventResult::Ignored,
            },
            UiEvent::Hover { .. } => {
                let (_, body_rect) = self.split(rect);
                return self.body.on_event(event, body_rect, ctx);
            }
        };

        self.dispatch(available, source, rect, ctx);
        EventResult::Consumed
    }
}
