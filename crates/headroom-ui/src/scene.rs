use headroom_engine::coords::{Rect, Vec2};
use headroom_engine::scene::DrawList;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
    /// Where the current drag began, while one is in progress.
    pub drag_start: Option<Vec2>,
    /// `true` for exactly one frame when a drag's button is released.
    pub drag_released: bool,
    /// Accumulated scroll wheel delta this frame in lines (positive = scroll down).
    pub scroll_delta: f32,
    /// Host fling tick for this frame in scroll space (`y < 0` pushes content up).
    pub fling_delta: Vec2,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level frame driver.
///
/// Owns the `DrawList` populated each frame and turns [`UiInput`] snapshots
/// into [`UiEvent`]s routed through the root widget.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut root: Element = CollapsibleHeader::new(state, header, body).into();
///
/// // In your frame callback:
/// let draw_list = ui.frame_ref(&mut root, viewport, &input);
/// renderer.render(draw_list);
/// ```
pub struct UiScene {
    pub draw_list: DrawList,
    /// Physical-to-logical pixel ratio.
    pub scale: f32,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new(), scale: 1.0 }
    }

    /// Lays out and paints `root`, then routes this frame's input to it.
    ///
    /// The root is borrowed so it keeps state (scroll offsets, header
    /// progress) across frames. Input routed this frame shows up in the
    /// next frame's draw list.
    pub fn frame_ref(&mut self, root: &mut Element, viewport: Vec2, input: &UiInput) -> &DrawList {
        self.draw_list.clear();
        let ctx = LayoutCtx { scale: self.scale };
        let _ = root.measure(Constraints::loose(viewport), &ctx);
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);
        {
            let mut painter = Painter::new(&mut self.draw_list, self.scale);
            root.paint(&mut painter, rect);
        }

        for event in Self::events(input) {
            root.on_event(&event, rect, &ctx);
        }
        &self.draw_list
    }

    fn events(input: &UiInput) -> Vec<UiEvent> {
        let mut out = vec![UiEvent::Hover { pos: input.mouse_pos }];
        if let Some(start) = input.drag_start {
            if input.mouse_pressed {
                out.push(UiEvent::Drag { pos: input.mouse_pos, start });
            }
            if input.drag_released {
                out.push(UiEvent::DragEnd { pos: input.mouse_pos, start });
            }
        }
        if input.scroll_delta != 0.0 {
            out.push(UiEvent::ScrollWheel { delta: input.scroll_delta });
        }
        if input.fling_delta != Vec2::zero() {
            out.push(UiEvent::Fling { delta: input.fling_delta });
        }
        out
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collapsible::{CollapsibleHeaderState, HeaderExtents};
    use crate::widgets::block::Block;
    use crate::widgets::collapsible_header::CollapsibleHeader;
    use crate::widgets::column::Column;
    use crate::widgets::scroll::ScrollView;
    use headroom_engine::paint::Color;
    use headroom_engine::scene::DrawCmd;

    fn red() -> Color { Color::from_straight(1.0, 0.0, 0.0, 1.0) }
    fn grey() -> Color { Color::from_straight(0.4, 0.4, 0.4, 1.0) }

    fn root() -> Element {
        let state = CollapsibleHeaderState::expanded(HeaderExtents::new(40.0, 120.0)).unwrap();
        let body = ScrollView::new(Column::new().children((0..30).map(|_| Block::new(grey()).height(40.0))))
            .show_scrollbar(false);
        CollapsibleHeader::new(state, |_| Block::new(red()).into(), body).into()
    }

    /// Height of the first red rect in the draw list (the header).
    fn header_height(list: &DrawList) -> f32 {
        list.items()
            .iter()
            .find_map(|item| match &item.cmd {
                DrawCmd::Rect(r) if r.color == red() => Some(r.rect.size.y),
                _ => None,
            })
            .unwrap()
    }

    // ── event synthesis ───────────────────────────────────────────────────

    #[test]
    fn idle_input_only_hovers() {
        let events = UiScene::events(&UiInput::default());
        assert_eq!(events, vec![UiEvent::Hover { pos: Vec2::zero() }]);
    }

    #[test]
    fn drag_release_emits_drag_end() {
        let input = UiInput {
            mouse_pos: Vec2::new(5.0, 5.0),
            drag_start: Some(Vec2::new(5.0, 50.0)),
            drag_released: true,
            ..Default::default()
        };
        let events = UiScene::events(&input);
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], UiEvent::DragEnd { .. }));
    }

    // ── end to end ────────────────────────────────────────────────────────

    #[test]
    fn wheel_collapses_header_in_next_frame() {
        let mut ui = UiScene::new();
        let mut root = root();
        let viewport = Vec2::new(200.0, 300.0);

        let list = ui.frame_ref(&mut root, viewport, &UiInput { scroll_delta: 2.0, ..Default::default() });
        assert_eq!(header_height(list), 120.0);

        let list = ui.frame_ref(&mut root, viewport, &UiInput::default());
        // Two wheel lines of 24 px collapse the header by 48.
        assert_eq!(header_height(list), 72.0);
    }

    #[test]
    fn fling_past_collapse_scrolls_body_rows() {
        let mut ui = UiScene::new();
        let mut root = root();
        let viewport = Vec2::new(200.0, 300.0);

        let fling = UiInput { fling_delta: Vec2::new(0.0, -100.0), ..Default::default() };
        let _ = ui.frame_ref(&mut root, viewport, &fling);
        let list = ui.frame_ref(&mut root, viewport, &UiInput::default());

        assert_eq!(header_height(list), 40.0);
        // 80 px went to the header, 20 px to the body: first row starts 20 px above the body.
        let first_row = list
            .items()
            .iter()
            .find_map(|item| match &item.cmd {
                DrawCmd::Rect(r) if r.color == grey() => Some(r.rect),
                _ => None,
            })
            .unwrap();
        assert_eq!(first_row.origin.y, 20.0);
        assert!(list.items()[0].clip_rect.is_some());
    }
}
