use headroom_engine::coords::Vec2;

/// Input events routed through the widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Mouse moved to `pos` (fired every frame).
    Hover { pos: Vec2 },
    /// Pointer moved while the primary button is held.
    /// `pos` is the current position; `start` is where the drag began.
    Drag { pos: Vec2, start: Vec2 },
    /// Primary button released after a drag.
    ///
    /// Fires even when `pos` is outside the widget; use `rect.contains(start)`
    /// to check ownership of the drag.
    DragEnd { pos: Vec2, start: Vec2 },
    /// Mouse wheel / trackpad scroll in lines.
    ///
    /// `delta` > 0 → scroll down (reveal content below); < 0 → scroll up.
    ScrollWheel { delta: f32 },
    /// One tick of a host-driven fling, already in scroll-delta space
    /// (`y < 0` pushes content up).
    Fling { delta: Vec2 },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled — stop routing to siblings / parents.
    Consumed,
    /// Event was not handled — keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
