use crate::coords::Rect;
use crate::paint::Color;

use super::{DrawCmd, RectCmd};

/// Z-ordering key for draw items. Higher values appear on top.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// A single draw item: z-index, insertion order, command and clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub z: ZIndex,
    pub order: u32,
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
}

/// Recorded draw stream for a frame.
///
/// # Clipping
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to scope
/// draw commands to a scissor rect. Clips are intersected with the current
/// parent, so a scroll body nested under a header clips correctly.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    /// Stack of active scissor rects. The top is the effective clip,
    /// already intersected with all parents.
    clip_stack: Vec<Rect>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the clip stack. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.clip_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command; it inherits the current clip rect.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem {
            z,
            order,
            cmd,
            clip_rect: self.clip_stack.last().copied(),
        });
    }

    /// Records a solid rectangle draw command.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, color }));
    }

    /// Begins a scissor region, intersected with any parent clip.
    ///
    /// Calls must be balanced with [`pop_clip`](Self::pop_clip).
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap: zero-area clip so the renderer skips these items.
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> Color { Color::from_straight(1.0, 1.0, 1.0, 1.0) }

    #[test]
    fn items_inherit_current_clip() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex(0), Rect::new(0.0, 0.0, 5.0, 5.0), white());
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_solid_rect(ZIndex(1), Rect::new(0.0, 0.0, 5.0, 5.0), white());
        list.pop_clip();

        assert_eq!(list.items()[0].clip_rect, None);
        assert_eq!(list.items()[1].clip_rect, Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn nested_clip_intersects_parent() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        list.push_clip(Rect::new(50.0, 80.0, 100.0, 100.0));
        list.push_solid_rect(ZIndex(0), Rect::new(0.0, 0.0, 1.0, 1.0), white());
        assert_eq!(list.items()[0].clip_rect, Some(Rect::new(50.0, 80.0, 50.0, 20.0)));
    }

    #[test]
    fn disjoint_clip_is_zero_area() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(20.0, 20.0, 10.0, 10.0));
        list.push_solid_rect(ZIndex(0), Rect::new(0.0, 0.0, 1.0, 1.0), white());
        assert!(list.items()[0].clip_rect.is_some_and(Rect::is_empty));
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex(0), Rect::new(0.0, 0.0, 1.0, 1.0), white());
        list.clear();
        assert!(list.is_empty());
        list.push_solid_rect(ZIndex(0), Rect::new(0.0, 0.0, 1.0, 1.0), white());
        assert_eq!(list.items()[0].order, 0);
    }
}
