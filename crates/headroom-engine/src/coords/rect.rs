use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < (self.origin.x + self.size.x)
            && p.y < (self.origin.y + self.size.y)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.origin.x.max(other.origin.x);
        let y0 = self.origin.y.max(other.origin.y);
        let x1 = (self.origin.x + self.size.x).min(other.origin.x + other.size.x);
        let y1 = (self.origin.y + self.size.y).min(other.origin.y + other.size.y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }

    /// Splits off a band of height `h` from the top.
    ///
    /// `h` is clamped into `[0, size.y]`, so the two halves always tile `self`.
    #[inline]
    pub fn split_top(self, h: f32) -> (Rect, Rect) {
        let h = h.clamp(0.0, self.size.y.max(0.0));
        let top = Rect::new(self.origin.x, self.origin.y, self.size.x, h);
        let rest = Rect::new(
            self.origin.x,
            self.origin.y + h,
            self.size.x,
            (self.size.y - h).max(0.0),
        );
        (top, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(b), Some(r(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersect(b).is_none());
    }

    // ── split_top ─────────────────────────────────────────────────────────

    #[test]
    fn split_top_tiles_the_rect() {
        let (top, rest) = r(0.0, 10.0, 100.0, 300.0).split_top(120.0);
        assert_eq!(top, r(0.0, 10.0, 100.0, 120.0));
        assert_eq!(rest, r(0.0, 130.0, 100.0, 180.0));
    }

    #[test]
    fn split_top_clamps_overlong_band() {
        let (top, rest) = r(0.0, 0.0, 50.0, 40.0).split_top(90.0);
        assert_eq!(top.size.y, 40.0);
        assert_eq!(rest.size.y, 0.0);
        assert!(rest.is_empty());
    }

    #[test]
    fn split_top_negative_height_is_empty_band() {
        let (top, rest) = r(0.0, 0.0, 50.0, 40.0).split_top(-5.0);
        assert!(top.is_empty());
        assert_eq!(rest, r(0.0, 0.0, 50.0, 40.0));
    }
}
