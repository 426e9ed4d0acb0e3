use headroom_engine::coords::Vec2;

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. Parents enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: child can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Replace the height constraint with `f32::INFINITY` (used by vertical stacks).
    #[inline]
    #[must_use]
    pub fn with_infinite_height(self) -> Self {
        Self { max: Vec2::new(self.max.x, f32::INFINITY), ..self }
    }

    /// Largest finite width allowed, or `fallback` when unbounded.
    #[inline]
    pub fn finite_width_or(self, fallback: f32) -> f32 {
        if self.max.x.is_finite() { self.max.x } else { fallback }
    }

    /// Largest finite height allowed, or `fallback` when unbounded.
    #[inline]
    pub fn finite_height_or(self, fallback: f32) -> f32 {
        if self.max.y.is_finite() { self.max.y } else { fallback }
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Per-frame resources made available to [`Widget::measure`](crate::widget::Widget::measure)
/// and [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy)]
pub struct LayoutCtx {
    /// Physical-to-logical pixel ratio for this frame.
    pub scale: f32,
}

impl Default for LayoutCtx {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}
