use headroom_engine::coords::Vec2;
use log::{debug, trace};

use super::CollapseError;
use crate::nested_scroll::{NestedScrollConnection, ScrollSource};

// ── HeaderExtents ─────────────────────────────────────────────────────────

/// Height range of a collapsible header in logical pixels.
///
/// The header is `max` tall when fully expanded and `min` tall when fully
/// collapsed; `max - min` is the collapse budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderExtents {
    pub min: f32,
    pub max: f32,
}

impl HeaderExtents {
    #[inline]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Distance the header can shrink (`max - min`).
    #[inline]
    pub fn collapse_distance(self) -> f32 {
        self.max - self.min
    }

    fn validate(self) -> Result<f32, CollapseError> {
        let distance = self.collapse_distance();
        if self.min.is_finite() && self.max.is_finite() && distance > 0.0 {
            Ok(distance)
        } else {
            Err(CollapseError::InvalidConfiguration { min_extent: self.min, max_extent: self.max })
        }
    }
}

impl Default for HeaderExtents {
    /// Toolbar-sized collapsed header, roomy expanded header.
    fn default() -> Self {
        Self { min: 56.0, max: 200.0 }
    }
}

// ── HeaderFrame ───────────────────────────────────────────────────────────

/// Snapshot handed to the header renderer every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderFrame {
    /// 1 = fully expanded, 0 = fully collapsed.
    pub progress: f32,
    /// `progress * (max_extent - min_extent)` in logical pixels.
    pub progress_extent: f32,
    pub min_extent: f32,
    pub max_extent: f32,
}

impl HeaderFrame {
    /// Current header height: `min_extent + progress_extent`.
    #[inline]
    pub fn height(self) -> f32 {
        self.min_extent + self.progress_extent
    }
}

// ── CollapsibleHeaderState ────────────────────────────────────────────────

/// Scroll coordinator for a collapsing header above a scrollable body.
///
/// Tracks how much of the collapse budget is used up and decides, per
/// pre-scroll tick, how much of a vertical delta the header claims. The rest
/// is left for the body.
///
/// Invariants, after every call:
/// - `0 <= consumed_distance() <= max_collapse_distance()`
/// - `progress() == 1 - consumed_distance() / max_collapse_distance()`
///
/// # Example
/// ```rust,ignore
/// let mut state = CollapsibleHeaderState::expanded(HeaderExtents::new(56.0, 156.0))?;
/// let consumed = state.intercept_scroll(Vec2::new(0.0, -30.0), 0.0);
/// assert_eq!(consumed.y, -30.0);
/// assert_eq!(state.progress(), 0.7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CollapsibleHeaderState {
    extents: HeaderExtents,
    max_collapse_distance: f32,
    consumed_distance: f32,
}

impl CollapsibleHeaderState {
    /// Creates a coordinator starting at `initial_progress`.
    ///
    /// `initial_progress` is clamped to [0, 1]; NaN starts fully expanded.
    pub fn new(extents: HeaderExtents, initial_progress: f32) -> Result<Self, CollapseError> {
        let max_collapse_distance = extents.validate()?;
        let progress = if initial_progress.is_nan() { 1.0 } else { initial_progress.clamp(0.0, 1.0) };

        let state = Self {
            extents,
            max_collapse_distance,
            consumed_distance: max_collapse_distance * (1.0 - progress),
        };
        debug!(
            "collapsible header: extents {}..{}, budget {}, progress {}",
            extents.min,
            extents.max,
            max_collapse_distance,
            state.progress()
        );
        Ok(state)
    }

    /// Creates a fully expanded coordinator.
    pub fn expanded(extents: HeaderExtents) -> Result<Self, CollapseError> {
        Self::new(extents, 1.0)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn extents(&self) -> HeaderExtents {
        self.extents
    }

    #[inline]
    pub fn max_collapse_distance(&self) -> f32 {
        self.max_collapse_distance
    }

    #[inline]
    pub fn consumed_distance(&self) -> f32 {
        self.consumed_distance
    }

    /// 1 = fully expanded, 0 = fully collapsed.
    #[inline]
    pub fn progress(&self) -> f32 {
        1.0 - self.consumed_distance / self.max_collapse_distance
    }

    /// Expanded part of the collapse budget in logical pixels.
    #[inline]
    pub fn progress_extent(&self) -> f32 {
        self.progress() * self.max_collapse_distance
    }

    /// Header height for this frame.
    #[inline]
    pub fn header_height(&self) -> f32 {
        self.extents.min + self.progress_extent()
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.progress() <= 0.0
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn frame(&self) -> HeaderFrame {
        HeaderFrame {
            progress: self.progress(),
            progress_extent: self.progress_extent(),
            min_extent: self.extents.min,
            max_extent: self.extents.max,
        }
    }

    // ── programmatic control ──────────────────────────────────────────────

    /// Jumps to `progress` (clamped to [0, 1]; NaN is ignored).
    pub fn set_progress(&mut self, progress: f32) {
        if progress.is_nan() {
            return;
        }
        self.set_consumed(self.max_collapse_distance * (1.0 - progress.clamp(0.0, 1.0)));
    }

    pub fn expand(&mut self) {
        self.set_consumed(0.0);
    }

    pub fn collapse(&mut self) {
        self.set_consumed(self.max_collapse_distance);
    }

    // ── scroll interception ───────────────────────────────────────────────

    /// Pre-scroll interception of one scroll tick.
    ///
    /// `available` is in scroll space (`y < 0` collapses, `y > 0` expands).
    /// `inner_scroll_offset` is the body's current scroll position; the
    /// header only re-expands with the part of a downward delta that exceeds it.
    ///
    /// Returns the claimed delta: `y` is the vertical part claimed by the
    /// header, `x` is `available.x` passed through untouched.
    pub fn intercept_scroll(&mut self, available: Vec2, inner_scroll_offset: f32) -> Vec2 {
        let dy = available.y;
        let consumed = if dy == 0.0 || dy.is_nan() {
            0.0
        } else if dy < 0.0 {
            self.consume_collapsing(dy)
        } else {
            self.consume_expanding(dy, inner_scroll_offset)
        };

        trace!(
            "intercept dy={} inner={} -> consumed={} progress={}",
            dy,
            inner_scroll_offset,
            consumed,
            self.progress()
        );
        Vec2::new(available.x, consumed)
    }

    /// `dy < 0`: shrink the header by as much of `|dy|` as the budget allows.
    fn consume_collapsing(&mut self, dy: f32) -> f32 {
        if self.progress() <= 0.0 {
            return 0.0;
        }
        let allowed = self.max_collapse_distance - self.consumed_distance;
        let overflow = -dy - allowed;
        if overflow <= 0.0 {
            self.set_consumed(self.consumed_distance - dy);
            dy
        } else {
            self.set_consumed(self.max_collapse_distance);
            -allowed
        }
    }

    /// `dy > 0`: grow the header once the body has scrolled back to its top.
    fn consume_expanding(&mut self, dy: f32, inner_scroll_offset: f32) -> f32 {
        if self.progress() >= 1.0 {
            return 0.0;
        }
        let from_inner = dy - inner_scroll_offset;
        if from_inner.is_nan() || from_inner <= 0.0 {
            return 0.0;
        }
        let overflow = from_inner - self.consumed_distance;
        if overflow <= 0.0 {
            self.set_consumed(self.consumed_distance - from_inner);
            dy
        } else {
            let given_back = self.consumed_distance;
            self.set_consumed(0.0);
            given_back
        }
    }

    #[inline]
    fn set_consumed(&mut self, v: f32) {
        self.consumed_distance = v.clamp(0.0, self.max_collapse_distance);
    }
}

impl NestedScrollConnection for CollapsibleHeaderState {
    fn on_pre_scroll(&mut self, available: Vec2, _source: ScrollSource, inner_offset: f32) -> Vec2 {
        self.intercept_scroll(available, inner_offset)
    }
}
