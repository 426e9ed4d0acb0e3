//! Nested scroll dispatch.
//!
//! A scroll gesture tick travels through three phases:
//!
//! 1. **pre-scroll** — the coordinating ancestor ([`NestedScrollConnection`])
//!    may claim part of the delta before the scroll target sees it;
//! 2. the inner scroll target consumes what it can of the remainder;
//! 3. **post-scroll** — the ancestor is offered whatever is still left.
//!
//! Deltas use scroll space: `y < 0` pushes content up (reveals content below).
//! Dispatch is vertical-only; the horizontal component never reaches the
//! inner target.

use headroom_engine::coords::Vec2;

/// Where a scroll delta came from.
///
/// Connections may inspect this, but the collapsible header treats every
/// source the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollSource {
    /// Pointer or touch drag.
    Drag,
    /// Mouse wheel / trackpad.
    Wheel,
    /// Host-driven fling or programmatic scroll.
    Fling,
}

/// A coordinating ancestor taking part in nested scroll dispatch.
pub trait NestedScrollConnection {
    /// Offered `available` before the inner target scrolls.
    ///
    /// `inner_offset` is the inner target's current scroll position, sampled
    /// fresh for this tick. Returns the delta this connection consumed.
    fn on_pre_scroll(&mut self, _available: Vec2, _source: ScrollSource, _inner_offset: f32) -> Vec2 {
        Vec2::zero()
    }

    /// Offered the delta the inner target left unconsumed.
    fn on_post_scroll(&mut self, _consumed: Vec2, _available: Vec2, _source: ScrollSource) -> Vec2 {
        Vec2::zero()
    }
}

/// Per-phase vertical consumption of one dispatched tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOutcome {
    pub pre_consumed: f32,
    pub inner_consumed: f32,
    pub post_consumed: f32,
}

impl ScrollOutcome {
    /// Total vertical delta consumed across all phases.
    #[inline]
    pub fn total(self) -> f32 {
        self.pre_consumed + self.inner_consumed + self.post_consumed
    }
}

/// Runs one tick of `available` through `connection` and the inner target.
///
/// `inner` receives the connection (already updated by pre-scroll) and the
/// vertical delta left over, and returns the part it consumed.
pub fn dispatch_scroll<C, F>(
    connection: &mut C,
    available: Vec2,
    source: ScrollSource,
    inner_offset: f32,
    inner: F,
) -> ScrollOutcome
where
    C: NestedScrollConnection + ?Sized,
    F: FnOnce(&C, f32) -> f32,
{
    let pre = connection.on_pre_scroll(available, source, inner_offset).y;
    let left = available.y - pre;

    let inner_consumed = if left != 0.0 { inner(&*connection, left) } else { 0.0 };
    let left = left - inner_consumed;

    let post = if left != 0.0 {
        connection
            .on_post_scroll(Vec2::new(0.0, pre + inner_consumed), Vec2::new(0.0, left), source)
            .y
    } else {
        0.0
    };

    ScrollOutcome { pre_consumed: pre, inner_consumed, post_consumed: post }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Claims a fixed share of every pre-scroll and records post-scroll offers.
    struct Greedy {
        share: f32,
        post_offers: Vec<f32>,
    }

    impl NestedScrollConnection for Greedy {
        fn on_pre_scroll(&mut self, available: Vec2, _source: ScrollSource, _inner_offset: f32) -> Vec2 {
            Vec2::new(0.0, available.y * self.share)
        }

        fn on_post_scroll(&mut self, _consumed: Vec2, available: Vec2, _source: ScrollSource) -> Vec2 {
            self.post_offers.push(available.y);
            Vec2::zero()
        }
    }

    struct Passive;
    impl NestedScrollConnection for Passive {}

    #[test]
    fn default_connection_consumes_nothing() {
        let out = dispatch_scroll(&mut Passive, Vec2::new(0.0, -12.0), ScrollSource::Drag, 0.0, |_, d| d);
        assert_eq!(out, ScrollOutcome { pre_consumed: 0.0, inner_consumed: -12.0, post_consumed: 0.0 });
    }

    #[test]
    fn inner_receives_remainder_after_pre_scroll() {
        let mut c = Greedy { share: 0.25, post_offers: Vec::new() };
        let mut seen = None;
        let out = dispatch_scroll(&mut c, Vec2::new(0.0, -40.0), ScrollSource::Wheel, 0.0, |_, d| {
            seen = Some(d);
            d
        });
        assert_eq!(seen, Some(-30.0));
        assert_eq!(out.total(), -40.0);
        assert!(c.post_offers.is_empty());
    }

    #[test]
    fn leftover_is_offered_post_scroll() {
        let mut c = Greedy { share: 0.5, post_offers: Vec::new() };
        // Inner target is pinned and consumes nothing.
        let out = dispatch_scroll(&mut c, Vec2::new(0.0, 20.0), ScrollSource::Fling, 0.0, |_, _| 0.0);
        assert_eq!(out.pre_consumed, 10.0);
        assert_eq!(c.post_offers, vec![10.0]);
    }

    #[test]
    fn inner_not_called_when_pre_scroll_takes_everything() {
        let mut c = Greedy { share: 1.0, post_offers: Vec::new() };
        let out = dispatch_scroll(&mut c, Vec2::new(3.0, -8.0), ScrollSource::Drag, 0.0, |_, _| {
            panic!("inner should not be reached")
        });
        assert_eq!(out.pre_consumed, -8.0);
    }
}
