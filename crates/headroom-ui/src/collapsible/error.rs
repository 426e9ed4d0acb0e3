use thiserror::Error;

/// Errors raised while setting up a collapsible header.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CollapseError {
    /// The header has no room to collapse: `max_extent` must be finite and
    /// strictly greater than a finite `min_extent`.
    #[error("invalid header extents: max extent {max_extent} must exceed min extent {min_extent}")]
    InvalidConfiguration { min_extent: f32, max_extent: f32 },
}
