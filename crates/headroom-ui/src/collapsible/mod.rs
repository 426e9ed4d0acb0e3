//! Collapsible header coordination.
//!
//! [`CollapsibleHeaderState`] splits each vertical scroll tick between a
//! collapsing header and the scrollable body below it, so the same gesture
//! is never applied twice.

mod error;
mod state;

pub use error::CollapseError;
pub use state::{CollapsibleHeaderState, HeaderExtents, HeaderFrame};
