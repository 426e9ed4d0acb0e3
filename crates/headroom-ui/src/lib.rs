//! Headroom UI — retained widget tree with a collapsing-header scroll coordinator.
//!
//! The centrepiece is [`collapsible::CollapsibleHeaderState`], which splits
//! every vertical scroll tick between a shrinking header and the scrollable
//! body below it. [`widgets::collapsible_header::CollapsibleHeader`] wires it
//! into the widget tree and acts as the nested scroll dispatcher.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use headroom_ui::prelude::*;
//!
//! let state = CollapsibleHeaderState::expanded(HeaderExtents::new(56.0, 200.0))?;
//! let mut root: Element = CollapsibleHeader::new(
//!     state,
//!     |frame| Block::new(Color::from_straight(0.1, 0.3, 0.8, frame.progress)).into(),
//!     ScrollView::new(Column::new().children(rows)),
//! )
//! .into();
//!
//! let mut scene = UiScene::new();
//! // In your frame callback:
//! let draw_list = scene.frame_ref(&mut root, viewport, &input);
//! ```

pub mod collapsible;
pub mod constraints;
pub mod event;
pub mod nested_scroll;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend UI.
pub mod prelude {
    pub use crate::collapsible::{CollapseError, CollapsibleHeaderState, HeaderExtents, HeaderFrame};
    pub use crate::constraints::{Constraints, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::nested_scroll::{dispatch_scroll, NestedScrollConnection, ScrollOutcome, ScrollSource};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        block::Block,
        collapsible_header::CollapsibleHeader,
        column::Column,
        scroll::ScrollView,
    };

    pub use headroom_engine::coords::{Rect, Vec2};
    pub use headroom_engine::paint::Color;
}
