pub mod block;
pub mod collapsible_header;
pub mod column;
pub mod scroll;
