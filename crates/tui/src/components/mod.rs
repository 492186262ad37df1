//! UI building blocks shared across rendering and state modules.

/// Paging summary line.
pub mod footer;
/// Input prompt rendering.
pub mod prompt;
/// Table row construction and highlighting.
pub mod rows;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;

pub use footer::{FooterContext, render_footer};
pub use prompt::{InputContext, render_input};
pub use scrollbar::{point_in_rect, render_scrollbar};
pub use tables::{TableRenderState, TableSpec, render_table};
