//! Table display for `logview`.
//!
//! This crate turns a [`Dataset`](logview_dataset::Dataset) into a searchable,
//! sortable, paged table. [`TableView`] is the backend-free model; the
//! [`TerminalDisplay`] draws it with ratatui and [`PlainDisplay`] writes it as
//! text. Both are reached through the [`TableDisplay`] trait.

mod app;
pub mod components;
mod config;
mod display;
pub mod input;
mod runtime;
pub mod style;
mod view;

pub use app::{App, Reloader};
pub use config::{
	DEFAULT_PER_PAGE, SearchMode, SortDirection, SortKey, TableConfig, TableOptions, TableOutcome,
};
pub use display::{PlainDisplay, TableDisplay, TerminalDisplay};
pub use view::{TableView, cell_line, cell_text};

pub use crate::input::QueryInput;
pub use crate::style::{Theme, default_theme};
