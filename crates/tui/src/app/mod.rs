//! Interactive table application.
//!
//! [`App`] wraps a [`TableView`](crate::view::TableView) with the terminal
//! widgets around it. Input handling lives in `actions`, rendering in `draw`.

mod actions;
mod draw;
mod state;
#[cfg(test)]
mod tests;

pub use state::{App, Reloader};
