//! Visual styling utilities.
//!
//! Themes are TOML documents bundled into the binary; see
//! `theme/builtins/themes` for the shipped set.

pub mod theme;

pub use theme::{Theme, ThemeRegistration, by_name, default_theme, names};
