//! Dataset loading for `logview`.
//!
//! A dataset is the ordered list of JSON records returned by a single
//! resource. The [`Loader`] resolves a resource identifier against either an
//! HTTP base URL or a directory, retrieves the body and parses it into a
//! [`Dataset`], optionally validating it against a declared [`Schema`].

mod error;
mod loader;
mod record;
mod resolve;
mod schema;

pub use error::{LoadError, ParseError, RetrievalError, SchemaError};
pub use loader::Loader;
pub use record::{Dataset, Record, json_kind};
pub use resolve::{Location, ResourceResolver, SourceBase};
pub use schema::{FieldType, Schema, UnknownFieldType};
