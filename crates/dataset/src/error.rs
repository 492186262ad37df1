use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::schema::FieldType;

/// Failure to load a dataset for a resource identifier.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The resource could not be reached or answered with a non-success status.
	#[error("failed to retrieve {location}")]
	Retrieval {
		location: String,
		#[source]
		source: RetrievalError,
	},

	/// The body was not a JSON array of records.
	#[error("failed to parse the dataset from {location}")]
	Parse {
		location: String,
		#[source]
		source: ParseError,
	},

	/// A record did not satisfy the configured schema.
	#[error("dataset from {location} does not match the declared schema")]
	Schema {
		location: String,
		#[source]
		source: SchemaError,
	},
}

impl LoadError {
	/// Printable form of the resolved location the error refers to.
	#[must_use]
	pub fn location(&self) -> &str {
		match self {
			Self::Retrieval { location, .. }
			| Self::Parse { location, .. }
			| Self::Schema { location, .. } => location,
		}
	}

	#[must_use]
	pub fn is_retrieval(&self) -> bool {
		matches!(self, Self::Retrieval { .. })
	}

	#[must_use]
	pub fn is_parse(&self) -> bool {
		matches!(self, Self::Parse { .. })
	}
}

/// Reasons a resource could not be retrieved.
#[derive(Debug, Error)]
pub enum RetrievalError {
	#[error("invalid resource identifier")]
	InvalidIdentifier(#[from] url::ParseError),

	#[error("request failed")]
	Http(#[from] reqwest::Error),

	#[error("server answered {status}")]
	Status { status: StatusCode },

	#[error("failed to read file")]
	Io(#[from] std::io::Error),

	#[error("no response within {0:?}")]
	Timeout(Duration),
}

/// Reasons a retrieved body is not a dataset.
#[derive(Debug, Error)]
pub enum ParseError {
	#[error("body is not valid JSON")]
	Json(#[from] serde_json::Error),

	#[error("expected a JSON array of records, found {found}")]
	NotAnArray { found: &'static str },

	#[error("record {index} is {found}, expected a JSON object")]
	NotARecord { index: usize, found: &'static str },
}

/// A record field that does not have its declared type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("record {index}: field `{field}` should be {expected} but is {found}")]
pub struct SchemaError {
	pub index: usize,
	pub field: String,
	pub expected: FieldType,
	pub found: FieldType,
}
