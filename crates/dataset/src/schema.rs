use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::error::SchemaError;
use crate::record::Dataset;

/// Expected JSON type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
	Any,
	String,
	Number,
	Bool,
	Null,
	Array,
	Object,
}

impl FieldType {
	/// Type of a concrete value. Never returns [`FieldType::Any`].
	#[must_use]
	pub fn of(value: &Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(_) => Self::Bool,
			Value::Number(_) => Self::Number,
			Value::String(_) => Self::String,
			Value::Array(_) => Self::Array,
			Value::Object(_) => Self::Object,
		}
	}

	#[must_use]
	pub fn accepts(self, value: &Value) -> bool {
		self == Self::Any || self == Self::of(value)
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Any => "any",
			Self::String => "string",
			Self::Number => "number",
			Self::Bool => "bool",
			Self::Null => "null",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for FieldType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown field type `{0}` (expected any, string, number, bool, null, array or object)")]
pub struct UnknownFieldType(pub String);

impl FromStr for FieldType {
	type Err = UnknownFieldType;

	fn from_str(input: &str) -> Result<Self, Self::Err> {
		match input.trim().to_ascii_lowercase().as_str() {
			"any" => Ok(Self::Any),
			"string" | "str" => Ok(Self::String),
			"number" | "num" => Ok(Self::Number),
			"bool" | "boolean" => Ok(Self::Bool),
			"null" => Ok(Self::Null),
			"array" => Ok(Self::Array),
			"object" => Ok(Self::Object),
			_ => Err(UnknownFieldType(input.to_string())),
		}
	}
}

/// Declared record shape: an ordered list of fields and their types.
///
/// Fields missing from a record are accepted; only fields that are present
/// are checked. Fields not named by the schema are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
	fields: Vec<(String, FieldType)>,
}

impl Schema {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Declare a field, replacing the type of an existing declaration.
	#[must_use]
	pub fn with_field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
		self.insert(name.into(), field_type);
		self
	}

	fn insert(&mut self, name: String, field_type: FieldType) {
		match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
			Some((_, slot)) => *slot = field_type,
			None => self.fields.push((name, field_type)),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	#[must_use]
	pub fn fields(&self) -> &[(String, FieldType)] {
		&self.fields
	}

	/// Declared field names in declaration order.
	#[must_use]
	pub fn field_names(&self) -> Vec<String> {
		self.fields.iter().map(|(name, _)| name.clone()).collect()
	}

	/// Check every record, reporting the first field with the wrong type.
	pub fn validate(&self, dataset: &Dataset) -> Result<(), SchemaError> {
		for (index, record) in dataset.iter().enumerate() {
			for (field, expected) in &self.fields {
				let Some(value) = record.get(field) else {
					continue;
				};
				if !expected.accepts(value) {
					return Err(SchemaError {
						index,
						field: field.clone(),
						expected: *expected,
						found: FieldType::of(value),
					});
				}
			}
		}
		Ok(())
	}
}

impl FromIterator<(String, FieldType)> for Schema {
	fn from_iter<I: IntoIterator<Item = (String, FieldType)>>(iter: I) -> Self {
		let mut schema = Self::new();
		for (name, field_type) in iter {
			schema.insert(name, field_type);
		}
		schema
	}
}
