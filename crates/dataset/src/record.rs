use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ParseError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A single displayable row: field name to JSON value, in source order.
pub type Record = Map<String, Value>;

/// Ordered collection of records parsed from one resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
	records: Vec<Record>,
}

impl Dataset {
	/// Create an empty dataset.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Wrap already-parsed records, keeping their order.
	#[must_use]
	pub fn from_records(records: Vec<Record>) -> Self {
		Self { records }
	}

	/// Parse a JSON document that must be an array of objects.
	///
	/// A leading UTF-8 byte order mark is skipped.
	pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ParseError> {
		let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
		let value: Value = serde_json::from_slice(bytes)?;
		Self::from_value(value)
	}

	/// Convert an already-decoded JSON value into a dataset.
	pub fn from_value(value: Value) -> Result<Self, ParseError> {
		let items = match value {
			Value::Array(items) => items,
			other => {
				return Err(ParseError::NotAnArray {
					found: json_kind(&other),
				});
			}
		};

		let records = items
			.into_iter()
			.enumerate()
			.map(|(index, item)| match item {
				Value::Object(record) => Ok(record),
				other => Err(ParseError::NotARecord {
					index,
					found: json_kind(&other),
				}),
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(Self { records })
	}

	/// Number of records.
	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Whether the dataset holds no records.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Borrow the records in source order.
	#[must_use]
	pub fn records(&self) -> &[Record] {
		&self.records
	}

	/// Fetch a record by position.
	#[must_use]
	pub fn get(&self, index: usize) -> Option<&Record> {
		self.records.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Record> {
		self.records.iter()
	}

	#[must_use]
	pub fn into_records(self) -> Vec<Record> {
		self.records
	}

	/// Union of all field names, ordered by first appearance.
	///
	/// Records are not required to share a shape, so a field that only shows up
	/// in a later record is appended after every field seen before it.
	#[must_use]
	pub fn field_names(&self) -> Vec<String> {
		let mut names: Vec<String> = Vec::new();
		for record in &self.records {
			for key in record.keys() {
				if !names.iter().any(|name| name == key) {
					names.push(key.clone());
				}
			}
		}
		names
	}
}

impl FromIterator<Record> for Dataset {
	fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
		Self {
			records: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Dataset {
	type Item = &'a Record;
	type IntoIter = std::slice::Iter<'a, Record>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.iter()
	}
}

/// Human-readable name for the kind of a JSON value, used in error messages.
#[must_use]
pub fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
