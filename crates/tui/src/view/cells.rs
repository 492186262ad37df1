use std::cmp::Ordering;

use logview_dataset::Record;
use serde_json::{Number, Value};

use crate::config::SortDirection;

/// Text shown for a record's field.
///
/// Strings are shown without quotes, null and missing fields as empty, and
/// everything else as compact JSON.
#[must_use]
pub fn cell_text(record: &Record, column: &str) -> String {
	match record.get(column) {
		None | Some(Value::Null) => String::new(),
		Some(Value::String(text)) => text.clone(),
		Some(other) => other.to_string(),
	}
}

/// Single-line form of [`cell_text`] for table rows.
#[must_use]
pub fn cell_line(record: &Record, column: &str) -> String {
	let text = cell_text(record, column);
	if text.contains(['\n', '\r', '\t']) {
		text.replace(['\n', '\r', '\t'], " ")
	} else {
		text
	}
}

/// Order two cells for sorting. Missing and null cells go last in either
/// direction.
pub(crate) fn compare_cells(
	left: Option<&Value>,
	right: Option<&Value>,
	direction: SortDirection,
) -> Ordering {
	let left = left.filter(|value| !value.is_null());
	let right = right.filter(|value| !value.is_null());

	match (left, right) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Greater,
		(Some(_), None) => Ordering::Less,
		(Some(left), Some(right)) => {
			let ordering = compare_values(left, right);
			match direction {
				SortDirection::Ascending => ordering,
				SortDirection::Descending => ordering.reverse(),
			}
		}
	}
}

fn type_rank(value: &Value) -> u8 {
	match value {
		Value::Bool(_) => 0,
		Value::Number(_) => 1,
		Value::String(_) => 2,
		Value::Array(_) => 3,
		Value::Object(_) => 4,
		Value::Null => 5,
	}
}

fn compare_values(left: &Value, right: &Value) -> Ordering {
	match (left, right) {
		(Value::Bool(a), Value::Bool(b)) => a.cmp(b),
		(Value::Number(a), Value::Number(b)) => compare_numbers(a, b),
		(Value::String(a), Value::String(b)) => a
			.to_lowercase()
			.cmp(&b.to_lowercase())
			.then_with(|| a.cmp(b)),
		_ if type_rank(left) == type_rank(right) => left.to_string().cmp(&right.to_string()),
		_ => type_rank(left).cmp(&type_rank(right)),
	}
}

/// Integers compare exactly; floats only when either side is not integral.
fn compare_numbers(a: &Number, b: &Number) -> Ordering {
	match (as_integer(a), as_integer(b)) {
		(Some(a), Some(b)) => a.cmp(&b),
		_ => {
			let a = a.as_f64().unwrap_or(f64::NAN);
			let b = b.as_f64().unwrap_or(f64::NAN);
			a.total_cmp(&b)
		}
	}
}

fn as_integer(number: &Number) -> Option<i128> {
	number
		.as_i64()
		.map(i128::from)
		.or_else(|| number.as_u64().map(i128::from))
}
