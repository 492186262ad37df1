use logview::{FieldType, Schema};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::super::resolved::{ConfigError, SettingSource};

/// `field = "type"` pairs in declaration order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub(super) struct SchemaSection(Map<String, Value>);

impl SchemaSection {
	pub(super) fn resolve(self) -> Result<Schema, ConfigError> {
		let mut schema = Schema::new();
		for (field, value) in self.0 {
			let key = format!("schema.{field}");
			let Value::String(name) = &value else {
				return Err(ConfigError::invalid(
					key,
					value.to_string(),
					SettingSource::ConfigKey("schema"),
					"expected a type name",
				));
			};
			let field_type = name.parse::<FieldType>().map_err(|err| {
				ConfigError::invalid(
					key.clone(),
					name.clone(),
					SettingSource::ConfigKey("schema"),
					err.to_string(),
				)
			})?;
			schema = schema.with_field(field, field_type);
		}
		Ok(schema)
	}
}
