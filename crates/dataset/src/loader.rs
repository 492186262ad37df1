use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{LoadError, RetrievalError};
use crate::record::Dataset;
use crate::resolve::ResourceResolver;
use crate::schema::Schema;

/// Retrieves and parses datasets by resource identifier.
#[derive(Debug, Clone)]
pub struct Loader {
	resolver: ResourceResolver,
	schema: Option<Schema>,
	timeout: Option<Duration>,
}

impl Loader {
	#[must_use]
	pub fn new(resolver: ResourceResolver) -> Self {
		Self {
			resolver,
			schema: None,
			timeout: None,
		}
	}

	/// Validate every loaded dataset against `schema`. An empty schema is ignored.
	#[must_use]
	pub fn with_schema(mut self, schema: Schema) -> Self {
		self.schema = (!schema.is_empty()).then_some(schema);
		self
	}

	/// Abort retrieval that takes longer than `timeout`. Without one a stalled
	/// source stalls the caller.
	#[must_use]
	pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
		self.timeout = timeout;
		self
	}

	#[must_use]
	pub fn resolver(&self) -> &ResourceResolver {
		&self.resolver
	}

	#[must_use]
	pub fn schema(&self) -> Option<&Schema> {
		self.schema.as_ref()
	}

	/// Retrieve `resource` and parse it into a [`Dataset`].
	///
	/// An empty or blank identifier loads nothing and yields `Ok(None)`.
	/// Retrieval, parse and schema failures are returned as-is; nothing is
	/// retried and no partial dataset is ever produced.
	pub async fn fetch_dataset(&self, resource: &str) -> Result<Option<Dataset>, LoadError> {
		let resource = resource.trim();
		if resource.is_empty() {
			warn!("empty resource identifier, nothing to load");
			return Ok(None);
		}

		let location = self
			.resolver
			.resolve(resource)
			.map_err(|source| LoadError::Retrieval {
				location: resource.to_string(),
				source,
			})?;
		debug!(%location, "retrieving dataset");

		let retrieval = self.resolver.retrieve(&location);
		let body = match self.timeout {
			Some(limit) => match tokio::time::timeout(limit, retrieval).await {
				Ok(result) => result,
				Err(_) => Err(RetrievalError::Timeout(limit)),
			},
			None => retrieval.await,
		}
		.map_err(|source| LoadError::Retrieval {
			location: location.to_string(),
			source,
		})?;

		let dataset = Dataset::from_json_slice(&body).map_err(|source| LoadError::Parse {
			location: location.to_string(),
			source,
		})?;

		if let Some(schema) = &self.schema {
			schema
				.validate(&dataset)
				.map_err(|source| LoadError::Schema {
					location: location.to_string(),
					source,
				})?;
		}

		debug!(
			%location,
			records = dataset.len(),
			fields = ?dataset.field_names(),
			"dataset loaded"
		);
		Ok(Some(dataset))
	}
}
