use std::io;

use anyhow::{Context, Result};
use logview::{
	Loader, PlainDisplay, ResourceResolver, TableDisplay, TableOptions, TableOutcome,
	TerminalDisplay,
};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use crate::settings::ResolvedConfig;

/// Owns the runtime and loader for one resource and runs it through a display.
pub(crate) struct ViewWorkflow {
	runtime: Runtime,
	loader: Loader,
	resource: String,
	options: TableOptions,
}

impl ViewWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			resource,
			source,
			timeout,
			table,
			schema,
		} = config;

		let runtime = Builder::new_multi_thread()
			.enable_all()
			.build()
			.context("failed to start the async runtime")?;
		let resolver = ResourceResolver::new(source).context("failed to build the HTTP client")?;
		let loader = Loader::new(resolver)
			.with_schema(schema)
			.with_timeout(timeout);

		Ok(Self {
			runtime,
			loader,
			resource,
			options: table,
		})
	}

	/// Show the table full-screen with `Ctrl+R` reloading the same resource.
	pub(crate) fn run_interactive(&self) -> Result<Option<TableOutcome>> {
		let reloader = logview::reloader(self.runtime.handle().clone(), &self.loader, &self.resource);
		let mut display = TerminalDisplay::new().with_reloader(reloader);
		self.run_with(&mut display)
	}

	/// Print the whole table to stdout.
	pub(crate) fn run_plain(&self) -> Result<Option<TableOutcome>> {
		let mut display = PlainDisplay::new(io::stdout().lock());
		self.run_with(&mut display)
	}

	fn run_with<D: TableDisplay>(&self, display: &mut D) -> Result<Option<TableOutcome>> {
		debug!(resource = %self.resource, "starting");
		self.runtime.block_on(logview::init(
			&self.resource,
			&self.loader,
			display,
			self.options.clone(),
		))
	}
}
