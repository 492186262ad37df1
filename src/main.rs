mod cli;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use logview::app_dirs;
use logview::logging::{self, LOG_FILE_NAME, LogTarget};
use workflow::ViewWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in logview_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	logging::initialize(cli.verbose, &log_target(&cli)?)?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = ViewWorkflow::from_config(resolved)?;
	if cli.plain {
		workflow.run_plain()?;
		return Ok(());
	}

	if let Some(outcome) = workflow.run_interactive()? {
		match cli.output {
			OutputFormat::Plain => print_plain(&outcome),
			OutputFormat::Json => print_json(&outcome)?,
		}
	}

	Ok(())
}

/// Plain output leaves stderr free; the interactive table does not.
fn log_target(cli: &CliArgs) -> Result<LogTarget> {
	if cli.plain {
		return Ok(LogTarget::Stderr);
	}
	let path = match &cli.log_file {
		Some(path) => path.clone(),
		None => app_dirs::get_data_dir()
			.context("failed to locate the data directory for the log file")?
			.join(LOG_FILE_NAME),
	};
	Ok(LogTarget::File(path))
}
