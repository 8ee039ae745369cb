//! `mkindex generate` command implementation.

use std::path::PathBuf;

use clap::Args;
use mkindex_config::{CliSettings, Config};
use mkindex_core::{GenerateOptions, generate};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Path to mkdocs.yml (overrides config).
    #[arg(short, long)]
    mkdocs: Option<PathBuf>,

    /// Docs root holding the topic directories (overrides config).
    #[arg(short, long)]
    docs_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mkindex.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show what would be written without writing anything.
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output (log every written and skipped topic).
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Execute the generate command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, parsing or writing fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            mkdocs_path: self.mkdocs,
            docs_dir: self.docs_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Navigation: {}",
            config.paths.mkdocs_path.display()
        ));
        output.info(&format!("Docs: {}", config.paths.docs_dir.display()));

        let report = generate(&GenerateOptions {
            mkdocs_path: config.paths.mkdocs_path,
            docs_dir: config.paths.docs_dir,
            dry_run: self.dry_run,
        })?;

        if self.dry_run {
            output.warning("Dry run: no files written");
            for path in &report.written {
                output.info(&format!("  would write {}", path.display()));
            }
            return Ok(());
        }

        output.success(&format!(
            "Generated {} index pages ({} topics skipped)",
            report.written.len(),
            report.skipped
        ));
        Ok(())
    }
}
