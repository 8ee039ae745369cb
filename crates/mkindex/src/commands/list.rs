//! `mkindex list` command implementation.

use std::path::PathBuf;

use clap::Args;
use mkindex_config::{CliSettings, Config};
use mkindex_core::{TopicPlan, plan};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Path to mkdocs.yml (overrides config).
    #[arg(short, long)]
    mkdocs: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mkindex.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ListArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            mkdocs_path: self.mkdocs,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let topics = plan(&config.paths.mkdocs_path)?;

        output.heading(&format!(
            "Topics in {}",
            config.paths.mkdocs_path.display()
        ));
        for topic in &topics {
            output.item(&describe(topic), topic.skip.is_some());
        }
        Ok(())
    }
}

fn describe(topic: &TopicPlan) -> String {
    match topic.skip {
        None => format!("{}: {} links", topic.topic, topic.link_count),
        Some(reason) => format!("{}: skipped ({reason})", topic.topic),
    }
}
