//! CLI command for listing available tile sources

use crate::registry::TileSourceRegistry;
use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

/// Sources subcommand
#[derive(Debug, Args)]
pub struct SourcesCommand {
    #[command(subcommand)]
    action: SourcesAction,
}

/// Sources actions
#[derive(Debug, clap::Subcommand)]
enum SourcesAction {
    /// List all registered tile sources
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format for the sources command
#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

impl SourcesCommand {
    /// Execute the sources command
    pub fn execute(&self) -> Result<()> {
        match &self.action {
            SourcesAction::List { format } => self.execute_list(format),
        }
    }

    /// Execute the list subcommand
    fn execute_list(&self, format: &OutputFormat) -> Result<()> {
        let registry = TileSourceRegistry::load()?;

        match format {
            OutputFormat::Json => {
                let entries: Vec<_> = registry
                    .entries()
                    .iter()
                    .map(|source| {
                        json!({
                            "name": source.name(),
                            "description": source.description(),
                            "url_template": source.url_template(),
                            "default": source.name() == registry.default_source(),
                        })
                    })
                    .collect();

                println!(
                    "{}",
                    serde_json::to_string_pretty(&entries)
                        .context("Failed to serialize sources to JSON")?
                );
            }
            OutputFormat::Human => {
                let entries = registry.entries();
                println!("Found {} sources:\n", entries.len());
                for source in entries {
                    let marker = if source.name() == registry.default_source() {
                        " (default)"
                    } else {
                        ""
                    };
                    println!(
                        "{}{} | {} | {}",
                        source.name(),
                        marker,
                        source.description(),
                        source.url_template()
                    );
                }
            }
        }

        Ok(())
    }
}
