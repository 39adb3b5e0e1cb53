//! `quire build` command implementation.

use std::path::PathBuf;

use clap::Args;
use quire_config::{CliSettings, Config};
use quire_site::SiteBuilder;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// URL prefix for root-relative links, e.g. `/repo/` (overrides config).
    pub base_path: Option<String>,

    /// Path to configuration file (default: auto-discover quire.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Enable verbose output (log every copied file and generated page).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the build fails, or any page
    /// could not be generated.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            output_dir: self.output_dir,
            base_path: self.base_path,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let site = config.site_resolved;

        output.info(&format!("Content: {}", site.content_dir.display()));
        output.info(&format!("Output: {}", site.output_dir.display()));
        output.info(&format!("Base path: {}", site.base_path));

        let output_dir = site.output_dir.clone();
        let report = SiteBuilder::new(site).build()?;

        if report.generated.is_empty() && report.errors.is_empty() {
            output.warning("No markdown pages found");
        }
        for error in &report.errors {
            output.error(&error.to_string());
        }
        if !report.is_success() {
            return Err(CliError::PagesFailed(report.errors.len()));
        }

        output.success(&format!(
            "Built {} page(s) and copied {} static file(s) to {}",
            report.generated.len(),
            report.copied.len(),
            output_dir.display()
        ));
        Ok(())
    }
}
