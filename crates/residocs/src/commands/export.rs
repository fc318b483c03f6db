//! `residocs export` command implementation.

use std::path::PathBuf;

use clap::Args;
use residocs_config::{CliSettings, Config};
use residocs_renderer::SiteLinks;
use residocs_site::ColorMode;

use crate::error::CliError;
use crate::export::Exporter;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Output directory for the generated site (default: dist/ next to the config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Color mode the pages are rendered in.
    #[arg(long, default_value = "light", value_parser = ["light", "dark"])]
    mode: String,

    /// Path to configuration file (default: auto-discover residocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ExportArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let output_dir = config.export_resolved.output_dir.clone();

        output.info(&format!("Site: {}", config.site.title));
        output.info(&format!("Output: {}", output_dir.display()));

        // clap restricts the value, so the parse cannot miss.
        let mode = ColorMode::from_param(&self.mode).unwrap_or_default();

        let exporter = Exporter::new(
            config.site.title.clone(),
            SiteLinks {
                repository_url: config.site.repository_url.clone(),
                support_email: config.site.support_email.clone(),
            },
            mode,
        );
        let written = exporter.export(&output_dir)?;

        output.success(&format!(
            "Site exported successfully to {} ({written} files)",
            output_dir.display()
        ));
        Ok(())
    }
}
