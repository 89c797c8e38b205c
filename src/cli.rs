use clap::{Args, Parser, Subcommand};

use crate::formats::{ExportOptions, PlanTier, Theme};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Export(ExportArgs),
    Preview(PreviewArgs),
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Site model snapshot (JSON or YAML, `{"pages": [...]}`).
    #[arg(long)]
    pub site: String,

    /// Identity of the exporting user (an email address).
    #[arg(long)]
    pub email: String,

    #[arg(long, value_enum, default_value_t = PlanTier::Free)]
    pub plan: PlanTier,

    /// Output directory for the archive.
    #[arg(long)]
    pub out: String,

    /// Archive base name (default: the local part of `--email`).
    #[arg(long)]
    pub site_name: Option<String>,

    /// Overwrite an existing archive.
    #[arg(long, default_value_t = false)]
    pub force: bool,

    #[command(flatten)]
    pub options: ExportOptionArgs,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Site model snapshot (JSON or YAML, `{"pages": [...]}`).
    #[arg(long)]
    pub site: String,

    #[arg(long, value_enum, default_value_t = PlanTier::Free)]
    pub plan: PlanTier,

    /// Write the root document here instead of stdout.
    #[arg(long)]
    pub out: Option<String>,

    #[command(flatten)]
    pub options: ExportOptionArgs,
}

#[derive(Debug, Args)]
pub struct ExportOptionArgs {
    /// Options file (YAML or JSON); flags below take precedence.
    #[arg(long)]
    pub options: Option<String>,

    /// modern, classic or minimal (unknown names fall back to modern).
    #[arg(long)]
    pub theme: Option<String>,

    /// Omit the footer credit (pro plan only).
    #[arg(long, default_value_t = false)]
    pub no_branding: bool,

    /// Omit mobile breakpoints from the stylesheet.
    #[arg(long, default_value_t = false)]
    pub no_responsive: bool,

    /// Omit description and Open Graph meta tags.
    #[arg(long, default_value_t = false)]
    pub no_seo: bool,
}

impl ExportOptionArgs {
    /// Options expressed by flags alone; unset flags stay `None`.
    pub fn flag_overrides(&self) -> ExportOptions {
        ExportOptions {
            include_branding: self.no_branding.then_some(false),
            theme: self.theme.as_deref().map(Theme::from_name),
            responsive: self.no_responsive.then_some(false),
            seo_optimized: self.no_seo.then_some(false),
        }
    }
}
