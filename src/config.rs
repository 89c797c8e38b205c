use std::path::Path;

use anyhow::Context as _;

use crate::formats::{ExportConfig, ExportOptions, PlanTier, Site};

/// Overlays a partial options record onto `defaults`.
pub fn resolve(partial: &ExportOptions, defaults: &ExportConfig) -> ExportConfig {
    ExportConfig {
        include_branding: partial.include_branding.unwrap_or(defaults.include_branding),
        theme: partial.theme.unwrap_or(defaults.theme),
        responsive: partial.responsive.unwrap_or(defaults.responsive),
        seo_optimized: partial.seo_optimized.unwrap_or(defaults.seo_optimized),
    }
}

/// Applies the plan-tier export policy. Free exports always carry branding.
pub fn apply_plan(config: ExportConfig, plan: PlanTier) -> ExportConfig {
    if config.include_branding || plan.can_remove_branding() {
        return config;
    }

    tracing::info!(?plan, "branding removal requires a pro plan; keeping branding");
    ExportConfig {
        include_branding: true,
        ..config
    }
}

/// Logs when a site exceeds its plan's page allowance. Limits are enforced upstream.
pub fn check_page_limit(site: &Site, plan: PlanTier) -> bool {
    let limit = plan.page_limit();
    let within = site.pages.len() <= limit;
    if !within {
        tracing::warn!(
            ?plan,
            pages = site.pages.len(),
            limit,
            "site exceeds plan page limit; exporting all pages"
        );
    }
    within
}

/// Reads an options file. YAML and JSON are both accepted.
pub fn load_options(path: &Path) -> anyhow::Result<ExportOptions> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read options: {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(ExportOptions::default());
    }
    serde_yaml::from_str(&contents).with_context(|| format!("parse options: {}", path.display()))
}

/// Reads a site model snapshot (`{"pages": [...]}`) from JSON or YAML.
pub fn load_site(path: &Path) -> anyhow::Result<Site> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read site: {}", path.display()))?;
    let site: Site = serde_yaml::from_str(&contents)
        .with_context(|| format!("parse site: {}", path.display()))?;
    tracing::debug!(pages = site.pages.len(), path = %path.display(), "loaded site");
    Ok(site)
}
