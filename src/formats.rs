use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One editable page of a site, as produced by the editing UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_subheading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_image_url: Option<String>,
}

impl Page {
    pub const ROOT_ID: &'static str = "home";

    pub fn is_root_id(&self) -> bool {
        self.id == Self::ROOT_ID
    }

    /// Document title; falls back to the page name, then the id.
    pub fn display_title(&self) -> &str {
        first_non_empty(&[&self.title, &self.name, &self.id]).unwrap_or("Untitled page")
    }

    /// Navigation label; falls back to the title, then the id.
    pub fn display_name(&self) -> &str {
        first_non_empty(&[&self.name, &self.title, &self.id]).unwrap_or("Untitled page")
    }

    pub fn hero_title(&self) -> &str {
        non_empty(self.hero_title.as_deref()).unwrap_or_else(|| self.display_title())
    }

    pub fn hero_subheading(&self) -> &str {
        non_empty(self.hero_subheading.as_deref()).unwrap_or(&self.description)
    }

    pub fn hero_image_url(&self) -> Option<&str> {
        non_empty(self.hero_image_url.as_deref())
    }

    pub fn body_image_url(&self) -> Option<&str> {
        non_empty(self.body_image_url.as_deref())
    }

    pub fn body_content(&self) -> &str {
        self.body_content.as_deref().unwrap_or("")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn first_non_empty<'a>(candidates: &[&'a String]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .map(|c| c.trim())
        .find(|c| !c.is_empty())
}

/// Ordered page sequence. Order drives navigation and the positional root fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Site {
    #[serde(default)]
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    #[default]
    Free,
    Pro,
}

impl PlanTier {
    /// Page allowance advertised for the tier.
    pub fn page_limit(self) -> usize {
        match self {
            Self::Free => 3,
            Self::Pro => 6,
        }
    }

    pub fn can_remove_branding(self) -> bool {
        matches!(self, Self::Pro)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserData {
    pub email: String,
    #[serde(default)]
    pub plan: PlanTier,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Theme {
    #[default]
    Modern,
    Classic,
    Minimal,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Classic => "classic",
            Self::Minimal => "minimal",
        }
    }

    /// Parses a theme name, normalising anything unrecognised to `Modern`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "modern" => Self::Modern,
            "classic" => Self::Classic,
            "minimal" => Self::Minimal,
            other => {
                tracing::warn!(theme = other, "unknown theme; using modern");
                Self::Modern
            }
        }
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partially specified export options; absent fields take defaults on resolution.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_branding: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_optimized: Option<bool>,
}

impl ExportOptions {
    /// Merges `higher` on top of `self`; fields set in `higher` win.
    #[must_use]
    pub fn overlay(self, higher: ExportOptions) -> ExportOptions {
        ExportOptions {
            include_branding: higher.include_branding.or(self.include_branding),
            theme: higher.theme.or(self.theme),
            responsive: higher.responsive.or(self.responsive),
            seo_optimized: higher.seo_optimized.or(self.seo_optimized),
        }
    }
}

/// Fully resolved export configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    pub include_branding: bool,
    pub theme: Theme,
    pub responsive: bool,
    pub seo_optimized: bool,
}

impl ExportConfig {
    pub const DEFAULT: ExportConfig = ExportConfig {
        include_branding: true,
        theme: Theme::Modern,
        responsive: true,
        seo_optimized: true,
    };
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub total_pages: usize,
    pub export_date: DateTime<Utc>,
    pub theme: Theme,
    pub responsive: bool,
}

impl ExportMetadata {
    pub fn export_date_iso(&self) -> String {
        self.export_date
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}

/// A rendered non-root page, stored in the archive as `file_name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument {
    pub id: String,
    pub file_name: String,
    pub html: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    /// Root page document, written as `index.html`.
    pub html: String,
    pub css: String,
    pub js: String,
    pub assets: Vec<String>,
    pub metadata: ExportMetadata,
    #[serde(default)]
    pub pages: Vec<PageDocument>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_deserializes_camel_case_and_tolerates_missing_fields() -> anyhow::Result<()> {
        let page: Page = serde_json::from_str(
            r#"{"id":"home","heroTitle":"Hi","heroImageUrl":"https://img/x.png"}"#,
        )?;
        assert_eq!(page.id, "home");
        assert_eq!(page.name, "");
        assert_eq!(page.hero_title.as_deref(), Some("Hi"));
        assert_eq!(page.hero_image_url(), Some("https://img/x.png"));
        Ok(())
    }

    #[test]
    fn hero_text_falls_back_to_title_and_description() {
        let page = Page {
            id: "about".to_owned(),
            name: "About".to_owned(),
            title: "Fallback Title".to_owned(),
            description: "Fallback Desc".to_owned(),
            hero_title: Some("   ".to_owned()),
            ..Page::default()
        };
        assert_eq!(page.hero_title(), "Fallback Title");
        assert_eq!(page.hero_subheading(), "Fallback Desc");
    }

    #[test]
    fn display_title_and_name_fall_back_to_each_other() {
        let nameless = Page {
            id: "x".to_owned(),
            title: "Title".to_owned(),
            ..Page::default()
        };
        assert_eq!(nameless.display_name(), "Title");

        let untitled = Page {
            id: "x".to_owned(),
            name: "Name".to_owned(),
            ..Page::default()
        };
        assert_eq!(untitled.display_title(), "Name");
        assert_eq!(Page::default().display_title(), "Untitled page");
    }

    #[test]
    fn unknown_theme_normalises_to_modern() -> anyhow::Result<()> {
        assert_eq!(Theme::from_name(" Classic "), Theme::Classic);
        assert_eq!(Theme::from_name("neon"), Theme::Modern);

        let options: ExportOptions = serde_json::from_str(r#"{"theme":"brutalist"}"#)?;
        assert_eq!(options.theme, Some(Theme::Modern));
        assert_eq!(serde_json::to_string(&Theme::Minimal)?, "\"minimal\"");
        Ok(())
    }

    #[test]
    fn overlay_prefers_higher_fields() {
        let file = ExportOptions {
            include_branding: Some(false),
            theme: Some(Theme::Classic),
            ..ExportOptions::default()
        };
        let flags = ExportOptions {
            theme: Some(Theme::Minimal),
            responsive: Some(false),
            ..ExportOptions::default()
        };
        let merged = file.overlay(flags);
        assert_eq!(merged.include_branding, Some(false));
        assert_eq!(merged.theme, Some(Theme::Minimal));
        assert_eq!(merged.responsive, Some(false));
        assert_eq!(merged.seo_optimized, None);
    }

    #[test]
    fn plan_tiers_match_pricing() {
        assert_eq!(PlanTier::Free.page_limit(), 3);
        assert_eq!(PlanTier::Pro.page_limit(), 6);
        assert!(!PlanTier::Free.can_remove_branding());
        assert!(PlanTier::Pro.can_remove_branding());
    }
}
