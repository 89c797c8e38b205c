use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::config;
use crate::formats::{
    ExportConfig, ExportMetadata, ExportOptions, ExportResult, PageDocument, Site, UserData,
};
use crate::render::{self, SiteLinks};
use crate::script::generate_script;
use crate::stylesheet::generate_stylesheet;

/// Assembles a static export of `site`. Inputs are never mutated.
pub fn export_site(site: &Site, user: &UserData, options: &ExportOptions) -> ExportResult {
    export_site_at(site, user, options, Utc::now())
}

/// Same as [`export_site`] with an explicit export timestamp.
pub fn export_site_at(
    site: &Site,
    user: &UserData,
    options: &ExportOptions,
    now: DateTime<Utc>,
) -> ExportResult {
    let config = config::resolve(options, &ExportConfig::DEFAULT);
    let config = config::apply_plan(config, user.plan);
    config::check_page_limit(site, user.plan);

    tracing::debug!(
        theme = %config.theme,
        responsive = config.responsive,
        branding = config.include_branding,
        seo = config.seo_optimized,
        "starting site export"
    );

    let css = generate_stylesheet(config.theme, config.responsive);
    let js = generate_script();

    let links = SiteLinks::build(&site.pages);
    let html = match links.root {
        Some(root) => {
            render::render_page_with_links(&site.pages[root], Some(root), &links, &config)
        }
        None => render::render_empty_shell(&config),
    };

    let pages = site
        .pages
        .iter()
        .zip(&links.entries)
        .enumerate()
        .filter(|(_, (_, link))| link.emit)
        .map(|(idx, (page, link))| PageDocument {
            id: page.id.clone(),
            file_name: link.href.clone(),
            html: render::render_page_with_links(page, Some(idx), &links, &config),
        })
        .collect::<Vec<_>>();

    let assets = collect_assets(site);

    tracing::info!(
        pages = site.pages.len(),
        documents = pages.len() + 1,
        assets = assets.len(),
        theme = %config.theme,
        branding = config.include_branding,
        "site export completed"
    );

    ExportResult {
        html,
        css,
        js,
        assets,
        metadata: ExportMetadata {
            total_pages: site.pages.len(),
            export_date: now,
            theme: config.theme,
            responsive: config.responsive,
        },
        pages,
    }
}

/// Hero and body image URLs of every page, first-seen order, without duplicates.
pub fn collect_assets(site: &Site) -> Vec<String> {
    let mut seen = HashSet::new();
    site.pages
        .iter()
        .flat_map(|page| [page.hero_image_url(), page.body_image_url()])
        .flatten()
        .filter(|url| seen.insert(*url))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;
    use crate::formats::{Page, PlanTier, Theme};
    use crate::render::FOOTER_CREDIT;

    fn pro_user() -> UserData {
        UserData {
            email: "owner@example.com".to_owned(),
            plan: PlanTier::Pro,
        }
    }

    fn page(id: &str) -> Page {
        Page {
            id: id.to_owned(),
            name: id.to_uppercase(),
            title: format!("{id} title"),
            description: format!("{id} description"),
            hero_title: Some(format!("{id} hero")),
            ..Page::default()
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn single_page_scenario() {
        let site = Site {
            pages: vec![Page {
                id: "home".to_owned(),
                name: "Home".to_owned(),
                title: "T".to_owned(),
                description: "D".to_owned(),
                hero_title: Some("H1".to_owned()),
                hero_subheading: Some("S1".to_owned()),
                body_content: Some("Para one.\n\nPara two.".to_owned()),
                ..Page::default()
            }],
        };
        let result = export_site(&site, &UserData::default(), &ExportOptions::default());

        assert_eq!(result.metadata.total_pages, 1);
        assert!(result.html.contains("<p>Para one.</p>"));
        assert!(result.html.contains("<p>Para two.</p>"));
        assert!(result.html.contains("<h1 class=\"hero-title\">H1</h1>"));
        assert!(result.assets.is_empty());
        assert!(result.pages.is_empty());
        assert_eq!(result.metadata.theme, Theme::Modern);
        assert!(result.metadata.responsive);
    }

    #[test]
    fn root_is_home_regardless_of_position() {
        let site = Site {
            pages: vec![page("about"), page("home"), page("contact")],
        };
        let result = export_site(&site, &pro_user(), &ExportOptions::default());

        assert!(result.html.contains("<h1 class=\"hero-title\">home hero</h1>"));
        let files = result
            .pages
            .iter()
            .map(|p| p.file_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(files, vec!["about.html", "contact.html"]);
        assert!(result.pages[0].html.contains("about hero"));
    }

    #[test]
    fn first_page_is_root_without_home() {
        let site = Site {
            pages: vec![page("about"), page("contact")],
        };
        let result = export_site(&site, &pro_user(), &ExportOptions::default());
        assert!(result.html.contains("about hero"));
        assert_eq!(result.pages.len(), 1);
        assert_eq!(result.pages[0].id, "contact");
    }

    #[test]
    fn pages_with_colliding_file_names_are_all_exported() {
        let site = Site {
            pages: vec![page("home"), page("a b"), page("a/b")],
        };
        let result = export_site(&site, &pro_user(), &ExportOptions::default());

        let docs = result
            .pages
            .iter()
            .map(|p| (p.id.as_str(), p.file_name.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(docs, vec![("a b", "a-b.html"), ("a/b", "a-b-2.html")]);
        assert!(result.pages[1].html.contains("a/b hero"));
        assert!(result.html.contains("<li><a href=\"a-b-2.html\">A/B</a></li>"));
    }

    #[test]
    fn empty_site_is_a_valid_export() {
        let result = export_site(&Site::default(), &pro_user(), &ExportOptions::default());
        assert_eq!(result.metadata.total_pages, 0);
        assert!(result.html.starts_with("<!DOCTYPE html>"));
        assert!(result.assets.is_empty());
        assert!(result.pages.is_empty());
    }

    #[test]
    fn assets_are_deduplicated_in_first_seen_order() {
        let mut home = page("home");
        home.hero_image_url = Some("https://img/a.png".to_owned());
        home.body_image_url = Some("https://img/b.png".to_owned());
        let mut about = page("about");
        about.hero_image_url = Some("https://img/b.png".to_owned());
        about.body_image_url = Some("  ".to_owned());
        let mut contact = page("contact");
        contact.body_image_url = Some("https://img/a.png".to_owned());
        contact.hero_image_url = Some("https://img/c.png".to_owned());

        let site = Site {
            pages: vec![home, about, contact],
        };
        assert_eq!(
            collect_assets(&site),
            vec!["https://img/a.png", "https://img/b.png", "https://img/c.png"]
        );
    }

    #[test]
    fn export_is_idempotent_for_a_fixed_time() {
        let site = Site {
            pages: vec![page("home"), page("about")],
        };
        let options = ExportOptions {
            theme: Some(Theme::Classic),
            ..ExportOptions::default()
        };
        let first = export_site_at(&site, &pro_user(), &options, fixed_now());
        let second = export_site_at(&site, &pro_user(), &options, fixed_now());
        assert_eq!(first, second);
    }

    #[test]
    fn options_flow_into_every_document() {
        let site = Site {
            pages: vec![page("home"), page("about")],
        };
        let options = ExportOptions {
            include_branding: Some(false),
            theme: Some(Theme::Minimal),
            responsive: Some(false),
            seo_optimized: Some(false),
        };
        let result = export_site(&site, &pro_user(), &options);

        assert!(!result.html.contains(FOOTER_CREDIT));
        assert!(!result.pages[0].html.contains(FOOTER_CREDIT));
        assert!(!result.pages[0].html.contains("og:title"));
        assert!(!result.css.contains("@media"));
        assert!(!result.css.contains("linear-gradient"));
        assert_eq!(result.metadata.theme, Theme::Minimal);
        assert!(!result.metadata.responsive);
    }

    #[test]
    fn free_plan_exports_keep_branding() {
        let site = Site {
            pages: vec![page("home")],
        };
        let options = ExportOptions {
            include_branding: Some(false),
            ..ExportOptions::default()
        };
        let free = UserData {
            email: "someone@example.com".to_owned(),
            plan: PlanTier::Free,
        };
        let result = export_site(&site, &free, &options);
        assert!(result.html.contains(FOOTER_CREDIT));
    }

    #[test]
    fn export_does_not_mutate_inputs() {
        let site = Site {
            pages: vec![page("home"), page("about")],
        };
        let before = site.clone();
        let _ = export_site(&site, &pro_user(), &ExportOptions::default());
        assert_eq!(site, before);
    }
}
