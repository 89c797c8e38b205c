use std::collections::HashSet;

use crate::formats::{ExportConfig, Page};

pub const FOOTER_BRAND: &str = "ScopeStudio";
pub const FOOTER_TAGLINE: &str = "The wireframing tool for modern development teams";
pub const FOOTER_CREDIT: &str = "Built with Quantum Climb";

pub const STYLESHEET_FILE: &str = "styles.css";
pub const SCRIPT_FILE: &str = "script.js";
pub const INDEX_FILE: &str = "index.html";

/// The page with id `home`, else the first page.
pub fn root_page_index(pages: &[Page]) -> Option<usize> {
    if pages.is_empty() {
        return None;
    }
    Some(pages.iter().position(Page::is_root_id).unwrap_or(0))
}

/// Where each page of a site lives once exported, in site order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLinks {
    pub root: Option<usize>,
    pub entries: Vec<PageLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub label: String,
    pub href: String,
    /// False for the root page, which is written as `index.html`.
    pub emit: bool,
}

impl SiteLinks {
    pub fn build(pages: &[Page]) -> Self {
        let root = root_page_index(pages);
        let mut taken: HashSet<String> = HashSet::new();
        taken.insert("index".to_owned());

        let entries = pages
            .iter()
            .enumerate()
            .map(|(idx, page)| {
                let label = page.display_name().to_owned();
                if Some(idx) == root {
                    return PageLink {
                        label,
                        href: INDEX_FILE.to_owned(),
                        emit: false,
                    };
                }

                let base = page_file_stem(&page.id, idx);
                let mut stem = base.clone();
                let mut suffix = 2;
                while !taken.insert(stem.to_ascii_lowercase()) {
                    stem = format!("{base}-{suffix}");
                    suffix += 1;
                }
                if stem != base {
                    tracing::warn!(
                        page_id = %page.id,
                        file = %stem,
                        "page file name already taken; using a numbered name"
                    );
                }
                PageLink {
                    label,
                    href: format!("{stem}.html"),
                    emit: true,
                }
            })
            .collect();

        Self { root, entries }
    }
}

/// File stem for a non-root page. Unsafe characters become `-`.
pub fn page_file_stem(id: &str, position: usize) -> String {
    let stem: String = id
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '-'
            }
        })
        .collect();
    let stem = stem.trim_matches('.').to_owned();

    if stem.is_empty() {
        return format!("page-{}", position + 1);
    }
    if stem.eq_ignore_ascii_case("index") {
        return "index-page".to_owned();
    }
    stem
}

/// Renders one page as a standalone document linking the shared stylesheet and script.
pub fn render_page(page: &Page, all_pages: &[Page], config: &ExportConfig) -> String {
    let links = SiteLinks::build(all_pages);
    let position = all_pages
        .iter()
        .position(|p| std::ptr::eq(p, page))
        .or_else(|| all_pages.iter().position(|p| p.id == page.id));
    render_page_with_links(page, position, &links, config)
}

pub(crate) fn render_page_with_links(
    page: &Page,
    position: Option<usize>,
    links: &SiteLinks,
    config: &ExportConfig,
) -> String {
    let title = page.display_title();
    let mut out = String::new();

    push_head(&mut out, title, Some(page), config);
    push_header(&mut out, title, position, links);

    out.push_str("  <main>\n");
    push_hero(&mut out, page);
    push_body(&mut out, page);
    out.push_str("  </main>\n");

    push_footer_and_close(&mut out, config);
    out
}

/// Document for a site with no pages.
pub fn render_empty_shell(config: &ExportConfig) -> String {
    let links = SiteLinks {
        root: None,
        entries: Vec::new(),
    };
    let mut out = String::new();
    push_head(&mut out, "Untitled site", None, config);
    push_header(&mut out, "Untitled site", None, &links);
    out.push_str("  <main></main>\n");
    push_footer_and_close(&mut out, config);
    out
}

fn push_head(out: &mut String, title: &str, page: Option<&Page>, config: &ExportConfig) {
    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"en\">\n");
    out.push_str("<head>\n");
    out.push_str("  <meta charset=\"UTF-8\">\n");
    out.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str(&format!("  <title>{}</title>\n", html_escape(title)));

    if config.seo_optimized
        && let Some(page) = page
    {
        let description = page.description.trim();
        if !description.is_empty() {
            out.push_str(&format!(
                "  <meta name=\"description\" content=\"{}\">\n",
                html_escape(description)
            ));
        }
        out.push_str(&format!(
            "  <meta property=\"og:title\" content=\"{}\">\n",
            html_escape(title)
        ));
        if !description.is_empty() {
            out.push_str(&format!(
                "  <meta property=\"og:description\" content=\"{}\">\n",
                html_escape(description)
            ));
        }
        out.push_str("  <meta property=\"og:type\" content=\"website\">\n");
        if let Some(image) = page.hero_image_url() {
            out.push_str(&format!(
                "  <meta property=\"og:image\" content=\"{}\">\n",
                html_escape(image)
            ));
        }
    }

    out.push_str(&format!(
        "  <link rel=\"stylesheet\" href=\"{STYLESHEET_FILE}\">\n"
    ));
    out.push_str("</head>\n");
    out.push_str(&format!(
        "<body class=\"theme-{}\">\n",
        config.theme.as_str()
    ));
}

fn push_header(out: &mut String, brand: &str, position: Option<usize>, links: &SiteLinks) {
    out.push_str("  <header class=\"header\">\n");
    out.push_str("    <div class=\"container\">\n");
    out.push_str("      <nav class=\"nav\">\n");
    out.push_str(&format!(
        "        <a href=\"{INDEX_FILE}\" class=\"nav-brand\">{}</a>\n",
        html_escape(brand)
    ));
    out.push_str(
        "        <button type=\"button\" class=\"mobile-menu-toggle\" aria-label=\"Toggle navigation\" aria-expanded=\"false\">&#9776;</button>\n",
    );
    out.push_str("        <ul class=\"nav-menu\">\n");
    for (idx, link) in links.entries.iter().enumerate() {
        let current = if Some(idx) == position {
            " class=\"active\" aria-current=\"page\""
        } else {
            ""
        };
        out.push_str(&format!(
            "          <li><a href=\"{}\"{current}>{}</a></li>\n",
            html_escape(&link.href),
            html_escape(&link.label)
        ));
    }
    out.push_str("        </ul>\n");
    out.push_str("      </nav>\n");
    out.push_str("    </div>\n");
    out.push_str("  </header>\n");
}

fn push_hero(out: &mut String, page: &Page) {
    let hero_title = page.hero_title();
    let subheading = page.hero_subheading().trim();

    out.push_str("    <section class=\"hero\" id=\"hero\">\n");
    out.push_str("      <div class=\"container\">\n");
    out.push_str("        <div class=\"hero-content\">\n");
    out.push_str(&format!(
        "          <h1 class=\"hero-title\">{}</h1>\n",
        html_escape(hero_title)
    ));
    if !subheading.is_empty() {
        out.push_str(&format!(
            "          <p class=\"hero-subtitle\">{}</p>\n",
            html_escape(subheading)
        ));
    }
    if let Some(image) = page.hero_image_url() {
        out.push_str(&format!(
            "          <img src=\"{}\" alt=\"{}\" class=\"hero-image\">\n",
            html_escape(image),
            html_escape(hero_title)
        ));
    }
    out.push_str("        </div>\n");
    out.push_str("      </div>\n");
    out.push_str("    </section>\n");
}

fn push_body(out: &mut String, page: &Page) {
    out.push_str("    <section class=\"body-content\" id=\"content\">\n");
    out.push_str("      <div class=\"container\">\n");
    out.push_str("        <div class=\"body-text\">\n");
    for paragraph in split_paragraphs(page.body_content()) {
        out.push_str(&format!("          <p>{}</p>\n", html_escape(&paragraph)));
    }
    if let Some(image) = page.body_image_url() {
        out.push_str(&format!(
            "          <img src=\"{}\" alt=\"{}\" class=\"body-image\">\n",
            html_escape(image),
            html_escape(page.display_title())
        ));
    }
    out.push_str("        </div>\n");
    out.push_str("      </div>\n");
    out.push_str("    </section>\n");
}

fn push_footer_and_close(out: &mut String, config: &ExportConfig) {
    if config.include_branding {
        out.push_str("  <footer class=\"footer\">\n");
        out.push_str("    <div class=\"container\">\n");
        out.push_str("      <div class=\"footer-content\">\n");
        out.push_str(&format!(
            "        <div class=\"footer-brand\">{FOOTER_BRAND}</div>\n"
        ));
        out.push_str(&format!(
            "        <div class=\"footer-tagline\">{FOOTER_TAGLINE}</div>\n"
        ));
        out.push_str(&format!(
            "        <div class=\"footer-credit\">{FOOTER_CREDIT}</div>\n"
        ));
        out.push_str("      </div>\n");
        out.push_str("    </div>\n");
        out.push_str("  </footer>\n");
    }
    out.push_str(&format!("  <script src=\"{SCRIPT_FILE}\" defer></script>\n"));
    out.push_str("</body>\n");
    out.push_str("</html>\n");
}

/// Splits body text on blank lines. Bullet prefixes are kept as plain text.
pub fn split_paragraphs(body: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in body.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
            continue;
        }
        current.push(line.trim_end());
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }

    paragraphs
        .into_iter()
        .map(|p| p.trim().to_owned())
        .filter(|p| !p.is_empty())
        .collect()
}

pub fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
