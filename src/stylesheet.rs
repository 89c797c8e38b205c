use crate::formats::Theme;

/// Colour and typography parameters that vary by theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub header_background: &'static str,
    pub hero_background: &'static str,
    pub footer_background: &'static str,
    pub foreground: &'static str,
    pub shadow: &'static str,
    pub hero_title_size: &'static str,
    pub accent: &'static str,
}

const MODERN_GRADIENT: &str = "linear-gradient(135deg, #667eea 0%, #764ba2 100%)";

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Modern => Palette {
            header_background: MODERN_GRADIENT,
            hero_background: MODERN_GRADIENT,
            footer_background: "#2c3e50",
            foreground: "#fff",
            shadow: "0 2px 4px rgba(0,0,0,0.1)",
            hero_title_size: "3.5rem",
            accent: "#667eea",
        },
        Theme::Classic => Palette {
            header_background: "#2c3e50",
            hero_background: "#34495e",
            footer_background: "#34495e",
            foreground: "#fff",
            shadow: "0 2px 4px rgba(0,0,0,0.1)",
            hero_title_size: "2.5rem",
            accent: "#2c3e50",
        },
        Theme::Minimal => Palette {
            header_background: "#f8f9fa",
            hero_background: "#f8f9fa",
            footer_background: "#f8f9fa",
            foreground: "#333",
            shadow: "none",
            hero_title_size: "2.5rem",
            accent: "#333",
        },
    }
}

/// Builds the shared stylesheet for every exported page.
pub fn generate_stylesheet(theme: Theme, responsive: bool) -> String {
    let p = palette(theme);
    let mut out = String::new();

    out.push_str(&format!("/* ScopeStudio Export - {theme} Theme */\n"));
    out.push_str(RESET_AND_TYPOGRAPHY);

    out.push_str(&format!(
        "\n/* Header */\n.header {{\n  background: {};\n  color: {};\n  padding: 1rem 0;\n  box-shadow: {};\n}}\n",
        p.header_background, p.foreground, p.shadow
    ));
    out.push_str(NAV);

    out.push_str(&format!(
        "\n/* Hero */\n.hero {{\n  background: {};\n  color: {};\n  padding: 4rem 0;\n  text-align: center;\n  min-height: 60vh;\n  display: flex;\n  align-items: center;\n  justify-content: center;\n}}\n",
        p.hero_background, p.foreground
    ));
    out.push_str(&format!(
        "\n.hero-title {{\n  font-size: {};\n  font-weight: bold;\n  margin-bottom: 1rem;\n  line-height: 1.2;\n}}\n",
        p.hero_title_size
    ));
    out.push_str(HERO_AND_BODY);
    out.push_str(&format!(
        "\n.body-text a {{\n  color: {};\n}}\n",
        p.accent
    ));

    out.push_str(&format!(
        "\n/* Footer */\n.footer {{\n  background: {};\n  color: {};\n  padding: 2rem 0;\n  text-align: center;\n  margin-top: 4rem;\n}}\n",
        p.footer_background, p.foreground
    ));
    out.push_str(FOOTER_AND_UTILITIES);

    if responsive {
        out.push_str(RESPONSIVE);
    }

    out
}

const RESET_AND_TYPOGRAPHY: &str = r#"* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.6;
  color: #333;
  background-color: #fff;
}

img {
  max-width: 100%;
  height: auto;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px;
}
"#;

const NAV: &str = r#"
.nav {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-brand {
  font-size: 1.5rem;
  font-weight: bold;
  text-decoration: none;
  color: inherit;
}

.nav-menu {
  display: flex;
  list-style: none;
  gap: 2rem;
}

.nav-menu a {
  text-decoration: none;
  color: inherit;
  transition: opacity 0.3s;
}

.nav-menu a:hover,
.nav-menu a.active {
  opacity: 0.8;
}

.nav-menu a.active {
  border-bottom: 2px solid currentColor;
}

.mobile-menu-toggle {
  display: none;
  background: none;
  border: 0;
  color: inherit;
  font-size: 1.5rem;
  cursor: pointer;
}
"#;

const HERO_AND_BODY: &str = r#"
.hero-content {
  max-width: 800px;
}

.hero-subtitle {
  font-size: 1.25rem;
  opacity: 0.9;
  margin-bottom: 2rem;
}

.hero-image {
  max-width: 100%;
  height: auto;
  border-radius: 8px;
  margin-top: 2rem;
  box-shadow: 0 4px 20px rgba(0,0,0,0.1);
}

/* Body */
.body-content {
  padding: 4rem 0;
  background: #fff;
}

.body-text {
  max-width: 800px;
  margin: 0 auto;
  font-size: 1.1rem;
  line-height: 1.8;
  color: #555;
}

.body-text p {
  margin-bottom: 1.5rem;
}

.body-image {
  max-width: 100%;
  height: auto;
  border-radius: 8px;
  margin: 2rem 0;
  box-shadow: 0 4px 20px rgba(0,0,0,0.1);
}
"#;

const FOOTER_AND_UTILITIES: &str = r#"
.footer-content {
  max-width: 800px;
  margin: 0 auto;
}

.footer-brand {
  font-size: 1.25rem;
  font-weight: bold;
  margin-bottom: 0.5rem;
}

.footer-tagline {
  opacity: 0.8;
  margin-bottom: 1rem;
}

.footer-credit {
  font-size: 0.875rem;
  opacity: 0.6;
}

/* Utilities */
.text-center { text-align: center; }
.mx-auto { margin-left: auto; margin-right: auto; }
.mb-1 { margin-bottom: 0.5rem; }
.mb-2 { margin-bottom: 1rem; }
.mb-3 { margin-bottom: 1.5rem; }
.mb-4 { margin-bottom: 2rem; }
.mt-1 { margin-top: 0.5rem; }
.mt-2 { margin-top: 1rem; }
.mt-3 { margin-top: 1.5rem; }
.mt-4 { margin-top: 2rem; }
"#;

const RESPONSIVE: &str = r#"
/* Responsive */
@media (max-width: 768px) {
  .container {
    padding: 0 15px;
  }

  .hero-title {
    font-size: 2.5rem;
  }

  .hero-subtitle {
    font-size: 1.1rem;
  }

  .nav {
    flex-wrap: wrap;
  }

  .mobile-menu-toggle {
    display: block;
  }

  .nav-menu {
    display: none;
    flex-direction: column;
    width: 100%;
    gap: 1rem;
    padding-top: 1rem;
  }

  .nav-menu.active {
    display: flex;
  }

  .body-text {
    font-size: 1rem;
  }
}

@media (max-width: 480px) {
  .hero-title {
    font-size: 2rem;
  }

  .hero-subtitle {
    font-size: 1rem;
  }

  .nav {
    flex-direction: column;
    align-items: flex-start;
    gap: 1rem;
  }
}
"#;
