//! Full-page assembly.

use std::fmt::Write;

use residocs_site::{UiState, registry};

use crate::content;
use crate::context::{RenderContext, SiteLinks};
use crate::html::escape_html;
use crate::shell;

/// Page-level knobs that differ between the server and the static exporter.
#[derive(Clone, Copy, Debug)]
pub struct PageOptions<'a> {
    /// Site title shown in the brand header and the document title.
    pub site_title: &'a str,
    /// Prefix for stylesheet/script URLs (`/assets` when served, a relative
    /// path when exported).
    pub asset_base: &'a str,
}

/// Render a complete documentation page for the given shell state.
#[must_use]
pub fn render_document(state: &UiState, links: &SiteLinks, opts: &PageOptions) -> String {
    let ctx = RenderContext {
        mode: state.mode,
        links,
    };
    let section = registry::section(state.active);

    let mut html = String::with_capacity(32 * 1024);

    let _ = write!(
        html,
        "<!doctype html>\n<html lang=\"fr\" class=\"theme-{}\">\n<head>\n",
        state.mode.as_str()
    );
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = write!(
        html,
        "<title>{} · {}</title>\n",
        escape_html(section.title),
        escape_html(opts.site_title)
    );
    let _ = write!(
        html,
        "<link rel=\"stylesheet\" href=\"{}/docs.css\">\n",
        opts.asset_base
    );
    html.push_str("</head>\n<body>\n<div class=\"layout\">\n");

    shell::render_mobile_header(state, &ctx, opts.site_title, &mut html);
    shell::render_sidebar(state, &ctx, opts.site_title, &mut html);

    html.push_str("<div class=\"page\">\n<main class=\"content\" id=\"contenu\">\n");
    content::render_section(state.active, &ctx, &mut html);
    shell::render_footer(state, &ctx, &mut html);
    html.push_str("</main>\n");
    shell::render_toc(state, &ctx, &mut html);
    html.push_str("</div>\n</div>\n");

    let _ = write!(
        html,
        "<script src=\"{}/docs.js\" defer></script>\n",
        opts.asset_base
    );
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use residocs_site::{ColorMode, SectionId};

    use super::*;

    const OPTS: PageOptions<'_> = PageOptions {
        site_title: "GestRésidence",
        asset_base: "/assets",
    };

    fn document(state: &UiState) -> String {
        render_document(state, &SiteLinks::default(), &OPTS)
    }

    #[test]
    fn test_document_skeleton() {
        let html = document(&UiState::default());
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<html lang=\"fr\" class=\"theme-light\">"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"/assets/docs.css\">"));
        assert!(html.contains("<script src=\"/assets/docs.js\" defer></script>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_title_names_section_and_site() {
        let state = UiState::for_page(SectionId::Installation, String::new(), ColorMode::Light);
        let html = document(&state);
        assert!(html.contains("<title>Installation · GestRésidence</title>"));
    }

    #[test]
    fn test_dark_mode_flips_root_class() {
        let state = UiState::for_page(SectionId::Commencer, String::new(), ColorMode::Dark);
        let html = document(&state);
        assert!(html.contains("<html lang=\"fr\" class=\"theme-dark\">"));
        assert!(!html.contains("theme-light"));
    }

    #[test]
    fn test_unknown_segment_renders_default_document() {
        let fallback = UiState::for_page(
            SectionId::from_segment_or_default(Some("inconnu")),
            String::new(),
            ColorMode::Light,
        );
        let default = UiState::default();
        assert_eq!(document(&fallback), document(&default));
    }

    #[test]
    fn test_every_toc_anchor_has_a_heading_in_the_content() {
        for id in SectionId::ALL {
            let state = UiState::for_page(id, String::new(), ColorMode::Light);
            let html = document(&state);
            for entry in residocs_site::registry::toc(id) {
                assert!(
                    html.contains(&format!("id=\"{}\"", entry.anchor)),
                    "section {} misses anchor {}",
                    id.as_str(),
                    entry.anchor
                );
            }
        }
    }

    #[test]
    fn test_asset_base_is_parameterized() {
        let opts = PageOptions {
            site_title: "GestRésidence",
            asset_base: "../../assets",
        };
        let html = render_document(&UiState::default(), &SiteLinks::default(), &opts);
        assert!(html.contains("href=\"../../assets/docs.css\""));
        assert!(html.contains("src=\"../../assets/docs.js\""));
    }
}
