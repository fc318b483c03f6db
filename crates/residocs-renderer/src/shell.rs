//! Navigation shell renderers: sidebar, mobile header, table of contents
//! and footer.
//!
//! The shell is a pure projection of [`UiState`]: the search query decides
//! which sidebar entries appear, the active section decides which anchor
//! list is expanded and what the table of contents lists, and the color
//! mode picks class variants. Links carry the query-string state along so
//! the server can rebuild the same state on the next request.

use std::fmt::Write;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use residocs_site::{SectionId, UiEvent, UiState, registry, search};

use crate::context::RenderContext;
use crate::html::escape_html;
use crate::icons;

/// Href for a section page, carrying over the shell's query-string state
/// (`mode` when dark, `q` when non-empty). Defaults are omitted so the
/// canonical path stays clean.
#[must_use]
pub fn page_href(section: SectionId, state: &UiState) -> String {
    let mut href = section.canonical_path();
    let mut sep = '?';
    if state.mode.is_dark() {
        let _ = write!(href, "{sep}mode={}", state.mode.as_str());
        sep = '&';
    }
    if !state.query.is_empty() {
        let _ = write!(
            href,
            "{sep}q={}",
            utf8_percent_encode(&state.query, NON_ALPHANUMERIC)
        );
    }
    href
}

/// Render the sidebar: brand, search form, filtered section list. Serves as
/// the desktop rail and, with the `open` class, as the mobile drawer.
pub(crate) fn render_sidebar(
    state: &UiState,
    ctx: &RenderContext,
    site_title: &str,
    out: &mut String,
) {
    let open = if state.menu_open { " open" } else { "" };
    let _ = write!(
        out,
        "<aside id=\"sidebar\" class=\"{}{open}\">\n",
        ctx.variant("sidebar")
    );

    // Brand header
    out.push_str("<div class=\"sidebar-brand\">\n");
    let _ = write!(
        out,
        "<a class=\"brand-link\" href=\"{}\">{}</a>\n",
        page_href(SectionId::default(), state),
        escape_html(site_title)
    );
    out.push_str("<span class=\"brand-sub\">Documentation</span>\n");
    out.push_str("</div>\n");

    // Search form: a plain GET form so filtering works without the client
    // script; the mode rides along as a hidden field.
    let _ = write!(
        out,
        "<form class=\"sidebar-search\" action=\"{}\" method=\"get\" role=\"search\">\n",
        state.active.canonical_path()
    );
    out.push_str(icons::SVG_SEARCH);
    let _ = write!(
        out,
        "\n<input class=\"search-input\" type=\"search\" name=\"q\" value=\"{}\" \
         placeholder=\"Rechercher dans le guide…\" aria-label=\"Rechercher\">\n",
        escape_html(&state.query)
    );
    if state.mode.is_dark() {
        let _ = write!(
            out,
            "<input type=\"hidden\" name=\"mode\" value=\"{}\">\n",
            state.mode.as_str()
        );
    }
    out.push_str("</form>\n");

    // Section list
    out.push_str("<nav class=\"sidebar-nav\" aria-label=\"Sections\">\n");
    let listing = search::filter_sections(&state.query);
    if listing.is_empty() {
        let _ = write!(
            out,
            "<p class=\"nav-empty\">Aucun résultat pour «&nbsp;{}&nbsp;»</p>\n",
            escape_html(&state.query)
        );
    } else {
        out.push_str("<ul class=\"nav-list\">\n");
        for entry in &listing {
            render_nav_entry(entry, state, out);
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</nav>\n</aside>\n");

    let _ = write!(
        out,
        "<div class=\"sidebar-backdrop{open}\" data-menu-close></div>\n"
    );
}

/// One sidebar entry; the active section also gets its anchor list.
fn render_nav_entry(entry: &search::NavSection, state: &UiState, out: &mut String) {
    let active = entry.id == state.active;
    let (section_class, link_class, current) = if active {
        (
            " nav-section-active",
            " nav-link-active",
            " aria-current=\"page\"",
        )
    } else {
        ("", "", "")
    };

    let _ = write!(out, "<li class=\"nav-section{section_class}\">\n");
    let _ = write!(
        out,
        "<a class=\"nav-link{link_class}\" href=\"{}\"{current}>{}<span class=\"nav-label\">{}</span></a>\n",
        page_href(entry.id, state),
        icons::svg(entry.icon),
        escape_html(entry.title)
    );

    if active {
        out.push_str("<ul class=\"nav-subsections\">\n");
        let href = page_href(entry.id, state);
        for sub in &entry.subsections {
            let _ = write!(
                out,
                "<li><a class=\"nav-sublink\" href=\"{href}#{}\">{}</a></li>\n",
                sub.anchor(entry.id),
                escape_html(sub.title)
            );
        }
        out.push_str("</ul>\n");
    }

    out.push_str("</li>\n");
}

/// Render the mobile header: hamburger, title, theme toggle.
pub(crate) fn render_mobile_header(
    state: &UiState,
    ctx: &RenderContext,
    site_title: &str,
    out: &mut String,
) {
    let _ = write!(out, "<header class=\"{}\">\n", ctx.variant("mobile-header"));
    let _ = write!(
        out,
        "<button class=\"menu-toggle\" type=\"button\" aria-controls=\"sidebar\" \
         aria-expanded=\"{}\" aria-label=\"Ouvrir le menu\" data-menu-open>{}</button>\n",
        state.menu_open,
        icons::SVG_MENU
    );
    let _ = write!(
        out,
        "<span class=\"mobile-title\">{}</span>\n",
        escape_html(site_title)
    );

    // The toggle is a plain link to the same page with the mode flipped; the
    // client script upgrades it to an in-place class flip.
    let toggled = state.clone().apply(UiEvent::ModeToggled);
    let (glyph, label) = if state.mode.is_dark() {
        (icons::SVG_SUN, "Activer le mode clair")
    } else {
        (icons::SVG_MOON, "Activer le mode sombre")
    };
    let _ = write!(
        out,
        "<a class=\"mode-toggle\" href=\"{}\" aria-label=\"{label}\" data-mode-toggle>{glyph}</a>\n",
        page_href(state.active, &toggled)
    );
    out.push_str("</header>\n");
}

/// Render the desktop table of contents ("Sur cette page").
pub(crate) fn render_toc(state: &UiState, ctx: &RenderContext, out: &mut String) {
    let visible = if state.toc_visible { " toc-visible" } else { "" };
    let _ = write!(
        out,
        "<aside class=\"{}{visible}\" data-toc aria-label=\"Sur cette page\">\n",
        ctx.variant("toc")
    );
    out.push_str("<h2 class=\"toc-title\">Sur cette page</h2>\n<ul class=\"toc-list\">\n");
    for entry in registry::toc(state.active) {
        let _ = write!(
            out,
            "<li><a href=\"#{}\">{}</a></li>\n",
            entry.anchor,
            escape_html(entry.title)
        );
    }
    out.push_str("</ul>\n</aside>\n");
}

/// Render the footer: prev/next pager plus the configured external links.
pub(crate) fn render_footer(state: &UiState, ctx: &RenderContext, out: &mut String) {
    let _ = write!(out, "<footer class=\"{}\">\n", ctx.variant("page-footer"));

    let (prev, next) = registry::neighbors(state.active);
    out.push_str("<nav class=\"pager\" aria-label=\"Pagination\">\n");
    if let Some(section) = prev {
        let _ = write!(
            out,
            "<a class=\"pager-link pager-prev\" href=\"{}\" rel=\"prev\">{}<span>\
             <span class=\"pager-label\">Précédent</span>\
             <span class=\"pager-title\">{}</span></span></a>\n",
            page_href(section.id, state),
            icons::SVG_ARROW_LEFT,
            escape_html(section.title)
        );
    } else {
        out.push_str("<span class=\"pager-spacer\"></span>\n");
    }
    if let Some(section) = next {
        let _ = write!(
            out,
            "<a class=\"pager-link pager-next\" href=\"{}\" rel=\"next\"><span>\
             <span class=\"pager-label\">Suivant</span>\
             <span class=\"pager-title\">{}</span></span>{}</a>\n",
            page_href(section.id, state),
            escape_html(section.title),
            icons::SVG_ARROW_RIGHT,
        );
    }
    out.push_str("</nav>\n");

    let _ = write!(
        out,
        "<div class=\"footer-meta\">\
         <a class=\"footer-link\" href=\"{}\" rel=\"noopener\">Code source</a>\
         <a class=\"footer-link\" href=\"mailto:{}\">{}</a>\
         </div>\n",
        escape_html(&ctx.links.repository_url),
        escape_html(&ctx.links.support_email),
        escape_html(&ctx.links.support_email)
    );
    out.push_str("</footer>\n");
}

#[cfg(test)]
mod tests {
    use residocs_site::ColorMode;

    use crate::context::SiteLinks;

    use super::*;

    fn ctx(links: &SiteLinks, mode: ColorMode) -> RenderContext<'_> {
        RenderContext { mode, links }
    }

    fn sidebar(state: &UiState) -> String {
        let links = SiteLinks::default();
        let mut out = String::new();
        render_sidebar(state, &ctx(&links, state.mode), "GestRésidence", &mut out);
        out
    }

    #[test]
    fn test_page_href_defaults_are_clean() {
        let state = UiState::default();
        assert_eq!(
            page_href(SectionId::Installation, &state),
            "/documentation/installation"
        );
    }

    #[test]
    fn test_page_href_carries_mode_and_query() {
        let state = UiState::for_page(
            SectionId::Commencer,
            "chambre".to_owned(),
            ColorMode::Dark,
        );
        assert_eq!(
            page_href(SectionId::Support, &state),
            "/documentation/support?mode=dark&q=chambre"
        );
    }

    #[test]
    fn test_page_href_percent_encodes_query() {
        let state = UiState::for_page(
            SectionId::Commencer,
            "référence api".to_owned(),
            ColorMode::Light,
        );
        let href = page_href(SectionId::Commencer, &state);
        assert_eq!(href, "/documentation/commencer?q=r%C3%A9f%C3%A9rence%20api");
    }

    #[test]
    fn test_sidebar_expands_only_active_section() {
        let state = UiState::for_page(
            SectionId::GuideUtilisateur,
            String::new(),
            ColorMode::Light,
        );
        let html = sidebar(&state);

        // Active section carries its scoped anchor list.
        assert!(html.contains("#guide-utilisateur-tableau-de-bord"));
        // Inactive sections do not.
        assert!(!html.contains("#demarrage-rapide-tableau-de-bord"));
        assert!(html.contains("aria-current=\"page\""));
    }

    #[test]
    fn test_sidebar_filters_sections_by_query() {
        let state = UiState::for_page(
            SectionId::Commencer,
            "chambre".to_owned(),
            ColorMode::Light,
        );
        let html = sidebar(&state);

        assert!(html.contains("Démarrage rapide"));
        assert!(html.contains("Guide utilisateur"));
        assert!(!html.contains("Déploiement"));
        // The input keeps the typed query.
        assert!(html.contains("value=\"chambre\""));
    }

    #[test]
    fn test_sidebar_reports_empty_result() {
        let state = UiState::for_page(
            SectionId::Commencer,
            "xyzzy".to_owned(),
            ColorMode::Light,
        );
        let html = sidebar(&state);
        assert!(html.contains("Aucun résultat"));
        assert!(!html.contains("<ul class=\"nav-list\">"));
    }

    #[test]
    fn test_sidebar_escapes_query_value() {
        let state = UiState::for_page(
            SectionId::Commencer,
            "\"><script>".to_owned(),
            ColorMode::Light,
        );
        let html = sidebar(&state);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_sidebar_drawer_open_class() {
        let mut state = UiState::default();
        state.menu_open = true;
        let html = sidebar(&state);
        assert!(html.contains("sidebar sidebar-light open"));
        assert!(html.contains("sidebar-backdrop open"));
    }

    #[test]
    fn test_mode_variants_thread_through_shell() {
        let links = SiteLinks::default();
        let state = UiState::for_page(SectionId::Commencer, String::new(), ColorMode::Dark);
        let context = ctx(&links, ColorMode::Dark);

        let mut html = String::new();
        render_sidebar(&state, &context, "GestRésidence", &mut html);
        render_mobile_header(&state, &context, "GestRésidence", &mut html);
        render_toc(&state, &context, &mut html);
        render_footer(&state, &context, &mut html);

        for class in [
            "sidebar-dark",
            "mobile-header-dark",
            "toc-dark",
            "page-footer-dark",
        ] {
            assert!(html.contains(class), "missing {class}");
        }
    }

    #[test]
    fn test_mode_toggle_links_to_flipped_mode() {
        let links = SiteLinks::default();
        let state = UiState::for_page(SectionId::Securite, String::new(), ColorMode::Light);
        let mut html = String::new();
        render_mobile_header(&state, &ctx(&links, ColorMode::Light), "Docs", &mut html);
        assert!(html.contains("href=\"/documentation/securite?mode=dark\""));

        let dark = state.apply(UiEvent::ModeToggled);
        let mut html = String::new();
        render_mobile_header(&dark, &ctx(&links, ColorMode::Dark), "Docs", &mut html);
        assert!(html.contains("href=\"/documentation/securite\""));
    }

    #[test]
    fn test_toc_lists_active_section_anchors() {
        let links = SiteLinks::default();
        let state = UiState::for_page(SectionId::Installation, String::new(), ColorMode::Light);
        let mut html = String::new();
        render_toc(&state, &ctx(&links, ColorMode::Light), &mut html);

        assert!(html.contains("Sur cette page"));
        for entry in registry::toc(SectionId::Installation) {
            assert!(html.contains(&format!("#{}", entry.anchor)));
        }
    }

    #[test]
    fn test_toc_visibility_class() {
        let links = SiteLinks::default();
        let mut state = UiState::default();
        let context = ctx(&links, ColorMode::Light);

        let mut hidden = String::new();
        render_toc(&state, &context, &mut hidden);
        assert!(!hidden.contains("toc-visible"));

        state.toc_visible = true;
        let mut shown = String::new();
        render_toc(&state, &context, &mut shown);
        assert!(shown.contains("toc-visible"));
    }

    #[test]
    fn test_footer_pager_at_edges() {
        let links = SiteLinks::default();
        let context = ctx(&links, ColorMode::Light);

        let first = UiState::for_page(SectionId::Commencer, String::new(), ColorMode::Light);
        let mut html = String::new();
        render_footer(&first, &context, &mut html);
        assert!(!html.contains("pager-prev"));
        assert!(html.contains("pager-next"));
        assert!(html.contains("Installation"));

        let last = UiState::for_page(SectionId::Support, String::new(), ColorMode::Light);
        let mut html = String::new();
        render_footer(&last, &context, &mut html);
        assert!(html.contains("pager-prev"));
        assert!(!html.contains("pager-next"));
        assert!(html.contains("Déploiement"));
    }

    #[test]
    fn test_footer_emits_configured_links() {
        let links = SiteLinks {
            repository_url: "https://example.com/repo".to_owned(),
            support_email: "aide@example.com".to_owned(),
        };
        let state = UiState::default();
        let mut html = String::new();
        render_footer(&state, &ctx(&links, ColorMode::Light), &mut html);

        assert!(html.contains("https://example.com/repo"));
        assert!(html.contains("mailto:aide@example.com"));
    }
}
