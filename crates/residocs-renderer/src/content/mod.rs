//! The nine content sections.
//!
//! Each renderer is a pure function of [`RenderContext`] emitting fixed
//! French documentation markup. Headings carry the scoped anchor ids the
//! registry publishes, so the table of contents and the sidebar anchor
//! links always resolve. Sécurité, Déploiement and Support are placeholder
//! sections carrying a «Bientôt disponible» badge.

mod commencer;
mod deploiement;
mod demarrage_rapide;
mod developpement;
mod guide_utilisateur;
mod installation;
mod reference_api;
mod securite;
mod support;

use std::fmt::Write;

use residocs_site::SectionId;

use crate::context::RenderContext;
use crate::html::escape_html;

/// Render the content column for one section. Dispatch is a plain `match`;
/// string segment handling ends at the route boundary.
pub fn render_section(id: SectionId, ctx: &RenderContext, out: &mut String) {
    match id {
        SectionId::Commencer => commencer::render(ctx, out),
        SectionId::Installation => installation::render(ctx, out),
        SectionId::DemarrageRapide => demarrage_rapide::render(ctx, out),
        SectionId::GuideUtilisateur => guide_utilisateur::render(ctx, out),
        SectionId::ReferenceApi => reference_api::render(ctx, out),
        SectionId::Developpement => developpement::render(ctx, out),
        SectionId::Securite => securite::render(ctx, out),
        SectionId::Deploiement => deploiement::render(ctx, out),
        SectionId::Support => support::render(ctx, out),
    }
}

/// Section opening: `<h1>`, optional placeholder badge, lead paragraph.
fn section_header(title: &str, coming_soon: bool, lead: &str, out: &mut String) {
    out.push_str("<header class=\"section-header\">\n");
    let _ = write!(out, "<h1>{}</h1>\n", escape_html(title));
    if coming_soon {
        out.push_str("<span class=\"badge-soon\">Bientôt disponible</span>\n");
    }
    let _ = write!(out, "<p class=\"lead\">{}</p>\n", escape_html(lead));
    out.push_str("</header>\n");
}

/// Anchored `<h2>`. The anchor is the scoped id the registry publishes.
fn heading(anchor: &str, title: &str, out: &mut String) {
    let _ = write!(out, "<h2 id=\"{anchor}\">{}</h2>\n", escape_html(title));
}

/// Fenced code sample.
fn code_block(ctx: &RenderContext, lang: &str, content: &str, out: &mut String) {
    let _ = write!(
        out,
        "<pre class=\"{}\"><code class=\"language-{lang}\">{}</code></pre>\n",
        ctx.variant("code-block"),
        escape_html(content)
    );
}

/// Informational panel (`kind` is `info` or `warning`).
fn panel(ctx: &RenderContext, kind: &str, title: &str, body: &str, out: &mut String) {
    let _ = write!(
        out,
        "<div class=\"{} panel-{kind}\"><p class=\"panel-title\">{}</p><p>{}</p></div>\n",
        ctx.variant("panel"),
        escape_html(title),
        escape_html(body)
    );
}

/// Plain data table with a header row; every cell is escaped text.
fn table(ctx: &RenderContext, headers: &[&str], rows: &[&[&str]], out: &mut String) {
    let _ = write!(out, "<div class=\"{}\">\n<table>\n<thead><tr>", ctx.variant("table-wrap"));
    for header in headers {
        let _ = write!(out, "<th>{}</th>", escape_html(header));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        out.push_str("<tr>");
        for cell in *row {
            let _ = write!(out, "<td>{}</td>", escape_html(cell));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n</div>\n");
}

/// One card of a feature grid.
fn card(ctx: &RenderContext, title: &str, text: &str, out: &mut String) {
    let _ = write!(
        out,
        "<div class=\"{}\"><h3 class=\"card-title\">{}</h3><p>{}</p></div>\n",
        ctx.variant("card"),
        escape_html(title),
        escape_html(text)
    );
}
