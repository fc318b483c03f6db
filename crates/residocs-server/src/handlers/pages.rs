//! Documentation page endpoint.
//!
//! Resolves the `/documentation/{section}` route, renders the full HTML
//! document and answers conditional requests with 304 via ETags.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use md5::{Digest, Md5};
use residocs_renderer::{PageOptions, page_href, render_document};
use residocs_site::{ColorMode, SectionId, UiState};
use serde::Deserialize;

use crate::state::AppState;

/// Query parameters of a documentation page.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageParams {
    /// Sidebar search query.
    q: Option<String>,
    /// Presentation mode (`light` / `dark`).
    mode: Option<String>,
}

impl PageParams {
    /// Shell state for a fresh page load. Unknown `mode` values fall back
    /// to the default mode rather than erroring.
    fn ui_state(&self, active: SectionId) -> UiState {
        let mode = self
            .mode
            .as_deref()
            .and_then(ColorMode::from_param)
            .unwrap_or_default();
        UiState::for_page(active, self.q.clone().unwrap_or_default(), mode)
    }
}

/// How a requested section segment maps onto the site.
#[derive(Debug, PartialEq, Eq)]
enum Resolution {
    /// Canonical segment; serve the page.
    Page(SectionId),
    /// Non-canonical spelling (accents, uppercase) of a known section.
    Canonicalize(SectionId),
    /// Nothing recognizable; send the reader to the default section.
    Fallback,
}

/// Resolve a route segment. Pure; no rendering happens here.
fn resolve(segment: &str) -> Resolution {
    if let Some(id) = SectionId::ALL.into_iter().find(|id| id.as_str() == segment) {
        return Resolution::Page(id);
    }
    match SectionId::from_segment(segment) {
        Some(id) => Resolution::Canonicalize(id),
        None => Resolution::Fallback,
    }
}

/// Handle GET /documentation/{section}.
pub(crate) async fn get_section(
    Path(segment): Path<String>,
    Query(params): Query<PageParams>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    match resolve(&segment) {
        Resolution::Page(id) => render_page(id, &params, &state, &headers),
        Resolution::Canonicalize(id) => {
            // Mode and query survive the canonicalization.
            Redirect::permanent(&page_href(id, &params.ui_state(id))).into_response()
        }
        Resolution::Fallback => redirect_to_default(&params),
    }
}

/// Handle GET / and GET /documentation.
pub(crate) async fn get_root(Query(params): Query<PageParams>) -> Response {
    redirect_to_default(&params)
}

/// Router fallback: anything unrecognized lands on the default section.
pub(crate) async fn fallback(Query(params): Query<PageParams>) -> Response {
    redirect_to_default(&params)
}

fn redirect_to_default(params: &PageParams) -> Response {
    let id = SectionId::default();
    Redirect::temporary(&page_href(id, &params.ui_state(id))).into_response()
}

/// Render a section page with ETag handling.
fn render_page(
    id: SectionId,
    params: &PageParams,
    state: &AppState,
    headers: &HeaderMap,
) -> Response {
    let ui = params.ui_state(id);
    let html = render_document(
        &ui,
        &state.links,
        &PageOptions {
            site_title: &state.site_title,
            asset_base: "/assets",
        },
    );

    let etag = compute_etag(&state.version, &html);

    // Check If-None-Match header for conditional request
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        Html(html),
    )
        .into_response()
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars) - sufficient for
/// cache invalidation with negligible collision probability.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
