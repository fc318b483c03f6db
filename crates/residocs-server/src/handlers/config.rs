//! Configuration API endpoint.
//!
//! Returns the site identity for client-side consumers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use residocs_site::SectionId;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/config.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConfigResponse {
    /// Site title.
    site_title: String,
    /// Path clients should land on first.
    default_path: String,
    /// Source-control hosting page.
    repository_url: String,
    /// Support contact address.
    support_email: String,
    /// Application version.
    version: String,
}

/// Handle GET /api/config.
pub(crate) async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        site_title: state.site_title.clone(),
        default_path: SectionId::default().canonical_path(),
        repository_url: state.links.repository_url.clone(),
        support_email: state.links.support_email.clone(),
        version: state.version.clone(),
    })
}
