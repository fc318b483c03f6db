//! Application state.
//!
//! Shared state for all request handlers.

use residocs_renderer::SiteLinks;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Site title, shown in the shell and page titles.
    pub(crate) site_title: String,
    /// External links rendered into the footer and the Support section.
    pub(crate) links: SiteLinks,
    /// Application version, salted into ETags so upgrades invalidate caches.
    pub(crate) version: String,
}
