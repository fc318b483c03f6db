//! HTML rendering for the GestRésidence documentation site.
//!
//! Everything in this crate is a pure function from site structure and
//! [`UiState`](residocs_site::UiState) to HTML written into a `String`:
//!
//! - [`render_document`]: a complete page — head, navigation shell
//!   (sidebar, mobile header, table of contents, footer) and the content
//!   section the state mounts.
//! - [`render_section`]: just the content column for one section.
//!
//! The color mode threads through as class variants (`panel panel-dark` vs
//! `panel panel-light`); no text content depends on it. There is no I/O
//! here — the server and the static exporter both call into this crate and
//! decide where the bytes go.

mod content;
mod context;
mod html;
mod icons;
mod page;
mod shell;

pub use content::render_section;
pub use context::{RenderContext, SiteLinks};
pub use page::{PageOptions, render_document};
pub use shell::page_href;
