//! Site structure for the GestRésidence documentation.
//!
//! This crate owns everything the navigation shell is driven by, with no
//! rendering and no I/O:
//!
//! - [`SectionId`]: the nine documentation sections as a typed enumeration,
//!   with route-segment parsing (diacritic normalization happens only there).
//! - [`registry`]: the static section table — titles, icons, subsections —
//!   plus prev/next neighbors and per-section tables of contents.
//! - [`search`]: the sidebar listing and its case-insensitive title filter.
//! - [`UiState`]: one immutable record for the shell's flags (active section,
//!   search query, mobile menu, TOC visibility, color mode), updated through
//!   pure [`UiState::apply`] transitions.
//!
//! Everything here is synchronous and allocation-light; the server crate
//! derives a fresh `UiState` per request and hands it to the renderer.

pub mod registry;
pub mod search;
mod section;
mod state;

pub use registry::{Icon, Section, Subsection, TocEntry};
pub use search::NavSection;
pub use section::{SectionId, normalize_segment};
pub use state::{ColorMode, TOC_SCROLL_THRESHOLD, UiEvent, UiState};
