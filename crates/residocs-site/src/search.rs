//! Sidebar listing and search filter.
//!
//! The sidebar renders a [`NavSection`] list: the registry sections with the
//! subsections the current search query kept. Filtering is a pure function
//! recomputed on every keystroke; there is no ranking and no index — nine
//! sections with a handful of subsections each do not need one.

use crate::registry::{self, Icon, Section, Subsection};
use crate::section::SectionId;

/// One sidebar entry: a section and the subsections the filter kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub id: SectionId,
    pub title: &'static str,
    pub icon: Icon,
    /// Subsections retained by the filter, in registry order.
    pub subsections: Vec<&'static Subsection>,
}

impl NavSection {
    fn from_section(section: &'static Section) -> Self {
        Self {
            id: section.id,
            title: section.title,
            icon: section.icon,
            subsections: section.subsections.iter().collect(),
        }
    }

    /// Canonical page path of the underlying section.
    #[must_use]
    pub fn path(&self) -> String {
        self.id.canonical_path()
    }
}

/// The unfiltered sidebar listing: every section with every subsection.
#[must_use]
pub fn all_sections() -> Vec<NavSection> {
    registry::sections().iter().map(NavSection::from_section).collect()
}

/// Filter a sidebar listing by a free-text query.
///
/// A section is retained when its own title contains the query
/// case-insensitively (keeping all of its subsections), or when at least one
/// subsection title matches (keeping only the matching ones). The empty
/// query short-circuits to the input unchanged, and relative order is always
/// preserved, which makes the filter idempotent.
#[must_use]
pub fn filter(listing: &[NavSection], query: &str) -> Vec<NavSection> {
    if query.is_empty() {
        return listing.to_vec();
    }
    let needle = query.to_lowercase();
    listing
        .iter()
        .filter_map(|entry| {
            if contains_ci(entry.title, &needle) {
                return Some(entry.clone());
            }
            let kept: Vec<_> = entry
                .subsections
                .iter()
                .copied()
                .filter(|sub| contains_ci(sub.title, &needle))
                .collect();
            if kept.is_empty() {
                None
            } else {
                Some(NavSection {
                    subsections: kept,
                    ..entry.clone()
                })
            }
        })
        .collect()
}

/// Filter the full registry by a query. Convenience for the common case.
#[must_use]
pub fn filter_sections(query: &str) -> Vec<NavSection> {
    filter(&all_sections(), query)
}

/// Case-insensitive substring match; `needle` must already be lowercased.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
