//! Typed section identifiers and route-segment parsing.
//!
//! Sections are dispatched on [`SectionId`] everywhere; raw strings only
//! exist at the parse boundary, where a route segment is normalized
//! (Unicode-decomposed, combining marks stripped, lowercased) and matched
//! against the nine canonical slugs.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// The nine documentation sections, in sidebar order.
///
/// `Commencer` is the default: unknown or absent route segments resolve to
/// it rather than failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SectionId {
    #[default]
    Commencer,
    Installation,
    DemarrageRapide,
    GuideUtilisateur,
    ReferenceApi,
    Developpement,
    Securite,
    Deploiement,
    Support,
}

impl SectionId {
    /// All sections in sidebar order.
    pub const ALL: [Self; 9] = [
        Self::Commencer,
        Self::Installation,
        Self::DemarrageRapide,
        Self::GuideUtilisateur,
        Self::ReferenceApi,
        Self::Developpement,
        Self::Securite,
        Self::Deploiement,
        Self::Support,
    ];

    /// Canonical URL slug for this section.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commencer => "commencer",
            Self::Installation => "installation",
            Self::DemarrageRapide => "demarrage-rapide",
            Self::GuideUtilisateur => "guide-utilisateur",
            Self::ReferenceApi => "reference-api",
            Self::Developpement => "developpement",
            Self::Securite => "securite",
            Self::Deploiement => "deploiement",
            Self::Support => "support",
        }
    }

    /// Position in sidebar order (0-based).
    #[must_use]
    pub(crate) const fn position(self) -> usize {
        match self {
            Self::Commencer => 0,
            Self::Installation => 1,
            Self::DemarrageRapide => 2,
            Self::GuideUtilisateur => 3,
            Self::ReferenceApi => 4,
            Self::Developpement => 5,
            Self::Securite => 6,
            Self::Deploiement => 7,
            Self::Support => 8,
        }
    }

    /// Canonical page path, e.g. `/documentation/demarrage-rapide`.
    #[must_use]
    pub fn canonical_path(self) -> String {
        format!("/documentation/{}", self.as_str())
    }

    /// Parse a raw route segment.
    ///
    /// The segment is normalized before matching, so accented variants of a
    /// known slug (`Sécurité`, `déploiement`) parse to the same section as
    /// the canonical ASCII form. Unknown segments yield `None`.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        let normalized = normalize_segment(segment);
        Self::ALL.into_iter().find(|id| id.as_str() == normalized)
    }

    /// Total variant of [`Self::from_segment`]: absent or unknown segments
    /// resolve to the default section instead of failing.
    #[must_use]
    pub fn from_segment_or_default(segment: Option<&str>) -> Self {
        segment.and_then(Self::from_segment).unwrap_or_default()
    }
}

/// Normalize a raw route segment for slug comparison.
///
/// Decomposes to NFD, drops combining diacritical marks, and lowercases.
/// This is the only place raw route strings are inspected; all downstream
/// dispatch is on [`SectionId`].
#[must_use]
pub fn normalize_segment(segment: &str) -> String {
    segment
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_slug_parses_to_itself() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_segment(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_slugs_are_unique() {
        for (i, a) in SectionId::ALL.iter().enumerate() {
            for b in &SectionId::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_accented_variant_parses_like_ascii_form() {
        assert_eq!(
            SectionId::from_segment("sécurité"),
            Some(SectionId::Securite)
        );
        assert_eq!(
            SectionId::from_segment("déploiement"),
            Some(SectionId::Deploiement)
        );
        assert_eq!(
            SectionId::from_segment("démarrage-rapide"),
            Some(SectionId::DemarrageRapide)
        );
    }

    #[test]
    fn test_uppercase_input_parses() {
        assert_eq!(
            SectionId::from_segment("SÉCURITÉ"),
            Some(SectionId::Securite)
        );
        assert_eq!(
            SectionId::from_segment("Installation"),
            Some(SectionId::Installation)
        );
    }

    #[test]
    fn test_unknown_segment_yields_none() {
        assert_eq!(SectionId::from_segment("inconnu"), None);
        assert_eq!(SectionId::from_segment(""), None);
        assert_eq!(SectionId::from_segment("commencer/extra"), None);
    }

    #[test]
    fn test_default_resolution() {
        assert_eq!(
            SectionId::from_segment_or_default(None),
            SectionId::Commencer
        );
        assert_eq!(
            SectionId::from_segment_or_default(Some("inconnu")),
            SectionId::Commencer
        );
        assert_eq!(
            SectionId::from_segment_or_default(Some("support")),
            SectionId::Support
        );
    }

    #[test]
    fn test_canonical_path() {
        assert_eq!(
            SectionId::DemarrageRapide.canonical_path(),
            "/documentation/demarrage-rapide"
        );
    }

    #[test]
    fn test_normalize_strips_marks_and_lowercases() {
        assert_eq!(normalize_segment("Référence-API"), "reference-api");
        assert_eq!(normalize_segment("çà-et-là"), "ca-et-la");
        assert_eq!(normalize_segment("plain"), "plain");
    }

    #[test]
    fn test_positions_match_sidebar_order() {
        for (i, id) in SectionId::ALL.into_iter().enumerate() {
            assert_eq!(id.position(), i);
        }
    }
}
