//! Static section registry.
//!
//! The registry is the single source for sidebar links, tables of contents
//! and prev/next footer navigation: nine sections, each with a title, an
//! icon and an ordered list of anchor-addressable subsections. The table is
//! compiled in; nothing is loaded at runtime.
//!
//! Subsection slugs are only unique *within* their section — the data reuses
//! `tableau-de-bord` and `architecture` in two sections each. Rendered
//! anchors are therefore scoped with the section slug ([`Subsection::anchor`])
//! so intra-page anchors stay unique no matter which section is mounted.

use crate::section::SectionId;

/// An anchor-addressable sub-topic within a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subsection {
    /// Anchor slug, unique within the owning section.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
}

impl Subsection {
    /// Scoped anchor id, e.g. `guide-utilisateur-tableau-de-bord`.
    #[must_use]
    pub fn anchor(&self, section: SectionId) -> String {
        format!("{}-{}", section.as_str(), self.id)
    }
}

/// Opaque reference to a sidebar glyph; the renderer maps it to inline SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    BookOpen,
    Download,
    Rocket,
    Users,
    Code,
    Wrench,
    Shield,
    Cloud,
    LifeBuoy,
}

impl Icon {
    /// Stable name, used as a CSS class suffix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BookOpen => "book-open",
            Self::Download => "download",
            Self::Rocket => "rocket",
            Self::Users => "users",
            Self::Code => "code",
            Self::Wrench => "wrench",
            Self::Shield => "shield",
            Self::Cloud => "cloud",
            Self::LifeBuoy => "life-buoy",
        }
    }
}

/// A top-level documentation section.
#[derive(Debug)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub icon: Icon,
    pub subsections: &'static [Subsection],
}

/// Entry of a section's table of contents ("Sur cette page").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// Subsection title.
    pub title: &'static str,
    /// Scoped anchor id.
    pub anchor: String,
}

static SECTIONS: [Section; 9] = [
    Section {
        id: SectionId::Commencer,
        title: "Introduction",
        icon: Icon::BookOpen,
        subsections: &[
            Subsection {
                id: "a-propos",
                title: "À propos de l'application",
            },
            Subsection {
                id: "fonctionnalites",
                title: "Fonctionnalités principales",
            },
            Subsection {
                id: "architecture",
                title: "Architecture générale",
            },
            Subsection {
                id: "public-vise",
                title: "À qui s'adresse ce guide",
            },
        ],
    },
    Section {
        id: SectionId::Installation,
        title: "Installation",
        icon: Icon::Download,
        subsections: &[
            Subsection {
                id: "prerequis",
                title: "Prérequis",
            },
            Subsection {
                id: "backend",
                title: "Installation du backend",
            },
            Subsection {
                id: "frontend",
                title: "Installation du frontend",
            },
            Subsection {
                id: "base-de-donnees",
                title: "Base de données",
            },
            Subsection {
                id: "verification",
                title: "Vérification",
            },
        ],
    },
    Section {
        id: SectionId::DemarrageRapide,
        title: "Démarrage rapide",
        icon: Icon::Rocket,
        subsections: &[
            Subsection {
                id: "premiere-connexion",
                title: "Première connexion",
            },
            Subsection {
                id: "tableau-de-bord",
                title: "Tableau de bord",
            },
            Subsection {
                id: "configurer-chambres",
                title: "Configurer les Chambres",
            },
            Subsection {
                id: "ajouter-stagiaires",
                title: "Ajouter des stagiaires",
            },
        ],
    },
    Section {
        id: SectionId::GuideUtilisateur,
        title: "Guide utilisateur",
        icon: Icon::Users,
        subsections: &[
            Subsection {
                id: "tableau-de-bord",
                title: "Tableau de bord",
            },
            Subsection {
                id: "gestion-stagiaires",
                title: "Gestion des Stagiaires",
            },
            Subsection {
                id: "gestion-chambres",
                title: "Gestion des Chambres",
            },
            Subsection {
                id: "gestion-personnel",
                title: "Gestion du Personnel",
            },
            Subsection {
                id: "gestion-cuisine",
                title: "Gestion de la Cuisine",
            },
        ],
    },
    Section {
        id: SectionId::ReferenceApi,
        title: "Référence API",
        icon: Icon::Code,
        subsections: &[
            Subsection {
                id: "authentification",
                title: "Authentification",
            },
            Subsection {
                id: "stagiaires",
                title: "Stagiaires",
            },
            Subsection {
                id: "chambres",
                title: "Chambres",
            },
            Subsection {
                id: "personnel",
                title: "Personnel",
            },
            Subsection {
                id: "codes-erreur",
                title: "Codes d'erreur",
            },
        ],
    },
    Section {
        id: SectionId::Developpement,
        title: "Développement",
        icon: Icon::Wrench,
        subsections: &[
            Subsection {
                id: "architecture",
                title: "Architecture technique",
            },
            Subsection {
                id: "stack-technique",
                title: "Stack technique",
            },
            Subsection {
                id: "conventions",
                title: "Conventions de code",
            },
            Subsection {
                id: "contribuer",
                title: "Contribuer",
            },
        ],
    },
    Section {
        id: SectionId::Securite,
        title: "Sécurité",
        icon: Icon::Shield,
        subsections: &[
            Subsection {
                id: "bonnes-pratiques",
                title: "Bonnes pratiques",
            },
            Subsection {
                id: "roles-permissions",
                title: "Rôles et permissions",
            },
        ],
    },
    Section {
        id: SectionId::Deploiement,
        title: "Déploiement",
        icon: Icon::Cloud,
        subsections: &[
            Subsection {
                id: "mise-en-production",
                title: "Mise en production",
            },
            Subsection {
                id: "conteneurisation",
                title: "Conteneurisation",
            },
        ],
    },
    Section {
        id: SectionId::Support,
        title: "Support",
        icon: Icon::LifeBuoy,
        subsections: &[
            Subsection {
                id: "faq",
                title: "Questions fréquentes",
            },
            Subsection {
                id: "contact",
                title: "Nous contacter",
            },
        ],
    },
];

/// All sections in sidebar order.
#[must_use]
pub fn sections() -> &'static [Section; 9] {
    &SECTIONS
}

/// Look up a section by id. Total: every id has an entry.
#[must_use]
pub fn section(id: SectionId) -> &'static Section {
    &SECTIONS[id.position()]
}

/// Previous and next sections in sidebar order, for footer navigation.
///
/// The first section has no previous entry, the last no next entry.
#[must_use]
pub fn neighbors(id: SectionId) -> (Option<&'static Section>, Option<&'static Section>) {
    let pos = id.position();
    let prev = pos.checked_sub(1).map(|p| &SECTIONS[p]);
    let next = SECTIONS.get(pos + 1);
    (prev, next)
}

/// Table of contents for a section: its subsections with scoped anchors.
#[must_use]
pub fn toc(id: SectionId) -> Vec<TocEntry> {
    section(id)
        .subsections
        .iter()
        .map(|sub| TocEntry {
            title: sub.title,
            anchor: sub.anchor(id),
        })
        .collect()
}
