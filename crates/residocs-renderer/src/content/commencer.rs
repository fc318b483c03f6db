//! Section « Introduction ».

use crate::context::RenderContext;

use super::{card, heading, panel, section_header};

pub(super) fn render(ctx: &RenderContext, out: &mut String) {
    section_header(
        "Introduction",
        false,
        "Bienvenue dans la documentation de GestRésidence, l'application de \
         gestion des résidences de stagiaires.",
        out,
    );

    heading("commencer-a-propos", "À propos de l'application", out);
    out.push_str(
        "<p>GestRésidence centralise la gestion quotidienne d'une résidence \
         d'hébergement : l'affectation des chambres, le suivi des stagiaires \
         accueillis, l'organisation du personnel et la préparation des repas. \
         L'application remplace les classeurs et les feuilles de calcul \
         dispersées par un outil unique, accessible depuis un navigateur.</p>\n",
    );
    panel(
        ctx,
        "info",
        "Bon à savoir",
        "GestRésidence fonctionne entièrement sur votre réseau : aucune \
         donnée personnelle ne quitte l'établissement.",
        out,
    );

    heading("commencer-fonctionnalites", "Fonctionnalités principales", out);
    out.push_str("<div class=\"card-grid\">\n");
    card(
        ctx,
        "Gestion des stagiaires",
        "Dossiers d'accueil, dates de séjour, affectation et départ en \
         quelques clics.",
        out,
    );
    card(
        ctx,
        "Gestion des chambres",
        "Disponibilité en temps réel, statuts de maintenance et historique \
         d'occupation.",
        out,
    );
    card(
        ctx,
        "Gestion du personnel",
        "Équipes, rôles et plannings de service de la résidence.",
        out,
    );
    card(
        ctx,
        "Gestion de la cuisine",
        "Menus hebdomadaires et effectifs prévisionnels pour chaque repas.",
        out,
    );
    out.push_str("</div>\n");

    heading("commencer-architecture", "Architecture générale", out);
    out.push_str(
        "<p>L'application est découpée en trois blocs indépendants :</p>\n\
         <ul>\n\
         <li>une interface web utilisée par les équipes de la résidence ;</li>\n\
         <li>une API REST qui porte toute la logique métier ;</li>\n\
         <li>une base de données relationnelle qui conserve les dossiers.</li>\n\
         </ul>\n\
         <p>Les trois blocs se déploient ensemble sur un même serveur ou \
         séparément selon la taille de l'établissement. La section \
         Développement décrit le découpage en détail.</p>\n",
    );

    heading("commencer-public-vise", "À qui s'adresse ce guide", out);
    out.push_str(
        "<p>Ce guide accompagne trois profils de lecteurs :</p>\n\
         <ul>\n\
         <li><strong>Gestionnaires de résidence</strong> : le guide \
         utilisateur couvre le travail quotidien, sans prérequis technique.</li>\n\
         <li><strong>Administrateurs système</strong> : les sections \
         Installation et Déploiement décrivent la mise en place et \
         l'exploitation.</li>\n\
         <li><strong>Développeurs</strong> : la référence API et la section \
         Développement documentent l'intégration et la contribution au \
         projet.</li>\n\
         </ul>\n",
    );
}
