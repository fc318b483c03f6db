//! Section « Sécurité » (placeholder).

use crate::context::RenderContext;

use super::{heading, panel, section_header, table};

pub(super) fn render(ctx: &RenderContext, out: &mut String) {
    section_header(
        "Sécurité",
        true,
        "Recommandations pour exploiter GestRésidence en sécurité. Cette \
         section est en cours de rédaction.",
        out,
    );

    heading("securite-bonnes-pratiques", "Bonnes pratiques", out);
    out.push_str(
        "<p>En attendant le guide complet, appliquez au minimum :</p>\n\
         <ul>\n\
         <li>changez les mots de passe par défaut dès l'installation ;</li>\n\
         <li>servez l'application derrière HTTPS, y compris sur le réseau \
         interne ;</li>\n\
         <li>sauvegardez la base de données quotidiennement et testez la \
         restauration ;</li>\n\
         <li>créez un compte nominatif par agent, jamais de compte \
         partagé.</li>\n\
         </ul>\n",
    );

    heading("securite-roles-permissions", "Rôles et permissions", out);
    out.push_str(
        "<p>Les rôles applicatifs limitent chaque compte au strict \
         nécessaire :</p>\n",
    );
    table(
        ctx,
        &["Rôle", "Périmètre"],
        &[
            &["Administrateur", "Paramétrage, comptes et données."],
            &["Gestionnaire", "Stagiaires, chambres et plannings."],
            &["Agent d'accueil", "Arrivées, départs, consultation."],
            &["Cuisine", "Menus et effectifs des repas."],
        ],
        out,
    );
    panel(
        ctx,
        "info",
        "À venir",
        "Le détail permission par permission, la politique de mots de passe \
         et la journalisation des accès seront documentés ici.",
        out,
    );
}
