//! Section « Référence API ».

use std::fmt::Write;

use crate::context::RenderContext;
use crate::html::escape_html;

use super::{code_block, heading, panel, section_header, table};

/// Endpoint table: method chip, path in `<code>`, description.
fn endpoint_table(ctx: &RenderContext, rows: &[(&str, &str, &str)], out: &mut String) {
    let _ = write!(
        out,
        "<div class=\"{}\">\n<table>\n\
         <thead><tr><th>Méthode</th><th>Chemin</th><th>Description</th></tr></thead>\n\
         <tbody>\n",
        ctx.variant("table-wrap")
    );
    for (method, path, description) in rows {
        let _ = write!(
            out,
            "<tr><td><span class=\"method method-{}\">{method}</span></td>\
             <td><code>{}</code></td><td>{}</td></tr>\n",
            method.to_ascii_lowercase(),
            escape_html(path),
            escape_html(description)
        );
    }
    out.push_str("</tbody>\n</table>\n</div>\n");
}

pub(super) fn render(ctx: &RenderContext, out: &mut String) {
    section_header(
        "Référence API",
        false,
        "L'API REST de GestRésidence : authentification, ressources et \
         codes d'erreur.",
        out,
    );
    out.push_str(
        "<p>Toutes les routes sont préfixées par <code>/api</code> et \
         échangent du JSON encodé en UTF-8. Sauf mention contraire, elles \
         exigent un jeton d'authentification.</p>\n",
    );

    heading("reference-api-authentification", "Authentification", out);
    out.push_str(
        "<p>L'API utilise des jetons JWT. Obtenez un jeton avec vos \
         identifiants :</p>\n",
    );
    endpoint_table(
        ctx,
        &[(
            "POST",
            "/api/auth/login",
            "Échange e-mail et mot de passe contre un jeton.",
        )],
        out,
    );
    code_block(
        ctx,
        "json",
        "{\n  \"email\": \"admin@gestresidence.fr\",\n  \"motDePasse\": \"admin123\"\n}",
        out,
    );
    out.push_str("<p>Réponse en cas de succès :</p>\n");
    code_block(
        ctx,
        "json",
        "{\n  \"jeton\": \"eyJhbGciOiJIUzI1NiJ9...\",\n  \"expireDans\": 3600,\n  \
         \"role\": \"ADMINISTRATEUR\"\n}",
        out,
    );
    out.push_str(
        "<p>Joignez ensuite le jeton à chaque requête dans l'en-tête \
         <code>Authorization: Bearer &lt;jeton&gt;</code>.</p>\n",
    );

    heading("reference-api-stagiaires", "Stagiaires", out);
    endpoint_table(
        ctx,
        &[
            (
                "GET",
                "/api/stagiaires",
                "Liste paginée ; filtres nom= et statut= facultatifs.",
            ),
            ("GET", "/api/stagiaires/{id}", "Détail d'un dossier."),
            ("POST", "/api/stagiaires", "Crée un dossier."),
            ("PUT", "/api/stagiaires/{id}", "Met à jour un dossier."),
            (
                "DELETE",
                "/api/stagiaires/{id}",
                "Supprime un dossier sans séjour en cours.",
            ),
        ],
        out,
    );
    out.push_str("<p>Champs du corps de requête :</p>\n");
    table(
        ctx,
        &["Champ", "Type", "Obligatoire", "Description"],
        &[
            &["nom", "chaîne", "oui", "Nom de famille."],
            &["prenom", "chaîne", "oui", "Prénom."],
            &["email", "chaîne", "oui", "Adresse de contact, unique."],
            &["dateArrivee", "date ISO 8601", "oui", "Début du séjour."],
            &["dateDepart", "date ISO 8601", "non", "Fin prévue du séjour."],
            &[
                "chambreId",
                "entier",
                "non",
                "Chambre affectée ; doit être libre sur la période.",
            ],
        ],
        out,
    );
    out.push_str("<p>Exemple de création (réponse <code>201 Created</code>) :</p>\n");
    code_block(
        ctx,
        "json",
        "{\n  \"nom\": \"Martin\",\n  \"prenom\": \"Claire\",\n  \
         \"email\": \"claire.martin@exemple.fr\",\n  \
         \"dateArrivee\": \"2025-09-01\",\n  \"dateDepart\": \"2025-12-19\",\n  \
         \"chambreId\": 112\n}",
        out,
    );

    heading("reference-api-chambres", "Chambres", out);
    endpoint_table(
        ctx,
        &[
            (
                "GET",
                "/api/chambres",
                "Liste du parc ; filtres statut= et etage= facultatifs.",
            ),
            ("GET", "/api/chambres/{id}", "Détail et historique d'occupation."),
            ("POST", "/api/chambres", "Déclare une chambre."),
            ("PUT", "/api/chambres/{id}", "Met à jour numéro, étage ou capacité."),
            (
                "PATCH",
                "/api/chambres/{id}/statut",
                "Change le statut (libre, occupee, maintenance, hors_service).",
            ),
        ],
        out,
    );
    code_block(
        ctx,
        "json",
        "{\n  \"numero\": \"112\",\n  \"etage\": 1,\n  \"capacite\": 2,\n  \
         \"statut\": \"libre\"\n}",
        out,
    );

    heading("reference-api-personnel", "Personnel", out);
    endpoint_table(
        ctx,
        &[
            ("GET", "/api/personnel", "Liste des agents et de leur rôle."),
            ("POST", "/api/personnel", "Crée un compte agent."),
            ("PUT", "/api/personnel/{id}", "Met à jour identité ou rôle."),
            ("DELETE", "/api/personnel/{id}", "Désactive un compte."),
        ],
        out,
    );
    out.push_str(
        "<p>Le champ <code>role</code> accepte <code>ADMINISTRATEUR</code>, \
         <code>GESTIONNAIRE</code>, <code>ACCUEIL</code> ou \
         <code>CUISINE</code>. Seul un administrateur peut modifier les \
         rôles.</p>\n",
    );

    heading("reference-api-codes-erreur", "Codes d'erreur", out);
    out.push_str(
        "<p>Les erreurs renvoient un corps JSON \
         <code>{\"code\", \"message\"}</code> avec l'un des statuts \
         suivants :</p>\n",
    );
    table(
        ctx,
        &["Statut", "Code", "Signification"],
        &[
            &["400", "REQUETE_INVALIDE", "Corps malformé ou champ manquant."],
            &["401", "NON_AUTHENTIFIE", "Jeton absent, expiré ou invalide."],
            &["403", "ACCES_REFUSE", "Rôle insuffisant pour l'opération."],
            &["404", "INTROUVABLE", "La ressource demandée n'existe pas."],
            &[
                "409",
                "CONFLIT",
                "État incompatible, par exemple chambre déjà occupée.",
            ],
            &["500", "ERREUR_INTERNE", "Erreur côté serveur ; consultez les journaux."],
        ],
        out,
    );
    panel(
        ctx,
        "info",
        "Idempotence",
        "Les requêtes PUT et DELETE sont idempotentes : rejouer la même \
         requête produit le même état final.",
        out,
    );
}
