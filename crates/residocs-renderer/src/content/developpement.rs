//! Section « Développement ».

use crate::context::RenderContext;

use super::{code_block, heading, panel, section_header, table};

pub(super) fn render(ctx: &RenderContext, out: &mut String) {
    section_header(
        "Développement",
        false,
        "Architecture du code, choix techniques et règles de contribution.",
        out,
    );

    heading("developpement-architecture", "Architecture technique", out);
    out.push_str("<p>Le dépôt regroupe les deux applications et leur documentation :</p>\n");
    code_block(
        ctx,
        "text",
        "gestresidence/\n\
         ├── backend/    API REST (Java, Spring Boot)\n\
         ├── frontend/   interface web (React)\n\
         └── docs/       ce site de documentation",
        out,
    );
    out.push_str(
        "<p>Le backend suit un découpage en trois couches : les contrôleurs \
         exposent les routes, les services portent les règles métier \
         (affectations, statuts, effectifs), les dépôts encapsulent l'accès \
         à la base. Les règles métier ne dépendent jamais de la couche \
         HTTP.</p>\n",
    );

    heading("developpement-stack-technique", "Stack technique", out);
    table(
        ctx,
        &["Couche", "Technologie", "Rôle"],
        &[
            &["Interface", "React 18 + Vite", "Écrans et navigation."],
            &["Styles", "Tailwind CSS", "Thème clair et sombre."],
            &["API", "Spring Boot 3", "Routes REST et validation."],
            &["Accès aux données", "Spring Data JPA", "Requêtes et migrations."],
            &["Base de données", "MySQL 8", "Stockage des dossiers."],
            &["Authentification", "JWT", "Sessions sans état."],
        ],
        out,
    );

    heading("developpement-conventions", "Conventions de code", out);
    out.push_str(
        "<ul>\n\
         <li>Le vocabulaire métier reste en français dans le code : \
         <code>stagiaire</code>, <code>chambre</code>, \
         <code>sejour</code>.</li>\n\
         <li>Messages de commit au format conventionnel : \
         <code>feat:</code>, <code>fix:</code>, <code>docs:</code>.</li>\n\
         <li>Chaque règle métier nouvelle arrive avec son test ; la suite \
         complète doit passer avant toute demande de fusion.</li>\n\
         <li>Le formatage est appliqué par l'outillage du dépôt, jamais à \
         la main.</li>\n\
         </ul>\n",
    );

    heading("developpement-contribuer", "Contribuer", out);
    out.push_str(
        "<ol class=\"steps\">\n\
         <li>Créez un fork du dépôt puis une branche \
         <code>feature/&lt;sujet&gt;</code>.</li>\n\
         <li>Développez et testez localement (voir la section \
         Installation).</li>\n\
         <li>Ouvrez une demande de fusion décrivant le besoin couvert et \
         les écrans touchés.</li>\n\
         </ol>\n",
    );
    panel(
        ctx,
        "info",
        "Avant de commencer",
        "Pour un changement important, ouvrez d'abord un ticket afin de \
         valider l'approche avec les mainteneurs.",
        out,
    );
}
