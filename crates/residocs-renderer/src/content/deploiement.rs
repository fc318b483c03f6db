//! Section « Déploiement » (placeholder).

use crate::context::RenderContext;

use super::{code_block, heading, panel, section_header};

pub(super) fn render(ctx: &RenderContext, out: &mut String) {
    section_header(
        "Déploiement",
        true,
        "Mettre GestRésidence en production. Cette section est en cours de \
         rédaction.",
        out,
    );

    heading("deploiement-mise-en-production", "Mise en production", out);
    out.push_str(
        "<p>Les grandes étapes d'un déploiement classique :</p>\n\
         <ol class=\"steps\">\n\
         <li>Compilez l'interface (<code>npm run build</code>) et le serveur \
         (<code>mvn package</code>).</li>\n\
         <li>Fournissez la configuration par variables d'environnement, \
         jamais dans les fichiers versionnés.</li>\n\
         <li>Placez un serveur web en frontal pour le HTTPS et le service \
         des fichiers statiques.</li>\n\
         <li>Programmez la sauvegarde de la base avant toute mise à \
         jour.</li>\n\
         </ol>\n",
    );

    heading("deploiement-conteneurisation", "Conteneurisation", out);
    out.push_str(
        "<p>Un fichier Compose minimal assemble les trois services :</p>\n",
    );
    code_block(
        ctx,
        "yaml",
        "services:\n\
        \x20 api:\n\
        \x20   image: gestresidence/api:1.4.2\n\
        \x20   environment:\n\
        \x20     - DB_HOST=db\n\
        \x20 web:\n\
        \x20   image: gestresidence/web:1.4.2\n\
        \x20   ports:\n\
        \x20     - \"443:443\"\n\
        \x20 db:\n\
        \x20   image: mysql:8\n\
        \x20   volumes:\n\
        \x20     - donnees:/var/lib/mysql",
        out,
    );
    panel(
        ctx,
        "info",
        "À venir",
        "Les guides détaillés (dimensionnement, supervision, montée de \
         version sans interruption) seront publiés dans cette section.",
        out,
    );
}
