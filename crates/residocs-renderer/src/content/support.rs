//! Section « Support » (placeholder).

use std::fmt::Write;

use crate::context::RenderContext;
use crate::html::escape_html;

use super::{heading, section_header};

pub(super) fn render(ctx: &RenderContext, out: &mut String) {
    section_header(
        "Support",
        true,
        "Obtenir de l'aide sur GestRésidence. Cette section est en cours de \
         rédaction.",
        out,
    );

    heading("support-faq", "Questions fréquentes", out);
    faq(
        "J'ai oublié mon mot de passe.",
        "Demandez à un administrateur de réinitialiser votre compte depuis \
         l'écran Personnel. Un lien de création de mot de passe vous sera \
         envoyé par e-mail.",
        out,
    );
    faq(
        "Une chambre reste bloquée en maintenance.",
        "Seul le statut « Maintenance » se lève manuellement : ouvrez la \
         fiche de la chambre et repassez-la en « Libre » une fois \
         l'intervention terminée.",
        out,
    );
    faq(
        "Puis-je exporter les données ?",
        "Les listes de stagiaires et de chambres s'exportent en CSV depuis \
         le bouton Exporter de chaque écran. L'export complet de la base \
         relève de la sauvegarde (voir Déploiement).",
        out,
    );

    heading("support-contact", "Nous contacter", out);
    let _ = write!(
        out,
        "<p>Pour un problème applicatif, écrivez à \
         <a href=\"mailto:{email}\">{email}</a> en précisant la version \
         affichée en bas de l'écran de connexion.</p>\n\
         <p>Pour signaler un dysfonctionnement ou proposer une amélioration, \
         ouvrez un ticket sur <a href=\"{repo}\">le dépôt du projet</a>.</p>\n",
        email = escape_html(&ctx.links.support_email),
        repo = escape_html(&ctx.links.repository_url),
    );
}

fn faq(question: &str, answer: &str, out: &mut String) {
    let _ = write!(
        out,
        "<details class=\"faq-item\">\n\
         <summary>{}</summary>\n<p>{}</p>\n</details>\n",
        escape_html(question),
        escape_html(answer)
    );
}
