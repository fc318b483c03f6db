//! Section « Démarrage rapide ».

use crate::context::RenderContext;

use super::{heading, panel, section_header, table};

pub(super) fn render(ctx: &RenderContext, out: &mut String) {
    section_header(
        "Démarrage rapide",
        false,
        "Une résidence opérationnelle en dix minutes : première connexion, \
         chambres, premiers stagiaires.",
        out,
    );

    heading("demarrage-rapide-premiere-connexion", "Première connexion", out);
    out.push_str(
        "<p>À l'installation, un compte administrateur est créé \
         automatiquement :</p>\n",
    );
    table(
        ctx,
        &["Champ", "Valeur par défaut"],
        &[
            &["Adresse e-mail", "admin@gestresidence.fr"],
            &["Mot de passe", "admin123"],
        ],
        out,
    );
    panel(
        ctx,
        "warning",
        "Important",
        "Changez ce mot de passe dès la première connexion, depuis le menu \
         Mon compte. Le compte par défaut donne un accès complet à \
         l'application.",
        out,
    );

    heading("demarrage-rapide-tableau-de-bord", "Tableau de bord", out);
    out.push_str(
        "<p>Après connexion, le tableau de bord résume l'état de la \
         résidence :</p>\n\
         <ul>\n\
         <li>le <strong>taux d'occupation</strong> des chambres ;</li>\n\
         <li>le nombre de <strong>stagiaires présents</strong> et les \
         arrivées du jour ;</li>\n\
         <li>les <strong>repas prévus</strong> pour le service suivant ;</li>\n\
         <li>les <strong>alertes</strong> : chambres en maintenance, départs \
         à préparer.</li>\n\
         </ul>\n\
         <p>Chaque vignette mène à l'écran de gestion correspondant.</p>\n",
    );

    heading("demarrage-rapide-configurer-chambres", "Configurer les Chambres", out);
    out.push_str(
        "<p>Déclarez le parc de chambres avant d'accueillir les premiers \
         stagiaires :</p>\n\
         <ol class=\"steps\">\n\
         <li>Ouvrez le menu <strong>Chambres</strong> puis cliquez sur \
         <strong>Ajouter une chambre</strong>.</li>\n\
         <li>Renseignez le numéro, l'étage et la capacité (une ou deux \
         places).</li>\n\
         <li>Laissez le statut sur <strong>Libre</strong> et enregistrez.</li>\n\
         <li>Répétez l'opération, ou importez un fichier CSV depuis \
         <strong>Chambres → Importer</strong>.</li>\n\
         </ol>\n",
    );

    heading("demarrage-rapide-ajouter-stagiaires", "Ajouter des stagiaires", out);
    out.push_str(
        "<p>Créez ensuite les premiers dossiers :</p>\n\
         <ol class=\"steps\">\n\
         <li>Ouvrez le menu <strong>Stagiaires</strong> puis \
         <strong>Nouveau stagiaire</strong>.</li>\n\
         <li>Saisissez l'identité, les dates d'arrivée et de départ \
         prévues.</li>\n\
         <li>Choisissez une chambre parmi celles proposées : seules les \
         chambres libres aux dates du séjour apparaissent.</li>\n\
         <li>Validez : la chambre passe en <strong>Occupée</strong> et le \
         stagiaire apparaît sur le tableau de bord.</li>\n\
         </ol>\n",
    );
    panel(
        ctx,
        "info",
        "Et ensuite ?",
        "Le guide utilisateur détaille chaque écran, y compris la gestion \
         du personnel et de la cuisine.",
        out,
    );
}
