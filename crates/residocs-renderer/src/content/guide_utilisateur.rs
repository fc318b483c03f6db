//! Section « Guide utilisateur ».

use crate::context::RenderContext;

use super::{heading, panel, section_header, table};

pub(super) fn render(ctx: &RenderContext, out: &mut String) {
    section_header(
        "Guide utilisateur",
        false,
        "Le travail quotidien dans GestRésidence, écran par écran.",
        out,
    );

    heading("guide-utilisateur-tableau-de-bord", "Tableau de bord", out);
    out.push_str(
        "<p>Le tableau de bord est la page d'accueil de l'application. Il \
         agrège les indicateurs de la journée : occupation, arrivées et \
         départs, effectifs des repas, alertes de maintenance. Les chiffres \
         sont recalculés à chaque affichage, sans mise en cache.</p>\n",
    );
    panel(
        ctx,
        "info",
        "Astuce",
        "Cliquez sur un indicateur pour ouvrir l'écran correspondant avec \
         le filtre déjà appliqué. Par exemple, la vignette des départs du \
         jour ouvre la liste des stagiaires filtrée sur ces dossiers.",
        out,
    );

    heading("guide-utilisateur-gestion-stagiaires", "Gestion des Stagiaires", out);
    out.push_str(
        "<p>L'écran Stagiaires liste les dossiers, avec recherche par nom et \
         filtre par statut (présent, à venir, parti).</p>\n\
         <ul>\n\
         <li><strong>Créer un dossier</strong> : identité, coordonnées, \
         organisme de formation, dates de séjour.</li>\n\
         <li><strong>Affecter une chambre</strong> : la liste ne propose que \
         les chambres libres sur la période du séjour.</li>\n\
         <li><strong>Modifier un séjour</strong> : prolongation ou départ \
         anticipé ; les conflits de chambre sont signalés \
         immédiatement.</li>\n\
         <li><strong>Enregistrer un départ</strong> : le dossier passe en \
         « parti » et la chambre redevient libre après l'état des \
         lieux.</li>\n\
         </ul>\n",
    );

    heading("guide-utilisateur-gestion-chambres", "Gestion des Chambres", out);
    out.push_str(
        "<p>Chaque chambre porte un statut qui pilote les affectations :</p>\n",
    );
    table(
        ctx,
        &["Statut", "Signification"],
        &[
            &["Libre", "Disponible pour une affectation."],
            &["Occupée", "Un stagiaire y séjourne actuellement."],
            &[
                "Maintenance",
                "Indisponible temporairement (travaux, nettoyage en profondeur).",
            ],
            &["Hors service", "Retirée du parc jusqu'à nouvel ordre."],
        ],
        out,
    );
    out.push_str(
        "<p>La vue en plan affiche les chambres étage par étage ; la vue en \
         liste permet le tri par numéro, capacité ou statut. Le passage en \
         maintenance demande un motif, conservé dans l'historique de la \
         chambre.</p>\n",
    );

    heading("guide-utilisateur-gestion-personnel", "Gestion du Personnel", out);
    out.push_str(
        "<p>L'écran Personnel recense les agents de la résidence et leur \
         rôle applicatif :</p>\n\
         <ul>\n\
         <li><strong>Administrateur</strong> : paramétrage et gestion des \
         comptes.</li>\n\
         <li><strong>Gestionnaire</strong> : stagiaires, chambres et \
         planning au quotidien.</li>\n\
         <li><strong>Agent d'accueil</strong> : arrivées, départs et \
         consultation des dossiers.</li>\n\
         <li><strong>Cuisine</strong> : menus et effectifs des repas \
         uniquement.</li>\n\
         </ul>\n\
         <p>Le planning hebdomadaire s'édite par glisser-déposer ; chaque \
         agent voit son propre planning dès sa connexion.</p>\n",
    );

    heading("guide-utilisateur-gestion-cuisine", "Gestion de la Cuisine", out);
    out.push_str(
        "<p>Le module Cuisine prépare les services à partir des présences \
         attendues :</p>\n\
         <ul>\n\
         <li>les <strong>menus hebdomadaires</strong> se saisissent service \
         par service et se dupliquent d'une semaine à l'autre ;</li>\n\
         <li>les <strong>effectifs prévisionnels</strong> se déduisent des \
         séjours en cours, ajustables manuellement pour les invités ;</li>\n\
         <li>les <strong>régimes particuliers</strong> signalés dans les \
         dossiers des stagiaires apparaissent sur la fiche du service.</li>\n\
         </ul>\n",
    );
}
