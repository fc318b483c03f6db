//! Section « Installation ».

use crate::context::RenderContext;

use super::{code_block, heading, panel, section_header, table};

pub(super) fn render(ctx: &RenderContext, out: &mut String) {
    section_header(
        "Installation",
        false,
        "Installer GestRésidence sur un poste de développement ou un serveur \
         de l'établissement.",
        out,
    );

    heading("installation-prerequis", "Prérequis", out);
    out.push_str(
        "<p>Vérifiez que les outils suivants sont disponibles avant de \
         commencer :</p>\n",
    );
    table(
        ctx,
        &["Outil", "Version minimale", "Vérification"],
        &[
            &["Git", "2.30", "git --version"],
            &["Java (JDK)", "17", "java -version"],
            &["Maven", "3.8", "mvn -version"],
            &["Node.js", "18", "node --version"],
            &["MySQL", "8.0", "mysql --version"],
        ],
        out,
    );

    heading("installation-backend", "Installation du backend", out);
    out.push_str("<p>Récupérez les sources puis placez-vous dans le module serveur :</p>\n");
    code_block(
        ctx,
        "bash",
        "git clone https://github.com/gestresidence/gestresidence.git\n\
         cd gestresidence/backend",
        out,
    );
    out.push_str(
        "<p>Renseignez l'accès à la base de données dans \
         <code>src/main/resources/application.properties</code> :</p>\n",
    );
    code_block(
        ctx,
        "properties",
        "spring.datasource.url=jdbc:mysql://localhost:3306/gestresidence\n\
         spring.datasource.username=gestresidence\n\
         spring.datasource.password=motdepasse\n\
         server.port=8080",
        out,
    );
    out.push_str("<p>Puis démarrez le serveur :</p>\n");
    code_block(ctx, "bash", "mvn spring-boot:run", out);

    heading("installation-frontend", "Installation du frontend", out);
    out.push_str("<p>Dans un second terminal, installez puis lancez l'interface web :</p>\n");
    code_block(
        ctx,
        "bash",
        "cd gestresidence/frontend\n\
         npm install\n\
         npm run dev",
        out,
    );
    out.push_str(
        "<p>Si l'API n'écoute pas sur le port par défaut, indiquez son \
         adresse dans un fichier <code>.env</code> :</p>\n",
    );
    code_block(ctx, "bash", "VITE_API_URL=http://localhost:8080/api", out);

    heading("installation-base-de-donnees", "Base de données", out);
    out.push_str("<p>Créez la base et l'utilisateur applicatif :</p>\n");
    code_block(
        ctx,
        "sql",
        "CREATE DATABASE gestresidence CHARACTER SET utf8mb4;\n\
         CREATE USER 'gestresidence'@'localhost' IDENTIFIED BY 'motdepasse';\n\
         GRANT ALL PRIVILEGES ON gestresidence.* TO 'gestresidence'@'localhost';",
        out,
    );
    panel(
        ctx,
        "info",
        "Migrations automatiques",
        "Le schéma est créé et mis à jour par le backend au premier \
         démarrage. Aucun script SQL supplémentaire n'est à exécuter.",
        out,
    );

    heading("installation-verification", "Vérification", out);
    out.push_str("<p>Contrôlez que l'API répond :</p>\n");
    code_block(ctx, "bash", "curl http://localhost:8080/api/health", out);
    code_block(ctx, "json", "{\"statut\": \"OK\", \"version\": \"1.4.2\"}", out);
    out.push_str(
        "<p>Ouvrez ensuite <code>http://localhost:5173</code> dans un \
         navigateur : la page de connexion de GestRésidence doit \
         s'afficher. En cas d'écran blanc, consultez la section Support.</p>\n",
    );
}
