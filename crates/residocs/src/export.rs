//! Static site export.
//!
//! Writes the same pages the server renders into a directory tree: one
//! `documentation/{section}/index.html` per section, a root `index.html`
//! redirect stub and a copy of the assets. Pages link assets relatively so
//! a single exported page still styles itself when opened from disk; the
//! navigation links assume the tree is hosted at the root of its domain.

use std::fs;
use std::path::Path;

use residocs_renderer::{PageOptions, SiteLinks, render_document};
use residocs_site::{ColorMode, SectionId, UiState};

/// Error returned by the static site exporter.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the documentation site as static files.
pub(crate) struct Exporter {
    site_title: String,
    links: SiteLinks,
    mode: ColorMode,
}

impl Exporter {
    #[must_use]
    pub(crate) fn new(site_title: String, links: SiteLinks, mode: ColorMode) -> Self {
        Self {
            site_title,
            links,
            mode,
        }
    }

    /// Write the whole site below `output_dir`.
    ///
    /// Returns the number of files written.
    pub(crate) fn export(&self, output_dir: &Path) -> Result<usize, ExportError> {
        let mut written = 0;

        // One directory per section so exported URLs stay extension-free.
        for id in SectionId::ALL {
            let page_dir = output_dir.join("documentation").join(id.as_str());
            fs::create_dir_all(&page_dir)?;

            let state = UiState::for_page(id, String::new(), self.mode);
            let html = render_document(
                &state,
                &self.links,
                &PageOptions {
                    site_title: &self.site_title,
                    asset_base: "../../assets",
                },
            );
            fs::write(page_dir.join("index.html"), html)?;
            written += 1;
        }

        self.write_redirect_stub(output_dir)?;
        written += 1;

        written += write_assets(output_dir)?;

        tracing::info!(files = written, "Export complete");
        Ok(written)
    }

    /// Root `index.html` forwarding to the default section.
    fn write_redirect_stub(&self, output_dir: &Path) -> Result<(), ExportError> {
        let target = format!("documentation/{}/", SectionId::default().as_str());
        let html = format!(
            "<!doctype html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta http-equiv=\"refresh\" content=\"0; url={target}\">\n\
             <title>{}</title>\n</head>\n<body>\n\
             <p><a href=\"{target}\">Documentation</a></p>\n</body>\n</html>\n",
            self.site_title
        );
        fs::create_dir_all(output_dir)?;
        fs::write(output_dir.join("index.html"), html)?;
        Ok(())
    }
}

/// Copy every bundled asset below `output_dir/assets/`.
fn write_assets(output_dir: &Path) -> Result<usize, ExportError> {
    let assets_dir = output_dir.join("assets");
    let mut written = 0;

    for path in residocs_assets::iter() {
        let Some(content) = residocs_assets::get(&path) else {
            continue;
        };
        let target = assets_dir.join(path.as_ref());
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, content)?;
        written += 1;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exporter() -> Exporter {
        Exporter::new(
            "GestRésidence".to_owned(),
            SiteLinks::default(),
            ColorMode::Light,
        )
    }

    #[test]
    fn test_export_writes_every_section_page() {
        let dir = tempfile::tempdir().unwrap();
        exporter().export(dir.path()).unwrap();

        for id in SectionId::ALL {
            let page = dir
                .path()
                .join("documentation")
                .join(id.as_str())
                .join("index.html");
            assert!(page.exists(), "missing page for {}", id.as_str());
        }
    }

    #[test]
    fn test_export_reports_file_count() {
        let dir = tempfile::tempdir().unwrap();
        let written = exporter().export(dir.path()).unwrap();

        let assets = residocs_assets::iter().count();
        assert_eq!(written, SectionId::ALL.len() + 1 + assets);
    }

    #[test]
    fn test_exported_pages_link_assets_relatively() {
        let dir = tempfile::tempdir().unwrap();
        exporter().export(dir.path()).unwrap();

        let html =
            fs::read_to_string(dir.path().join("documentation/securite/index.html")).unwrap();
        assert!(html.contains("href=\"../../assets/docs.css\""));
        assert!(html.contains("Bientôt disponible"));
    }

    #[test]
    fn test_root_stub_redirects_to_default_section() {
        let dir = tempfile::tempdir().unwrap();
        exporter().export(dir.path()).unwrap();

        let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("url=documentation/commencer/"));
    }

    #[test]
    fn test_assets_are_copied() {
        let dir = tempfile::tempdir().unwrap();
        exporter().export(dir.path()).unwrap();

        assert!(dir.path().join("assets/docs.css").exists());
        assert!(dir.path().join("assets/docs.js").exists());
    }

    #[test]
    fn test_export_honors_color_mode() {
        let dir = tempfile::tempdir().unwrap();
        let dark = Exporter::new(
            "GestRésidence".to_owned(),
            SiteLinks::default(),
            ColorMode::Dark,
        );
        dark.export(dir.path()).unwrap();

        let html =
            fs::read_to_string(dir.path().join("documentation/commencer/index.html")).unwrap();
        assert!(html.contains("class=\"theme-dark\""));
    }
}
