//! Stylesheet and script assets of the documentation site.
//!
//! One API, two modes:
//!
//! - **`embed` feature on**: assets are compiled into the binary via
//!   `rust-embed`, for single-file deployment
//! - **`embed` feature off**: assets are read from the workspace `assets/`
//!   directory on every request, so edits show up on reload

use std::borrow::Cow;
#[cfg(not(feature = "embed"))]
use std::path::Path;

#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "../../assets"]
#[prefix = ""]
struct Assets;

/// Asset directory for filesystem mode. Anchored to the crate manifest so
/// lookups work whatever the process working directory is.
#[cfg(not(feature = "embed"))]
const DEV_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets");

/// Fetch an asset by path relative to `assets/`.
#[cfg(feature = "embed")]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Fetch an asset by path relative to `assets/`.
#[cfg(not(feature = "embed"))]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    std::fs::read(Path::new(DEV_DIR).join(path))
        .ok()
        .map(Cow::Owned)
}

/// Iterate all asset paths, relative to `assets/`.
#[cfg(feature = "embed")]
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    Assets::iter()
}

/// Iterate all asset paths, relative to `assets/`.
#[cfg(not(feature = "embed"))]
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    walk_dir(Path::new(DEV_DIR)).into_iter().map(Cow::Owned)
}

/// MIME type string for the given file path.
#[must_use]
pub fn mime_for(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

#[cfg(not(feature = "embed"))]
fn walk_dir(base: &Path) -> Vec<String> {
    let mut result = Vec::new();
    walk_dir_inner(base, base, &mut result);
    result
}

#[cfg(not(feature = "embed"))]
fn walk_dir_inner(base: &Path, dir: &Path, result: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_dir_inner(base, &path, result);
        } else if let Ok(rel) = path.strip_prefix(base) {
            // Normalize to forward slashes
            result.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_assets_are_present() {
        let css = get("docs.css").expect("docs.css missing");
        assert!(String::from_utf8_lossy(&css).contains(":root"));

        let js = get("docs.js").expect("docs.js missing");
        assert!(String::from_utf8_lossy(&js).contains("addEventListener"));
    }

    #[test]
    fn test_iter_lists_stylesheet_and_script() {
        let paths: Vec<String> = iter().map(Cow::into_owned).collect();
        assert!(paths.iter().any(|p| p == "docs.css"));
        assert!(paths.iter().any(|p| p == "docs.js"));
    }

    #[test]
    fn test_get_nonexistent_asset() {
        assert!(get("nonexistent_file_that_does_not_exist.txt").is_none());
    }

    #[test]
    fn test_mime_for_known_types() {
        assert_eq!(mime_for("docs.css"), "text/css");
        assert_eq!(mime_for("docs.js"), "text/javascript");
        assert_eq!(mime_for("favicon.png"), "image/png");
    }

    #[test]
    fn test_mime_for_unknown_type() {
        assert_eq!(mime_for("file.unknown_ext_xyz"), "application/octet-stream");
    }
}
