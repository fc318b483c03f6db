//! Rendering context shared by every renderer.

use residocs_site::ColorMode;

/// External links emitted as content. Opaque strings from configuration.
#[derive(Clone, Debug)]
pub struct SiteLinks {
    /// Source-control hosting page of the application.
    pub repository_url: String,
    /// Support contact address.
    pub support_email: String,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            repository_url: "https://github.com/gestresidence/gestresidence".to_owned(),
            support_email: "support@gestresidence.fr".to_owned(),
        }
    }
}

/// What a content renderer is allowed to see: the presentation mode and the
/// configured external links. Content is otherwise fixed.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    pub mode: ColorMode,
    pub links: &'a SiteLinks,
}

impl RenderContext<'_> {
    /// Class string with the mode variant appended, e.g. `panel panel-dark`.
    #[must_use]
    pub fn variant(&self, base: &str) -> String {
        format!("{base} {base}-{}", self.mode.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_appends_mode_suffix() {
        let links = SiteLinks::default();
        let light = RenderContext {
            mode: ColorMode::Light,
            links: &links,
        };
        let dark = RenderContext {
            mode: ColorMode::Dark,
            links: &links,
        };
        assert_eq!(light.variant("panel"), "panel panel-light");
        assert_eq!(dark.variant("panel"), "panel panel-dark");
    }
}
