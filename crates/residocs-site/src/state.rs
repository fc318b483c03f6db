//! Navigation-shell state.
//!
//! All of the shell's ephemeral flags live in one immutable [`UiState`]
//! record. User interactions are [`UiEvent`]s, and [`UiState::apply`] is the
//! only transition function — pure, total, and trivially testable. Nothing
//! here persists: the server derives a fresh state per request from the
//! route and query string, and the client script replays the same
//! transitions for menu and scroll behaviour.

use crate::section::SectionId;

/// Vertical scroll offset (in pixels) past which the table of contents
/// becomes visible. The client script uses the same value.
pub const TOC_SCROLL_THRESHOLD: u32 = 300;

/// Light/dark presentation flag. Affects style selection only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Flip to the other mode. Toggling twice is the identity.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Query-string value (`mode=light` / `mode=dark`) and CSS class suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a `mode` query parameter. Unknown values yield `None`.
    #[must_use]
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// The navigation shell's state record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Section currently mounted. Always a known section by construction.
    pub active: SectionId,
    /// Sidebar search query, as typed.
    pub query: String,
    /// Mobile drawer open flag.
    pub menu_open: bool,
    /// Table-of-contents visibility, driven by scroll position.
    pub toc_visible: bool,
    /// Presentation mode.
    pub mode: ColorMode,
}

/// A user interaction the shell reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// A navigation link was followed.
    Navigated(SectionId),
    /// The search input changed.
    QueryChanged(String),
    /// The hamburger button or the search drawer opened the mobile menu.
    MenuOpened,
    /// The backdrop or an explicit close button closed it.
    MenuClosed,
    /// The page scrolled to the given vertical offset.
    Scrolled(u32),
    /// The theme toggle was clicked.
    ModeToggled,
}

impl UiState {
    /// State for a freshly served page: menu closed, page at the top.
    #[must_use]
    pub fn for_page(active: SectionId, query: String, mode: ColorMode) -> Self {
        Self {
            active,
            query,
            mode,
            ..Self::default()
        }
    }

    /// Apply one event. Pure; no transition can fail.
    #[must_use]
    pub fn apply(self, event: UiEvent) -> Self {
        match event {
            // Any navigation action also closes the mobile drawer.
            UiEvent::Navigated(id) => Self {
                active: id,
                menu_open: false,
                ..self
            },
            UiEvent::QueryChanged(query) => Self { query, ..self },
            UiEvent::MenuOpened => Self {
                menu_open: true,
                ..self
            },
            UiEvent::MenuClosed => Self {
                menu_open: false,
                ..self
            },
            UiEvent::Scrolled(offset) => Self {
                toc_visible: offset > TOC_SCROLL_THRESHOLD,
                ..self
            },
            UiEvent::ModeToggled => Self {
                mode: self.mode.toggle(),
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = UiState::default();
        assert_eq!(state.active, SectionId::Commencer);
        assert_eq!(state.query, "");
        assert!(!state.menu_open);
        assert!(!state.toc_visible);
        assert_eq!(state.mode, ColorMode::Light);
    }

    #[test]
    fn test_navigation_sets_active_and_closes_menu() {
        let state = UiState::default()
            .apply(UiEvent::MenuOpened)
            .apply(UiEvent::Navigated(SectionId::Installation));
        assert_eq!(state.active, SectionId::Installation);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_navigation_keeps_query() {
        let state = UiState::default()
            .apply(UiEvent::QueryChanged("chambre".to_owned()))
            .apply(UiEvent::Navigated(SectionId::GuideUtilisateur));
        assert_eq!(state.query, "chambre");
    }

    #[test]
    fn test_menu_open_close() {
        let opened = UiState::default().apply(UiEvent::MenuOpened);
        assert!(opened.menu_open);
        let closed = opened.apply(UiEvent::MenuClosed);
        assert!(!closed.menu_open);
    }

    #[test]
    fn test_scroll_threshold_both_directions() {
        let state = UiState::default();

        let below = state.clone().apply(UiEvent::Scrolled(TOC_SCROLL_THRESHOLD));
        assert!(!below.toc_visible, "threshold itself does not show the TOC");

        let above = below.apply(UiEvent::Scrolled(TOC_SCROLL_THRESHOLD + 1));
        assert!(above.toc_visible);

        let back = above.apply(UiEvent::Scrolled(0));
        assert!(!back.toc_visible, "scrolling back up hides the TOC again");
    }

    #[test]
    fn test_mode_toggle_is_involution() {
        let state = UiState::default();
        let toggled = state.clone().apply(UiEvent::ModeToggled);
        assert_eq!(toggled.mode, ColorMode::Dark);
        let back = toggled.apply(UiEvent::ModeToggled);
        assert_eq!(back.mode, state.mode);
    }

    #[test]
    fn test_query_change_replaces_previous_query() {
        let state = UiState::default()
            .apply(UiEvent::QueryChanged("cha".to_owned()))
            .apply(UiEvent::QueryChanged("chambre".to_owned()));
        assert_eq!(state.query, "chambre");
    }

    #[test]
    fn test_events_touch_only_their_flag() {
        let state = UiState::for_page(
            SectionId::ReferenceApi,
            "auth".to_owned(),
            ColorMode::Dark,
        );

        let after = state.clone().apply(UiEvent::Scrolled(400));
        assert_eq!(after.active, state.active);
        assert_eq!(after.query, state.query);
        assert_eq!(after.mode, state.mode);
        assert_eq!(after.menu_open, state.menu_open);
    }

    #[test]
    fn test_color_mode_param_round_trip() {
        assert_eq!(ColorMode::from_param("light"), Some(ColorMode::Light));
        assert_eq!(ColorMode::from_param("dark"), Some(ColorMode::Dark));
        assert_eq!(ColorMode::from_param("sepia"), None);
        assert_eq!(ColorMode::from_param(""), None);

        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_eq!(ColorMode::from_param(mode.as_str()), Some(mode));
        }
    }
}
