//! Theme Selection
//!
//! Light/dark preference resolved from localStorage, then the system
//! dark-mode signal, applied as a class on the document root and persisted
//! on every change.

use crate::storage::{log_error, StoragePort, THEME_KEY};

/// The two supported display themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The literal stored in localStorage and used as the root class.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Resolution order: explicit stored preference, then the ambient signal,
/// then light. Stored values outside the two-theme set are ignored.
pub fn resolve(stored: Option<&str>, prefers_dark: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(Theme::from_str) {
        return theme;
    }
    match prefers_dark {
        Some(true) => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Resolve the startup theme from the port plus the media query.
pub fn resolve_initial(port: Option<&impl StoragePort>) -> Theme {
    let stored = port.and_then(|p| p.read(THEME_KEY).ok().flatten());
    resolve(stored.as_deref(), system_prefers_dark())
}

/// Sample `(prefers-color-scheme: dark)`. None outside a browser context
/// or when the query is unsupported.
pub fn system_prefers_dark() -> Option<bool> {
    let query = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()??;
    Some(query.matches())
}

/// Swap the two mutually exclusive classes on the document root so exactly
/// one is present.
pub fn apply(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    let Some(root) = root else { return };
    let classes = root.class_list();
    let _ = classes.remove_2("light", "dark");
    let _ = classes.add_1(theme.as_str());
}

/// Write the preference immediately; toggles are single-shot user events,
/// so no debounce applies.
pub fn persist(port: &impl StoragePort, theme: Theme) {
    if let Err(e) = port.write(THEME_KEY, theme.as_str()) {
        log_error(&format!("failed to write {THEME_KEY}: {e}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_preference_wins_over_system_signal() {
        assert_eq!(resolve(Some("light"), Some(true)), Theme::Light);
        assert_eq!(resolve(Some("dark"), Some(false)), Theme::Dark);
    }

    #[test]
    fn test_system_signal_used_without_stored_preference() {
        assert_eq!(resolve(None, Some(true)), Theme::Dark);
        assert_eq!(resolve(None, Some(false)), Theme::Light);
    }

    #[test]
    fn test_defaults_to_light_without_any_signal() {
        assert_eq!(resolve(None, None), Theme::Light);
    }

    #[test]
    fn test_unknown_stored_value_falls_through() {
        assert_eq!(resolve(Some("solarized"), Some(true)), Theme::Dark);
        assert_eq!(resolve(Some(""), None), Theme::Light);
    }

    #[test]
    fn test_string_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn test_toggled_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
