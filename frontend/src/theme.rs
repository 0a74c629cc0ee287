//! Light/dark theme preference.
//!
//! The preference is process-wide state with exactly two observers: the
//! `dark` class on the document element and the persisted localStorage entry.
//! `ThemeStore` owns both side effects behind explicit `load`/`toggle` calls;
//! both writes are idempotent, so ordering between them never matters.

use web_sys::window;

const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_key(key: &str) -> Option<Theme> {
        match key {
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

pub struct ThemeStore {
    theme: Theme,
}

impl ThemeStore {
    /// Reads the persisted preference, falling back to the OS color scheme
    /// when no value is stored, and syncs the document class to it.
    pub fn load() -> Self {
        let theme = stored_theme().unwrap_or_else(|| {
            if prefers_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        });
        let store = ThemeStore { theme };
        store.apply_document_class();
        store
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme, persists it, and updates the document class.
    pub fn toggle(&mut self) {
        self.theme = self.theme.toggled();
        self.persist();
        self.apply_document_class();
    }

    fn persist(&self) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, self.theme.as_str());
        }
    }

    fn apply_document_class(&self) {
        if let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = match self.theme {
                Theme::Dark => root.class_list().add_1("dark"),
                Theme::Light => root.class_list().remove_1("dark"),
            };
        }
    }
}

fn stored_theme() -> Option<Theme> {
    let storage = window()?.local_storage().ok()??;
    let value = storage.get_item(STORAGE_KEY).ok()??;
    Theme::from_key(&value)
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn persisted_keys_round_trip() {
        assert_eq!(Theme::from_key("light"), Some(Theme::Light));
        assert_eq!(Theme::from_key("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_key(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::from_key("sepia"), None);
    }
}
