use crate::storage::LocalStore;
use serde::Serialize;

pub const THEME_KEY: &str = "theme";

const DARK: &str = "dark";
// written by earlier releases of the dashboard
const LEGACY_DARK: &str = "dark-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    fn from_stored(value: &str) -> Self {
        match value {
            DARK | LEGACY_DARK => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    fn stored_value(self) -> &'static str {
        match self {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => "",
        }
    }

    pub fn icon(self) -> ThemeIcon {
        match self {
            ThemeMode::Light => ThemeIcon::Moon,
            ThemeMode::Dark => ThemeIcon::Sun,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeIcon {
    Moon,
    Sun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeView {
    pub mode: ThemeMode,
    pub icon: ThemeIcon,
}

#[derive(Debug, Clone, Default)]
pub struct ThemeToggle {
    mode: ThemeMode,
}

impl ThemeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, store: &LocalStore) -> ThemeView {
        let saved: String = store.load(THEME_KEY, String::new());
        self.mode = ThemeMode::from_stored(&saved);
        self.view()
    }

    pub fn toggle(&mut self, store: &mut LocalStore) -> ThemeView {
        self.mode = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        store.save(THEME_KEY, self.mode.stored_value());
        self.view()
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn view(&self) -> ThemeView {
        ThemeView {
            mode: self.mode,
            icon: self.mode.icon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_without_preference_is_light() {
        let store = LocalStore::new();
        let mut theme = ThemeToggle::new();
        let view = theme.apply(&store);
        assert_eq!(view.mode, ThemeMode::Light);
        assert_eq!(view.icon, ThemeIcon::Moon);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut store = LocalStore::new();
        store.save(THEME_KEY, "dark");
        let mut theme = ThemeToggle::new();

        let once = theme.apply(&store);
        let twice = theme.apply(&store);
        assert_eq!(once, twice);
        assert_eq!(twice.mode, ThemeMode::Dark);
        assert_eq!(twice.icon, ThemeIcon::Sun);
    }

    #[test]
    fn apply_reads_legacy_dark_value() {
        let mut store = LocalStore::new();
        store.save(THEME_KEY, "dark-theme");
        assert_eq!(ThemeToggle::new().apply(&store).mode, ThemeMode::Dark);
    }

    #[test]
    fn toggle_persists_and_swaps_icon() {
        let mut store = LocalStore::new();
        let mut theme = ThemeToggle::new();
        theme.apply(&store);

        let view = theme.toggle(&mut store);
        assert_eq!(view.icon, ThemeIcon::Sun);
        assert_eq!(store.load(THEME_KEY, String::new()), "dark");

        let view = theme.toggle(&mut store);
        assert_eq!(view.mode, ThemeMode::Light);
        assert_eq!(view.icon, ThemeIcon::Moon);
        assert_eq!(store.get_item(THEME_KEY), Some("\"\""));
    }

    #[test]
    fn toggled_value_survives_reapply() {
        let mut store = LocalStore::new();
        let mut theme = ThemeToggle::new();
        theme.toggle(&mut store);

        let mut restarted = ThemeToggle::new();
        assert_eq!(restarted.apply(&store).mode, ThemeMode::Dark);
    }
}
