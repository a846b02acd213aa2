use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    // the literal strings written to storage
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn accent(self) -> Accent {
        match self {
            Self::Light => Accent {
                button: "linear-gradient(90deg, #14b8a6, #06b6d4, #3b82f6)",
                text: "linear-gradient(90deg, #0f766e, #0e7490, #1d4ed8)",
                ring: "rgba(165, 243, 252, 0.6)",
                backdrop_primary: "rgba(94, 234, 212, 0.4)",
                backdrop_secondary: "rgba(147, 197, 253, 0.4)",
            },
            Self::Dark => Accent {
                button: "linear-gradient(90deg, #2dd4bf, #22d3ee, #60a5fa)",
                text: "linear-gradient(90deg, #99f6e4, #a5f3fc, #bfdbfe)",
                ring: "rgba(6, 182, 212, 0.4)",
                backdrop_primary: "rgba(20, 184, 166, 0.2)",
                backdrop_secondary: "rgba(59, 130, 246, 0.2)",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(anyhow::Error::msg(format!("unknown theme {other:?}"))),
        }
    }
}

// accent palette
//
// css values for the handful of places where the theme changes more than the
// variables in the stylesheet can express (gradients on buttons and headings, the
// backdrop blobs)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accent {
    pub button: &'static str,
    pub text: &'static str,
    pub ring: &'static str,
    pub backdrop_primary: &'static str,
    pub backdrop_secondary: &'static str,
}

// persistence for the theme preference
//
// load() returns Ok(None) when nothing has been stored yet; an Err means storage itself
// is unavailable
pub trait ThemeStore {
    fn load(&self) -> anyhow::Result<Option<String>>;

    fn save(&mut self, value: &str) -> anyhow::Result<()>;
}

// the document-wide style scope that descendant rules key off of
pub trait StyleRoot {
    fn set_dark_mode(&mut self, enabled: bool);
}

// theme controller
//
// owns the current theme along with the injected storage and style root.  every change is
// pushed to both; storage failures are swallowed so that a page without working storage
// still renders (in the default theme)
pub struct ThemeController<S: ThemeStore, R: StyleRoot> {
    theme: Theme,
    store: S,
    root: R,
}

impl<S: ThemeStore, R: StyleRoot> ThemeController<S, R> {
    pub fn load(store: S, root: R) -> Self {
        let theme = match store.load() {
            Ok(Some(value)) => value.parse().unwrap_or_else(|err| {
                debug!("ignoring stored theme: {err}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                debug!("theme storage unavailable, using default: {err}");
                Theme::default()
            }
        };

        let mut controller = ThemeController { theme, store, root };
        controller.apply();
        controller
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }

        debug!("switching theme to {theme}");
        self.theme = theme;
        self.apply();
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    fn apply(&mut self) {
        self.root.set_dark_mode(self.theme.is_dark());

        if let Err(err) = self.store.save(self.theme.as_str()) {
            debug!("skipping theme persistence: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Clone, Default)]
    struct MemoryStore {
        value: Rc<RefCell<Option<String>>>,
        writes: Rc<RefCell<usize>>,
    }

    impl MemoryStore {
        fn with(value: &str) -> Self {
            let store = MemoryStore::default();
            *store.value.borrow_mut() = Some(value.to_owned());
            store
        }

        fn value(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> anyhow::Result<Option<String>> {
            Ok(self.value.borrow().clone())
        }

        fn save(&mut self, value: &str) -> anyhow::Result<()> {
            *self.value.borrow_mut() = Some(value.to_owned());
            *self.writes.borrow_mut() += 1;
            Ok(())
        }
    }

    // storage that fails every call, like a page rendered outside a browser
    struct NoStorage;

    impl ThemeStore for NoStorage {
        fn load(&self) -> anyhow::Result<Option<String>> {
            Err(anyhow::Error::msg("no storage"))
        }

        fn save(&mut self, _value: &str) -> anyhow::Result<()> {
            Err(anyhow::Error::msg("no storage"))
        }
    }

    #[derive(Default)]
    struct FakeRoot {
        dark: Option<bool>,
    }

    impl StyleRoot for FakeRoot {
        fn set_dark_mode(&mut self, enabled: bool) {
            self.dark = Some(enabled);
        }
    }

    #[test]
    fn fresh_start_is_light() {
        let store = MemoryStore::default();
        let controller = ThemeController::load(store.clone(), FakeRoot::default());

        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.root().dark, Some(false));
        assert_eq!(store.value().as_deref(), Some("light"));
    }

    #[test]
    fn stored_preference_is_restored() {
        let store = MemoryStore::with("dark");
        let controller = ThemeController::load(store, FakeRoot::default());

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.root().dark, Some(true));
    }

    #[test]
    fn unrecognized_value_falls_back_to_light() {
        let store = MemoryStore::with("solarized");
        let controller = ThemeController::load(store.clone(), FakeRoot::default());

        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(store.value().as_deref(), Some("light"));
    }

    #[test]
    fn unavailable_storage_uses_default() {
        let mut controller = ThemeController::load(NoStorage, FakeRoot::default());
        assert_eq!(controller.theme(), Theme::Light);

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.root().dark, Some(true));
    }

    #[test]
    fn toggle_round_trip() {
        let store = MemoryStore::default();
        let mut controller = ThemeController::load(store.clone(), FakeRoot::default());

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(store.value().as_deref(), Some("dark"));
        assert_eq!(controller.root().dark, Some(true));

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(store.value().as_deref(), Some("light"));
        assert_eq!(controller.root().dark, Some(false));
    }

    #[test]
    fn last_set_value_wins() {
        let sequences: [&[Theme]; 4] = [
            &[Theme::Dark],
            &[Theme::Dark, Theme::Dark, Theme::Light],
            &[Theme::Light, Theme::Dark, Theme::Light, Theme::Dark],
            &[Theme::Light],
        ];

        for sequence in sequences {
            let store = MemoryStore::default();
            let mut controller = ThemeController::load(store.clone(), FakeRoot::default());

            for theme in sequence {
                controller.set(*theme);
            }

            let last = *sequence.last().unwrap();
            assert_eq!(controller.theme(), last);
            assert_eq!(store.value().as_deref(), Some(last.as_str()));
            assert_eq!(controller.root().dark, Some(last.is_dark()));
        }
    }

    #[test]
    fn setting_the_same_theme_does_not_write() {
        let store = MemoryStore::default();
        let mut controller = ThemeController::load(store.clone(), FakeRoot::default());
        let writes = *store.writes.borrow();

        controller.set(Theme::Light);
        assert_eq!(*store.writes.borrow(), writes);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_ne!(Theme::Light.accent(), Theme::Dark.accent());
    }
}
