use dioxus::prelude::*;
use gloo_console::error as console_error;

use portfolio_common::{
    config::StorageConfig,
    theme::{StyleRoot, Theme, ThemeController},
};

use crate::common::storage::BrowserStore;

const DARK_CLASS: &str = "dark";

// the <html> element; stylesheet rules under :root.dark take over when the class is set
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl StyleRoot for DocumentRoot {
    fn set_dark_mode(&mut self, enabled: bool) {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());

        let Some(root) = root else {
            return;
        };

        if let Err(err) = root.class_list().toggle_with_force(DARK_CLASS, enabled) {
            console_error!(format!("Failed to toggle {DARK_CLASS} class: {err:?}"));
        }
    }
}

// theme context
//
// created once by App and handed down through the context api, so that every component
// that cares about the theme reads (and toggles) the same controller
#[derive(Clone, Copy)]
pub struct ThemeContext {
    controller: Signal<ThemeController<BrowserStore, DocumentRoot>>,
}

impl ThemeContext {
    pub fn load(storage: &StorageConfig) -> Self {
        let store = BrowserStore::new(storage.theme_storage_key());

        ThemeContext {
            controller: Signal::new(ThemeController::load(store, DocumentRoot)),
        }
    }

    pub fn theme(&self) -> Theme {
        self.controller.read().theme()
    }

    pub fn toggle(&mut self) -> Theme {
        self.controller.write().toggle()
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
