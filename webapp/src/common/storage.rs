use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use portfolio_common::theme::ThemeStore;

// browser local storage is optional: private browsing modes and non-browser renderers
// may not provide it, and gloo's raw handle throws in that case, so check first
fn local_storage() -> anyhow::Result<web_sys::Storage> {
    let available = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .is_some();

    // raw() repeats the lookup and throws when it fails, which the check above rules out
    match available {
        true => Ok(LocalStorage::raw()),
        false => Err(anyhow::Error::msg("local storage is unavailable")),
    }
}

// theme preference in browser local storage
//
// the value is stored as the bare theme string rather than through gloo's json encoding,
// so that the entry reads "light" or "dark"
#[derive(Clone, Debug)]
pub struct BrowserStore {
    key: String,
}

impl BrowserStore {
    pub fn new(key: String) -> Self {
        BrowserStore { key }
    }
}

impl ThemeStore for BrowserStore {
    fn load(&self) -> anyhow::Result<Option<String>> {
        let key = &self.key;

        local_storage()?.get_item(key).map_err(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }

    fn save(&mut self, value: &str) -> anyhow::Result<()> {
        let key = &self.key;

        local_storage()?.set_item(key, value).map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }
}
