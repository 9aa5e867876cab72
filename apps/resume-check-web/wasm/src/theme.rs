//! localStorage-backed theme store and the `data-theme` attribute

use resume_check_core::{CheckError, Theme, ThemeStore};
use wasm_bindgen::prelude::*;
use web_sys::Element;

const LIGHT_SCHEME_QUERY: &str = "(prefers-color-scheme: light)";

/// Theme storage over `window.localStorage`. Missing storage (private mode,
/// sandboxed iframes) behaves like an empty store.
pub struct LocalStorageThemeStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStorageThemeStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable, theme will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStorageThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), CheckError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| CheckError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| CheckError::Storage(format!("{:?}", e)))
    }
}

/// Whether the platform asks for a light color scheme
pub fn prefers_light() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(LIGHT_SCHEME_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Write the theme onto the root element.
pub fn apply_theme(root: &Element, theme: Theme) -> Result<(), JsValue> {
    root.set_attribute("data-theme", theme.as_str())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use resume_check_core::ThemeController;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TEST_KEY: &str = "resume-check-test-theme";

    #[wasm_bindgen_test]
    fn test_store_round_trip_through_controller() {
        let mut store = LocalStorageThemeStore::new();
        store.store(TEST_KEY, "light").unwrap();

        let mut controller = ThemeController::init(store, TEST_KEY, false);
        assert_eq!(controller.applied(), Theme::Light);
        controller.toggle();
        assert_eq!(controller.store().load(TEST_KEY).as_deref(), Some("dark"));
    }

    #[wasm_bindgen_test]
    fn test_apply_theme_sets_attribute() {
        let document = web_sys::window().unwrap().document().unwrap();
        let el = document.create_element("div").unwrap();
        apply_theme(&el, Theme::Light).unwrap();
        assert_eq!(el.get_attribute("data-theme").as_deref(), Some("light"));
    }
}
