//! WASM front-end for the resume checker
//!
//! All state lives in Rust: the [`AppController`](resume_check_core::AppController)
//! decides what the page shows, and this crate binds it to the DOM, the
//! fetch API, localStorage and animation frames.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { ResumeCheckApp } from './pkg/resume_check_wasm.js';
//!
//! await init();
//! const app = ResumeCheckApp.mount(null);
//! // or with overrides:
//! // ResumeCheckApp.mount(JSON.stringify({ endpoint: "/api/check" }));
//! ```

pub mod animate;
pub mod api;
pub mod app;
pub mod dom;
pub mod logging;
pub mod render;
pub mod theme;

use app::App;
use resume_check_core::{validate_file, ClientConfig, ScoreBand};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init_logging(tracing::Level::INFO);
}

/// Handle to a mounted checker page
#[wasm_bindgen]
pub struct ResumeCheckApp {
    app: Rc<App>,
}

#[wasm_bindgen]
impl ResumeCheckApp {
    /// Bind to the current document and start handling events.
    ///
    /// `config_json` may override any [`ClientConfig`] field; missing fields
    /// keep their defaults.
    #[wasm_bindgen]
    pub fn mount(config_json: Option<String>) -> Result<ResumeCheckApp, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => ClientConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => ClientConfig::default(),
        };
        let app = App::mount(config)?;
        Ok(ResumeCheckApp { app })
    }

    /// Current view frame as a plain object
    #[wasm_bindgen(js_name = getFrame)]
    pub fn get_frame(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.app.frame())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Applied theme, "light" or "dark"
    #[wasm_bindgen(js_name = getTheme)]
    pub fn get_theme(&self) -> String {
        self.app.theme().as_str().to_string()
    }
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check a file name and size against the default upload rules.
/// Returns the badge label ("PDF" or "DOCX") or the rejection message.
#[wasm_bindgen]
pub fn validate_file_name_and_size(name: &str, size: f64) -> Result<String, JsValue> {
    let max = ClientConfig::default().max_file_bytes;
    validate_file(name, size.max(0.0) as u64, max)
        .map(|kind| kind.label().to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Band name ("success", "info", "warning", "danger") for a percentage
#[wasm_bindgen]
pub fn score_band_for(percentage: u32) -> String {
    ScoreBand::for_percentage(percentage).as_str().to_string()
}
