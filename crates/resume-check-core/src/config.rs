//! Client configuration
//!
//! Every field has a default, so the host page may pass a partial JSON
//! object (or nothing at all) when mounting the app.

use crate::error::CheckError;
use serde::{Deserialize, Serialize};

/// Maximum accepted upload size: 5 MB.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Analysis endpoint the file is POSTed to
    pub endpoint: String,
    /// Name of the multipart field carrying the file
    pub upload_field: String,
    /// Largest accepted file in bytes (inclusive)
    pub max_file_bytes: u64,
    /// localStorage key holding "light" or "dark"
    pub theme_storage_key: String,
    /// Radius of the score gauge circle in SVG units
    pub gauge_radius: f64,
    /// Delay before the gauge arc receives its target offset
    pub gauge_delay_ms: u32,
    /// Duration of the overall score counter
    pub score_duration_ms: u32,
    /// Duration of the passed/warning/failed counters
    pub counter_duration_ms: u32,
    /// Delay before the first category bar fills
    pub bar_base_delay_ms: u32,
    /// Additional delay per category bar
    pub bar_step_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/check".to_string(),
            upload_field: "resume".to_string(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            theme_storage_key: "theme".to_string(),
            gauge_radius: 60.0,
            gauge_delay_ms: 80,
            score_duration_ms: 1100,
            counter_duration_ms: 800,
            bar_base_delay_ms: 100,
            bar_step_ms: 60,
        }
    }
}

impl ClientConfig {
    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, CheckError> {
        let config: ClientConfig =
            serde_json::from_str(json).map_err(|e| CheckError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CheckError> {
        if self.endpoint.is_empty() {
            return Err(CheckError::Config("endpoint must not be empty".into()));
        }
        if self.upload_field.is_empty() {
            return Err(CheckError::Config("upload_field must not be empty".into()));
        }
        if self.max_file_bytes == 0 {
            return Err(CheckError::Config("max_file_bytes must be positive".into()));
        }
        if self.gauge_radius <= 0.0 {
            return Err(CheckError::Config("gauge_radius must be positive".into()));
        }
        Ok(())
    }

    /// Fill delay for the category bar at `index`.
    pub fn bar_delay_ms(&self, index: usize) -> u32 {
        self.bar_base_delay_ms
            .saturating_add(self.bar_step_ms.saturating_mul(index as u32))
    }
}
