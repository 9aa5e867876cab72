use thiserror::Error;

/// Bytes in a mebibyte, used when reporting the upload limit.
pub const MIB: u64 = 1024 * 1024;

/// Fallback shown when the server rejects a request without an `error` field.
pub const GENERIC_SERVER_MESSAGE: &str = "Something went wrong.";

/// Every error the checker can surface. `Display` is the exact text shown
/// inline under the drop zone.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckError {
    #[error("Please upload a PDF or DOCX file.")]
    UnsupportedFileType(String),

    #[error("File too large. Max {} MB.", max / MIB)]
    FileTooLarge { size: u64, max: u64 },

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Network error. Please try again.")]
    Network(String),

    #[error("Unexpected response from server. Please try again.")]
    MalformedResponse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Storage unavailable: {0}")]
    Storage(String),
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl CheckError {
    /// Build a server rejection from a non-2xx status and its raw body.
    ///
    /// Uses the body's `error` string when present and non-empty, otherwise
    /// the generic fallback. Bodies that are not JSON also fall back.
    pub fn server_rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_string());

        CheckError::Server { status, message }
    }
}
