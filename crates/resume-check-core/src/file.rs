//! Upload file validation
//!
//! Only the name and size are inspected; the bytes stay in the platform
//! handle until the file is submitted.

use crate::error::CheckError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Docx,
}

impl FileKind {
    /// Match a file name's extension, case-insensitively.
    ///
    /// A name without a dot has no extension and matches nothing.
    pub fn from_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(FileKind::Pdf),
            "docx" => Some(FileKind::Docx),
            _ => None,
        }
    }

    /// Uppercase label for the extension badge
    pub fn label(self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::Docx => "DOCX",
        }
    }

    /// Badge palette: PDFs use the danger colors, DOCX the info colors
    pub fn palette(self) -> BadgePalette {
        match self {
            FileKind::Pdf => BadgePalette {
                background: "var(--danger-bg)",
                foreground: "var(--danger)",
            },
            FileKind::Docx => BadgePalette {
                background: "var(--info-bg)",
                foreground: "var(--info)",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgePalette {
    pub background: &'static str,
    pub foreground: &'static str,
}

/// A file the user picked, with an opaque platform handle
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<F> {
    pub name: String,
    pub size: u64,
    pub kind: FileKind,
    pub handle: F,
}

/// Check a candidate file. The extension is checked before the size.
pub fn validate_file(name: &str, size: u64, max_bytes: u64) -> Result<FileKind, CheckError> {
    let kind = FileKind::from_name(name)
        .ok_or_else(|| CheckError::UnsupportedFileType(name.to_string()))?;

    if size > max_bytes {
        return Err(CheckError::FileTooLarge {
            size,
            max: max_bytes,
        });
    }

    Ok(kind)
}
