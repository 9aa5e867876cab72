//! Resume check page logic
//!
//! Everything here is target-independent and free of I/O: the browser crate
//! feeds events in and paints what comes out.
//!
//! - `upload`: the selection/submission state machine (`AppController`)
//! - `view`: the declarative `Frame` derived from controller state
//! - `report`: projection of an `AnalysisResult` into paintable pieces
//! - `theme`: light/dark preference over a pluggable `ThemeStore`
//! - `tween`: eased numeric animation sampled by timestamp

pub mod config;
pub mod error;
pub mod file;
pub mod report;
pub mod score;
pub mod theme;
pub mod tween;
pub mod types;
pub mod upload;
pub mod view;

pub use config::ClientConfig;
pub use error::CheckError;
pub use file::{validate_file, BadgePalette, FileKind, SelectedFile};
pub use report::{ReportModel, ReportView, Tab, TipsPanel};
pub use score::ScoreBand;
pub use theme::{MemoryThemeStore, Theme, ThemeController, ThemeStore};
pub use tween::{ease_out_cubic, Easing, Tween};
pub use types::{AnalysisResult, Category, Finding, FindingKind, SummaryStats, Tip};
pub use upload::{AppController, SubmitRequest, UploadPhase, ViewState};
pub use view::{FileRow, Frame};
