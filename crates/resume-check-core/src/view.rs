//! Declarative display state
//!
//! A [`Frame`] is derived from the controller alone and describes every
//! toggle the page has. The painter applies it after each event, so view
//! transitions can be asserted without a document.

use crate::file::BadgePalette;
use crate::report::Tab;
use crate::upload::{AppController, UploadPhase, ViewState};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRow {
    pub name: String,
    /// "PDF" or "DOCX"
    pub badge_label: &'static str,
    pub palette: BadgePalette,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub upload_visible: bool,
    pub loader_visible: bool,
    pub results_visible: bool,
    pub back_visible: bool,
    pub drag_over: bool,
    pub file_row: Option<FileRow>,
    pub submit_visible: bool,
    pub submit_enabled: bool,
    pub error: Option<String>,
    pub active_tab: Tab,
    /// Open/closed flag for each category in the detail list
    pub expanded: Vec<bool>,
}

impl<F: Clone> AppController<F> {
    pub fn frame(&self) -> Frame {
        let file_row = self.selected.as_ref().map(|file| FileRow {
            name: file.name.clone(),
            badge_label: file.kind.label(),
            palette: file.kind.palette(),
        });

        let category_count = self
            .report
            .as_ref()
            .map(|r| r.result.categories.len())
            .unwrap_or(0);

        Frame {
            upload_visible: self.view == ViewState::Upload,
            loader_visible: self.view == ViewState::Loading,
            results_visible: self.view == ViewState::Results,
            back_visible: self.view == ViewState::Results,
            drag_over: self.drag_over,
            submit_visible: file_row.is_some(),
            file_row,
            submit_enabled: self.phase != UploadPhase::Submitting,
            error: self.error.as_ref().map(|e| e.to_string()),
            active_tab: self.report_view.active_tab(),
            expanded: (0..category_count)
                .map(|i| self.report_view.is_expanded(i))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::CheckError;
    use crate::types::{AnalysisResult, Category, Finding, FindingKind, SummaryStats};
    use pretty_assertions::assert_eq;

    fn controller() -> AppController<()> {
        AppController::new(ClientConfig::default())
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            overall_score: 85,
            verdict: "Excellent!".into(),
            file_type: "PDF".into(),
            word_count: 300,
            page_count: 1,
            summary_stats: SummaryStats::default(),
            categories: vec![
                Category {
                    name: "Contact Information".into(),
                    score: 17.0,
                    max_score: 20.0,
                    percentage: 85,
                    findings: vec![Finding {
                        kind: FindingKind::Pass,
                        message: "Email found".into(),
                    }],
                },
                Category {
                    name: "Education".into(),
                    score: 4.0,
                    max_score: 10.0,
                    percentage: 40,
                    findings: vec![],
                },
            ],
            tips: vec![],
            score_breakdown: None,
        }
    }

    #[test]
    fn test_initial_frame() {
        let frame = controller().frame();
        assert_eq!(
            frame,
            Frame {
                upload_visible: true,
                loader_visible: false,
                results_visible: false,
                back_visible: false,
                drag_over: false,
                file_row: None,
                submit_visible: false,
                submit_enabled: true,
                error: None,
                active_tab: Tab::Details,
                expanded: vec![],
            }
        );
    }

    #[test]
    fn test_selected_frame_shows_file_row() {
        let mut c = controller();
        c.select("Resume.PDF", 2048, ()).unwrap();
        let frame = c.frame();
        let row = frame.file_row.unwrap();
        assert_eq!(row.name, "Resume.PDF");
        assert_eq!(row.badge_label, "PDF");
        assert_eq!(row.palette.background, "var(--danger-bg)");
        assert!(frame.submit_visible);
    }

    #[test]
    fn test_remove_restores_initial_frame() {
        let mut c = controller();
        let initial = c.frame();
        c.select("cv.docx", 2048, ()).unwrap();
        c.remove();
        assert_eq!(c.frame(), initial);
    }

    #[test]
    fn test_loading_frame() {
        let mut c = controller();
        c.select("cv.pdf", 10, ()).unwrap();
        c.begin_submit().unwrap();
        let frame = c.frame();
        assert!(!frame.upload_visible);
        assert!(frame.loader_visible);
        assert!(!frame.results_visible);
        assert!(!frame.submit_enabled);
        assert_eq!(frame.error, None);
    }

    #[test]
    fn test_network_failure_frame() {
        let mut c = controller();
        c.select("cv.pdf", 10, ()).unwrap();
        c.begin_submit().unwrap();
        c.finish_submit(Err(CheckError::Network("Failed to fetch".into())));

        let frame = c.frame();
        assert!(frame.upload_visible);
        assert!(!frame.loader_visible);
        assert!(!frame.back_visible);
        assert!(frame.submit_enabled);
        assert_eq!(
            frame.error.as_deref(),
            Some("Network error. Please try again.")
        );
    }

    #[test]
    fn test_malformed_response_frame_keeps_file() {
        let mut c = controller();
        c.select("a.pdf", 10, ()).unwrap();
        c.begin_submit().unwrap();
        let err = AnalysisResult::from_json("<html>oops</html>").unwrap_err();
        c.finish_submit(Err(err));

        let frame = c.frame();
        assert!(frame.upload_visible);
        assert!(!frame.loader_visible);
        assert!(!frame.back_visible);
        assert!(frame.submit_enabled);
        assert_eq!(frame.file_row.map(|row| row.name).as_deref(), Some("a.pdf"));
        assert_eq!(
            frame.error.as_deref(),
            Some("Unexpected response from server. Please try again.")
        );
    }

    #[test]
    fn test_results_frame_and_go_back() {
        let mut c = controller();
        c.select("cv.pdf", 10, ()).unwrap();
        c.begin_submit().unwrap();
        c.finish_submit(Ok(sample_result()));

        let frame = c.frame();
        assert!(frame.results_visible && frame.back_visible);
        assert!(!frame.upload_visible && !frame.loader_visible);
        assert_eq!(frame.expanded, vec![false, false]);

        c.select_tab(Tab::Tips);
        c.toggle_category(1);
        let frame = c.frame();
        assert_eq!(frame.active_tab, Tab::Tips);
        assert_eq!(frame.expanded, vec![false, true]);

        c.go_back();
        let frame = c.frame();
        assert!(frame.upload_visible);
        assert!(!frame.back_visible);
        assert!(frame.file_row.is_none());
        assert!(!frame.submit_visible);
        assert_eq!(frame.active_tab, Tab::Details);
        assert!(frame.expanded.iter().all(|open| !open));
    }
}
