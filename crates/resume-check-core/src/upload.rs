//! Upload state machine
//!
//! `AppController` owns all mutable page state: the selected file, the
//! current view, the inline error and the rendered report. Every user or
//! network event is a method call; the browser layer reads the result back
//! through `AppController::frame` and paints it.

use crate::config::ClientConfig;
use crate::error::CheckError;
use crate::file::{validate_file, SelectedFile};
use crate::report::{ReportModel, ReportView, Tab};
use crate::types::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Selected,
    Submitting,
}

/// Which top-level container is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Upload,
    Loading,
    Results,
}

/// A received result and its paint model
#[derive(Debug, Clone, PartialEq)]
pub struct ReportState {
    pub result: AnalysisResult,
    pub model: ReportModel,
}

/// What the browser layer must send for one submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest<F> {
    pub endpoint: String,
    pub field: String,
    pub file_name: String,
    pub file: F,
}

#[derive(Debug)]
pub struct AppController<F> {
    config: ClientConfig,
    pub(crate) selected: Option<SelectedFile<F>>,
    pub(crate) phase: UploadPhase,
    pub(crate) view: ViewState,
    pub(crate) error: Option<CheckError>,
    pub(crate) report: Option<ReportState>,
    pub(crate) report_view: ReportView,
    pub(crate) drag_over: bool,
}

impl<F: Clone> AppController<F> {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            selected: None,
            phase: UploadPhase::Idle,
            view: ViewState::Upload,
            error: None,
            report: None,
            report_view: ReportView::default(),
            drag_over: false,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn selected(&self) -> Option<&SelectedFile<F>> {
        self.selected.as_ref()
    }

    pub fn error(&self) -> Option<&CheckError> {
        self.error.as_ref()
    }

    pub fn report(&self) -> Option<&ReportState> {
        self.report.as_ref()
    }

    pub fn report_view(&self) -> &ReportView {
        &self.report_view
    }

    /// Validate and select a file picked by click, drop or the native picker.
    ///
    /// On rejection the previous selection is kept and the error is shown.
    /// Ignored while a submission is in flight.
    pub fn select(&mut self, name: &str, size: u64, handle: F) -> Result<(), CheckError> {
        if self.phase == UploadPhase::Submitting {
            tracing::debug!("ignoring selection of {} during submission", name);
            return Ok(());
        }

        match validate_file(name, size, self.config.max_file_bytes) {
            Ok(kind) => {
                tracing::debug!("selected {} ({} bytes, {:?})", name, size, kind);
                self.selected = Some(SelectedFile {
                    name: name.to_string(),
                    size,
                    kind,
                    handle,
                });
                self.phase = UploadPhase::Selected;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::debug!("rejected {}: {}", name, e);
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Drop the selected file. Any shown error stays.
    pub fn remove(&mut self) {
        if self.phase == UploadPhase::Submitting {
            return;
        }
        self.selected = None;
        self.phase = UploadPhase::Idle;
    }

    pub fn set_drag_over(&mut self, over: bool) {
        self.drag_over = over;
    }

    /// Start a submission. Returns `None` when there is nothing to send or a
    /// submission is already running.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest<F>> {
        if self.phase == UploadPhase::Submitting {
            return None;
        }
        let file = self.selected.as_ref()?;

        let request = SubmitRequest {
            endpoint: self.config.endpoint.clone(),
            field: self.config.upload_field.clone(),
            file_name: file.name.clone(),
            file: file.handle.clone(),
        };

        tracing::info!("submitting {} to {}", request.file_name, request.endpoint);

        self.phase = UploadPhase::Submitting;
        self.error = None;
        self.view = ViewState::Loading;
        self.report = None;
        self.report_view.reset();

        Some(request)
    }

    /// Settle the in-flight submission. Submission is possible again afterwards.
    pub fn finish_submit(&mut self, outcome: Result<AnalysisResult, CheckError>) {
        if self.phase != UploadPhase::Submitting {
            tracing::warn!("submission finished with none in flight");
            return;
        }

        self.phase = if self.selected.is_some() {
            UploadPhase::Selected
        } else {
            UploadPhase::Idle
        };

        match outcome {
            Ok(result) => {
                tracing::info!(
                    "analysis complete: score {}, {} categories",
                    result.overall_score,
                    result.categories.len()
                );
                let model = ReportModel::build(&result, &self.config);
                self.report = Some(ReportState { result, model });
                self.report_view.reset();
                self.view = ViewState::Results;
            }
            Err(e) => {
                tracing::info!("analysis failed: {:?}", e);
                self.error = Some(e);
                self.view = ViewState::Upload;
            }
        }
    }

    /// Leave the report and return to an empty upload screen.
    pub fn go_back(&mut self) {
        if self.phase == UploadPhase::Submitting {
            return;
        }
        self.view = ViewState::Upload;
        self.selected = None;
        self.phase = UploadPhase::Idle;
        self.report_view.reset();
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.report_view.select_tab(tab);
    }

    /// Toggle a category in the detail list. Out-of-range indices are ignored.
    pub fn toggle_category(&mut self, index: usize) -> bool {
        let count = self
            .report
            .as_ref()
            .map(|r| r.result.categories.len())
            .unwrap_or(0);
        if index >= count {
            return false;
        }
        self.report_view.toggle_category(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, SummaryStats};

    fn controller() -> AppController<u32> {
        AppController::new(ClientConfig::default())
    }

    fn result_with(categories: usize) -> AnalysisResult {
        AnalysisResult {
            overall_score: 64,
            verdict: "Good".into(),
            file_type: "PDF".into(),
            word_count: 400,
            page_count: 2,
            summary_stats: SummaryStats::default(),
            categories: (0..categories)
                .map(|i| Category {
                    name: format!("Category {}", i),
                    score: 5.0,
                    max_score: 10.0,
                    percentage: 50,
                    findings: vec![],
                })
                .collect(),
            tips: vec![],
            score_breakdown: None,
        }
    }

    #[test]
    fn test_select_then_submit_success() {
        let mut c = controller();
        c.select("cv.pdf", 1000, 7).unwrap();
        assert_eq!(c.phase(), UploadPhase::Selected);

        let request = c.begin_submit().unwrap();
        assert_eq!(request.endpoint, "/api/check");
        assert_eq!(request.field, "resume");
        assert_eq!(request.file, 7);
        assert_eq!(c.view(), ViewState::Loading);

        c.finish_submit(Ok(result_with(3)));
        assert_eq!(c.view(), ViewState::Results);
        assert_eq!(c.phase(), UploadPhase::Selected);
        assert_eq!(c.report().unwrap().model.details.len(), 3);
    }

    #[test]
    fn test_submit_without_file_is_noop() {
        let mut c = controller();
        assert!(c.begin_submit().is_none());
        assert_eq!(c.view(), ViewState::Upload);
    }

    #[test]
    fn test_no_second_submit_in_flight() {
        let mut c = controller();
        c.select("cv.docx", 10, 1).unwrap();
        assert!(c.begin_submit().is_some());
        assert!(c.begin_submit().is_none());
    }

    #[test]
    fn test_rejected_selection_keeps_previous_file() {
        let mut c = controller();
        c.select("cv.pdf", 10, 1).unwrap();
        assert!(c.select("photo.png", 10, 2).is_err());
        assert_eq!(c.selected().unwrap().handle, 1);
        assert_eq!(
            c.error().unwrap().to_string(),
            "Please upload a PDF or DOCX file."
        );
    }

    #[test]
    fn test_valid_selection_clears_error() {
        let mut c = controller();
        let _ = c.select("cv.pdf", 6 * 1024 * 1024, 1);
        assert!(c.error().is_some());
        c.select("cv.pdf", 1024, 2).unwrap();
        assert!(c.error().is_none());
    }

    #[test]
    fn test_remove_keeps_error() {
        let mut c = controller();
        c.select("cv.pdf", 10, 1).unwrap();
        let _ = c.select("cv.txt", 10, 2);
        c.remove();
        assert!(c.selected().is_none());
        assert!(c.error().is_some());
        assert_eq!(c.phase(), UploadPhase::Idle);
    }

    #[test]
    fn test_server_error_returns_to_upload() {
        let mut c = controller();
        c.select("cv.pdf", 10, 1).unwrap();
        c.begin_submit();
        c.finish_submit(Err(CheckError::server_rejected(
            400,
            r#"{"error":"Could not extract text."}"#,
        )));
        assert_eq!(c.view(), ViewState::Upload);
        assert_eq!(c.phase(), UploadPhase::Selected);
        assert_eq!(c.error().unwrap().to_string(), "Could not extract text.");
        assert!(c.begin_submit().is_some());
    }

    #[test]
    fn test_new_submission_discards_previous_result() {
        let mut c = controller();
        c.select("cv.pdf", 10, 1).unwrap();
        c.begin_submit();
        c.finish_submit(Ok(result_with(2)));
        c.toggle_category(1);
        c.go_back();
        c.select("cv2.pdf", 10, 2).unwrap();
        c.begin_submit();
        assert!(c.report().is_none());
        assert_eq!(c.report_view().expanded_count(), 0);
    }

    #[test]
    fn test_go_back_resets_report_view() {
        let mut c = controller();
        c.select("cv.pdf", 10, 1).unwrap();
        c.begin_submit();
        c.finish_submit(Ok(result_with(4)));
        c.select_tab(Tab::Tips);
        c.toggle_category(0);
        c.toggle_category(3);

        c.go_back();
        assert_eq!(c.view(), ViewState::Upload);
        assert!(c.selected().is_none());
        assert_eq!(c.report_view().active_tab(), Tab::Details);
        assert_eq!(c.report_view().expanded_count(), 0);
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut c = controller();
        assert!(!c.toggle_category(0));
        c.select("cv.pdf", 10, 1).unwrap();
        c.begin_submit();
        c.finish_submit(Ok(result_with(1)));
        assert!(!c.toggle_category(5));
        assert_eq!(c.report_view().expanded_count(), 0);
    }

    #[test]
    fn test_selection_ignored_during_submission() {
        let mut c = controller();
        c.select("a.pdf", 10, 1).unwrap();
        c.begin_submit().unwrap();

        assert!(c.select("b.txt", 10, 2).is_ok());
        assert!(c.select("b.pdf", 10, 3).is_ok());
        assert!(c.error().is_none());
        assert_eq!(c.selected().unwrap().handle, 1);
        assert_eq!(c.phase(), UploadPhase::Submitting);
    }

    #[test]
    fn test_set_drag_over() {
        let mut c = controller();
        c.set_drag_over(true);
        assert!(c.frame().drag_over);
        c.set_drag_over(false);
        assert!(!c.frame().drag_over);
    }

    #[test]
    fn test_stray_finish_is_ignored() {
        let mut c = controller();
        c.finish_submit(Ok(result_with(1)));
        assert_eq!(c.view(), ViewState::Upload);
        assert!(c.report().is_none());
    }
}
