//! Analysis result returned by the `/api/check` endpoint

use crate::error::CheckError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub verdict: String,
    pub file_type: String,
    pub word_count: u32,
    pub page_count: u32,
    #[serde(default)]
    pub summary_stats: SummaryStats,
    pub categories: Vec<Category>,
    #[serde(default)]
    pub tips: Vec<Tip>,
    #[serde(default)]
    pub score_breakdown: Option<ScoreBreakdown>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryStats {
    pub total_checks: u32,
    pub passed: u32,
    pub warnings: u32,
    pub failed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total_earned: f64,
    pub total_possible: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub score: f64,
    pub max_score: f64,
    pub percentage: u32,
    #[serde(default)]
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Pass,
    Fail,
    Warning,
    Info,
}

impl FindingKind {
    /// Marker glyph drawn in the finding's dot
    pub fn marker(self) -> &'static str {
        match self {
            FindingKind::Pass => "\u{2713}",
            FindingKind::Fail => "\u{2717}",
            FindingKind::Warning => "!",
            FindingKind::Info => "i",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FindingKind::Pass => "pass",
            FindingKind::Fail => "fail",
            FindingKind::Warning => "warning",
            FindingKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub priority: String,
    pub title: String,
    pub description: String,
    pub impact: String,
}

impl AnalysisResult {
    /// Parse and range-check a 2xx response body.
    pub fn from_json(body: &str) -> Result<Self, CheckError> {
        let result: AnalysisResult = serde_json::from_str(body).map_err(|e| {
            tracing::warn!("analysis response did not match the expected shape: {}", e);
            CheckError::MalformedResponse(e.to_string())
        })?;
        result.validate()?;
        Ok(result)
    }

    fn validate(&self) -> Result<(), CheckError> {
        if self.overall_score > 100 {
            return Err(CheckError::MalformedResponse(format!(
                "overall_score {} is out of range (0-100)",
                self.overall_score
            )));
        }

        for category in &self.categories {
            if category.percentage > 100 {
                return Err(CheckError::MalformedResponse(format!(
                    "percentage {} for '{}' is out of range (0-100)",
                    category.percentage, category.name
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "overall_score": 72,
        "verdict": "Good resume!",
        "file_type": "PDF",
        "word_count": 480,
        "page_count": 1,
        "summary_stats": {"total_checks": 3, "passed": 1, "warnings": 1, "failed": 1},
        "categories": [
            {
                "name": "Contact Information",
                "score": 10.5,
                "max_score": 12,
                "percentage": 88,
                "findings": [
                    {"type": "pass", "message": "Email found"},
                    {"type": "warning", "message": "No LinkedIn URL"},
                    {"type": "fail", "message": "No phone number"}
                ]
            }
        ],
        "tips": [
            {"priority": "high", "title": "Quantify", "description": "Add numbers", "impact": "More interviews"}
        ],
        "score_breakdown": {"total_earned": 86.5, "total_possible": 120}
    }"#;

    #[test]
    fn test_parses_full_response() {
        let result = AnalysisResult::from_json(SAMPLE).unwrap();
        assert_eq!(result.overall_score, 72);
        assert_eq!(result.summary_stats.passed, 1);
        assert_eq!(result.categories[0].findings[1].kind, FindingKind::Warning);
        assert_eq!(result.categories[0].max_score, 12.0);
        assert_eq!(result.tips[0].priority, "high");
        assert!(result.score_breakdown.is_some());
    }

    #[test]
    fn test_optional_sections_default() {
        let body = r#"{
            "overall_score": 10, "verdict": "v", "file_type": "DOCX",
            "word_count": 5, "page_count": 1, "categories": []
        }"#;
        let result = AnalysisResult::from_json(body).unwrap();
        assert_eq!(result.summary_stats, SummaryStats::default());
        assert!(result.tips.is_empty());
        assert!(result.score_breakdown.is_none());
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let body = r#"{"overall_score": 10, "verdict": "v"}"#;
        assert!(matches!(
            AnalysisResult::from_json(body),
            Err(CheckError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_unknown_finding_type_is_malformed() {
        let body = r#"{
            "overall_score": 10, "verdict": "v", "file_type": "PDF",
            "word_count": 5, "page_count": 1,
            "categories": [{"name": "Education", "score": 1, "max_score": 2,
                "percentage": 50, "findings": [{"type": "critical", "message": "x"}]}]
        }"#;
        assert!(matches!(
            AnalysisResult::from_json(body),
            Err(CheckError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_out_of_range_score_is_malformed() {
        let body = r#"{
            "overall_score": 140, "verdict": "v", "file_type": "PDF",
            "word_count": 5, "page_count": 1, "categories": []
        }"#;
        assert!(matches!(
            AnalysisResult::from_json(body),
            Err(CheckError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_finding_markers() {
        assert_eq!(FindingKind::Pass.marker(), "\u{2713}");
        assert_eq!(FindingKind::Fail.marker(), "\u{2717}");
        assert_eq!(FindingKind::Warning.marker(), "!");
        assert_eq!(FindingKind::Info.marker(), "i");
    }
}
