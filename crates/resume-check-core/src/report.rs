//! Report projection
//!
//! [`ReportModel::build`] turns an [`AnalysisResult`] into everything the
//! painter needs: labels, band colors, animation targets and delays. It
//! performs no I/O and cannot fail.
//!
//! [`ReportView`] holds the interactive sub-state of the results screen:
//! which tab is active and which categories are expanded.

use crate::config::ClientConfig;
use crate::score::{category_icon, format_score, ScoreBand};
use crate::types::{AnalysisResult, Category, FindingKind};
use serde::Serialize;
use std::collections::BTreeSet;
use std::f64::consts::PI;
use std::str::FromStr;

/// Shown in the tips panel when the server returned no tips
pub const EMPTY_TIPS_MESSAGE: &str = "No improvement tips \u{2014} your resume is well optimized!";

pub const OVERVIEW_TITLE: &str = "Category Breakdown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Details,
    Tips,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Details, Tab::Tips];

    /// Value of the tab button's `data-tab` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Details => "details",
            Tab::Tips => "tips",
        }
    }

    /// Id of the panel the tab shows
    pub fn panel_id(self) -> &'static str {
        match self {
            Tab::Details => "tab-details",
            Tab::Tips => "tab-tips",
        }
    }
}

impl FromStr for Tab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "details" => Ok(Tab::Details),
            "tips" => Ok(Tab::Tips),
            _ => Err(()),
        }
    }
}

/// Tab selection and expanded categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportView {
    active_tab: Tab,
    expanded: BTreeSet<usize>,
}

impl ReportView {
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Open a closed category or close an open one. Returns the new state.
    pub fn toggle_category(&mut self, index: usize) -> bool {
        if self.expanded.remove(&index) {
            false
        } else {
            self.expanded.insert(index);
            true
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }

    /// Back to the first tab with every category closed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeModel {
    pub score: u32,
    pub band: ScoreBand,
    pub circumference: f64,
    /// Dash offset once the arc is filled to `score / 100`
    pub target_offset: f64,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterModel {
    pub element_id: &'static str,
    pub target: u32,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarModel {
    pub name: String,
    pub percentage: u32,
    pub band: ScoreBand,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingLine {
    pub kind: FindingKind,
    pub marker: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub icon: &'static str,
    pub name: String,
    /// "score/max", e.g. "17/20"
    pub score_label: String,
    pub band: ScoreBand,
    pub badge_class: &'static str,
    pub badge_label: &'static str,
    pub findings: Vec<FindingLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipCard {
    /// CSS class, e.g. "tip-high"
    pub priority_class: String,
    /// e.g. "high priority"
    pub priority_label: String,
    pub title: String,
    pub description: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum TipsPanel {
    Empty(&'static str),
    List(Vec<TipCard>),
}

/// Everything needed to paint the results screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportModel {
    pub gauge: GaugeModel,
    pub verdict: String,
    pub meta_chips: Vec<String>,
    pub counters: Vec<CounterModel>,
    pub bars: Vec<BarModel>,
    pub details: Vec<CategoryEntry>,
    pub tips: TipsPanel,
}

impl ReportModel {
    pub fn build(result: &AnalysisResult, config: &ClientConfig) -> Self {
        let circumference = 2.0 * PI * config.gauge_radius;
        let fraction = f64::from(result.overall_score) / 100.0;

        let gauge = GaugeModel {
            score: result.overall_score,
            band: ScoreBand::for_percentage(result.overall_score),
            circumference,
            target_offset: circumference - fraction * circumference,
            delay_ms: config.gauge_delay_ms,
            duration_ms: config.score_duration_ms,
        };

        let stats = &result.summary_stats;
        let counters = [
            ("statPass", stats.passed),
            ("statWarn", stats.warnings),
            ("statFail", stats.failed),
        ]
        .into_iter()
        .map(|(element_id, target)| CounterModel {
            element_id,
            target,
            duration_ms: config.counter_duration_ms,
        })
        .collect();

        let bars = result
            .categories
            .iter()
            .enumerate()
            .map(|(i, cat)| BarModel {
                name: cat.name.clone(),
                percentage: cat.percentage,
                band: ScoreBand::for_percentage(cat.percentage),
                delay_ms: config.bar_delay_ms(i),
            })
            .collect();

        Self {
            gauge,
            verdict: result.verdict.clone(),
            meta_chips: meta_chips(result),
            counters,
            bars,
            details: result.categories.iter().map(category_entry).collect(),
            tips: tips_panel(result),
        }
    }
}

fn meta_chips(result: &AnalysisResult) -> Vec<String> {
    let pages = if result.page_count > 1 { "pages" } else { "page" };
    vec![
        result.file_type.clone(),
        format!("{} words", result.word_count),
        format!("{} {}", result.page_count, pages),
        format!("{} checks", result.categories.len()),
    ]
}

fn category_entry(cat: &Category) -> CategoryEntry {
    let band = ScoreBand::for_percentage(cat.percentage);
    let (badge_class, badge_label) = band.badge();

    CategoryEntry {
        icon: category_icon(&cat.name),
        name: cat.name.clone(),
        score_label: format!(
            "{}/{}",
            format_score(cat.score),
            format_score(cat.max_score)
        ),
        band,
        badge_class,
        badge_label,
        findings: cat
            .findings
            .iter()
            .map(|f| FindingLine {
                kind: f.kind,
                marker: f.kind.marker(),
                message: f.message.clone(),
            })
            .collect(),
    }
}

fn tips_panel(result: &AnalysisResult) -> TipsPanel {
    if result.tips.is_empty() {
        return TipsPanel::Empty(EMPTY_TIPS_MESSAGE);
    }

    TipsPanel::List(
        result
            .tips
            .iter()
            .map(|tip| TipCard {
                priority_class: format!("tip-{}", tip.priority),
                priority_label: format!("{} priority", tip.priority),
                title: tip.title.clone(),
                description: tip.description.clone(),
                impact: tip.impact.clone(),
            })
            .collect(),
    )
}
