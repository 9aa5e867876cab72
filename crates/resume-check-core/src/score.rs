//! Four-bucket score scale shared by every score-colored element

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Success,
    Info,
    Warning,
    Danger,
}

impl ScoreBand {
    /// Band for a 0-100 value: >=80 success, >=60 info, >=40 warning, else danger.
    pub fn for_percentage(value: u32) -> Self {
        if value >= 80 {
            ScoreBand::Success
        } else if value >= 60 {
            ScoreBand::Info
        } else if value >= 40 {
            ScoreBand::Warning
        } else {
            ScoreBand::Danger
        }
    }

    /// CSS custom property for the band's foreground color
    pub fn css_var(self) -> &'static str {
        match self {
            ScoreBand::Success => "var(--success)",
            ScoreBand::Info => "var(--info)",
            ScoreBand::Warning => "var(--warning)",
            ScoreBand::Danger => "var(--danger)",
        }
    }

    /// Qualitative badge: (css class, label)
    pub fn badge(self) -> (&'static str, &'static str) {
        match self {
            ScoreBand::Success => ("badge-excellent", "Excellent"),
            ScoreBand::Info => ("badge-good", "Good"),
            ScoreBand::Warning => ("badge-fair", "Fair"),
            ScoreBand::Danger => ("badge-poor", "Needs Work"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreBand::Success => "success",
            ScoreBand::Info => "info",
            ScoreBand::Warning => "warning",
            ScoreBand::Danger => "danger",
        }
    }
}

/// Icon used when a category name is not in the table
pub const FALLBACK_ICON: &str = "\u{25A0}";

/// Icon for a category name.
pub fn category_icon(name: &str) -> &'static str {
    match name {
        "Contact Information" => "\u{2709}",
        "Resume Sections" => "\u{2630}",
        "Work Experience" => "\u{2605}",
        "Education" => "\u{1F393}",
        "Formatting & Structure" => "\u{25A6}",
        "ATS Compatibility" => "\u{2714}",
        "Action Verbs" => "\u{26A1}",
        "Measurable Results" => "\u{25B2}",
        "Hard Skills" => "\u{2699}",
        "Readability" => "\u{270E}",
        "Writing Consistency" => "\u{2261}",
        "Keyword Optimization" => "\u{26B2}",
        _ => FALLBACK_ICON,
    }
}

/// Render a category score without a trailing ".0" (17.0 -> "17", 10.5 -> "10.5").
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_examples() {
        assert_eq!(ScoreBand::for_percentage(95), ScoreBand::Success);
        assert_eq!(ScoreBand::for_percentage(70), ScoreBand::Info);
        assert_eq!(ScoreBand::for_percentage(50), ScoreBand::Warning);
        assert_eq!(ScoreBand::for_percentage(10), ScoreBand::Danger);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ScoreBand::for_percentage(80), ScoreBand::Success);
        assert_eq!(ScoreBand::for_percentage(79), ScoreBand::Info);
        assert_eq!(ScoreBand::for_percentage(60), ScoreBand::Info);
        assert_eq!(ScoreBand::for_percentage(59), ScoreBand::Warning);
        assert_eq!(ScoreBand::for_percentage(40), ScoreBand::Warning);
        assert_eq!(ScoreBand::for_percentage(39), ScoreBand::Danger);
        assert_eq!(ScoreBand::for_percentage(0), ScoreBand::Danger);
        assert_eq!(ScoreBand::for_percentage(100), ScoreBand::Success);
    }

    #[test]
    fn test_badges() {
        assert_eq!(ScoreBand::Success.badge().1, "Excellent");
        assert_eq!(ScoreBand::Info.badge().1, "Good");
        assert_eq!(ScoreBand::Warning.badge().1, "Fair");
        assert_eq!(ScoreBand::Danger.badge(), ("badge-poor", "Needs Work"));
    }

    #[test]
    fn test_category_icons() {
        assert_eq!(category_icon("Contact Information"), "\u{2709}");
        assert_eq!(category_icon("Keyword Optimization"), "\u{26B2}");
        assert_eq!(category_icon("Cover Letter"), FALLBACK_ICON);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(17.0), "17");
        assert_eq!(format_score(10.5), "10.5");
        assert_eq!(format_score(0.0), "0");
    }
}
