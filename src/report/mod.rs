//! Report view model
//!
//! A pure function from session state to everything the presentation layer
//! draws: radar axes, pie slices and recommendation lines. Rendering lives
//! in [`render`], JSON export in [`export`].

pub mod export;
pub mod render;

use serde::{Deserialize, Serialize};

use crate::engine::{AssessmentSession, SectionScore};

pub use export::ExportedReport;
pub use render::ReportRenderer;

/// Report heading
pub const REPORT_TITLE: &str = "Оценка зрелости проекта";

/// Radar series label
pub const RADAR_SERIES: &str = "Зрелость";

pub const YES_SLICE: &str = "Выполнено (Да)";
pub const NO_SLICE: &str = "Не выполнено (Нет)";
pub const YES_COLOR: &str = "#34d399";
pub const NO_COLOR: &str = "#f87171";

/// Per-section maturity on a 0..=100 radial scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadarChart {
    pub series: String,
    pub domain: (u8, u8),
    pub points: Vec<SectionScore>,
}

/// One proportional slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: usize,
    pub color: String,
}

/// Yes/no proportion chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Sum of all slice values
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Complete assessment report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub submitted: bool,
    pub radar: RadarChart,
    pub pie: PieChart,
    pub unanswered: usize,
    pub recommendations: Vec<String>,
}

impl Report {
    /// Build report from current session state
    pub fn build(session: &AssessmentSession) -> Self {
        let tally = session.overall_tally();

        Report {
            title: REPORT_TITLE.to_string(),
            submitted: session.is_submitted(),
            radar: RadarChart {
                series: RADAR_SERIES.to_string(),
                domain: (0, 100),
                points: session.section_scores(),
            },
            pie: PieChart {
                slices: vec![
                    PieSlice {
                        name: YES_SLICE.to_string(),
                        value: tally.yes,
                        color: YES_COLOR.to_string(),
                    },
                    PieSlice {
                        name: NO_SLICE.to_string(),
                        value: tally.no,
                        color: NO_COLOR.to_string(),
                    },
                ],
            },
            unanswered: tally.unanswered,
            recommendations: session.recommendations(),
        }
    }

    /// Mean of section scores, rounded
    pub fn average_score(&self) -> u8 {
        let points = &self.radar.points;
        if points.is_empty() {
            return 0;
        }
        let sum: usize = points.iter().map(|p| p.value as usize).sum();
        crate::engine::scoring::percentage(sum, points.len() * 100)
    }
}
