//! Terminal rendering of a [`Report`]
//!
//! The radar chart becomes one horizontal bar per section and the pie chart
//! a share line per slice. Output is returned as a string so callers decide
//! where it goes.

use colored::{ColoredString, Colorize};

use crate::engine::scoring::percentage;
use crate::report::{PieSlice, Report, NO_COLOR, YES_COLOR};

const FILLED: char = '█';
const EMPTY: char = '░';

/// Text renderer for assessment reports
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    bar_width: usize,
    color: bool,
}

impl ReportRenderer {
    /// Create renderer with bar width in characters
    pub fn new(bar_width: usize, color: bool) -> Self {
        Self {
            bar_width: bar_width.max(1),
            color,
        }
    }

    pub fn bar_width(&self) -> usize {
        self.bar_width
    }

    /// Render full report
    pub fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        let rule = "=".repeat(60);

        out.push_str(&format!("\n{}\n", self.paint(&report.title, |t| t.bold().cyan())));
        out.push_str(&format!("{}\n", self.paint(&rule, |t| t.cyan())));

        out.push_str(&self.render_radar(report));
        out.push('\n');
        out.push_str(&self.render_pie(report));
        out.push('\n');
        out.push_str(&self.render_recommendations(report));
        out
    }

    /// Per-section bars
    pub fn render_radar(&self, report: &Report) -> String {
        let radar = &report.radar;
        let label_width = radar
            .points
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = format!(
            "{} ({}–{})\n",
            self.paint(&radar.series, |t| t.bold()),
            radar.domain.0,
            radar.domain.1
        );

        for point in &radar.points {
            out.push_str(&format!(
                "  {:<width$}  {} {:>3}%\n",
                point.name,
                self.bar(point.value),
                point.value,
                width = label_width
            ));
        }

        out.push_str(&format!(
            "  {:<width$}  {:>w2$}%\n",
            "Среднее",
            report.average_score(),
            width = label_width,
            w2 = self.bar_width + 4
        ));
        out
    }

    /// Yes/no shares
    pub fn render_pie(&self, report: &Report) -> String {
        let total = report.pie.total();
        let label_width = report
            .pie
            .slices
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = format!("{}\n", self.paint("Ответы", |t| t.bold()));
        for slice in &report.pie.slices {
            let share = if total == 0 { 0 } else { percentage(slice.value, total) };
            out.push_str(&format!(
                "  {}  {:>3}  ({}%)\n",
                self.paint_slice(slice, &format!("{:<width$}", slice.name, width = label_width)),
                slice.value,
                share
            ));
        }

        if report.unanswered > 0 {
            out.push_str(&format!(
                "  {:<width$}  {:>3}\n",
                "Без ответа",
                report.unanswered,
                width = label_width
            ));
        }
        out
    }

    /// Bullet list of recommendations
    pub fn render_recommendations(&self, report: &Report) -> String {
        let mut out = format!("{}\n", self.paint("Рекомендации", |t| t.bold()));
        for rec in &report.recommendations {
            out.push_str(&format!("  {}\n", rec));
        }
        out
    }

    /// Horizontal bar for a 0..=100 value
    pub fn bar(&self, value: u8) -> String {
        let filled = (value.min(100) as usize * self.bar_width + 50) / 100;
        let bar: String = std::iter::repeat(FILLED)
            .take(filled)
            .chain(std::iter::repeat(EMPTY).take(self.bar_width - filled))
            .collect();
        self.paint(&bar, |t| t.blue())
    }

    fn paint_slice(&self, slice: &PieSlice, text: &str) -> String {
        match slice.color.as_str() {
            YES_COLOR => self.paint(text, |t| t.green()),
            NO_COLOR => self.paint(text, |t| t.red()),
            _ => text.to_string(),
        }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(40, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AssessmentSession;

    fn plain() -> ReportRenderer {
        ReportRenderer::new(10, false)
    }

    #[test]
    fn test_bar_bounds() {
        let renderer = plain();
        assert_eq!(renderer.bar(0), "░".repeat(10));
        assert_eq!(renderer.bar(100), "█".repeat(10));
        assert_eq!(renderer.bar(50), format!("{}{}", "█".repeat(5), "░".repeat(5)));
    }

    #[test]
    fn test_bar_width_minimum() {
        let renderer = ReportRenderer::new(0, false);
        assert_eq!(renderer.bar_width(), 1);
    }

    #[test]
    fn test_render_contains_sections() {
        let mut session = AssessmentSession::with_builtin();
        session.record_answer(0, 0, true).unwrap();
        session.record_answer(1, 0, false).unwrap();
        session.submit();

        let text = plain().render(&Report::build(&session));
        assert!(text.contains("Оценка зрелости проекта"));
        assert!(text.contains("Зрелость процессов разработки"));
        assert!(text.contains(" 17%"));
        assert!(text.contains("Выполнено (Да)"));
        assert!(text.contains("(50%)"));
        assert!(text.contains("Без ответа"));
        assert!(text.contains("стратегии тестирования"));
    }

    #[test]
    fn test_render_pie_without_answers() {
        let report = Report::build(&AssessmentSession::with_builtin());
        let text = plain().render_pie(&report);
        assert!(text.contains("(0%)"));
        assert!(text.contains(" 31"));
    }

    #[test]
    fn test_render_fallback_recommendation() {
        let report = Report::build(&AssessmentSession::with_builtin());
        let text = plain().render_recommendations(&report);
        assert!(text.contains("Все ключевые практики присутствуют"));
    }
}
