//! Display manager for REPL terminal UI
//!
//! Formats questions, progress, catalog listings and the final report.

use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use std::io;

use crate::catalog::Catalog;
use crate::engine::{Answer, AssessmentSession};
use crate::report::{Report, ReportRenderer};
use crate::repl::session::CurrentQuestion;

/// Display manager for REPL UI
pub struct DisplayManager {
    renderer: ReportRenderer,
}

impl DisplayManager {
    /// Create display manager with a report renderer
    pub fn new(renderer: ReportRenderer) -> Self {
        DisplayManager { renderer }
    }

    pub fn renderer(&self) -> &ReportRenderer {
        &self.renderer
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, catalog: &Catalog) {
        let width = 64;
        let rule = "=".repeat(width);
        let title = format!("  Оценка зрелости проекта {}", version);
        let info = format!(
            "  Разделов: {} | Вопросов: {}",
            catalog.len(),
            catalog.total_questions()
        );

        println!("\n{}", rule.cyan());
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", rule.cyan());
        println!(
            "Answer {} / {} (or {} to skip), {} for commands, {} to build the report\n",
            "y".green(),
            "n".red(),
            "-".yellow(),
            "/help".green(),
            "/submit".green()
        );
    }

    /// Show the question under the cursor
    pub fn show_question(&self, current: &CurrentQuestion<'_>, progress: (usize, usize)) {
        if current.key.question == 0 {
            self.show_section(&format!(
                "{}. {}",
                current.key.section + 1,
                current.section.title
            ));
        }

        println!(
            "{} {} {}",
            format!(
                "[{}.{}]",
                current.key.section + 1,
                current.key.question + 1
            )
            .cyan(),
            current.question.prompt,
            format!("({}/{})", progress.0, progress.1).dimmed()
        );

        if current.answer.is_answered() {
            println!("  {} {}", "Текущий ответ:".dimmed(), answer_label(current.answer));
        }
    }

    /// Show hint once every question has been visited
    pub fn show_end_of_catalog(&self, progress: (usize, usize)) {
        println!(
            "\n{} Answered {}/{}. Type {} to build the report or {} to revisit.",
            "→".cyan(),
            progress.0,
            progress.1,
            "/submit".green(),
            "/back".green()
        );
    }

    /// Show per-section answer progress
    pub fn show_status(&self, session: &AssessmentSession, verbose: bool) {
        self.show_section("Session Status:");

        let catalog = session.catalog();
        for (s, section) in catalog.iter().enumerate() {
            let answered = (0..section.len())
                .filter(|&q| session.answer(s, q).is_answered())
                .count();
            println!(
                "  {}. {:<40} {}",
                (s + 1).to_string().cyan(),
                section.title,
                format!("{}/{}", answered, section.len()).green()
            );
        }

        let tally = session.overall_tally();
        println!();
        println!("  Да:          {}", tally.yes.to_string().green());
        println!("  Нет:         {}", tally.no.to_string().red());
        println!("  Без ответа:  {}", tally.unanswered.to_string().yellow());
        println!(
            "  Submitted:   {}",
            if session.is_submitted() { "Yes".green() } else { "No".red() }
        );
        println!("  Verbose:     {}", if verbose { "On".green() } else { "Off".red() });
        println!();
    }

    /// List catalog with current answers
    pub fn show_catalog(&self, session: &AssessmentSession) {
        for (s, section) in session.catalog().iter().enumerate() {
            self.show_section(&format!("{}. {}", s + 1, section.title));
            for (q, question) in section.questions.iter().enumerate() {
                println!(
                    "  {} {} {}",
                    format!("{}.{}", s + 1, q + 1).cyan(),
                    question.prompt,
                    answer_label(session.answer(s, q))
                );
            }
        }
        println!();
    }

    /// Render the report
    pub fn show_report(&self, report: &Report) {
        println!("{}", self.renderer.render(report));
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Display success message
    pub fn show_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new(ReportRenderer::default())
    }
}

fn answer_label(answer: Answer) -> ColoredString {
    match answer {
        Answer::Yes => answer.label().green(),
        Answer::No => answer.label().red(),
        Answer::Unanswered => answer.label().dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::session::SessionManager;

    #[test]
    fn test_display_manager_creation() {
        let manager = DisplayManager::new(ReportRenderer::new(12, false));
        assert_eq!(manager.renderer().bar_width(), 12);
    }

    #[test]
    fn test_show_question_and_status() {
        let manager = DisplayManager::default();
        let mut session = SessionManager::default();
        session.answer_current(Answer::Yes).unwrap();
        session.back();

        let current = session.current().unwrap();
        manager.show_question(&current, session.progress());
        manager.show_status(session.assessment(), true);
        manager.show_catalog(session.assessment());
        manager.show_end_of_catalog(session.progress());
    }

    #[test]
    fn test_message_display() {
        let manager = DisplayManager::default();
        manager.show_error("Test error");
        manager.show_warning("Test warning");
        manager.show_info("Test info");
        manager.show_success("Done");
    }

    #[test]
    fn test_show_report() {
        let manager = DisplayManager::default();
        let session = AssessmentSession::with_builtin();
        manager.show_report(&Report::build(&session));
    }
}
