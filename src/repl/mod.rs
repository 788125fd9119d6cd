//! REPL (Read-Eval-Print Loop) module for the interactive questionnaire
//!
//! Walks the user through the catalog one question at a time, records
//! replies into the assessment session and renders the report on submit.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::engine::Answer;
use crate::errors::AssessmentError;
use crate::report::ReportRenderer;
use crate::repl::commands::{is_command, show_cursor, CommandHandler};
pub use crate::repl::display::DisplayManager;
use crate::repl::input::{parse_reply, InputHandler, Reply};
pub use crate::repl::session::SessionManager;

/// REPL session coordinator
///
/// Manages the interactive loop with:
/// - Input handling (rustyline)
/// - Command processing
/// - Questionnaire state
/// - Display coordination
pub struct ReplSession {
    input_handler: InputHandler,
    command_handler: CommandHandler,
    session_manager: SessionManager,
    display_manager: DisplayManager,
}

impl ReplSession {
    /// Create new REPL session
    pub fn new(catalog: Arc<Catalog>, renderer: ReportRenderer) -> Result<Self> {
        Ok(Self::assemble(InputHandler::new()?, catalog, renderer))
    }

    /// Create REPL session with persistent history
    pub fn with_history(
        catalog: Arc<Catalog>,
        renderer: ReportRenderer,
        history_path: PathBuf,
    ) -> Result<Self> {
        Ok(Self::assemble(
            InputHandler::with_history(history_path)?,
            catalog,
            renderer,
        ))
    }

    fn assemble(input_handler: InputHandler, catalog: Arc<Catalog>, renderer: ReportRenderer) -> Self {
        ReplSession {
            input_handler,
            command_handler: CommandHandler::new(),
            session_manager: SessionManager::new(catalog),
            display_manager: DisplayManager::new(renderer),
        }
    }

    /// Directory for `/export` without a path
    pub fn with_export_dir(mut self, dir: PathBuf) -> Self {
        self.command_handler.set_export_dir(dir);
        self
    }

    /// Show welcome banner and the first question
    pub fn show_welcome(&self, version: &str) {
        self.display_manager
            .show_banner(version, self.session_manager.catalog());
        self.show_current();
    }

    /// Show the question under the cursor
    pub fn show_current(&self) {
        show_cursor(&self.session_manager, &self.display_manager);
    }

    /// Read a line of input from user
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input
    /// - Ok(None) for EOF/exit
    /// - Err for interrupt
    pub fn read_input(&mut self) -> Result<Option<String>> {
        self.input_handler.read_line()
    }

    /// Handle user input (command or reply)
    ///
    /// Returns true if session should continue, false to exit
    pub fn handle_input(&mut self, input: &str) -> Result<bool> {
        if input.trim().is_empty() {
            return Ok(true);
        }

        if is_command(input) {
            let command = self.command_handler.parse(input);
            return self.command_handler.execute(
                command,
                &mut self.session_manager,
                &self.display_manager,
            );
        }

        match parse_reply(input) {
            Some(Reply::Skip) => {
                self.session_manager.advance();
                self.show_current();
            }
            Some(reply) => {
                let answer = if reply == Reply::Yes { Answer::Yes } else { Answer::No };
                self.record_reply(answer);
            }
            None => {
                self.display_manager
                    .show_error(&format!("Not an answer: {} (y/n, - to skip, /help)", input.trim()));
            }
        }

        Ok(true)
    }

    fn record_reply(&mut self, answer: Answer) {
        match self.session_manager.answer_current(answer) {
            Ok(key) => {
                if self.command_handler.is_verbose() {
                    self.display_manager.show_info(&format!(
                        "{}.{} = {}",
                        key.section + 1,
                        key.question + 1,
                        answer
                    ));
                }
                self.show_current();
            }
            Err(AssessmentError::AlreadySubmitted) => {
                self.display_manager
                    .show_warning("Report already generated; answers can no longer change. Use /reset to start over.");
            }
            Err(e) => self.display_manager.show_warning(&e.to_string()),
        }
    }

    /// Get session manager (immutable)
    pub fn session(&self) -> &SessionManager {
        &self.session_manager
    }

    /// Get display manager
    pub fn display(&self) -> &DisplayManager {
        &self.display_manager
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.command_handler.is_verbose()
    }

    /// Set verbose mode
    pub fn set_verbose(&mut self, enable: bool) {
        self.command_handler.set_verbose(enable);
    }

    /// Save session state
    pub fn save(&mut self) -> Result<()> {
        self.input_handler.save_history()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AnswerKey;

    fn repl() -> ReplSession {
        ReplSession::new(Catalog::builtin(), ReportRenderer::new(20, false)).unwrap()
    }

    #[test]
    fn test_repl_session_creation() {
        let session = repl();
        assert_eq!(session.session().progress(), (0, 31));
        assert!(!session.is_verbose());
    }

    #[test]
    fn test_handle_replies() {
        let mut session = repl();
        assert!(session.handle_input("да").unwrap());
        assert!(session.handle_input("n").unwrap());
        assert!(session.handle_input("-").unwrap());

        let assessment = session.session().assessment();
        assert_eq!(assessment.answer(0, 0), Answer::Yes);
        assert_eq!(assessment.answer(0, 1), Answer::No);
        assert_eq!(assessment.answer(0, 2), Answer::Unanswered);
        assert_eq!(session.session().cursor(), Some(AnswerKey::new(0, 3)));
    }

    #[test]
    fn test_handle_invalid_reply() {
        let mut session = repl();
        assert!(session.handle_input("maybe").unwrap());
        assert_eq!(session.session().progress().0, 0);
        assert_eq!(session.session().cursor(), Some(AnswerKey::new(0, 0)));
    }

    #[test]
    fn test_handle_exit_command() {
        let mut session = repl();
        assert!(!session.handle_input("/exit").unwrap());
    }

    #[test]
    fn test_handle_empty_input() {
        let mut session = repl();
        assert!(session.handle_input("").unwrap());
        assert!(session.handle_input("   ").unwrap());
    }

    #[test]
    fn test_replies_after_submit_ignored() {
        let mut session = repl();
        session.handle_input("y").unwrap();
        session.handle_input("/submit").unwrap();
        session.handle_input("/goto 1 2").unwrap();
        session.handle_input("n").unwrap();

        let assessment = session.session().assessment();
        assert!(assessment.is_submitted());
        assert_eq!(assessment.answer(0, 1), Answer::Unanswered);
        assert_eq!(assessment.answered_count(), 1);
    }

    #[test]
    fn test_verbose_mode() {
        let mut session = repl();
        session.set_verbose(true);
        assert!(session.is_verbose());
        session.handle_input("/verbose off").unwrap();
        assert!(!session.is_verbose());
    }
}
