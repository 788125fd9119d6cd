//! Command handler for REPL built-in commands
//!
//! Commands start with `/`; anything else typed at the prompt is a reply to
//! the current question.

use anyhow::Result;
use colored::*;
use std::path::PathBuf;

use crate::report::{ExportedReport, Report};
use crate::repl::display::DisplayManager;
use crate::repl::session::SessionManager;

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Status,
    Back,
    Next,
    /// 1-based position
    Goto { section: usize, question: usize },
    /// Jump to the first unanswered question
    Pending,
    ClearAnswer,
    Submit,
    Export { path: Option<PathBuf> },
    Catalog,
    Reset,
    Verbose { enable: bool },
    Clear,
    Exit,
    Unknown { input: String },
}

/// Check if input is a command
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}

/// Command handler for parsing and executing REPL commands
pub struct CommandHandler {
    verbose: bool,
    /// Target for `/export` without a path
    export_dir: Option<PathBuf>,
}

impl CommandHandler {
    /// Create new command handler
    pub fn new() -> Self {
        CommandHandler {
            verbose: false,
            export_dir: None,
        }
    }

    /// Parse input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        let Some(body) = trimmed.strip_prefix('/') else {
            return Command::Unknown { input: input.to_string() };
        };

        let parts: Vec<&str> = body.split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown { input: input.to_string() };
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "status" => Command::Status,
            "back" | "b" | "prev" => Command::Back,
            "next" | "n" => Command::Next,
            "goto" | "g" => {
                let section = parts.get(1).and_then(|s| s.parse().ok());
                let question = parts.get(2).and_then(|s| s.parse().ok());
                match (section, question) {
                    (Some(section), Some(question)) => Command::Goto { section, question },
                    _ => Command::Unknown { input: input.to_string() },
                }
            }
            "pending" => Command::Pending,
            "clear-answer" | "unset" => Command::ClearAnswer,
            "submit" | "report" => Command::Submit,
            "export" => Command::Export {
                path: parts.get(1).map(PathBuf::from),
            },
            "catalog" | "list" => Command::Catalog,
            "reset" => Command::Reset,
            "verbose" => {
                let enable = parts
                    .get(1)
                    .map(|s| s.to_lowercase() == "on" || s == &"1" || s == &"true")
                    .unwrap_or(true);
                Command::Verbose { enable }
            }
            "clear" | "cls" => Command::Clear,
            _ => Command::Unknown { input: input.to_string() },
        }
    }

    /// Execute a command
    ///
    /// Returns true if REPL should continue, false if should exit
    pub fn execute(
        &mut self,
        command: Command,
        session: &mut SessionManager,
        display: &DisplayManager,
    ) -> Result<bool> {
        match command {
            Command::Help => {
                self.show_help();
            }
            Command::Exit => {
                println!("{}", "До свидания!".green());
                return Ok(false);
            }
            Command::Status => {
                display.show_status(session.assessment(), self.verbose);
            }
            Command::Back => {
                session.back();
                show_cursor(session, display);
            }
            Command::Next => {
                session.advance();
                show_cursor(session, display);
            }
            Command::Goto { section, question } => match session.goto(section, question) {
                Ok(_) => show_cursor(session, display),
                Err(e) => display.show_error(&e.to_string()),
            },
            Command::Pending => {
                if session.next_unanswered().is_some() {
                    show_cursor(session, display);
                } else {
                    display.show_info("Every question has an answer.");
                }
            }
            Command::ClearAnswer => match session.clear_current() {
                Ok(Some(key)) => {
                    display.show_info(&format!(
                        "Answer to {}.{} cleared",
                        key.section + 1,
                        key.question + 1
                    ));
                }
                Ok(None) => display.show_warning("No current question"),
                Err(e) => display.show_warning(&e.to_string()),
            },
            Command::Submit => {
                if session.submit() {
                    let (answered, total) = session.progress();
                    tracing::info!(answered, total, "report generated");
                    if answered < total {
                        display.show_warning(&format!(
                            "{} of {} questions left unanswered",
                            total - answered,
                            total
                        ));
                    }
                }
                display.show_report(&Report::build(session.assessment()));
            }
            Command::Export { path } => self.export(session, display, path)?,
            Command::Catalog => {
                display.show_catalog(session.assessment());
            }
            Command::Reset => {
                session.reset();
                println!("{}", "Session reset. All answers cleared.".yellow());
                show_cursor(session, display);
            }
            Command::Verbose { enable } => {
                self.verbose = enable;
                let status = if enable { "enabled" } else { "disabled" };
                println!("{}", format!("Verbose mode {}", status).cyan());
            }
            Command::Clear => {
                display.clear_screen()?;
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
            }
        }
        Ok(true)
    }

    fn export(
        &self,
        session: &SessionManager,
        display: &DisplayManager,
        path: Option<PathBuf>,
    ) -> Result<()> {
        if !session.is_submitted() {
            display.show_warning("Submit the assessment first (/submit)");
            return Ok(());
        }

        let exported = ExportedReport::new(Report::build(session.assessment()));
        let path = path.or_else(|| {
            self.export_dir
                .as_ref()
                .map(|dir| dir.join(format!("report-{}.json", exported.id)))
        });
        let Some(path) = path else {
            display.show_error("Usage: /export <path>");
            return Ok(());
        };

        match exported.save(&path) {
            Ok(()) => display.show_success(&format!("Report saved to {}", path.display())),
            Err(e) => display.show_error(&format!("Export failed: {}", e)),
        }
        Ok(())
    }

    /// Display help information
    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = [
            ("/help, /h", "Show this help message"),
            ("/status", "Show answers per section"),
            ("/back, /b", "Go to previous question"),
            ("/next, /n", "Go to next question"),
            ("/goto <s> <q>", "Jump to question q of section s"),
            ("/pending", "Jump to first unanswered question"),
            ("/clear-answer", "Remove answer to current question"),
            ("/catalog", "List all questions with answers"),
            ("/submit, /report", "Build the report (answers are frozen)"),
            ("/export [path]", "Save submitted report as JSON"),
            ("/reset", "Start a new assessment"),
            ("/verbose [on|off]", "Toggle verbose output"),
            ("/clear, /cls", "Clear screen"),
            ("/exit, /quit, /q", "Exit"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }

        println!("\n{}", "Answers:".bold());
        println!("  {} yes   {} no   {} skip", "y/да".green(), "n/нет".red(), "-".yellow());
        println!("  Press {} or {} to exit", "Ctrl-D".cyan(), "/exit".cyan());
        println!();
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Set verbose mode
    pub fn set_verbose(&mut self, enable: bool) {
        self.verbose = enable;
    }

    /// Set the directory used by `/export` when no path is given
    pub fn set_export_dir(&mut self, dir: PathBuf) {
        self.export_dir = Some(dir);
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Show the question under the cursor, or the end-of-catalog hint
pub fn show_cursor(session: &SessionManager, display: &DisplayManager) {
    match session.current() {
        Some(current) => display.show_question(&current, session.progress()),
        None if session.is_submitted() => {
            display.show_info("Assessment submitted. Use /report to view or /reset to start over.")
        }
        None => display.show_end_of_catalog(session.progress()),
    }
}
