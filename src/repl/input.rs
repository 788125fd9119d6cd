//! Input handler for REPL using rustyline
//!
//! Provides readline functionality with history and editing, plus parsing
//! of yes/no replies typed at the questionnaire prompt.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::DefaultEditor;
use std::path::PathBuf;

const DEFAULT_PROMPT: &str = "maturity> ";

/// Reply to the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Yes,
    No,
    /// Move on without answering
    Skip,
}

/// Parse a plain reply (case-insensitive, Russian or English)
pub fn parse_reply(input: &str) -> Option<Reply> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "да" | "д" | "1" | "+" => Some(Reply::Yes),
        "n" | "no" | "нет" | "н" | "0" => Some(Reply::No),
        "-" | "s" | "skip" | "пропустить" => Some(Reply::Skip),
        _ => None,
    }
}

/// Input handler managing readline interface and command history
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
    prompt: String,
}

impl InputHandler {
    /// Create new input handler
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            history_path: None,
            prompt: DEFAULT_PROMPT.to_string(),
        })
    }

    /// Create input handler with persistent history
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        // Load existing history if file exists
        if history_file.exists() {
            let _ = editor.load_history(&history_file);
        }

        Ok(InputHandler {
            editor,
            history_path: Some(history_file),
            prompt: DEFAULT_PROMPT.to_string(),
        })
    }

    /// Set custom prompt
    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }

    /// Read a line of input from user
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input
    /// - Ok(None) for EOF (Ctrl-D)
    /// - Err on interrupt (Ctrl-C) or other errors
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    return Ok(Some(String::new()));
                }

                // Single-letter replies would flood the history
                if parse_reply(trimmed).is_none() {
                    let _ = self.editor.add_history_entry(trimmed);
                }

                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => Err(anyhow::anyhow!("Interrupted")),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }

    /// Save history to disk
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            self.editor.save_history(path)?;
        }
        Ok(())
    }

    /// Get history size
    pub fn history_len(&self) -> usize {
        self.editor.history().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_reply_yes() {
        for input in ["y", "Y", "yes", "да", "Да", " д ", "1", "+"] {
            assert_eq!(parse_reply(input), Some(Reply::Yes), "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_reply_no() {
        for input in ["n", "NO", "нет", "Н", "0"] {
            assert_eq!(parse_reply(input), Some(Reply::No), "input {:?}", input);
        }
    }

    #[test]
    fn test_parse_reply_skip_and_unknown() {
        assert_eq!(parse_reply("-"), Some(Reply::Skip));
        assert_eq!(parse_reply("skip"), Some(Reply::Skip));
        assert_eq!(parse_reply("maybe"), None);
        assert_eq!(parse_reply(""), None);
    }

    #[test]
    fn test_input_handler_creation() {
        assert!(InputHandler::new().is_ok());
    }

    #[test]
    fn test_custom_prompt() {
        let mut handler = InputHandler::new().unwrap();
        handler.set_prompt("test> ".to_string());
        assert_eq!(handler.prompt, "test> ");
    }

    #[test]
    fn test_default_prompt() {
        let handler = InputHandler::new().unwrap();
        assert_eq!(handler.prompt, DEFAULT_PROMPT);
        assert!(handler.history_path.is_none());
    }

    #[test]
    fn test_history_persistence() {
        let temp_dir = TempDir::new().unwrap();
        let history_path = temp_dir.path().join("state").join("history");

        {
            let mut handler = InputHandler::with_history(history_path.clone()).unwrap();
            let _ = handler.editor.add_history_entry("/status");
            let _ = handler.editor.add_history_entry("/goto 2 3");
            handler.save_history().unwrap();
        }

        assert!(history_path.exists());

        let handler = InputHandler::with_history(history_path).unwrap();
        assert_eq!(handler.history_len(), 2);
    }
}
