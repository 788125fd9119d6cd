//! CLI module for the maturity assessment
//!
//! Handles command-line argument parsing, configuration management and
//! answers files for non-interactive runs.

pub mod answers;
pub mod args;
pub mod config;

pub use answers::{apply_answers, load_answers, AnswerEntry};
pub use args::{Args, Commands, OutputFormat, Verbosity};
pub use config::Config;
