//! Maturity - project maturity self-assessment
//!
//! Users answer yes/no questions grouped into sections; the engine turns the
//! answers into per-section scores, a yes/no tally and recommendations for
//! every practice answered "no".
//!
//! # Architecture
//!
//! - **catalog**: static sections and questions, each question with its gap description
//! - **engine**: answer set, scoring, recommendations
//! - **report**: view model, terminal rendering, JSON export
//! - **repl** / **cli**: interactive questionnaire and command-line surface

pub mod catalog;
pub mod engine;
pub mod errors;
pub mod report;

// Re-export commonly used types
pub use catalog::{Catalog, Question, Section};
pub use engine::{Answer, AssessmentSession, SectionScore, Tally};
pub use errors::{AssessmentError, Result};
pub use report::Report;

// Interface layer
pub mod cli;
pub mod repl;
pub mod telemetry;
