//! Error types for the maturity assessment engine
//!
//! Library code returns [`AssessmentError`]; the binary and REPL glue wrap
//! it in `anyhow` with context.

use thiserror::Error;

/// Main error type for catalog, engine and configuration operations
#[derive(Error, Debug)]
pub enum AssessmentError {
    /// Answer addressed to a question outside the catalog
    ///
    /// Fields are 0-based; the message shows the 1-based position users type.
    #[error("Question {}.{} is outside the catalog", .section + 1, .question + 1)]
    OutOfRange { section: usize, question: usize },

    /// Answers can no longer change once the report is generated
    #[error("Assessment already submitted; answers are frozen")]
    AlreadySubmitted,

    /// Catalog sections must contain at least one question
    #[error("Section '{title}' has no questions")]
    EmptySection { title: String },

    /// Catalog must contain at least one section
    #[error("Catalog has no sections")]
    EmptyCatalog,

    /// Catalog file errors
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// Answers file errors
    #[error("Answers error: {0}")]
    AnswersError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("Assessment error: {0}")]
    Generic(String),
}

/// Result type alias for assessment operations
pub type Result<T> = std::result::Result<T, AssessmentError>;

/// Convert anyhow errors to AssessmentError
impl From<anyhow::Error> for AssessmentError {
    fn from(err: anyhow::Error) -> Self {
        AssessmentError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = AssessmentError::OutOfRange {
            section: 0,
            question: 6,
        };
        assert_eq!(err.to_string(), "Question 1.7 is outside the catalog");
    }

    #[test]
    fn test_empty_section_display() {
        let err = AssessmentError::EmptySection {
            title: "Риски проекта".to_string(),
        };
        assert!(err.to_string().contains("Риски проекта"));
    }

    #[test]
    fn test_from_anyhow() {
        let err: AssessmentError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AssessmentError::Generic(ref msg) if msg == "boom"));
    }
}
