//! JSON export of a finished report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::errors::Result;
use crate::report::Report;

/// Report stamped with an id and generation time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub report: Report,
}

impl ExportedReport {
    pub fn new(report: Report) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            report,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write JSON to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, self.to_json()?)?;
        tracing::info!(path = %path.display(), id = %self.id, "report exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AssessmentSession;
    use tempfile::TempDir;

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reports").join("report.json");

        let mut session = AssessmentSession::with_builtin();
        session.record_answer(0, 3, false).unwrap();
        session.submit();

        let exported = ExportedReport::new(Report::build(&session));
        exported.save(&path).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        let loaded: ExportedReport = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.id, exported.id);
        assert_eq!(loaded.report, exported.report);
        assert!(loaded.report.recommendations[0].contains("контроля версий"));
    }

    #[test]
    fn test_json_contains_metadata() {
        let exported = ExportedReport::new(Report::build(&AssessmentSession::with_builtin()));
        let json = exported.to_json().unwrap();
        assert!(json.contains("\"generated_at\""));
        assert!(json.contains(&exported.id.to_string()));
    }

    #[test]
    fn test_save_to_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let exported = ExportedReport::new(Report::build(&AssessmentSession::with_builtin()));
        assert!(matches!(
            exported.save(&blocker.join("report.json")),
            Err(crate::errors::AssessmentError::IoError(_))
        ));
    }
}
