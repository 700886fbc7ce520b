//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. Findings are not errors:
//! they are always collected into the report and never abort a run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// The notes text has none of the four top-level sections. Fatal; no report is produced.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A required input is missing or unreadable.
    #[error("Input error ({path}): {reason}")]
    Input { path: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl DomainError {
    pub fn input(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Process exit status for fatal errors (findings use 0/1).
    pub fn exit_code(&self) -> u8 {
        2
    }
}
