//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Report};
use std::path::Path;

/// Input source. Reads whole documents; no streaming.
pub trait SourcePort {
    /// Read the full UTF-8 text at `path`. Missing/unreadable → `DomainError::Input`.
    fn read_text(&self, path: &Path) -> Result<String, DomainError>;

    /// True when `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Report output format. Every renderer carries the same fields.
pub trait ReportRenderer {
    fn render(&self, report: &Report) -> Result<String, DomainError>;
}
