//! Implements SourcePort on the local filesystem.

use crate::domain::DomainError;
use crate::ports::SourcePort;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// Reads inputs from disk in full.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl FsSource {
    pub fn new() -> Self {
        Self
    }
}

impl SourcePort for FsSource {
    fn read_text(&self, path: &Path) -> Result<String, DomainError> {
        let shown = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DomainError::input(&shown, "file not found"),
            _ => DomainError::input(&shown, e.to_string()),
        })?;
        let text = String::from_utf8(bytes)
            .map_err(|e| DomainError::input(&shown, format!("not valid UTF-8: {}", e)))?;
        // Editors on Windows like to prepend a BOM.
        let text = text.strip_prefix('\u{feff}').map(str::to_string).unwrap_or(text);
        info!(path = %shown, bytes = text.len(), "read input");
        Ok(text)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_text_strips_bom() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all("\u{feff}## 會議議程\n".as_bytes()).unwrap();

        let text = FsSource::new().read_text(f.path()).unwrap();
        assert_eq!(text, "## 會議議程\n");
        assert!(FsSource::new().is_file(f.path()));
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.md");

        let err = FsSource::new().read_text(&missing).unwrap_err();
        assert!(matches!(err, DomainError::Input { .. }));
        assert!(!FsSource::new().is_file(&missing));
    }

    #[test]
    fn test_invalid_utf8_is_input_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let err = FsSource::new().read_text(f.path()).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }
}
