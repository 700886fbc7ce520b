//! Participant override list: a file (one name per line) or an inline list.

use crate::domain::DomainError;
use crate::ports::SourcePort;
use std::path::Path;
use tracing::{info, warn};

/// Resolves `arg` to a name list.
///
/// An existing file is read line by line: blank lines and `#` comments are
/// skipped, a leading `- ` is stripped. Anything else is treated as an inline
/// list split on `,`, `，` and `、`. Duplicates are dropped, order kept.
pub fn load_participants(arg: &str, source: &dyn SourcePort) -> Result<Vec<String>, DomainError> {
    let path = Path::new(arg);
    let names = if source.is_file(path) {
        let text = source.read_text(path)?;
        let names = parse_list_file(&text);
        info!(path = %path.display(), count = names.len(), "loaded participant list");
        names
    } else {
        parse_inline(arg)
    };

    if names.is_empty() {
        warn!("participant override given but no names could be parsed");
    }
    Ok(dedup(names))
}

fn parse_list_file(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| l.trim_start_matches(['-', '*']).trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

fn parse_inline(arg: &str) -> Vec<String> {
    arg.split([',', '，', '、'])
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

fn dedup(names: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for n in names {
        if !out.contains(&n) {
            out.push(n);
        }
    }
    out
}
