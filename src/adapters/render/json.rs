//! Structured report. Same fields as the text form, serialized with serde_json.

use crate::domain::{DomainError, Report};
use crate::ports::ReportRenderer;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &Report) -> Result<String, DomainError> {
        serde_json::to_string_pretty(report)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| DomainError::Render(format!("JSON serialization failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Finding, Language, RuleId, Totals};

    #[test]
    fn test_json_carries_codes_and_totals() {
        let report = Report {
            file: "會議.md".into(),
            language: Language::ZhTw,
            generated_at: "2026-01-26T09:00:00+00:00".into(),
            totals: Totals {
                pass: 0,
                warn: 0,
                error: 1,
            },
            failed: true,
            findings: vec![Finding::error(RuleId::AgendaPresent, "未找到實際議程項目")],
        };

        let out = JsonRenderer::new().render(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["language"], "zh_TW");
        assert_eq!(value["failed"], true);
        assert_eq!(value["totals"]["error"], 1);
        assert_eq!(value["findings"][0]["rule"], "R4");
        assert_eq!(value["findings"][0]["severity"], "error");
        assert_eq!(value["findings"][0]["section"], "agenda");
        assert!(value["findings"][0].get("locator").is_none());

        let back: Report = serde_json::from_str(&out).unwrap();
        assert_eq!(back, report);
    }
}
