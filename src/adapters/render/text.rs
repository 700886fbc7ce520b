//! Human-readable report. Markdown-flavoured, grouped by report section.

use crate::domain::{DomainError, Language, Report, ReportSection, Severity, fill, lexicon};
use crate::ports::ReportRenderer;

pub struct TextRenderer {
    language: Language,
}

impl TextRenderer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Pass => "✅",
        Severity::Warn => "⚠️",
        Severity::Error => "❌",
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &Report) -> Result<String, DomainError> {
        let msgs = &lexicon(self.language).messages;
        let mut md = String::new();

        // Header
        md.push_str(&format!("# {}\n\n", msgs.report_title));
        md.push_str(&format!(
            "**{}:** {} | **{}:** {}\n\n",
            msgs.file_label, report.file, msgs.generated_label, report.generated_at
        ));
        md.push_str("---\n\n");

        // Findings, one block per non-empty section
        let mut current: Option<ReportSection> = None;
        for finding in &report.findings {
            if current != Some(finding.section) {
                if current.is_some() {
                    md.push('\n');
                }
                md.push_str(&format!("## {}\n\n", msgs.report_section(finding.section)));
                current = Some(finding.section);
            }
            md.push_str(&format!(
                "- {} [{}] {}: {}",
                icon(finding.severity),
                msgs.severity(finding.severity),
                finding.rule,
                finding.message
            ));
            if let Some(locator) = &finding.locator {
                md.push_str(&format!(" ({})", locator));
            }
            md.push('\n');
        }
        if current.is_some() {
            md.push('\n');
        }

        // Footer
        md.push_str("---\n");
        let totals = &report.totals;
        md.push_str(&fill(
            msgs.totals,
            &[
                ("pass", totals.pass.to_string().as_str()),
                ("warn", totals.warn.to_string().as_str()),
                ("error", totals.error.to_string().as_str()),
            ],
        ));
        md.push('\n');
        md.push_str(if report.failed {
            msgs.verdict_failed
        } else {
            msgs.verdict_ok
        });
        md.push('\n');

        Ok(md)
    }
}
