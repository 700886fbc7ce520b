//! Orders findings into report sections and computes totals.

use crate::domain::{Finding, Language, Report, Severity, Totals};

pub fn assemble(
    file: impl Into<String>,
    language: Language,
    generated_at: impl Into<String>,
    mut findings: Vec<Finding>,
) -> Report {
    // Stable: rule order within a section is kept.
    findings.sort_by_key(|f| f.section.index());

    let mut totals = Totals::default();
    for f in &findings {
        match f.severity {
            Severity::Pass => totals.pass += 1,
            Severity::Warn => totals.warn += 1,
            Severity::Error => totals.error += 1,
        }
    }

    Report {
        file: file.into(),
        language,
        generated_at: generated_at.into(),
        failed: totals.error > 0,
        totals,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ReportSection, RuleId};

    #[test]
    fn test_fixed_section_order_and_totals() {
        let findings = vec![
            Finding::new(Severity::Pass, RuleId::CoverageOverall, "overall"),
            Finding::warn(RuleId::OwnerKnown, "owner"),
            Finding::error(RuleId::AgendaPresent, "agenda"),
            Finding::error(RuleId::SectionsPresent, "structure"),
            Finding::error(RuleId::MetadataFilled, "title"),
            Finding::error(RuleId::DateFormat, "date"),
        ];
        let report = assemble("notes.md", Language::En, "t", findings);

        let sections: Vec<_> = report.findings.iter().map(|f| f.section).collect();
        assert_eq!(
            sections,
            vec![
                ReportSection::Metadata,
                ReportSection::Metadata,
                ReportSection::Structure,
                ReportSection::Agenda,
                ReportSection::CrossReference,
                ReportSection::Coverage,
            ]
        );
        assert_eq!(report.findings[0].message, "title");
        assert_eq!(report.totals, Totals { pass: 1, warn: 1, error: 4 });
        assert!(report.failed);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_warnings_alone_do_not_fail() {
        let report = assemble(
            "notes.md",
            Language::En,
            "t",
            vec![Finding::warn(RuleId::OwnerKnown, "owner")],
        );
        assert!(!report.failed);
        assert_eq!(report.exit_code(), 0);
    }
}
