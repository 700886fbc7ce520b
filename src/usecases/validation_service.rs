//! Validation service. Runs the whole pipeline for one notes document.
//!
//! parse → structural rules → (transcript facts → coverage) → cross-reference
//! → report. All inputs are already in memory; the run is pure and
//! deterministic for a given timestamp.

use super::coverage_checker::{CoverageChecker, CoverageThresholds};
use super::cross_reference::CrossReferenceChecker;
use super::fact_extractor::FactExtractor;
use super::report_assembler::assemble;
use super::structural_validator::StructuralValidator;
use crate::adapters::markdown::{GlossaryParser, NotesParser};
use crate::domain::language::DEFAULT_CJK_RATIO;
use crate::domain::{DomainError, Glossary, Language, Report};
use tracing::{debug, info, warn};

/// Tunables. Built from `AppConfig` at the edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationSettings {
    pub thresholds: CoverageThresholds,
    /// CJK share of letters at which an unlabelled run is treated as zh_TW.
    pub cjk_ratio: f64,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            thresholds: CoverageThresholds::default(),
            cjk_ratio: DEFAULT_CJK_RATIO,
        }
    }
}

impl ValidationSettings {
    pub fn validate(&self) -> Result<(), DomainError> {
        let t = &self.thresholds;
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !in_unit(t.pass) || !in_unit(t.warn) || !in_unit(t.overlap) || !in_unit(self.cjk_ratio)
        {
            return Err(DomainError::Config(
                "thresholds and cjk_ratio must be within 0.0..=1.0".into(),
            ));
        }
        if t.warn > t.pass {
            return Err(DomainError::Config(format!(
                "warn_threshold ({}) must not exceed pass_threshold ({})",
                t.warn, t.pass
            )));
        }
        Ok(())
    }
}

/// One validation run's inputs, read in full beforehand.
#[derive(Debug, Clone, Default)]
pub struct ValidationRequest {
    /// Display name of the notes file.
    pub file: String,
    pub notes: String,
    pub transcript: Option<String>,
    pub glossary: Option<String>,
    pub participants: Option<Vec<String>>,
    /// Inferred from the notes when `None`.
    pub language: Option<Language>,
    /// RFC 3339 timestamp stamped on the report.
    pub generated_at: String,
}

pub struct ValidationService {
    settings: ValidationSettings,
}

impl ValidationService {
    pub fn new(settings: ValidationSettings) -> Self {
        Self { settings }
    }

    pub fn run(&self, req: &ValidationRequest) -> Result<Report, DomainError> {
        let language = req
            .language
            .unwrap_or_else(|| Language::detect(&req.notes, self.settings.cjk_ratio));
        info!(file = %req.file, lang = %language, "validating meeting notes");

        let record = NotesParser::new(language).parse(&req.notes)?;
        debug!(
            topics = record.topics.len(),
            agenda = record.agenda.len(),
            sections = record.sections_found.len(),
            "parsed notes"
        );

        let mut findings = StructuralValidator::new(language).validate(&record);

        match &req.transcript {
            Some(transcript) => {
                let glossary = match &req.glossary {
                    Some(text) => GlossaryParser::new(language).parse(text),
                    None => Glossary::default(),
                };
                if glossary.is_empty() {
                    warn!("no glossary entries; person and term coverage will be empty");
                }
                let facts = FactExtractor::new(language).extract(transcript, &glossary);
                info!(facts = facts.len(), "extracted transcript facts");
                findings.extend(
                    CoverageChecker::new(language, self.settings.thresholds).check(&facts, &record),
                );
            }
            None if req.glossary.is_some() => {
                warn!("glossary given without a transcript; coverage skipped");
            }
            None => {}
        }

        let overrides = req.participants.as_deref().filter(|names| !names.is_empty());
        findings.extend(CrossReferenceChecker::new(language).check(&record, overrides));

        let report = assemble(&req.file, language, &req.generated_at, findings);
        info!(
            pass = report.totals.pass,
            warn = report.totals.warn,
            error = report.totals.error,
            failed = report.failed,
            "validation complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RuleId, Severity};

    const NOTES: &str = "\
# 產品週會 會議紀錄

## 會議基本資訊
- **會議名稱**: 產品週會
- **會議日期**: 2026-01-26
- **會議時間**: 14:00 - 15:00
- **會議地點**: 301 會議室
- **主持人**: 王小明
- **記錄人**: 李小華

## 與會人員
### 出席人員
- 王小明 - 產品經理
- 李小華 - 工程師

## 會議議程
1. 預算檢討

## 會議內容摘要
### 議題一：預算檢討
**討論重點**
- 第一季支出超出 5%
**決議事項**
- 同意追加預算 200 萬
**待辦事項**
- [ ] 補充預算表 - 負責人: 李小華 - 期限: 2026-02-01
";

    const GLOSSARY: &str = "\
## 中文姓名
- 王小明 - 常見錯誤: 王曉明、王小名
- 陳大同
";

    fn request() -> ValidationRequest {
        ValidationRequest {
            file: "meeting.md".into(),
            notes: NOTES.into(),
            generated_at: "2026-01-26T16:00:00+08:00".into(),
            ..Default::default()
        }
    }

    fn run(req: &ValidationRequest) -> Report {
        ValidationService::new(ValidationSettings::default())
            .run(req)
            .unwrap()
    }

    fn count(report: &Report, rule: RuleId) -> usize {
        report.findings.iter().filter(|f| f.rule == rule).count()
    }

    #[test]
    fn test_clean_notes_pass_without_transcript() {
        let report = run(&request());
        assert_eq!(report.language, Language::ZhTw);
        assert!(report.findings.is_empty(), "{:?}", report.findings);
        assert!(!report.failed);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_scenario_slash_date() {
        let mut req = request();
        req.notes = NOTES.replace("2026-01-26", "2026/01/26");
        let report = run(&req);
        assert_eq!(count(&report, RuleId::DateFormat), 1);
        assert!(report.findings[0].message.contains("2026/01/26"));
        assert!(report.failed);

        assert_eq!(count(&run(&request()), RuleId::DateFormat), 0);
    }

    #[test]
    fn test_scenario_person_covered() {
        let mut req = request();
        req.transcript = Some("王曉明：我們先看預算。".into());
        req.glossary = Some(GLOSSARY.into());
        let report = run(&req);

        let person = report
            .findings
            .iter()
            .find(|f| f.rule == RuleId::CoveragePerson)
            .unwrap();
        assert_eq!(person.severity, Severity::Pass);
        assert!(person.message.contains("100%"));
    }

    #[test]
    fn test_scenario_uncovered_decision() {
        let mut req = request();
        req.transcript = Some("我們決定採用方案二".into());
        let report = run(&req);

        let decision = report
            .findings
            .iter()
            .find(|f| f.rule == RuleId::CoverageDecision)
            .unwrap();
        assert_ne!(decision.severity, Severity::Pass);
        assert!(decision.message.contains("我們決定採用方案二"));
    }

    #[test]
    fn test_scenario_unknown_owner() {
        let mut req = request();
        req.notes = NOTES.replace("負責人: 李小華", "負責人: 張大華");
        let report = run(&req);

        let owners: Vec<_> = report
            .findings
            .iter()
            .filter(|f| f.rule == RuleId::OwnerKnown)
            .collect();
        assert_eq!(owners.len(), 1);
        assert_eq!(owners[0].severity, Severity::Warn);
        assert!(owners[0].message.contains("張大華"));
        assert!(!report.failed);
    }

    #[test]
    fn test_scenario_placeholder_agenda() {
        let mut req = request();
        req.notes = NOTES.replace("1. 預算檢討", "1. [Agenda Item 1]");
        let report = run(&req);
        assert_eq!(count(&report, RuleId::AgendaPresent), 1);
        assert!(report.failed);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_parse_error_aborts() {
        let mut req = request();
        req.notes = "no structure at all".into();
        let err = ValidationService::new(ValidationSettings::default())
            .run(&req)
            .unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_identical_inputs_identical_report() {
        let mut req = request();
        req.transcript = Some("王曉明負責在 2026/02/01 前完成。我們同意追加 200 萬。".into());
        req.glossary = Some(GLOSSARY.into());
        req.participants = Some(vec!["王小明".into(), "李小華".into()]);

        let a = serde_json::to_string(&run(&req)).unwrap();
        let b = serde_json::to_string(&run(&req)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_repeated_alias_counts_once() {
        let mut req = request();
        req.transcript = Some("王曉明開場。王小名補充。王曉明結論。".into());
        req.glossary = Some(GLOSSARY.into());
        let report = run(&req);

        let person = report
            .findings
            .iter()
            .find(|f| f.rule == RuleId::CoveragePerson)
            .unwrap();
        assert!(person.message.contains("(1/1)"));
    }

    #[test]
    fn test_language_override_and_sections_order() {
        let mut req = request();
        req.language = Some(Language::En);
        req.notes = NOTES.replace("- 王小明 - 產品經理\n- 李小華 - 工程師\n", "");
        let report = run(&req);

        assert_eq!(report.language, Language::En);
        assert_eq!(count(&report, RuleId::AttendeesPresent), 1);
        // R8 owner 李小華 now unknown; cross-reference comes after participants.
        let idx = |rule: RuleId| report.findings.iter().position(|f| f.rule == rule).unwrap();
        assert!(idx(RuleId::AttendeesPresent) < idx(RuleId::OwnerKnown));
        assert!(report.findings[0].message.starts_with("No attendees"));
    }

    #[test]
    fn test_settings_validation() {
        assert!(ValidationSettings::default().validate().is_ok());
        let bad = ValidationSettings {
            thresholds: CoverageThresholds {
                pass: 0.4,
                warn: 0.6,
                overlap: 0.5,
            },
            ..Default::default()
        };
        assert!(matches!(bad.validate(), Err(DomainError::Config(_))));
    }
}
