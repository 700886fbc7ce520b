//! Findings and the assembled report.

use super::language::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Pass,
    Warn,
    Error,
}

/// Rule identity. Language-independent; serialized as its short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    /// Metadata field present and filled.
    #[serde(rename = "R1")]
    MetadataFilled,
    /// Date fields are `YYYY-MM-DD`.
    #[serde(rename = "R2")]
    DateFormat,
    #[serde(rename = "R3")]
    AttendeesPresent,
    #[serde(rename = "R4")]
    AgendaPresent,
    /// Topic has discussion and an outcome.
    #[serde(rename = "R5")]
    TopicComplete,
    #[serde(rename = "R6")]
    ActionItemShape,
    /// Required top-level sections exist.
    #[serde(rename = "R7")]
    SectionsPresent,
    /// Action-item owner is a known participant.
    #[serde(rename = "R8")]
    OwnerKnown,
    /// Listed attendee missing from the override list.
    #[serde(rename = "R9")]
    AttendeeNotInOverride,
    /// Override name missing from the attendee lists.
    #[serde(rename = "R10")]
    OverrideNotRecorded,
    #[serde(rename = "COV-PERSON")]
    CoveragePerson,
    #[serde(rename = "COV-NUMBER")]
    CoverageNumber,
    #[serde(rename = "COV-DATE")]
    CoverageDate,
    #[serde(rename = "COV-DECISION")]
    CoverageDecision,
    #[serde(rename = "COV-ACTION")]
    CoverageAction,
    #[serde(rename = "COV-TERM")]
    CoverageTerm,
    #[serde(rename = "COV-OVERALL")]
    CoverageOverall,
}

impl RuleId {
    pub fn code(self) -> &'static str {
        match self {
            Self::MetadataFilled => "R1",
            Self::DateFormat => "R2",
            Self::AttendeesPresent => "R3",
            Self::AgendaPresent => "R4",
            Self::TopicComplete => "R5",
            Self::ActionItemShape => "R6",
            Self::SectionsPresent => "R7",
            Self::OwnerKnown => "R8",
            Self::AttendeeNotInOverride => "R9",
            Self::OverrideNotRecorded => "R10",
            Self::CoveragePerson => "COV-PERSON",
            Self::CoverageNumber => "COV-NUMBER",
            Self::CoverageDate => "COV-DATE",
            Self::CoverageDecision => "COV-DECISION",
            Self::CoverageAction => "COV-ACTION",
            Self::CoverageTerm => "COV-TERM",
            Self::CoverageOverall => "COV-OVERALL",
        }
    }

    /// Report section a rule's findings are grouped under.
    pub fn section(self) -> ReportSection {
        match self {
            Self::MetadataFilled | Self::DateFormat => ReportSection::Metadata,
            Self::SectionsPresent => ReportSection::Structure,
            Self::AttendeesPresent => ReportSection::Participants,
            Self::AgendaPresent => ReportSection::Agenda,
            Self::TopicComplete => ReportSection::Discussion,
            Self::ActionItemShape => ReportSection::ActionItems,
            Self::OwnerKnown | Self::AttendeeNotInOverride | Self::OverrideNotRecorded => {
                ReportSection::CrossReference
            }
            Self::CoveragePerson
            | Self::CoverageNumber
            | Self::CoverageDate
            | Self::CoverageDecision
            | Self::CoverageAction
            | Self::CoverageTerm
            | Self::CoverageOverall => ReportSection::Coverage,
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Report grouping; declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSection {
    Metadata,
    Structure,
    Participants,
    Agenda,
    Discussion,
    ActionItems,
    CrossReference,
    Coverage,
}

impl ReportSection {
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// One validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub rule: RuleId,
    pub section: ReportSection,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locator: Option<String>,
}

impl Finding {
    pub fn new(severity: Severity, rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            severity,
            rule,
            section: rule.section(),
            message: message.into(),
            locator: None,
        }
    }

    pub fn error(rule: RuleId, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, rule, message)
    }

    pub fn warn(rule: RuleId, message: impl Into<String>) -> Self {
        Self::new(Severity::Warn, rule, message)
    }

    pub fn at(mut self, locator: impl Into<String>) -> Self {
        self.locator = Some(locator.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub pass: usize,
    pub warn: usize,
    pub error: usize,
}

/// Final, ordered validation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub file: String,
    pub language: Language,
    pub generated_at: String,
    pub totals: Totals,
    pub failed: bool,
    pub findings: Vec<Finding>,
}

impl Report {
    /// 1 when any error finding exists, 0 otherwise.
    pub fn exit_code(&self) -> u8 {
        u8::from(self.failed)
    }
}
