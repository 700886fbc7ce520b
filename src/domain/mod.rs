//! Core domain layer. No external I/O dependencies.
//!
//! Entities, findings and the per-language tables live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod findings;
pub mod language;
pub mod lexicon;

pub use entities::{
    ActionItem, AttendanceStatus, Attendee, Attendees, Fact, FactCategory, FieldValue, Glossary,
    GlossaryEntry, MeetingRecord, Metadata, MetadataField, NextMeeting, Section, TermCategory,
    Topic, has_placeholder,
};
pub use errors::DomainError;
pub use findings::{Finding, Report, ReportSection, RuleId, Severity, Totals};
pub use language::Language;
pub use lexicon::{Lexicon, Messages, fill, lexicon, lexicons};
