//! Structural rules R1–R7 over a parsed record.
//!
//! Every rule runs; only failures are reported. The record is never touched.

use crate::domain::{
    FieldValue, Finding, Language, MeetingRecord, Messages, MetadataField, RuleId, Section, fill,
    has_placeholder, lexicon,
};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("iso date regex"));

/// `YYYY-MM-DD` and a real calendar day.
pub fn is_iso_date(value: &str) -> bool {
    ISO_DATE.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

fn is_real_text(text: &str) -> bool {
    let t = text.trim();
    !t.is_empty() && !has_placeholder(t)
}

pub struct StructuralValidator {
    messages: &'static Messages,
}

impl StructuralValidator {
    pub fn new(language: Language) -> Self {
        Self {
            messages: &lexicon(language).messages,
        }
    }

    pub fn validate(&self, record: &MeetingRecord) -> Vec<Finding> {
        let mut findings = Vec::new();
        self.check_metadata(record, &mut findings);
        self.check_dates(record, &mut findings);
        self.check_sections(record, &mut findings);
        self.check_attendees(record, &mut findings);
        self.check_agenda(record, &mut findings);
        self.check_topics(record, &mut findings);
        self.check_action_items(record, &mut findings);
        debug!(findings = findings.len(), "structural validation done");
        findings
    }

    /// R1
    fn check_metadata(&self, record: &MeetingRecord, out: &mut Vec<Finding>) {
        let m = self.messages;
        for field in MetadataField::ALL {
            let label = m.field(field);
            let message = match record.metadata.get(field) {
                None => fill(m.field_missing, &[("field", label)]),
                Some(v) if v.as_str().is_empty() => fill(m.field_missing, &[("field", label)]),
                Some(v) if v.is_unfilled() => fill(
                    m.field_placeholder,
                    &[("field", label), ("value", m.quote(v.as_str()).as_str())],
                ),
                Some(_) => continue,
            };
            out.push(Finding::error(RuleId::MetadataFilled, message).at(field.key()));
        }
    }

    /// R2. Placeholder and absent values belong to R1.
    fn check_dates(&self, record: &MeetingRecord, out: &mut Vec<Finding>) {
        let m = self.messages;
        let next_date = record.next_meeting.as_ref().and_then(|n| n.date.as_ref());
        let candidates: [(&str, &str, Option<&FieldValue>); 2] = [
            (
                m.field(MetadataField::Date),
                MetadataField::Date.key(),
                record.metadata.get(MetadataField::Date),
            ),
            (m.next_meeting_date, "next_meeting.date", next_date),
        ];
        for (label, locator, value) in candidates {
            let Some(value) = value.filter(|v| v.is_filled()) else {
                continue;
            };
            if !is_iso_date(value.as_str()) {
                let message = fill(
                    m.date_format,
                    &[("field", label), ("value", m.quote(value.as_str()).as_str())],
                );
                out.push(Finding::error(RuleId::DateFormat, message).at(locator));
            }
        }
    }

    /// R3
    fn check_attendees(&self, record: &MeetingRecord, out: &mut Vec<Finding>) {
        if !record.attendees.present.iter().any(|a| a.name.is_filled()) {
            out.push(Finding::error(RuleId::AttendeesPresent, self.messages.no_attendees));
        }
    }

    /// R4
    fn check_agenda(&self, record: &MeetingRecord, out: &mut Vec<Finding>) {
        if !record.agenda.iter().any(|item| is_real_text(item)) {
            out.push(Finding::error(RuleId::AgendaPresent, self.messages.no_agenda));
        }
    }

    /// R5
    fn check_topics(&self, record: &MeetingRecord, out: &mut Vec<Finding>) {
        let m = self.messages;
        for topic in &record.topics {
            let quoted = m.quote(&topic.title);
            if !topic.discussion.iter().any(|d| is_real_text(d)) {
                let message = fill(m.topic_no_discussion, &[("topic", quoted.as_str())]);
                out.push(Finding::error(RuleId::TopicComplete, message).at(&topic.title));
            }
            let has_decision = topic.decisions.iter().any(|d| is_real_text(d));
            let has_action = topic
                .action_items
                .iter()
                .any(|a| is_real_text(&a.description));
            if !has_decision && !has_action {
                let message = fill(m.topic_no_outcome, &[("topic", quoted.as_str())]);
                out.push(Finding::error(RuleId::TopicComplete, message).at(&topic.title));
            }
        }
    }

    /// R6. One finding per defect, each naming topic and 1-based index.
    fn check_action_items(&self, record: &MeetingRecord, out: &mut Vec<Finding>) {
        let m = self.messages;
        for topic in &record.topics {
            let quoted = m.quote(&topic.title);
            for (i, item) in topic.action_items.iter().enumerate() {
                let index = (i + 1).to_string();
                let locator = format!("{} #{}", topic.title, index);
                let args = [("index", index.as_str()), ("topic", quoted.as_str())];

                if !is_real_text(&item.description) {
                    out.push(
                        Finding::error(RuleId::ActionItemShape, fill(m.action_no_description, &args))
                            .at(&locator),
                    );
                }
                if !item.owner.as_ref().is_some_and(FieldValue::is_filled) {
                    out.push(
                        Finding::error(RuleId::ActionItemShape, fill(m.action_no_owner, &args))
                            .at(&locator),
                    );
                }
                match item.due.as_ref().filter(|d| d.is_filled()) {
                    None => out.push(
                        Finding::error(RuleId::ActionItemShape, fill(m.action_no_due, &args))
                            .at(&locator),
                    ),
                    Some(due) if !is_iso_date(due.as_str()) => {
                        let value = m.quote(due.as_str());
                        let message = fill(
                            m.action_bad_due,
                            &[
                                ("index", index.as_str()),
                                ("topic", quoted.as_str()),
                                ("value", value.as_str()),
                            ],
                        );
                        out.push(Finding::error(RuleId::ActionItemShape, message).at(&locator));
                    }
                    Some(_) => {}
                }
            }
        }
    }

    /// R7
    fn check_sections(&self, record: &MeetingRecord, out: &mut Vec<Finding>) {
        let m = self.messages;
        for section in Section::REQUIRED {
            if !record.has_section(section) {
                let message = fill(
                    m.missing_section,
                    &[("section", m.required_section(section))],
                );
                out.push(Finding::error(RuleId::SectionsPresent, message));
            }
        }
    }
}
