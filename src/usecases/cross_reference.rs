//! Cross-reference between action-item owners, attendee lists and an
//! optional participant override.

use super::fact_extractor::text_key;
use crate::domain::{Finding, Language, MeetingRecord, Messages, RuleId, fill, lexicon};
use std::collections::HashSet;
use tracing::debug;

pub struct CrossReferenceChecker {
    messages: &'static Messages,
}

impl CrossReferenceChecker {
    pub fn new(language: Language) -> Self {
        Self {
            messages: &lexicon(language).messages,
        }
    }

    /// R8 always; R9 and R10 only when `overrides` is given. An override
    /// replaces the attendee lists as the owner universe.
    pub fn check(&self, record: &MeetingRecord, overrides: Option<&[String]>) -> Vec<Finding> {
        let m = self.messages;
        let mut findings = Vec::new();

        let attendees: Vec<&str> = record
            .attendees
            .all()
            .filter(|a| a.name.is_filled())
            .map(|a| a.name.as_str())
            .collect();
        let attendee_keys: HashSet<String> = attendees.iter().map(|n| text_key(n)).collect();
        let override_keys: Option<HashSet<String>> =
            overrides.map(|names| names.iter().map(|n| text_key(n)).collect());
        let universe = override_keys.as_ref().unwrap_or(&attendee_keys);

        // R8
        let mut flagged_owners = HashSet::new();
        for topic in &record.topics {
            for item in &topic.action_items {
                for owner in item.owner_names() {
                    let key = text_key(owner);
                    if !universe.contains(&key) {
                        flagged_owners.insert(key);
                        let message = fill(
                            m.owner_unknown,
                            &[
                                ("owner", m.quote(owner).as_str()),
                                ("topic", m.quote(&topic.title).as_str()),
                            ],
                        );
                        findings.push(Finding::warn(RuleId::OwnerKnown, message).at(&topic.title));
                    }
                }
            }
        }

        let (Some(names), Some(override_keys)) = (overrides, override_keys.as_ref()) else {
            debug!(findings = findings.len(), "cross-reference done");
            return findings;
        };

        // R9. Owners already reported by R8 are skipped.
        let mut seen = flagged_owners;
        for name in &attendees {
            let key = text_key(name);
            if !override_keys.contains(&key) && seen.insert(key) {
                let message = fill(m.attendee_not_in_override, &[("name", m.quote(name).as_str())]);
                findings.push(Finding::warn(RuleId::AttendeeNotInOverride, message).at(*name));
            }
        }

        // R10
        let body = text_key(&record.rendered_text());
        for name in names {
            let key = text_key(name);
            if key.is_empty() || attendee_keys.contains(&key) {
                continue;
            }
            let template = if body.contains(&key) {
                m.override_in_body
            } else {
                m.override_missing
            };
            let message = fill(template, &[("name", m.quote(name).as_str())]);
            findings.push(Finding::warn(RuleId::OverrideNotRecorded, message).at(name.as_str()));
        }

        debug!(findings = findings.len(), "cross-reference done");
        findings
    }
}
