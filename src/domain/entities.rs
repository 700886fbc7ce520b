//! Domain entities. Pure data structures for the core business.
//!
//! No markdown or IO types here; adapters map into these. A record is
//! built once per run and never mutated afterwards.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// `[...]` brackets plus the bare template tokens for dates and times.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]|YYYY-MM-DD|HH:MM").expect("placeholder regex"));

/// True when `text` still carries an unfilled template token.
pub fn has_placeholder(text: &str) -> bool {
    PLACEHOLDER.is_match(text)
}

/// A raw field value as written in the notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(String);

impl FieldValue {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty or placeholder-bearing values count as missing.
    pub fn is_unfilled(&self) -> bool {
        self.0.is_empty() || has_placeholder(&self.0)
    }

    pub fn is_filled(&self) -> bool {
        !self.is_unfilled()
    }
}

/// The six required metadata fields, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataField {
    Title,
    Date,
    Time,
    Location,
    Chair,
    Recorder,
}

impl MetadataField {
    pub const ALL: [MetadataField; 6] = [
        Self::Title,
        Self::Date,
        Self::Time,
        Self::Location,
        Self::Chair,
        Self::Recorder,
    ];

    /// Stable locator key, independent of language.
    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Date => "date",
            Self::Time => "time",
            Self::Location => "location",
            Self::Chair => "chair",
            Self::Recorder => "recorder",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Title => 0,
            Self::Date => 1,
            Self::Time => 2,
            Self::Location => 3,
            Self::Chair => 4,
            Self::Recorder => 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<FieldValue>,
    pub date: Option<FieldValue>,
    pub time: Option<FieldValue>,
    pub location: Option<FieldValue>,
    pub chair: Option<FieldValue>,
    pub recorder: Option<FieldValue>,
}

impl Metadata {
    pub fn get(&self, field: MetadataField) -> Option<&FieldValue> {
        match field {
            MetadataField::Title => self.title.as_ref(),
            MetadataField::Date => self.date.as_ref(),
            MetadataField::Time => self.time.as_ref(),
            MetadataField::Location => self.location.as_ref(),
            MetadataField::Chair => self.chair.as_ref(),
            MetadataField::Recorder => self.recorder.as_ref(),
        }
    }
}

/// Optional "Next Meeting" block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextMeeting {
    pub date: Option<FieldValue>,
    pub time: Option<FieldValue>,
    pub location: Option<FieldValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub name: FieldValue,
    pub title: Option<FieldValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    OnLeave,
    Absent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendees {
    pub present: Vec<Attendee>,
    pub on_leave: Vec<Attendee>,
    pub absent: Vec<Attendee>,
}

impl Attendees {
    /// present ∪ on-leave ∪ absent, in document order per list.
    pub fn all(&self) -> impl Iterator<Item = &Attendee> {
        self.present
            .iter()
            .chain(self.on_leave.iter())
            .chain(self.absent.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub description: String,
    pub owner: Option<FieldValue>,
    pub due: Option<FieldValue>,
    pub done: bool,
}

impl ActionItem {
    /// Owner value split into individual names (`A、B`, `A, B`, `A / B`).
    pub fn owner_names(&self) -> Vec<&str> {
        match &self.owner {
            Some(owner) if owner.is_filled() => owner
                .as_str()
                .split(['、', ',', '，', '/', '&'])
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub discussion: Vec<String>,
    pub decisions: Vec<String>,
    pub action_items: Vec<ActionItem>,
}

/// Top-level template sections. `NextMeeting` is optional and not required by R7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Metadata,
    Attendees,
    Agenda,
    Summary,
    NextMeeting,
}

impl Section {
    pub const REQUIRED: [Section; 4] = [
        Self::Metadata,
        Self::Attendees,
        Self::Agenda,
        Self::Summary,
    ];
}

/// Parsed meeting notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub metadata: Metadata,
    pub attendees: Attendees,
    pub agenda: Vec<String>,
    pub topics: Vec<Topic>,
    pub next_meeting: Option<NextMeeting>,
    /// Sections recognized in the source text, in first-seen order.
    pub sections_found: Vec<Section>,
}

impl MeetingRecord {
    pub fn has_section(&self, section: Section) -> bool {
        self.sections_found.contains(&section)
    }

    /// Every textual field, in document order. One segment per field.
    pub fn rendered_segments(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut push = |s: &str| {
            let s = s.trim();
            if !s.is_empty() {
                out.push(s.to_string());
            }
        };

        for field in MetadataField::ALL {
            if let Some(v) = self.metadata.get(field) {
                push(v.as_str());
            }
        }
        for a in self.attendees.all() {
            push(a.name.as_str());
            if let Some(t) = &a.title {
                push(t.as_str());
            }
        }
        for item in &self.agenda {
            push(item);
        }
        for topic in &self.topics {
            push(&topic.title);
            for d in &topic.discussion {
                push(d);
            }
            for d in &topic.decisions {
                push(d);
            }
            for a in &topic.action_items {
                push(&a.description);
                if let Some(o) = &a.owner {
                    push(o.as_str());
                }
                if let Some(d) = &a.due {
                    push(d.as_str());
                }
            }
        }
        if let Some(next) = &self.next_meeting {
            for v in [&next.date, &next.time, &next.location].into_iter().flatten() {
                push(v.as_str());
            }
        }
        out
    }

    /// All textual fields joined into one searchable text.
    pub fn rendered_text(&self) -> String {
        self.rendered_segments().join("\n")
    }
}

/// Glossary tag. Only person names and terms are carried as facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermCategory {
    Person,
    Term,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub canonical: String,
    pub category: TermCategory,
    /// Known misspellings / transcription variants.
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glossary {
    pub entries: Vec<GlossaryEntry>,
}

impl Glossary {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactCategory {
    Person,
    Number,
    Date,
    Decision,
    Action,
    Term,
}

impl FactCategory {
    pub const ALL: [FactCategory; 6] = [
        Self::Person,
        Self::Number,
        Self::Date,
        Self::Decision,
        Self::Action,
        Self::Term,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Number => "number",
            Self::Date => "date",
            Self::Decision => "decision",
            Self::Action => "action",
            Self::Term => "term",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Person => 0,
            Self::Number => 1,
            Self::Date => 2,
            Self::Decision => 3,
            Self::Action => 4,
            Self::Term => 5,
        }
    }
}

/// A key fact expected to survive summarization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub category: FactCategory,
    /// Evidence from the transcript (context window or full sentence).
    pub snippet: String,
    /// Normalized matching key; (category, key) is unique within a fact set.
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_detection() {
        assert!(FieldValue::new("[Meeting Title]").is_unfilled());
        assert!(FieldValue::new("[會議名稱]").is_unfilled());
        assert!(FieldValue::new("YYYY-MM-DD").is_unfilled());
        assert!(FieldValue::new("HH:MM - HH:MM").is_unfilled());
        assert!(FieldValue::new("   ").is_unfilled());
        assert!(FieldValue::new("Q1 Planning").is_filled());
    }

    #[test]
    fn test_owner_names_split() {
        let item = ActionItem {
            description: "x".into(),
            owner: Some(FieldValue::new("王小明、李小華 / Bob")),
            due: None,
            done: false,
        };
        assert_eq!(item.owner_names(), vec!["王小明", "李小華", "Bob"]);

        let placeholder = ActionItem {
            owner: Some(FieldValue::new("[Name]")),
            ..item
        };
        assert!(placeholder.owner_names().is_empty());
    }

    #[test]
    fn test_rendered_segments_document_order() {
        let record = MeetingRecord {
            metadata: Metadata {
                title: Some(FieldValue::new("Weekly Sync")),
                ..Default::default()
            },
            attendees: Attendees {
                present: vec![Attendee {
                    name: FieldValue::new("Alice"),
                    title: Some(FieldValue::new("PM")),
                }],
                ..Default::default()
            },
            agenda: vec!["Budget".into()],
            topics: vec![Topic {
                title: "Budget".into(),
                discussion: vec!["costs rose 5%".into()],
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(
            record.rendered_segments(),
            vec!["Weekly Sync", "Alice", "PM", "Budget", "Budget", "costs rose 5%"]
        );
    }
}
