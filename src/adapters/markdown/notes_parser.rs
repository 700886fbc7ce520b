//! Map meeting-notes markdown to a domain `MeetingRecord`.
//!
//! Lenient line-state machine. Headers drive transitions; label lines, bullets
//! and checkboxes are routed by the current state. Unrecognized lines are
//! no-ops. The only failure is a text with none of the required sections.

use crate::domain::{
    ActionItem, AttendanceStatus, Attendee, DomainError, FieldValue, Language, Lexicon,
    MeetingRecord, MetadataField, NextMeeting, Section, Topic, lexicons,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{0,3}(#{1,6})\s+(.*?)\s*#*\s*$").expect("header regex"));
static BULLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*+•]|\d+[.)、])\s+(.*?)\s*$").expect("bullet regex")
});
static CHECKBOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([ xX])\]\s*(.*)$").expect("checkbox regex"));
static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*{0,2}\s*([^:：*\[\]|]{1,40}?)\s*\*{0,2}\s*[:：]\s*\*{0,2}\s*(.*?)\s*$")
        .expect("label regex")
});
static BOLD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*\s*([^*]+?)\s*\*\*\s*[:：]?\s*$").expect("bold regex"));
static TABLE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\|?[\s:|-]+\|?$").expect("table separator regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TopicPart {
    Discussion,
    Decisions,
    Actions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    OutsideSection,
    InMetadata,
    InAttendees(AttendanceStatus),
    InAgenda,
    /// Summary section, before its first topic header.
    InSummary,
    InTopic,
    InSubsection(TopicPart),
    InNextMeeting,
}

/// Bilingual notes parser. Recognition tables are resolved once per run.
pub struct NotesParser {
    lexicons: Vec<&'static Lexicon>,
    markers: Regex,
}

impl NotesParser {
    pub fn new(language: Language) -> Self {
        let lexicons = lexicons(language);
        let markers = marker_regex(&lexicons);
        Self { lexicons, markers }
    }

    pub fn parse(&self, text: &str) -> Result<MeetingRecord, DomainError> {
        let mut record = MeetingRecord::default();
        let mut state = State::OutsideSection;
        let mut in_comment = false;

        for raw in text.lines() {
            let line = raw.trim();
            if in_comment {
                in_comment = !line.contains("-->");
                continue;
            }
            if line.starts_with("<!--") {
                in_comment = !line.contains("-->");
                continue;
            }
            if line.is_empty() || is_rule(line) {
                continue;
            }
            state = match HEADER.captures(raw) {
                Some(caps) => self.on_header(&mut record, state, caps[1].len(), caps[2].trim()),
                None => self.on_line(&mut record, state, line),
            };
        }

        if !Section::REQUIRED.iter().any(|s| record.has_section(*s)) {
            return Err(DomainError::Parse(
                "no recognizable top-level section (meeting information, attendees, agenda, summary)"
                    .to_string(),
            ));
        }

        debug!(
            sections = record.sections_found.len(),
            attendees = record.attendees.all().count(),
            agenda = record.agenda.len(),
            topics = record.topics.len(),
            "parsed meeting notes"
        );
        Ok(record)
    }

    fn on_header(
        &self,
        record: &mut MeetingRecord,
        state: State,
        level: usize,
        title: &str,
    ) -> State {
        if level == 1 {
            // Document title; only a bare section name opens a section.
            return match self.top_level_section(title) {
                Some(section) if self.is_exact_section(title, section) => {
                    enter_section(record, section)
                }
                _ => State::OutsideSection,
            };
        }
        if level == 2 {
            return match self.top_level_section(title) {
                Some(section) => enter_section(record, section),
                None => State::OutsideSection,
            };
        }

        match state {
            State::InAttendees(_) => match self.attendance(title) {
                Some(status) => State::InAttendees(status),
                None => state,
            },
            State::InSummary | State::InTopic | State::InSubsection(_) => {
                if self.top_level_section(title) == Some(Section::NextMeeting) {
                    return enter_section(record, Section::NextMeeting);
                }
                if level == 3 {
                    record.topics.push(Topic {
                        title: strip_bold(title),
                        ..Default::default()
                    });
                    return State::InTopic;
                }
                if state == State::InSummary {
                    return state;
                }
                match self.topic_part(title) {
                    Some(part) => State::InSubsection(part),
                    None => state,
                }
            }
            _ => match self.top_level_section(title) {
                Some(section) => enter_section(record, section),
                None => state,
            },
        }
    }

    fn on_line(&self, record: &mut MeetingRecord, state: State, line: &str) -> State {
        let bullet = BULLET.captures(line);
        let is_bullet = bullet.is_some();
        let content = bullet
            .as_ref()
            .and_then(|c| c.get(1))
            .map_or(line, |m| m.as_str());

        match state {
            State::OutsideSection | State::InMetadata => {
                if let Some((label, value)) = label_value(content) {
                    if let Some(field) = self.metadata_field(&label) {
                        set_once(metadata_slot(record, field), value);
                    }
                }
                state
            }
            State::InNextMeeting => {
                if let Some((label, value)) = label_value(content) {
                    let next = record.next_meeting.get_or_insert_with(NextMeeting::default);
                    match self.metadata_field(&label) {
                        Some(MetadataField::Date) => set_once(&mut next.date, value),
                        Some(MetadataField::Time) => set_once(&mut next.time, value),
                        Some(MetadataField::Location) => set_once(&mut next.location, value),
                        _ => {}
                    }
                }
                state
            }
            State::InAttendees(status) => self.on_attendee_line(record, status, content, is_bullet),
            State::InAgenda => {
                if is_bullet {
                    let item = strip_bold(content);
                    if !item.is_empty() {
                        record.agenda.push(item);
                    }
                }
                state
            }
            State::InSummary => state,
            State::InTopic | State::InSubsection(_) => {
                self.on_topic_line(record, state, content, is_bullet)
            }
        }
    }

    fn on_attendee_line(
        &self,
        record: &mut MeetingRecord,
        status: AttendanceStatus,
        content: &str,
        is_bullet: bool,
    ) -> State {
        if let Some(caps) = BOLD_LINE.captures(content) {
            if let Some(next) = self.attendance(&caps[1]) {
                return State::InAttendees(next);
            }
        }
        if let Some((label, value)) = label_value(content) {
            if let Some(next) = self.attendance(&label) {
                let list = attendee_list(record, next);
                for name in value.split([',', '，', '、', ';', '；']) {
                    if let Some(attendee) = parse_attendee(name) {
                        list.push(attendee);
                    }
                }
                return State::InAttendees(next);
            }
        }
        if is_bullet {
            if let Some(attendee) = parse_attendee(content) {
                attendee_list(record, status).push(attendee);
            }
        }
        State::InAttendees(status)
    }

    fn on_topic_line(
        &self,
        record: &mut MeetingRecord,
        state: State,
        content: &str,
        is_bullet: bool,
    ) -> State {
        let Some(topic) = record.topics.last_mut() else {
            return state;
        };

        if let Some(caps) = CHECKBOX.captures(content) {
            let done = caps[1].eq_ignore_ascii_case("x");
            topic.action_items.push(self.parse_action(&caps[2], done));
            return state;
        }

        if let Some(caps) = BOLD_LINE.captures(content) {
            if let Some(part) = self.topic_part(&caps[1]) {
                return State::InSubsection(part);
            }
        }
        if let Some((label, value)) = label_value(content) {
            if let Some(part) = self.exact_topic_part(&label) {
                if !value.is_empty() {
                    push_part(topic, part, &value, self);
                }
                return State::InSubsection(part);
            }
        }

        let part = match state {
            State::InSubsection(part) => part,
            _ => TopicPart::Discussion,
        };
        if part == TopicPart::Actions && !is_bullet {
            return state;
        }
        push_part(topic, part, content, self);
        state
    }

    /// Splits a checkbox body into description / owner / due around the markers.
    fn parse_action(&self, body: &str, done: bool) -> ActionItem {
        let mut owner = None;
        let mut due = None;
        let hits: Vec<_> = self.markers.captures_iter(body).collect();

        let desc_end = hits
            .first()
            .and_then(|c| c.get(0))
            .map_or(body.len(), |m| m.start());
        let description = strip_bold(body[..desc_end].trim_end_matches(is_separator));

        for (i, caps) in hits.iter().enumerate() {
            let Some(whole) = caps.get(0) else { continue };
            let value_end = hits
                .get(i + 1)
                .and_then(|c| c.get(0))
                .map_or(body.len(), |m| m.start());
            let value = strip_bold(body[whole.end()..value_end].trim_matches(is_value_separator));
            if value.is_empty() {
                continue;
            }
            if caps.name("owner").is_some() {
                owner.get_or_insert_with(|| FieldValue::new(value));
            } else if caps.name("due").is_some() {
                due.get_or_insert_with(|| FieldValue::new(value));
            }
        }

        ActionItem {
            description,
            owner,
            due,
            done,
        }
    }

    fn top_level_section(&self, title: &str) -> Option<Section> {
        let t = title.to_lowercase();
        let hit = |pick: fn(&Lexicon) -> &'static [&'static str]| {
            self.lexicons
                .iter()
                .any(|lx| pick(lx).iter().any(|h| t.contains(h)))
        };
        // Next Meeting first: its header text may contain other synonyms.
        if hit(|lx| lx.next_meeting_headers) {
            Some(Section::NextMeeting)
        } else if hit(|lx| lx.metadata_headers) {
            Some(Section::Metadata)
        } else if hit(|lx| lx.attendee_headers) {
            Some(Section::Attendees)
        } else if hit(|lx| lx.agenda_headers) {
            Some(Section::Agenda)
        } else if hit(|lx| lx.summary_headers) {
            Some(Section::Summary)
        } else {
            None
        }
    }

    fn attendance(&self, title: &str) -> Option<AttendanceStatus> {
        let t = strip_bold(title).to_lowercase();
        let hit = |pick: fn(&Lexicon) -> &'static [&'static str]| {
            self.lexicons
                .iter()
                .any(|lx| pick(lx).iter().any(|h| t.contains(h)))
        };
        if hit(|lx| lx.absent_headers) {
            Some(AttendanceStatus::Absent)
        } else if hit(|lx| lx.on_leave_headers) {
            Some(AttendanceStatus::OnLeave)
        } else if hit(|lx| lx.present_headers) {
            Some(AttendanceStatus::Present)
        } else {
            None
        }
    }

    fn topic_part(&self, title: &str) -> Option<TopicPart> {
        let t = strip_bold(title).to_lowercase();
        let hit = |pick: fn(&Lexicon) -> &'static [&'static str]| {
            self.lexicons
                .iter()
                .any(|lx| pick(lx).iter().any(|h| t.contains(h)))
        };
        if hit(|lx| lx.action_headers) {
            Some(TopicPart::Actions)
        } else if hit(|lx| lx.decision_headers) {
            Some(TopicPart::Decisions)
        } else if hit(|lx| lx.discussion_headers) {
            Some(TopicPart::Discussion)
        } else {
            None
        }
    }

    /// Inline `Label: value` switches only on a whole subsection name.
    fn exact_topic_part(&self, label: &str) -> Option<TopicPart> {
        let l = strip_bold(label).to_lowercase();
        let is = |pick: fn(&Lexicon) -> &'static [&'static str]| {
            self.lexicons.iter().any(|lx| pick(lx).iter().any(|h| *h == l))
        };
        if is(|lx| lx.action_headers) {
            Some(TopicPart::Actions)
        } else if is(|lx| lx.decision_headers) {
            Some(TopicPart::Decisions)
        } else if is(|lx| lx.discussion_headers) {
            Some(TopicPart::Discussion)
        } else {
            None
        }
    }

    fn is_exact_section(&self, title: &str, section: Section) -> bool {
        let t = strip_bold(title).to_lowercase();
        self.lexicons.iter().any(|lx| {
            let synonyms = match section {
                Section::Metadata => lx.metadata_headers,
                Section::Attendees => lx.attendee_headers,
                Section::Agenda => lx.agenda_headers,
                Section::Summary => lx.summary_headers,
                Section::NextMeeting => lx.next_meeting_headers,
            };
            synonyms.iter().any(|h| *h == t)
        })
    }

    fn metadata_field(&self, label: &str) -> Option<MetadataField> {
        let l = label.trim().to_lowercase();
        self.lexicons.iter().find_map(|lx| {
            MetadataField::ALL
                .into_iter()
                .find(|f| lx.field_labels[f.index()].iter().any(|s| *s == l))
        })
    }
}

fn enter_section(record: &mut MeetingRecord, section: Section) -> State {
    if !record.sections_found.contains(&section) {
        record.sections_found.push(section);
    }
    match section {
        Section::Metadata => State::InMetadata,
        Section::Attendees => State::InAttendees(AttendanceStatus::Present),
        Section::Agenda => State::InAgenda,
        Section::Summary => State::InSummary,
        Section::NextMeeting => {
            record.next_meeting.get_or_insert_with(NextMeeting::default);
            State::InNextMeeting
        }
    }
}

fn push_part(topic: &mut Topic, part: TopicPart, text: &str, parser: &NotesParser) {
    match part {
        TopicPart::Actions => topic.action_items.push(parser.parse_action(text, false)),
        TopicPart::Discussion | TopicPart::Decisions => {
            let text = strip_bold(text);
            if text.is_empty() {
                return;
            }
            if part == TopicPart::Discussion {
                topic.discussion.push(text);
            } else {
                topic.decisions.push(text);
            }
        }
    }
}

fn metadata_slot(record: &mut MeetingRecord, field: MetadataField) -> &mut Option<FieldValue> {
    let m = &mut record.metadata;
    match field {
        MetadataField::Title => &mut m.title,
        MetadataField::Date => &mut m.date,
        MetadataField::Time => &mut m.time,
        MetadataField::Location => &mut m.location,
        MetadataField::Chair => &mut m.chair,
        MetadataField::Recorder => &mut m.recorder,
    }
}

fn attendee_list(record: &mut MeetingRecord, status: AttendanceStatus) -> &mut Vec<Attendee> {
    match status {
        AttendanceStatus::Present => &mut record.attendees.present,
        AttendanceStatus::OnLeave => &mut record.attendees.on_leave,
        AttendanceStatus::Absent => &mut record.attendees.absent,
    }
}

/// First value wins; later duplicates are ignored.
fn set_once(slot: &mut Option<FieldValue>, value: String) {
    if slot.is_none() {
        *slot = Some(FieldValue::new(value));
    }
}

/// `label: value`, bold-label and table-row forms. Label is returned unbolded.
fn label_value(content: &str) -> Option<(String, String)> {
    if content.starts_with('|') {
        if TABLE_SEPARATOR.is_match(content) {
            return None;
        }
        let cells: Vec<&str> = content
            .trim_matches('|')
            .split('|')
            .map(str::trim)
            .collect();
        if cells.len() >= 2 {
            return Some((strip_bold(cells[0]), strip_bold(cells[1])));
        }
        return None;
    }
    LABEL
        .captures(content)
        .map(|c| (strip_bold(&c[1]), strip_bold(&c[2])))
}

/// `Name - Title`, `Name (Title)`, `Name｜Title`, `Name: Title`, `Name，Title`.
fn parse_attendee(text: &str) -> Option<Attendee> {
    let text = strip_bold(text);
    let cut = [" - ", " – ", " — ", "（", "(", "｜", "|", "：", ":", "，", ","]
        .iter()
        .filter_map(|sep| text.find(sep).map(|i| (i, sep.len())))
        .min_by_key(|(i, _)| *i);
    let (name, title) = match cut {
        Some((i, len)) => (
            text[..i].trim(),
            Some(text[i + len..].trim_matches(|c: char| c.is_whitespace() || c == ')' || c == '）')),
        ),
        None => (text.trim(), None),
    };
    if name.is_empty() {
        return None;
    }
    Some(Attendee {
        name: FieldValue::new(name),
        title: title.filter(|t| !t.is_empty()).map(FieldValue::new),
    })
}

fn marker_regex(lexicons: &[&'static Lexicon]) -> Regex {
    let alternation = |pick: fn(&Lexicon) -> &'static [&'static str]| {
        let mut words: Vec<&str> = lexicons.iter().flat_map(|lx| pick(lx).iter().copied()).collect();
        // Longest first so `due date` wins over `due`.
        words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        words.dedup();
        words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|")
    };
    let pattern = format!(
        r"(?i)(?:(?P<owner>{})|(?P<due>{}))\s*\**\s*[:：]\s*\**",
        alternation(|lx| lx.owner_markers),
        alternation(|lx| lx.due_markers),
    );
    Regex::new(&pattern).expect("marker alternation is built from escaped literals")
}

fn strip_bold(text: &str) -> String {
    text.replace("**", "").replace("__", "").trim().to_string()
}

fn is_rule(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == '-' || c == '*' || c == '_' || c == ' ')
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || "-–—|,，;；(（*".contains(c)
}

fn is_value_separator(c: char) -> bool {
    is_separator(c) || c == ')' || c == '）'
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZH_NOTES: &str = "\
# 會議紀錄

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
- 李小華（工程師）
### 請假人員
- 陳大同
### 缺席人員
- [姓名]

## 會議議程
1. 預算檢討
2. 上線時程

## 會議內容摘要
### 議題一：預算檢討
**討論重點**
- 第一季支出超出 5%
**決議事項**
- 同意追加預算
**待辦事項**
- [ ] 補充預算表 - 負責人: 李小華 - 期限: 2026-02-01
- [x] 通知財務 負責人：王小明 期限：2026-01-30

### 議題二：上線時程
#### 討論重點
- 測試尚未完成

## 下次會議
- **日期**: 2026-02-02
";

    fn parse(text: &str) -> MeetingRecord {
        NotesParser::new(Language::ZhTw).parse(text).unwrap()
    }

    #[test]
    fn test_parse_zh_template() {
        let r = parse(ZH_NOTES);
        assert_eq!(r.metadata.title.as_ref().unwrap().as_str(), "產品週會");
        assert_eq!(r.metadata.recorder.as_ref().unwrap().as_str(), "李小華");
        assert_eq!(
            r.sections_found,
            vec![
                Section::Metadata,
                Section::Attendees,
                Section::Agenda,
                Section::Summary,
                Section::NextMeeting
            ]
        );
        assert_eq!(r.attendees.present.len(), 2);
        assert_eq!(r.attendees.present[0].name.as_str(), "王小明");
        assert_eq!(r.attendees.present[0].title.as_ref().unwrap().as_str(), "產品經理");
        assert_eq!(r.attendees.present[1].name.as_str(), "李小華");
        assert_eq!(r.attendees.on_leave[0].name.as_str(), "陳大同");
        assert!(r.attendees.absent[0].name.is_unfilled());
        assert_eq!(r.agenda, vec!["預算檢討", "上線時程"]);
        assert_eq!(r.topics.len(), 2);

        let t = &r.topics[0];
        assert_eq!(t.title, "議題一：預算檢討");
        assert_eq!(t.discussion, vec!["第一季支出超出 5%"]);
        assert_eq!(t.decisions, vec!["同意追加預算"]);
        assert_eq!(t.action_items.len(), 2);
        assert_eq!(t.action_items[0].description, "補充預算表");
        assert_eq!(t.action_items[0].owner.as_ref().unwrap().as_str(), "李小華");
        assert_eq!(t.action_items[0].due.as_ref().unwrap().as_str(), "2026-02-01");
        assert!(!t.action_items[0].done);
        assert!(t.action_items[1].done);
        assert_eq!(t.action_items[1].owner.as_ref().unwrap().as_str(), "王小明");
        assert_eq!(t.action_items[1].due.as_ref().unwrap().as_str(), "2026-01-30");

        assert_eq!(r.topics[1].discussion, vec!["測試尚未完成"]);
        let next = r.next_meeting.as_ref().unwrap();
        assert_eq!(next.date.as_ref().unwrap().as_str(), "2026-02-02");
    }

    #[test]
    fn test_parse_en_notes_with_inline_lists() {
        let text = "\
## Meeting Information
**Meeting Title:** Sprint Review
**Date**: 2026/01/26
| Location | Room A |
|---|---|

## Attendees
**Present**: Alice (PM), Bob
**Absent**: Carol

## Agenda
- Demo

## Meeting Summary
### Demo
- Key Discussion Points: login flow works
- Decisions: ship on Friday
- [ ] Write release notes - Owner: Bob
";
        let r = NotesParser::new(Language::En).parse(text).unwrap();
        assert_eq!(r.metadata.title.as_ref().unwrap().as_str(), "Sprint Review");
        assert_eq!(r.metadata.date.as_ref().unwrap().as_str(), "2026/01/26");
        assert_eq!(r.metadata.location.as_ref().unwrap().as_str(), "Room A");
        let present: Vec<_> = r.attendees.present.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(present, vec!["Alice", "Bob"]);
        assert_eq!(r.attendees.absent[0].name.as_str(), "Carol");

        let t = &r.topics[0];
        assert_eq!(t.discussion, vec!["login flow works"]);
        assert_eq!(t.decisions, vec!["ship on Friday"]);
        let item = &t.action_items[0];
        assert_eq!(item.description, "Write release notes");
        assert_eq!(item.owner.as_ref().unwrap().as_str(), "Bob");
        assert!(item.due.is_none());
    }

    #[test]
    fn test_parse_error_without_sections() {
        let err = NotesParser::new(Language::En)
            .parse("just some text\n- a bullet\n")
            .unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn test_missing_substructure_is_empty_not_error() {
        let r = parse("## 會議議程\n1. [議程項目一]\n");
        assert_eq!(r.sections_found, vec![Section::Agenda]);
        assert!(r.attendees.present.is_empty());
        assert!(r.topics.is_empty());
        assert_eq!(r.agenda, vec!["[議程項目一]"]);
    }

    #[test]
    fn test_comments_and_unknown_lines_are_ignored() {
        let text = "\
## Agenda
<!-- fill in
- not an item -->
- Real item
random prose line
## Random Section
- stray bullet
";
        let r = NotesParser::new(Language::En).parse(text).unwrap();
        assert_eq!(r.agenda, vec!["Real item"]);
    }

    #[test]
    fn test_attendee_fullwidth_comma_splits_title() {
        let r = parse("## 與會人員\n### 出席人員\n- 李小華，工程師\n- Bob, QA\n");
        let names: Vec<_> = r.attendees.present.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["李小華", "Bob"]);
        assert_eq!(r.attendees.present[0].title.as_ref().unwrap().as_str(), "工程師");
        assert_eq!(r.attendees.present[1].title.as_ref().unwrap().as_str(), "QA");
    }

    #[test]
    fn test_label_containing_subsection_word_stays_in_part() {
        let text = "\
## Meeting Summary
### Budget
**Key Discussion Points**
- Action items from last week: two of three closed
- Costs are on track
**Action Items**
- [ ] Send forecast - Owner: Bob - Due: 2026-02-01
";
        let r = NotesParser::new(Language::En).parse(text).unwrap();
        let t = &r.topics[0];
        assert_eq!(
            t.discussion,
            vec!["Action items from last week: two of three closed", "Costs are on track"]
        );
        assert_eq!(t.action_items.len(), 1);
        assert_eq!(t.action_items[0].description, "Send forecast");
    }

    #[test]
    fn test_document_title_is_not_a_section() {
        let r = NotesParser::new(Language::En)
            .parse("# Weekly Discussion Meeting\n## Agenda\n- Demo\n")
            .unwrap();
        assert_eq!(r.sections_found, vec![Section::Agenda]);

        let r = NotesParser::new(Language::En)
            .parse("# Agenda\n- Demo\n")
            .unwrap();
        assert_eq!(r.agenda, vec!["Demo"]);
    }

    #[test]
    fn test_action_item_without_markers_keeps_description() {
        let parser = NotesParser::new(Language::En);
        let item = parser.parse_action("Follow up with vendor", false);
        assert_eq!(item.description, "Follow up with vendor");
        assert!(item.owner.is_none());
        assert!(item.due.is_none());

        let item = parser.parse_action("**Budget** (Owner: [Name], Due Date: YYYY-MM-DD)", true);
        assert_eq!(item.description, "Budget");
        assert!(item.owner.as_ref().unwrap().is_unfilled());
        assert!(item.due.as_ref().unwrap().is_unfilled());
    }
}
