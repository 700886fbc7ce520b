//! Per-language constant tables: header synonyms, field labels, extraction
//! keywords and message templates.
//!
//! Recognition consults every table (notes and transcripts mix scripts);
//! messages come from the selected language only. Adding a language means
//! adding a `Lexicon` and a `Language` variant, nothing else.

use super::entities::{FactCategory, MetadataField, Section};
use super::findings::{ReportSection, Severity};
use super::language::Language;

pub struct Lexicon {
    pub language: Language,

    // Document structure. Matched case-insensitively as substrings of header text.
    pub metadata_headers: &'static [&'static str],
    pub attendee_headers: &'static [&'static str],
    pub agenda_headers: &'static [&'static str],
    pub summary_headers: &'static [&'static str],
    pub next_meeting_headers: &'static [&'static str],
    pub present_headers: &'static [&'static str],
    pub on_leave_headers: &'static [&'static str],
    pub absent_headers: &'static [&'static str],
    pub discussion_headers: &'static [&'static str],
    pub decision_headers: &'static [&'static str],
    pub action_headers: &'static [&'static str],

    /// Label synonyms per metadata field, indexed like `MetadataField::ALL`.
    /// Matched case-insensitively against the whole label.
    pub field_labels: [&'static [&'static str]; 6],
    pub owner_markers: &'static [&'static str],
    pub due_markers: &'static [&'static str],

    // Glossary shape.
    pub person_glossary_headers: &'static [&'static str],
    pub alias_markers: &'static [&'static str],

    // Transcript extraction. Regex sources, compiled case-insensitively.
    pub number_patterns: &'static [&'static str],
    pub date_patterns: &'static [&'static str],
    pub decision_keywords: &'static [&'static str],
    pub action_keywords: &'static [&'static str],

    pub messages: Messages,
}

/// Message templates. `{name}` slots are filled with [`fill`].
pub struct Messages {
    pub report_title: &'static str,
    pub file_label: &'static str,
    pub generated_label: &'static str,
    pub totals: &'static str,
    pub verdict_ok: &'static str,
    pub verdict_failed: &'static str,
    pub severity: [&'static str; 3],
    pub report_sections: [&'static str; 8],
    pub fields: [&'static str; 6],
    pub next_meeting_date: &'static str,
    pub required_sections: [&'static str; 4],
    pub fact_categories: [&'static str; 6],
    pub overall: &'static str,
    pub quote_open: &'static str,
    pub quote_close: &'static str,
    pub list_separator: &'static str,

    pub field_missing: &'static str,
    pub field_placeholder: &'static str,
    pub date_format: &'static str,
    pub no_attendees: &'static str,
    pub no_agenda: &'static str,
    pub topic_no_discussion: &'static str,
    pub topic_no_outcome: &'static str,
    pub action_no_description: &'static str,
    pub action_no_owner: &'static str,
    pub action_no_due: &'static str,
    pub action_bad_due: &'static str,
    pub missing_section: &'static str,
    pub owner_unknown: &'static str,
    pub attendee_not_in_override: &'static str,
    pub override_in_body: &'static str,
    pub override_missing: &'static str,
    pub coverage_ok: &'static str,
    pub coverage_missed: &'static str,
    pub coverage_empty: &'static str,
}

impl Messages {
    pub fn severity(&self, severity: Severity) -> &'static str {
        match severity {
            Severity::Pass => self.severity[0],
            Severity::Warn => self.severity[1],
            Severity::Error => self.severity[2],
        }
    }

    pub fn report_section(&self, section: ReportSection) -> &'static str {
        self.report_sections[section.index()]
    }

    pub fn field(&self, field: MetadataField) -> &'static str {
        self.fields[field.index()]
    }

    pub fn required_section(&self, section: Section) -> &'static str {
        match section {
            Section::Metadata => self.required_sections[0],
            Section::Attendees => self.required_sections[1],
            Section::Agenda => self.required_sections[2],
            Section::Summary | Section::NextMeeting => self.required_sections[3],
        }
    }

    pub fn fact_category(&self, category: FactCategory) -> &'static str {
        self.fact_categories[category.index()]
    }

    pub fn quote(&self, text: &str) -> String {
        format!("{}{}{}", self.quote_open, text, self.quote_close)
    }
}

/// Table for `language`.
pub fn lexicon(language: Language) -> &'static Lexicon {
    match language {
        Language::En => &EN,
        Language::ZhTw => &ZH_TW,
    }
}

/// Tables in `language.search_order()`.
pub fn lexicons(language: Language) -> Vec<&'static Lexicon> {
    language.search_order().into_iter().map(lexicon).collect()
}

/// Fills `{key}` slots in a single pass; unknown slots are kept verbatim.
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match args.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Script-neutral number patterns.
pub const COMMON_NUMBER_PATTERNS: &[&str] = &[
    r"\d+(?:\.\d+)?\s*%",
    r"(?:NT\$|US\$|USD|\$|€|£|¥)\s*\d[\d,]*(?:\.\d+)?\s*[KMBkmb萬億]?",
    r"\d{1,3}(?:,\d{3})+(?:\.\d+)?",
    r"\d{5,}",
];

/// Script-neutral calendar dates and quarters.
pub const COMMON_DATE_PATTERNS: &[&str] = &[r"\d{4}[-/.]\d{1,2}[-/.]\d{1,2}", r"Q[1-4]"];

static EN: Lexicon = Lexicon {
    language: Language::En,
    metadata_headers: &[
        "meeting information",
        "meeting info",
        "meeting details",
        "basic information",
    ],
    attendee_headers: &["attendees", "attendance", "participants"],
    agenda_headers: &["agenda"],
    summary_headers: &["meeting summary", "summary", "discussion"],
    next_meeting_headers: &["next meeting"],
    present_headers: &["present", "attended"],
    on_leave_headers: &["on leave", "excused"],
    absent_headers: &["absent"],
    discussion_headers: &["key discussion points", "discussion points", "discussion"],
    decision_headers: &["decisions", "decision", "resolutions"],
    action_headers: &["action items", "action item", "actions", "to-do", "todo"],
    field_labels: [
        &["meeting title", "title", "meeting name"],
        &["date", "meeting date"],
        &["time", "meeting time"],
        &["location", "meeting location", "venue", "place"],
        &["chairperson", "chair", "facilitator", "host"],
        &["recorder", "note taker", "notetaker", "minutes taker", "secretary"],
    ],
    owner_markers: &["owner", "assignee", "responsible"],
    due_markers: &["due date", "due", "deadline"],
    person_glossary_headers: &[
        "person names",
        "names",
        "person",
        "people",
        "persons",
        "participants",
        "english names",
        "chinese names",
    ],
    alias_markers: &["common errors", "common error", "aliases", "alias"],
    number_patterns: &[
        r"\b\d+(?:\.\d+)?\s*(?:k|m|million|billion|thousand)\b",
        r"\b\d+(?:\.\d+)?\s*(?:days?|weeks?|months?|years?|hours?|people|persons?|users?|units?|items?|dollars?)\b",
    ],
    date_patterns: &[
        r"\b(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+\d{1,2}(?:st|nd|rd|th)?\b",
        r"\b(?:next|this|last)\s+(?:week|month|quarter|monday|tuesday|wednesday|thursday|friday)\b",
        r"\b(?:tomorrow|end of (?:the )?(?:week|month|quarter))\b",
    ],
    decision_keywords: &[
        r"\bdecided\b",
        r"\bagreed\b",
        r"\bapproved\b",
        r"\bresolved\b",
        r"\brejected\b",
        r"\bconclusion\b",
    ],
    action_keywords: &[
        r"\bassigned to\b",
        r"\bresponsible for\b",
        r"\baction item\b",
        r"\bdeadline\b",
        r"\bwill follow up\b",
        r"\btake care of\b",
    ],
    messages: Messages {
        report_title: "📋 Meeting Notes Validation Report",
        file_label: "File",
        generated_label: "Generated",
        totals: "**Total**: {pass} passed, {warn} warnings, {error} errors",
        verdict_ok: "Result: OK",
        verdict_failed: "Result: FAILED",
        severity: ["PASS", "WARNING", "ERROR"],
        report_sections: [
            "Meeting Metadata",
            "Template Structure",
            "Participants",
            "Agenda",
            "Discussion",
            "Action Items",
            "Cross-Reference",
            "Transcript Coverage",
        ],
        fields: [
            "Meeting title",
            "Meeting date",
            "Meeting time",
            "Location",
            "Chairperson",
            "Recorder",
        ],
        next_meeting_date: "Next meeting date",
        required_sections: [
            "meeting information",
            "participants",
            "agenda",
            "meeting summary",
        ],
        fact_categories: ["Person", "Number", "Date", "Decision", "Action", "Term"],
        overall: "Overall",
        quote_open: "\"",
        quote_close: "\"",
        list_separator: ", ",
        field_missing: "{field} is missing",
        field_placeholder: "{field} is still a placeholder: {value}",
        date_format: "{field} must use YYYY-MM-DD, got: {value}",
        no_attendees: "No attendees listed as present (list is empty or all placeholders)",
        no_agenda: "No actual agenda items found (empty or all placeholders)",
        topic_no_discussion: "Topic {topic} has no discussion points",
        topic_no_outcome: "Topic {topic} has neither decisions nor action items",
        action_no_description: "Action item #{index} in topic {topic} has no description",
        action_no_owner: "Action item #{index} in topic {topic} has no owner",
        action_no_due: "Action item #{index} in topic {topic} has no due date",
        action_bad_due: "Action item #{index} in topic {topic}: due date must use YYYY-MM-DD, got: {value}",
        missing_section: "Missing {section} section",
        owner_unknown: "Action item owner {owner} (topic {topic}) is not in the participant list",
        attendee_not_in_override: "{name} in the notes is not in the provided participant list, please verify",
        override_in_body: "Specified participant {name} appears in the notes but is not in any attendee list",
        override_missing: "Specified participant {name} is not found in the notes",
        coverage_ok: "{category} coverage: {pct}% ({matched}/{total})",
        coverage_missed: "{category} coverage: {pct}% ({matched}/{total}); missing: {missed}",
        coverage_empty: "{category}: no facts extracted from the transcript",
    },
};

static ZH_TW: Lexicon = Lexicon {
    language: Language::ZhTw,
    metadata_headers: &["會議基本資訊", "會議資訊", "基本資訊"],
    attendee_headers: &["與會人員", "出席人員", "出席狀況"],
    agenda_headers: &["會議議程", "議程"],
    summary_headers: &["會議內容摘要", "會議內容", "會議摘要", "討論內容"],
    next_meeting_headers: &["下次會議"],
    present_headers: &["出席人員", "出席"],
    on_leave_headers: &["請假人員", "請假"],
    absent_headers: &["缺席人員", "缺席"],
    discussion_headers: &["討論重點", "討論事項", "討論"],
    decision_headers: &["決議事項", "決定事項", "決議"],
    action_headers: &["待辦事項", "行動項目", "待辦"],
    field_labels: [
        &["會議名稱", "會議主題"],
        &["會議日期", "日期"],
        &["會議時間", "時間"],
        &["會議地點", "地點"],
        &["主持人", "會議主持人"],
        &["記錄人", "紀錄人", "會議記錄人", "記錄"],
    ],
    owner_markers: &["負責人"],
    due_markers: &["截止日期", "期限", "截止"],
    person_glossary_headers: &["中文姓名", "英文姓名", "人名", "姓名"],
    alias_markers: &["常見錯誤", "別名"],
    number_patterns: &[
        r"百分之[零一二三四五六七八九十百]+",
        r"\d+(?:\.\d+)?\s*[萬億千百](?:元|塊)?",
        r"\d+(?:\.\d+)?\s*元",
        r"\d+\s*(?:個月|個人|人|天|週|周|年|季|次|件|台|組|批|份|項)",
    ],
    date_patterns: &[
        r"\d{1,2}月\d{1,2}[日號]",
        r"(?:下|上|這)(?:週|周|禮拜|星期)[一二三四五六日天]",
        r"(?:明|後|前|昨)天",
        r"(?:下|上|這)個月",
        r"第[一二三四]季",
        r"月底",
    ],
    decision_keywords: &[
        "決定", "決議", "同意", "通過", "否決", "拍板", "確認", "結論是", "最終方案",
    ],
    action_keywords: &[
        "負責",
        "截止",
        "跟進",
        r"請.{1,6}(?:處理|完成|準備|追蹤)",
        r"要在.{0,10}之前",
    ],
    messages: Messages {
        report_title: "📋 會議紀錄驗證報告",
        file_label: "檔案",
        generated_label: "產生時間",
        totals: "**總計**: {pass} 項通過, {warn} 項警告, {error} 項錯誤",
        verdict_ok: "結果: 通過",
        verdict_failed: "結果: 未通過",
        severity: ["通過", "警告", "錯誤"],
        report_sections: [
            "會議基本資訊",
            "模板結構",
            "與會人員",
            "會議議程",
            "討論內容",
            "待辦事項",
            "交叉驗證",
            "逐字稿覆蓋率",
        ],
        fields: ["會議名稱", "會議日期", "會議時間", "會議地點", "主持人", "記錄人"],
        next_meeting_date: "下次會議日期",
        required_sections: ["會議基本資訊", "與會人員", "會議議程", "會議內容摘要"],
        fact_categories: ["人名", "數字", "日期", "決策", "行動", "術語"],
        overall: "整體",
        quote_open: "「",
        quote_close: "」",
        list_separator: "、",
        field_missing: "{field}未填寫",
        field_placeholder: "{field}仍為佔位符: {value}",
        date_format: "{field}格式應為 YYYY-MM-DD，目前為: {value}",
        no_attendees: "未列出任何出席人員（清單為空或皆為佔位符）",
        no_agenda: "未找到實際議程項目（清單為空或皆為佔位符）",
        topic_no_discussion: "議題{topic}缺少討論重點",
        topic_no_outcome: "議題{topic}缺少決議事項或待辦事項",
        action_no_description: "議題{topic}的第 {index} 項待辦事項缺少內容",
        action_no_owner: "議題{topic}的第 {index} 項待辦事項缺少負責人",
        action_no_due: "議題{topic}的第 {index} 項待辦事項缺少期限",
        action_bad_due: "議題{topic}的第 {index} 項待辦事項期限格式應為 YYYY-MM-DD，目前為: {value}",
        missing_section: "缺少{section}區塊",
        owner_unknown: "待辦負責人{owner}（議題{topic}）未出現在與會人員名單中",
        attendee_not_in_override: "會議紀錄中的{name}不在指定出席名單中，請確認是否正確",
        override_in_body: "指定出席者{name}出現在內文但未列入出席人員名單",
        override_missing: "指定出席者{name}未出現在會議紀錄中",
        coverage_ok: "{category}覆蓋率: {pct}% ({matched}/{total})",
        coverage_missed: "{category}覆蓋率: {pct}% ({matched}/{total})；未記錄: {missed}",
        coverage_empty: "{category}: 逐字稿中未擷取到相關事實",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_single_pass() {
        assert_eq!(
            fill("Topic {topic} #{index}", &[("topic", "{index}"), ("index", "2")]),
            "Topic {index} #2"
        );
        assert_eq!(fill("{unknown} stays", &[]), "{unknown} stays");
        assert_eq!(fill("open { brace", &[]), "open { brace");
    }

    #[test]
    fn test_tables_are_complete_per_language() {
        for lang in Language::ALL {
            let lx = lexicon(lang);
            assert_eq!(lx.language, lang);
            assert!(lx.field_labels.iter().all(|labels| !labels.is_empty()));
            assert!(!lx.decision_keywords.is_empty());
            assert!(!lx.action_keywords.is_empty());
            assert!(lx.messages.totals.contains("{error}"));
        }
    }

    #[test]
    fn test_quote_style_follows_language() {
        assert_eq!(lexicon(Language::ZhTw).messages.quote("王小明"), "「王小明」");
        assert_eq!(lexicon(Language::En).messages.quote("Bob"), "\"Bob\"");
    }
}
