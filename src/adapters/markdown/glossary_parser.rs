//! Map glossary markdown to a domain `Glossary`.
//!
//! Shape: category headers (`## 中文姓名`, `### Technical Terms`) followed by
//! entries `- Canonical (note) - 常見錯誤: a、b`. Entries before any
//! category header are tagged by a name-shape heuristic.

use crate::domain::{
    Glossary, GlossaryEntry, Language, Lexicon, TermCategory, has_placeholder, language::is_cjk,
    lexicons,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s{0,3}(#{1,6})\s+(.*?)\s*#*\s*$").expect("header regex"));
static ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+(.+?)\s*$").expect("entry regex"));
static PAREN_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[（(][^)）]*[)）]").expect("paren regex"));
static WESTERN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+ [A-Z]").expect("western name regex"));

pub struct GlossaryParser {
    lexicons: Vec<&'static Lexicon>,
    alias_marker: Regex,
}

impl GlossaryParser {
    pub fn new(language: Language) -> Self {
        let lexicons = lexicons(language);
        let mut markers: Vec<&str> = lexicons
            .iter()
            .flat_map(|lx| lx.alias_markers.iter().copied())
            .collect();
        markers.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        markers.dedup();
        let alternation = markers
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");
        let alias_marker = Regex::new(&format!(r"(?i)\s*[-–—]?\s*(?:{alternation})\s*[:：]\s*"))
            .expect("alias marker alternation is built from escaped literals");
        Self {
            lexicons,
            alias_marker,
        }
    }

    pub fn parse(&self, text: &str) -> Glossary {
        let mut entries: Vec<GlossaryEntry> = Vec::new();
        // None until the first category header: fall back to the name heuristic.
        let mut category: Option<TermCategory> = None;

        for line in text.lines() {
            if let Some(caps) = HEADER.captures(line) {
                category = if caps[1].len() == 1 {
                    None
                } else {
                    Some(self.header_category(&caps[2]))
                };
                continue;
            }
            let Some(caps) = ENTRY.captures(line) else {
                continue;
            };
            let Some((canonical, aliases)) = self.split_entry(&caps[1]) else {
                continue;
            };
            let category = category.unwrap_or_else(|| guess_category(&canonical));

            match entries.iter_mut().find(|e| e.canonical == canonical) {
                Some(existing) => {
                    for alias in aliases {
                        if !existing.aliases.contains(&alias) {
                            existing.aliases.push(alias);
                        }
                    }
                }
                None => entries.push(GlossaryEntry {
                    canonical,
                    category,
                    aliases,
                }),
            }
        }

        debug!(entries = entries.len(), "parsed glossary");
        Glossary { entries }
    }

    fn header_category(&self, header: &str) -> TermCategory {
        let h = header.to_lowercase();
        let is_person = self
            .lexicons
            .iter()
            .any(|lx| lx.person_glossary_headers.iter().any(|p| h.contains(p)));
        if is_person {
            TermCategory::Person
        } else {
            TermCategory::Term
        }
    }

    fn split_entry(&self, body: &str) -> Option<(String, Vec<String>)> {
        let body = body.replace("**", "");
        let (head, aliases) = match self.alias_marker.find(&body) {
            Some(m) => {
                let aliases = body[m.end()..]
                    .split(['、', ',', '，', ';', '；', '/'])
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .map(str::to_string)
                    .collect();
                (&body[..m.start()], aliases)
            }
            None => (body.as_str(), Vec::new()),
        };

        let head = PAREN_NOTE.replace_all(head, "");
        let canonical = head
            .split(" - ")
            .next()
            .unwrap_or_default()
            .trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '：' || c == ':')
            .to_string();
        if canonical.is_empty() || has_placeholder(&canonical) {
            return None;
        }
        let aliases = aliases.into_iter().filter(|a| *a != canonical).collect();
        Some((canonical, aliases))
    }
}

/// 2–4 CJK characters or `Given Family` → person; otherwise a term.
fn guess_category(term: &str) -> TermCategory {
    let n = term.chars().count();
    let cjk_name = (2..=4).contains(&n) && term.chars().all(is_cjk);
    if cjk_name || WESTERN_NAME.is_match(term) {
        TermCategory::Person
    } else {
        TermCategory::Term
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLOSSARY: &str = "\
# 詞彙表

## 人名
### 中文姓名
- 王小明 (產品經理) - 常見錯誤: 王曉明、汪小明
- 張大華

### 技術術語
- Kubernetes - 常見錯誤: 酷伯內提斯, K8S
- API（應用程式介面）

## Business Terms
- ARR - Common errors: A R R
- [術語]
";

    #[test]
    fn test_parse_categories_and_aliases() {
        let g = GlossaryParser::new(Language::ZhTw).parse(GLOSSARY);
        let names: Vec<_> = g.entries.iter().map(|e| e.canonical.as_str()).collect();
        assert_eq!(names, vec!["王小明", "張大華", "Kubernetes", "API", "ARR"]);

        assert_eq!(g.entries[0].category, TermCategory::Person);
        assert_eq!(g.entries[0].aliases, vec!["王曉明", "汪小明"]);
        assert_eq!(g.entries[1].category, TermCategory::Person);
        assert!(g.entries[1].aliases.is_empty());
        assert_eq!(g.entries[2].category, TermCategory::Term);
        assert_eq!(g.entries[2].aliases, vec!["酷伯內提斯", "K8S"]);
        assert_eq!(g.entries[4].category, TermCategory::Term);
        assert_eq!(g.entries[4].aliases, vec!["A R R"]);
    }

    #[test]
    fn test_heuristic_before_any_category_header() {
        let g = GlossaryParser::new(Language::En).parse("- 李小華\n- Jane Doe\n- SLA\n");
        let cats: Vec<_> = g.entries.iter().map(|e| e.category).collect();
        assert_eq!(
            cats,
            vec![TermCategory::Person, TermCategory::Person, TermCategory::Term]
        );
    }

    #[test]
    fn test_names_header_tags_person() {
        let g = GlossaryParser::new(Language::En).parse("## Names\n- Bob - Common errors: Bop\n");
        assert_eq!(g.entries[0].category, TermCategory::Person);
        assert_eq!(g.entries[0].aliases, vec!["Bop"]);
    }

    #[test]
    fn test_duplicate_entries_merge_aliases() {
        let g = GlossaryParser::new(Language::En)
            .parse("## People\n- Bob Lee - Common errors: Bob Li\n- Bob Lee - Common errors: Bop Lee, Bob Li\n");
        assert_eq!(g.entries.len(), 1);
        assert_eq!(g.entries[0].aliases, vec!["Bob Li", "Bop Lee"]);
    }
}
