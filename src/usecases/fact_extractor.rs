//! Transcript fact extraction.
//!
//! Glossary entries give Person/Term facts; regex tables give Number/Date
//! facts; keyword tables classify sentences into Decision/Action facts.
//! Aliases are corrected to their canonical term before sentence splitting.

use crate::domain::{
    Fact, FactCategory, Glossary, Language, Lexicon, TermCategory, lexicon::COMMON_DATE_PATTERNS,
    lexicon::COMMON_NUMBER_PATTERNS, lexicons,
};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, error};

/// Characters of context kept on each side of a glossary match.
const SNIPPET_CONTEXT: usize = 15;
const MIN_SENTENCE_CHARS: usize = 4;
const MAX_LABEL_CHARS: usize = 6;

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:\d+[.)、]|[-*•])\s+").expect("list marker regex"));
static LOOSE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("loose date regex"));

/// Lowercased with all whitespace removed. Person, Term, Decision and Action keys.
pub fn text_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// `1,200 萬` and `1200萬` share a key.
pub fn number_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, ',' | '，' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Unifies `/` and `.` separators with `-`.
pub fn date_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if matches!(c, '/' | '.') { '-' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}

/// `date_key` plus zero-padding of numeric month/day, so `2026/2/1` meets `2026-02-01`.
fn padded_date_key(text: &str) -> String {
    let key = date_key(text);
    match LOOSE_DATE.captures(&key) {
        Some(c) => format!("{}-{:0>2}-{:0>2}", &c[1], &c[2], &c[3]),
        None => key,
    }
}

fn alternation(patterns: impl IntoIterator<Item = &'static str>) -> Option<Regex> {
    let joined = patterns
        .into_iter()
        .map(|p| format!("(?:{})", p))
        .collect::<Vec<_>>()
        .join("|");
    if joined.is_empty() {
        return None;
    }
    match Regex::new(&format!("(?i){}", joined)) {
        Ok(re) => Some(re),
        Err(e) => {
            // Tables are static; a bad entry disables the category instead of the run.
            error!(error = %e, "invalid extraction pattern");
            None
        }
    }
}

fn merged(
    tables: &[&'static Lexicon],
    pick: fn(&Lexicon) -> &'static [&'static str],
) -> Vec<&'static str> {
    tables.iter().flat_map(|lx| pick(*lx).iter().copied()).collect()
}

pub struct FactExtractor {
    number: Option<Regex>,
    date: Option<Regex>,
    decision: Option<Regex>,
    action: Option<Regex>,
}

impl FactExtractor {
    /// Tables of every language are merged; the selected one comes first.
    pub fn new(language: Language) -> Self {
        let tables = lexicons(language);
        Self {
            number: alternation(
                COMMON_NUMBER_PATTERNS
                    .iter()
                    .copied()
                    .chain(merged(&tables, |lx| lx.number_patterns)),
            ),
            date: alternation(
                COMMON_DATE_PATTERNS
                    .iter()
                    .copied()
                    .chain(merged(&tables, |lx| lx.date_patterns)),
            ),
            decision: alternation(merged(&tables, |lx| lx.decision_keywords)),
            action: alternation(merged(&tables, |lx| lx.action_keywords)),
        }
    }

    pub fn extract(&self, transcript: &str, glossary: &Glossary) -> Vec<Fact> {
        let mut facts = Vec::new();
        facts.extend(self.glossary_facts(transcript, glossary));

        let corrected = correct_aliases(transcript, glossary);
        if let Some(re) = &self.number {
            facts.extend(re.find_iter(&corrected).map(|m| Fact {
                category: FactCategory::Number,
                snippet: m.as_str().trim().to_string(),
                key: number_key(m.as_str()),
            }));
        }
        if let Some(re) = &self.date {
            facts.extend(re.find_iter(&corrected).map(|m| Fact {
                category: FactCategory::Date,
                snippet: m.as_str().trim().to_string(),
                key: padded_date_key(m.as_str()),
            }));
        }

        for sentence in sentences(&corrected) {
            for (category, re) in [
                (FactCategory::Decision, &self.decision),
                (FactCategory::Action, &self.action),
            ] {
                if re.as_ref().is_some_and(|re| re.is_match(&sentence)) {
                    facts.push(Fact {
                        category,
                        key: text_key(&sentence),
                        snippet: sentence.clone(),
                    });
                }
            }
        }

        let facts = dedupe(facts);
        debug!(facts = facts.len(), "extracted transcript facts");
        facts
    }

    /// One fact per glossary entry found (canonical or alias), in glossary order.
    fn glossary_facts(&self, transcript: &str, glossary: &Glossary) -> Vec<Fact> {
        let haystack = transcript.to_lowercase();
        let mut out = Vec::new();
        for entry in &glossary.entries {
            let canonical = entry.canonical.trim();
            if canonical.is_empty() {
                continue;
            }
            let first = std::iter::once(canonical)
                .chain(entry.aliases.iter().map(|a| a.trim()))
                .filter(|v| !v.is_empty())
                .filter_map(|v| {
                    let needle = v.to_lowercase();
                    haystack.find(&needle).map(|pos| (pos, needle.len()))
                })
                .min();
            let Some((pos, len)) = first else {
                continue;
            };
            let category = match entry.category {
                TermCategory::Person => FactCategory::Person,
                TermCategory::Term => FactCategory::Term,
            };
            out.push(Fact {
                category,
                snippet: context_window(&haystack, transcript, pos, len),
                key: text_key(canonical),
            });
        }
        out
    }
}

/// Window around a match found in `lowered`, cut from `original` when the
/// lowercase copy kept byte offsets aligned.
fn context_window(lowered: &str, original: &str, pos: usize, len: usize) -> String {
    let aligned = lowered.len() == original.len()
        && original.is_char_boundary(pos)
        && original.is_char_boundary(pos + len);
    let source = if aligned {
        original
    } else {
        lowered
    };
    let before: String = {
        let head: Vec<char> = source[..pos].chars().rev().take(SNIPPET_CONTEXT).collect();
        head.into_iter().rev().collect()
    };
    let matched = &source[pos..pos + len];
    let after: String = source[pos + len..].chars().take(SNIPPET_CONTEXT).collect();
    format!("{}{}{}", before, matched, after)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rewrites every alias occurrence to its canonical term. Longest match
/// wins at each position; existing canonical spellings are left alone.
pub fn correct_aliases(text: &str, glossary: &Glossary) -> String {
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    let mut has_alias = false;
    for entry in &glossary.entries {
        let canonical = entry.canonical.trim();
        if canonical.is_empty() {
            continue;
        }
        pairs.push((canonical, canonical));
        for alias in &entry.aliases {
            let alias = alias.trim();
            if !alias.is_empty() && alias != canonical {
                pairs.push((alias, canonical));
                has_alias = true;
            }
        }
    }
    if !has_alias {
        return text.to_string();
    }
    pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'scan: while let Some(c) = rest.chars().next() {
        for (from, to) in &pairs {
            if rest.starts_with(from) {
                out.push_str(to);
                rest = &rest[from.len()..];
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Splits on either script's terminators and newlines. `.` ends a sentence
/// only before whitespace or end of text, so `3.5` and `v1.2` survive.
pub fn sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.lines() {
        let line = LIST_MARKER.replace(line, "");
        let mut current = String::new();
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            let ends = match c {
                '。' | '！' | '？' | '!' | '?' | '；' | ';' => true,
                '.' => chars.peek().is_none_or(|n| n.is_whitespace()),
                _ => false,
            };
            current.push(c);
            if ends {
                push_sentence(&mut out, &current);
                current.clear();
            }
        }
        push_sentence(&mut out, &current);
    }
    out
}

fn push_sentence(out: &mut Vec<String>, raw: &str) {
    let s = raw.trim();
    let count = s.chars().count();
    if count < MIN_SENTENCE_CHARS {
        return;
    }
    if count <= MAX_LABEL_CHARS && (s.ends_with(':') || s.ends_with('：')) {
        return;
    }
    out.push(s.to_string());
}

/// Collapses facts sharing (category, key): longest snippet wins, first-seen order kept.
fn dedupe(facts: Vec<Fact>) -> Vec<Fact> {
    let mut index: HashMap<(FactCategory, String), usize> = HashMap::new();
    let mut out: Vec<Fact> = Vec::with_capacity(facts.len());
    for fact in facts {
        match index.get(&(fact.category, fact.key.clone())) {
            Some(&i) => {
                if fact.snippet.chars().count() > out[i].snippet.chars().count() {
                    out[i].snippet = fact.snippet;
                }
            }
            None => {
                index.insert((fact.category, fact.key.clone()), out.len());
                out.push(fact);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GlossaryEntry;

    fn glossary() -> Glossary {
        Glossary {
            entries: vec![
                GlossaryEntry {
                    canonical: "王小明".into(),
                    category: TermCategory::Person,
                    aliases: vec!["王曉明".into(), "王小名".into()],
                },
                GlossaryEntry {
                    canonical: "Kubernetes".into(),
                    category: TermCategory::Term,
                    aliases: vec!["酷伯內提斯".into()],
                },
                GlossaryEntry {
                    canonical: "陳大同".into(),
                    category: TermCategory::Person,
                    aliases: vec![],
                },
            ],
        }
    }

    fn of(facts: &[Fact], category: FactCategory) -> Vec<&Fact> {
        facts.iter().filter(|f| f.category == category).collect()
    }

    #[test]
    fn test_alias_repeated_yields_one_fact() {
        let transcript = "王曉明說預算不夠。王小名補充說明。王曉明再次確認。";
        let facts = FactExtractor::new(Language::ZhTw).extract(transcript, &glossary());
        let people = of(&facts, FactCategory::Person);
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].key, "王小明");
        assert!(people[0].snippet.starts_with("王曉明"));
    }

    #[test]
    fn test_absent_glossary_entry_yields_no_fact() {
        let facts = FactExtractor::new(Language::ZhTw).extract("王小明主持會議。", &glossary());
        assert!(facts.iter().all(|f| f.key != "陳大同"));
        assert!(of(&facts, FactCategory::Term).is_empty());
    }

    #[test]
    fn test_decision_sentence_quotes_corrected_name() {
        let transcript = "好，那我們決定採用方案二。\n王曉明負責在 2026/2/1 前交付報價。";
        let facts = FactExtractor::new(Language::ZhTw).extract(transcript, &glossary());

        let decisions = of(&facts, FactCategory::Decision);
        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].snippet, "好，那我們決定採用方案二。");

        let actions = of(&facts, FactCategory::Action);
        assert_eq!(actions.len(), 1);
        assert!(actions[0].snippet.starts_with("王小明負責"));

        let dates = of(&facts, FactCategory::Date);
        assert_eq!(dates[0].key, "2026-02-01");
    }

    #[test]
    fn test_numbers_normalize_punctuation() {
        let transcript = "Revenue grew 12.5 % to $1,200,000 and we hired 3 people.";
        let facts = FactExtractor::new(Language::En).extract(transcript, &Glossary::default());
        let keys: Vec<_> = of(&facts, FactCategory::Number)
            .iter()
            .map(|f| f.key.clone())
            .collect();
        assert_eq!(keys, vec!["12.5%", "$1200000", "3people"]);
    }

    #[test]
    fn test_english_keywords_and_relative_dates() {
        let transcript = "1. We agreed to ship next week.\nDave was assigned to the migration. Okay.";
        let facts = FactExtractor::new(Language::En).extract(transcript, &Glossary::default());
        assert_eq!(
            of(&facts, FactCategory::Decision)[0].snippet,
            "We agreed to ship next week."
        );
        assert_eq!(
            of(&facts, FactCategory::Action)[0].snippet,
            "Dave was assigned to the migration."
        );
        assert_eq!(of(&facts, FactCategory::Date)[0].key, "nextweek");
    }

    #[test]
    fn test_sentence_split_rules() {
        let s = sentences("王小明：\n版本 v1.2 已上線。確認 3.5 版;ok\n- 第二點：內容較長的句子");
        assert_eq!(s, vec!["版本 v1.2 已上線。", "確認 3.5 版;", "第二點：內容較長的句子"]);
    }

    #[test]
    fn test_correct_aliases_keeps_canonical() {
        let g = Glossary {
            entries: vec![GlossaryEntry {
                canonical: "王小明".into(),
                category: TermCategory::Person,
                aliases: vec!["小明".into()],
            }],
        };
        assert_eq!(correct_aliases("王小明和小明", &g), "王小明和王小明");
    }

    #[test]
    fn test_dedupe_keeps_longest_snippet() {
        let facts = dedupe(vec![
            Fact {
                category: FactCategory::Number,
                snippet: "5%".into(),
                key: "5%".into(),
            },
            Fact {
                category: FactCategory::Number,
                snippet: "5 %".into(),
                key: "5%".into(),
            },
        ]);
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].snippet, "5 %");
    }
}
