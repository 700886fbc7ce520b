//! Transcript coverage: which extracted facts made it into the notes.

use super::fact_extractor::{date_key, number_key, text_key};
use crate::domain::language::is_cjk;
use crate::domain::{
    Fact, FactCategory, Finding, Language, MeetingRecord, Messages, RuleId, Severity, fill,
    lexicon,
};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageThresholds {
    /// Ratio at or above which a category passes.
    pub pass: f64,
    /// Ratio at or above which a category warns instead of failing.
    pub warn: f64,
    /// Share of a sentence fact's tokens a notes segment must contain.
    pub overlap: f64,
}

impl Default for CoverageThresholds {
    fn default() -> Self {
        Self {
            pass: 0.80,
            warn: 0.50,
            overlap: 0.5,
        }
    }
}

/// Lowercase ASCII words plus CJK bigrams (a lone ideograph stands for itself).
pub fn tokens(text: &str) -> HashSet<String> {
    let mut out = HashSet::new();
    let mut word = String::new();
    let mut run: Vec<char> = Vec::new();

    fn flush_run(run: &mut Vec<char>, out: &mut HashSet<String>) {
        match run.len() {
            0 => {}
            1 => {
                out.insert(run[0].to_string());
            }
            _ => {
                for pair in run.windows(2) {
                    out.insert(pair.iter().collect());
                }
            }
        }
        run.clear();
    }

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            flush_run(&mut run, &mut out);
            word.push(c.to_ascii_lowercase());
        } else if is_cjk(c) {
            if !word.is_empty() {
                out.insert(std::mem::take(&mut word));
            }
            run.push(c);
        } else {
            if !word.is_empty() {
                out.insert(std::mem::take(&mut word));
            }
            flush_run(&mut run, &mut out);
        }
    }
    if !word.is_empty() {
        out.insert(word);
    }
    flush_run(&mut run, &mut out);
    out
}

/// Normalized views of the rendered notes, built once per check.
struct RenderedNotes {
    text: String,
    numbers: String,
    dates: String,
    segments: Vec<HashSet<String>>,
}

impl RenderedNotes {
    fn new(record: &MeetingRecord) -> Self {
        let segments = record.rendered_segments();
        let joined = segments.join("\n");
        Self {
            text: text_key(&joined),
            numbers: number_key(&joined),
            dates: date_key(&joined),
            segments: segments.iter().map(|s| tokens(s)).collect(),
        }
    }

    fn contains(&self, fact: &Fact, overlap: f64) -> bool {
        if fact.key.is_empty() {
            return true;
        }
        match fact.category {
            FactCategory::Person | FactCategory::Term => self.text.contains(&fact.key),
            FactCategory::Number => self.numbers.contains(&fact.key),
            FactCategory::Date => self.dates.contains(&fact.key),
            FactCategory::Decision | FactCategory::Action => {
                let wanted = tokens(&fact.snippet);
                if wanted.is_empty() {
                    return self.text.contains(&fact.key);
                }
                self.segments.iter().any(|seg| {
                    let shared = wanted.iter().filter(|t| seg.contains(*t)).count();
                    shared as f64 / wanted.len() as f64 >= overlap
                })
            }
        }
    }
}

fn rule_for(category: FactCategory) -> RuleId {
    match category {
        FactCategory::Person => RuleId::CoveragePerson,
        FactCategory::Number => RuleId::CoverageNumber,
        FactCategory::Date => RuleId::CoverageDate,
        FactCategory::Decision => RuleId::CoverageDecision,
        FactCategory::Action => RuleId::CoverageAction,
        FactCategory::Term => RuleId::CoverageTerm,
    }
}

pub struct CoverageChecker {
    messages: &'static Messages,
    thresholds: CoverageThresholds,
}

impl CoverageChecker {
    pub fn new(language: Language, thresholds: CoverageThresholds) -> Self {
        Self {
            messages: &lexicon(language).messages,
            thresholds,
        }
    }

    fn severity(&self, matched: usize, total: usize) -> Severity {
        if total == 0 {
            return Severity::Pass;
        }
        let ratio = matched as f64 / total as f64;
        if ratio >= self.thresholds.pass {
            Severity::Pass
        } else if ratio >= self.thresholds.warn {
            Severity::Warn
        } else {
            Severity::Error
        }
    }

    /// One finding per category, then the overall finding.
    pub fn check(&self, facts: &[Fact], record: &MeetingRecord) -> Vec<Finding> {
        let m = self.messages;
        let notes = RenderedNotes::new(record);
        let mut findings = Vec::with_capacity(FactCategory::ALL.len() + 1);
        let (mut matched_all, mut total_all) = (0usize, 0usize);

        for category in FactCategory::ALL {
            let label = m.fact_category(category);
            let of_category: Vec<&Fact> = facts.iter().filter(|f| f.category == category).collect();
            let missed: Vec<&Fact> = of_category
                .iter()
                .copied()
                .filter(|f| !notes.contains(f, self.thresholds.overlap))
                .collect();
            let total = of_category.len();
            let matched = total - missed.len();
            matched_all += matched;
            total_all += total;

            let severity = self.severity(matched, total);
            let message = if total == 0 {
                fill(m.coverage_empty, &[("category", label)])
            } else {
                let pct = percent(matched, total);
                let (matched_s, total_s) = (matched.to_string(), total.to_string());
                if missed.is_empty() {
                    fill(
                        m.coverage_ok,
                        &[
                            ("category", label),
                            ("pct", pct.as_str()),
                            ("matched", matched_s.as_str()),
                            ("total", total_s.as_str()),
                        ],
                    )
                } else {
                    let missed_list = missed
                        .iter()
                        .map(|f| m.quote(&f.snippet))
                        .collect::<Vec<_>>()
                        .join(m.list_separator);
                    fill(
                        m.coverage_missed,
                        &[
                            ("category", label),
                            ("pct", pct.as_str()),
                            ("matched", matched_s.as_str()),
                            ("total", total_s.as_str()),
                            ("missed", missed_list.as_str()),
                        ],
                    )
                }
            };
            debug!(category = category.key(), matched, total, "coverage");
            findings.push(Finding::new(severity, rule_for(category), message).at(category.key()));
        }

        let message = if total_all == 0 {
            fill(m.coverage_empty, &[("category", m.overall)])
        } else {
            fill(
                m.coverage_ok,
                &[
                    ("category", m.overall),
                    ("pct", percent(matched_all, total_all).as_str()),
                    ("matched", matched_all.to_string().as_str()),
                    ("total", total_all.to_string().as_str()),
                ],
            )
        };
        findings.push(Finding::new(
            self.severity(matched_all, total_all),
            RuleId::CoverageOverall,
            message,
        ));
        findings
    }
}

/// Whole percent, rounded down so 79.9% never reads as 80%.
fn percent(matched: usize, total: usize) -> String {
    (matched * 100 / total).to_string()
}
