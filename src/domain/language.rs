//! Output / recognition language.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default CJK share above which notes are treated as zh_TW.
pub const DEFAULT_CJK_RATIO: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh_TW")]
    ZhTw,
}

impl Language {
    pub const ALL: [Language; 2] = [Self::En, Self::ZhTw];

    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhTw => "zh_TW",
        }
    }

    /// `self` first, then every other language. Recognition tables are
    /// consulted in this order so the selected language wins ties.
    pub fn search_order(self) -> Vec<Language> {
        let mut order = vec![self];
        order.extend(Self::ALL.into_iter().filter(|l| *l != self));
        order
    }

    /// Infers the language from the share of CJK ideographs among letters.
    pub fn detect(text: &str, cjk_ratio: f64) -> Self {
        let (mut cjk, mut latin) = (0usize, 0usize);
        for c in text.chars() {
            if is_cjk(c) {
                cjk += 1;
            } else if c.is_ascii_alphabetic() {
                latin += 1;
            }
        }
        let letters = cjk + latin;
        if letters > 0 && cjk as f64 / letters as f64 >= cjk_ratio {
            Self::ZhTw
        } else {
            Self::En
        }
    }
}

/// CJK unified ideographs (basic, extension A, compatibility).
pub fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}' | '\u{3400}'..='\u{4dbf}' | '\u{f900}'..='\u{faff}')
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "en" | "en_us" | "en_gb" | "english" => Ok(Self::En),
            "zh_tw" | "zh" | "zh_hant" => Ok(Self::ZhTw),
            other => Err(format!("unsupported language `{other}` (expected en or zh_TW)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language() {
        assert_eq!(
            Language::detect("## 會議基本資訊\n- **會議名稱**: 週會", DEFAULT_CJK_RATIO),
            Language::ZhTw
        );
        assert_eq!(
            Language::detect("## Meeting Information\n- **Date**: 2026-01-26", DEFAULT_CJK_RATIO),
            Language::En
        );
        assert_eq!(Language::detect("", DEFAULT_CJK_RATIO), Language::En);
    }

    #[test]
    fn test_parse_language_tag() {
        assert_eq!("zh_TW".parse::<Language>(), Ok(Language::ZhTw));
        assert_eq!("zh-tw".parse::<Language>(), Ok(Language::ZhTw));
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_search_order_puts_selected_first() {
        assert_eq!(Language::ZhTw.search_order(), vec![Language::ZhTw, Language::En]);
        assert_eq!(Language::En.search_order(), vec![Language::En, Language::ZhTw]);
    }
}
