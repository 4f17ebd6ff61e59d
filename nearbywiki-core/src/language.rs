use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages offered in the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Telugu,
}

impl Language {
    /// Default language, used as the fallback when content is missing
    pub const DEFAULT: Language = Language::English;

    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Telugu];

    /// Two-letter code, used as both the wiki subdomain and the translation target
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Telugu => "te",
        }
    }

    /// Label shown in the language selector
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी (Hindi)",
            Language::Telugu => "తెలుగు (Telugu)",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|l| l.code()).collect();
            format!("unsupported language '{}' (expected one of: {})", s, known.join(", "))
        })
    }
}

/// Whether the user may pick a language, or everything is English
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LanguageSupport {
    /// Selectable language with English fallback and machine translation
    #[default]
    Multi,
    /// English only; no fallback and no translation
    EnglishOnly,
}

impl LanguageSupport {
    /// The language actually used for a request under this mode
    pub fn effective(&self, requested: Language) -> Language {
        match self {
            LanguageSupport::Multi => requested,
            LanguageSupport::EnglishOnly => Language::DEFAULT,
        }
    }

    pub fn allows_fallback(&self) -> bool {
        matches!(self, LanguageSupport::Multi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!("TE".parse::<Language>(), Ok(Language::Telugu));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert!(Language::English.is_default());
        assert!(!Language::Hindi.is_default());
    }

    #[test]
    fn test_english_only_forces_default() {
        assert_eq!(
            LanguageSupport::EnglishOnly.effective(Language::Telugu),
            Language::English
        );
        assert_eq!(LanguageSupport::Multi.effective(Language::Hindi), Language::Hindi);
        assert!(!LanguageSupport::EnglishOnly.allows_fallback());
    }
}
