//! Bilingual text handling.

use serde::{Deserialize, Serialize};

/// A display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
pub enum Language {
    /// English.
    #[serde(rename = "en")]
    En,
    /// Chinese.
    #[serde(rename = "zh")]
    #[default]
    Zh,
}

impl Language {
    /// The other language.
    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::En,
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            _ => Err(format!("unknown language '{s}' (expected 'en' or 'zh')")),
        }
    }
}

/// A pair of strings keyed by language tag.
///
/// No fallback chain beyond: requested language, else English, else empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocalizedText {
    /// The English text.
    pub en: String,
    /// The Chinese text.
    pub zh: String,
}

impl LocalizedText {
    /// Create a localized pair from both translations.
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }

    /// Text for the requested language, falling back to English.
    pub fn get(&self, lang: Language) -> &str {
        let text = match lang {
            Language::En => &self.en,
            Language::Zh => &self.zh,
        };
        if text.is_empty() { &self.en } else { text }
    }

    /// Whether both translations are blank.
    pub fn is_blank(&self) -> bool {
        self.en.trim().is_empty() && self.zh.trim().is_empty()
    }
}
