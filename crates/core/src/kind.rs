//! Provider identity tags.

use serde::{Deserialize, Serialize};

/// The AI backends that can supply landmark data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini (native generateContent API, search-grounded).
    #[default]
    Gemini,
    /// OpenAI chat completions.
    OpenAi,
    /// DeepSeek chat completions (OpenAI-compatible).
    DeepSeek,
}

impl ProviderKind {
    /// All supported providers.
    pub const ALL: [Self; 3] = [Self::Gemini, Self::OpenAi, Self::DeepSeek];

    /// The lowercase tag used in settings and landmark ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
            Self::DeepSeek => "deepseek",
        }
    }

    /// Human-readable provider name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gemini => "Gemini",
            Self::OpenAi => "OpenAI",
            Self::DeepSeek => "DeepSeek",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAi),
            "deepseek" => Ok(Self::DeepSeek),
            _ => Err(format!(
                "unknown provider '{s}' (expected gemini, openai or deepseek)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_tags_are_lowercase() {
        for kind in ProviderKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: ProviderKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn parse_rejects_unknown_provider() {
        assert!("claude".parse::<ProviderKind>().is_err());
    }
}
