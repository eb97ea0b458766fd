//! Persisted AI settings: the selected provider and one credential per
//! provider.
//!
//! Stored as a single JSON blob at `~/.config/ink-atlas/settings.json`.
//! Loading a missing or corrupt file yields the baseline configuration;
//! saving always writes the whole object (temp file + rename, no partial or
//! merge writes). Absent fields deserialize to the empty string so future
//! additions stay compatible.

use acore::ProviderKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The active provider selection plus per-provider credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// The selected provider.
    #[serde(default)]
    pub provider: ProviderKind,
    /// Gemini API key.
    #[serde(default)]
    pub gemini_key: String,
    /// OpenAI API key.
    #[serde(default)]
    pub openai_key: String,
    /// DeepSeek API key.
    #[serde(default)]
    pub deepseek_key: String,
}

impl Default for Settings {
    /// Baseline configuration: Gemini selected, its key seeded from the
    /// `GEMINI_API_KEY` environment variable, other credentials empty.
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            gemini_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            openai_key: String::new(),
            deepseek_key: String::new(),
        }
    }
}

impl Settings {
    /// The credential for a provider.
    pub fn key(&self, kind: ProviderKind) -> &str {
        match kind {
            ProviderKind::Gemini => &self.gemini_key,
            ProviderKind::OpenAi => &self.openai_key,
            ProviderKind::DeepSeek => &self.deepseek_key,
        }
    }

    /// Whether a usable credential is configured for a provider. The check
    /// is per provider: each requires its own non-blank credential.
    pub fn has_key(&self, kind: ProviderKind) -> bool {
        !self.key(kind).trim().is_empty()
    }

    /// Replace the credential for a provider.
    pub fn set_key(&mut self, kind: ProviderKind, value: impl Into<String>) {
        let slot = match kind {
            ProviderKind::Gemini => &mut self.gemini_key,
            ProviderKind::OpenAi => &mut self.openai_key,
            ProviderKind::DeepSeek => &mut self.deepseek_key,
        };
        *slot = value.into();
    }

    /// Default path: `~/.config/ink-atlas/settings.json`.
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("ink-atlas")
            .join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load settings from a path, falling back to the baseline when the file
    /// is missing or corrupt.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("corrupt settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save the whole blob to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    /// Save the whole blob to a path, atomically (temp file + rename).
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        let staging = path.with_extension("json.tmp");
        std::fs::write(&staging, contents)
            .with_context(|| format!("writing {}", staging.display()))?;
        std::fs::rename(&staging, path).with_context(|| format!("replacing {}", path.display()))?;
        Ok(())
    }
}
