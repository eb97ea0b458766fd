//! Settings management commands: show, set.

use crate::cmd::ConfigCommand;
use anyhow::{Context, Result, bail};
use session::Settings;

/// Dispatch settings management subcommands.
pub fn run(action: &ConfigCommand) -> Result<()> {
    match action {
        ConfigCommand::Show => show(),
        ConfigCommand::Set { key, value } => set(key, value),
    }
}

fn show() -> Result<()> {
    let path = Settings::path();
    if !path.exists() {
        println!("No settings file at {} (using baseline defaults)", path.display());
        return Ok(());
    }
    let contents =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    print!("{contents}");
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut settings = Settings::load();
    match key {
        "provider" => settings.provider = value.parse().map_err(anyhow::Error::msg)?,
        "gemini-key" => settings.set_key(acore::ProviderKind::Gemini, value),
        "openai-key" => settings.set_key(acore::ProviderKind::OpenAi, value),
        "deepseek-key" => settings.set_key(acore::ProviderKind::DeepSeek, value),
        _ => bail!(
            "unknown settings key '{key}' (expected provider, gemini-key, openai-key or deepseek-key)"
        ),
    }
    settings.save()?;
    println!("Saved settings to {}", Settings::path().display());
    Ok(())
}
