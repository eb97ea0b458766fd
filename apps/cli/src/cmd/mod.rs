//! CLI argument parsing and subcommand dispatch.

use acore::Language;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod config;
pub mod develop;
pub mod search;

/// Ink & Atlas — an illustrated map of literary landmarks.
#[derive(Parser, Debug)]
#[command(name = "atlas", about = "Ink & Atlas literary landmark search")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Display language.
    #[arg(long, global = true, default_value = "zh")]
    pub lang: Language,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search a city for literary landmarks.
    Search {
        /// City name.
        city: String,
        /// Show the detail panel for the n-th landmark (1-based), with
        /// grounded place data when the Gemini provider is active.
        #[arg(long)]
        detail: Option<usize>,
    },
    /// Manage provider settings.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigCommand,
    },
    /// Age a photograph with the darkroom filter.
    Develop {
        /// Path to the source image.
        image: PathBuf,
        /// Editing instruction.
        #[arg(long, default_value = "Add a sepia vintage filter and scratch marks.")]
        prompt: String,
        /// Output path. Defaults to `<image>-developed.png`.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Settings management subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the stored settings blob.
    Show,
    /// Set a settings field and save the whole blob.
    Set {
        /// Field: provider, gemini-key, openai-key or deepseek-key.
        key: String,
        /// New value.
        value: String,
    },
}

impl Cli {
    /// Dispatch the parsed command.
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Search { ref city, detail } => search::run(city, self.lang, detail).await,
            Command::Config { ref action } => config::run(action),
            Command::Develop {
                ref image,
                ref prompt,
                ref out,
            } => develop::run(image, prompt, out.as_deref()).await,
        }
    }
}
