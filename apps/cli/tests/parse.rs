//! Tests for CLI argument parsing.

use acore::Language;
use atlas_cli::{Cli, Command};
use clap::Parser;

#[test]
fn search_parses_city_and_language() {
    let cli = Cli::try_parse_from(["atlas", "search", "London", "--lang", "en"]).unwrap();
    assert_eq!(cli.lang, Language::En);
    match cli.command {
        Command::Search { city, detail } => {
            assert_eq!(city, "London");
            assert!(detail.is_none());
        }
        other => panic!("expected Search, got {other:?}"),
    }
}

#[test]
fn language_defaults_to_chinese() {
    let cli = Cli::try_parse_from(["atlas", "search", "Rome"]).unwrap();
    assert_eq!(cli.lang, Language::Zh);
}

#[test]
fn search_detail_is_one_based() {
    let cli = Cli::try_parse_from(["atlas", "search", "Venice", "--detail", "1"]).unwrap();
    match cli.command {
        Command::Search { detail, .. } => assert_eq!(detail, Some(1)),
        other => panic!("expected Search, got {other:?}"),
    }
}

#[test]
fn invalid_language_is_rejected() {
    assert!(Cli::try_parse_from(["atlas", "search", "Rome", "--lang", "fr"]).is_err());
}

#[test]
fn develop_takes_prompt_and_out_overrides() {
    let cli = Cli::try_parse_from([
        "atlas", "develop", "plate.png", "--prompt", "fade it", "--out", "aged.png",
    ])
    .unwrap();
    match cli.command {
        Command::Develop { image, prompt, out } => {
            assert_eq!(image.to_str(), Some("plate.png"));
            assert_eq!(prompt, "fade it");
            assert_eq!(out.as_deref().and_then(|p| p.to_str()), Some("aged.png"));
        }
        other => panic!("expected Develop, got {other:?}"),
    }
}

#[test]
fn config_set_takes_key_and_value() {
    let cli = Cli::try_parse_from(["atlas", "config", "set", "provider", "deepseek"]).unwrap();
    match cli.command {
        Command::Config { action } => match action {
            atlas_cli::cmd::ConfigCommand::Set { key, value } => {
                assert_eq!(key, "provider");
                assert_eq!(value, "deepseek");
            }
            other => panic!("expected Set, got {other:?}"),
        },
        other => panic!("expected Config, got {other:?}"),
    }
}
