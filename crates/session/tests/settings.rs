//! Tests for the persisted settings blob (JSON roundtrip, defaults).

use acore::ProviderKind;
use atlas_session::Settings;

fn sample() -> Settings {
    Settings {
        provider: ProviderKind::DeepSeek,
        gemini_key: String::new(),
        openai_key: "sk-openai".to_owned(),
        deepseek_key: "sk-deepseek".to_owned(),
    }
}

#[test]
fn save_then_load_round_trips_all_four_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let settings = sample();
    settings.save_to(&path).unwrap();
    let loaded = Settings::load_from(&path);

    // Deep equality, including the empty-string credential.
    assert_eq!(loaded, settings);
}

#[test]
fn save_writes_the_whole_blob_with_wire_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    sample().save_to(&path).unwrap();

    let blob: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(blob["provider"], "deepseek");
    assert_eq!(blob["geminiKey"], "");
    assert_eq!(blob["openaiKey"], "sk-openai");
    assert_eq!(blob["deepseekKey"], "sk-deepseek");
    assert!(
        !path.with_extension("json.tmp").exists(),
        "staging file must be renamed away"
    );
}

#[test]
fn save_creates_the_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    sample().save_to(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn missing_file_loads_the_baseline() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("absent.json"));
    assert_eq!(settings.provider, ProviderKind::Gemini);
    assert!(settings.openai_key.is_empty());
    assert!(settings.deepseek_key.is_empty());
}

#[test]
fn corrupt_file_loads_the_baseline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{not json").unwrap();
    let settings = Settings::load_from(&path);
    assert_eq!(settings.provider, ProviderKind::Gemini);
}

#[test]
fn absent_fields_default_to_empty_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"provider": "openai"}"#).unwrap();

    let settings = Settings::load_from(&path);
    assert_eq!(settings.provider, ProviderKind::OpenAi);
    assert_eq!(settings.openai_key, "");
    assert_eq!(settings.deepseek_key, "");
}

#[test]
fn credential_check_is_per_provider() {
    let mut settings = sample();
    assert!(!settings.has_key(ProviderKind::Gemini));
    assert!(settings.has_key(ProviderKind::OpenAi));
    assert!(settings.has_key(ProviderKind::DeepSeek));

    settings.set_key(ProviderKind::Gemini, "g-key");
    assert!(settings.has_key(ProviderKind::Gemini));
    assert_eq!(settings.key(ProviderKind::Gemini), "g-key");

    settings.set_key(ProviderKind::OpenAi, "   ");
    assert!(!settings.has_key(ProviderKind::OpenAi), "blank keys are unusable");
}
