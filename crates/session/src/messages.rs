//! User-facing notification strings, bilingual where they reach the reader.

use acore::Language;

/// No-data outcome for a search that returned an empty list.
pub fn not_found(city: &str, language: Language) -> String {
    match language {
        Language::En => format!("Could not find literary secrets in \"{city}\"."),
        Language::Zh => format!("在 \"{city}\" 未找到文学秘密。"),
    }
}

/// Non-fatal warning shown when a provider failed and the offline archive
/// was loaded in its place.
pub fn fallback_warning(reason: &str) -> String {
    format!("AI Search failed: {reason}\nLoaded offline archives instead.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_bilingual() {
        assert_eq!(
            not_found("Atlantis", Language::En),
            "Could not find literary secrets in \"Atlantis\"."
        );
        assert_eq!(
            not_found("Atlantis", Language::Zh),
            "在 \"Atlantis\" 未找到文学秘密。"
        );
    }

    #[test]
    fn fallback_warning_combines_reason_and_archive_note() {
        let warning = fallback_warning("Gemini search failed. Please check your API key.");
        assert!(warning.starts_with("AI Search failed: Gemini search failed."));
        assert!(warning.ends_with("Loaded offline archives instead."));
    }
}
