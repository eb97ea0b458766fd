//! Reply normalization shared by the adapters.

use acore::{Landmark, ProviderKind, SearchError};
use compact_str::format_compact;

/// Remove markdown code-fence markers from a chat-completion reply.
///
/// Chat backends routinely wrap the payload in ```json fences despite the
/// raw-JSON instruction.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_owned()
}

/// Parse a provider payload into landmark records and check the record
/// invariant on each. Malformed JSON or an invalid record is a hard error,
/// never a silent drop.
pub fn parse_landmarks(provider: ProviderKind, payload: &str) -> Result<Vec<Landmark>, SearchError> {
    let records: Vec<Landmark> =
        serde_json::from_str(payload).map_err(|e| SearchError::Malformed {
            provider,
            reason: e.to_string(),
        })?;
    for record in &records {
        record.validate(provider)?;
    }
    Ok(records)
}

/// Assign caller-owned identity and cover placeholders to a fresh result set.
///
/// Adapters never set `id` or `coverUrl`; duplicates across the set are kept
/// verbatim.
pub fn assign_identities(records: &mut [Landmark], provider: ProviderKind, city: &str) {
    for (index, record) in records.iter_mut().enumerate() {
        record.id = format_compact!("ai-{provider}-{city}-{index}");
        record.cover_url = Some(format!(
            "https://picsum.photos/200/300?random={}",
            index + 100
        ));
    }
}
