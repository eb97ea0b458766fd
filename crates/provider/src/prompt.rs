//! The shared search instruction and the Gemini response schema.

use serde_json::{Value, json};

/// System instruction sent to every provider.
pub const SYSTEM_PROMPT: &str = "\
You are a literary historian and cartographer. \
Your task is to find at least 10 real-world locations in a specific city that are significantly featured in famous literature. \
Ensure the locations are real, precise, and the literary connection is authentic.

For each landmark, return a JSON object containing both English ('en') and Chinese ('zh') translations.
Required fields:
1. name (en/zh) - The real name of the landmark.
2. bookTitle (en/zh) - The book it appears in.
3. author (en/zh) - The author.
4. quote (en/zh) - A relevant, famous quote describing this spot (approximate if exact is not available).
5. travelerNote (en/zh) - A helpful tip for a literary tourist visiting today.
6. lat (number) - Latitude.
7. lng (number) - Longitude.

Return strictly a JSON array of objects. Do not include markdown code blocks.";

/// Suffix appended for chat-completion backends that lack a schema channel.
pub const RAW_JSON_SUFFIX: &str = " Output strictly raw JSON.";

/// The user message naming the city.
pub fn user_prompt(city: &str) -> String {
    format!("Find at least 10 literary landmarks in \"{city}\".")
}

/// Strict output schema for the Gemini structured-response channel: an array
/// of landmark objects with five bilingual text fields plus coordinates.
pub fn response_schema() -> Value {
    let localized = json!({
        "type": "OBJECT",
        "properties": {
            "en": { "type": "STRING" },
            "zh": { "type": "STRING" },
        },
        "required": ["en", "zh"],
    });
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": localized,
                "bookTitle": localized,
                "author": localized,
                "quote": localized,
                "travelerNote": localized,
                "lat": { "type": "NUMBER" },
                "lng": { "type": "NUMBER" },
            },
            "required": ["name", "bookTitle", "author", "quote", "travelerNote", "lat", "lng"],
        },
    })
}
