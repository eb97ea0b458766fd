//! Plain-text rendering of landmark records.

use acore::{Landmark, Language};

/// One-line listing entry for a landmark.
pub fn landmark_line(landmark: &Landmark, lang: Language) -> String {
    format!(
        "  • {} — {} ({})",
        landmark.name.get(lang),
        landmark.book_title.get(lang),
        landmark.author.get(lang),
    )
}

/// Full detail panel for a landmark.
pub fn landmark_detail(landmark: &Landmark, lang: Language) -> String {
    let mut out = format!(
        "{}\n{} — {}\n“{}”\n{}\n({:.4}, {:.4})",
        landmark.name.get(lang),
        landmark.book_title.get(lang),
        landmark.author.get(lang),
        landmark.quote.get(lang),
        landmark.traveler_note.get(lang),
        landmark.lat,
        landmark.lng,
    );
    if let Some(uri) = &landmark.google_maps_uri {
        out.push_str(&format!("\nMaps: {uri}"));
    }
    if let Some(reviews) = &landmark.reviews {
        for review in reviews {
            out.push_str(&format!("\n  \"{review}\""));
        }
    }
    out
}
