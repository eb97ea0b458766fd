//! The search decision tree.
//!
//! Priority order for a city C: bundled archive when no usable credential is
//! configured; otherwise the selected provider, with the archive as the only
//! compensating fallback on provider failure. An empty provider result is a
//! distinct no-data outcome and never falls back.

use crate::{Settings, messages};
use acore::{City, Landmark, Language, LatLng, SearchError};
use provider::LandmarkSource;

/// The settled result of one search.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// Landmarks to display.
    Displayed {
        /// Name shown for the city: the archive's localized name when
        /// offline, the user's raw input when live.
        city_name: String,
        /// Where to re-center the view.
        center: LatLng,
        /// The landmark list, never empty.
        landmarks: Vec<Landmark>,
        /// Non-fatal warning when a provider failure fell back to the
        /// archive.
        warning: Option<String>,
        /// Whether the archive supplied the data.
        offline: bool,
    },
    /// The provider answered with an empty list; the view is left unchanged.
    NoResults {
        /// User-facing notification.
        message: String,
    },
    /// The search failed; the view is left unchanged.
    Failed {
        /// User-facing failure reason.
        message: String,
    },
}

impl SearchOutcome {
    fn offline(entry: &City, language: Language, warning: Option<String>) -> Self {
        Self::Displayed {
            city_name: entry.name.get(language).to_owned(),
            center: entry.center(),
            landmarks: entry.locations.clone(),
            warning,
            offline: true,
        }
    }
}

/// Resolve a search request for a city.
///
/// `source` is consulted only when a usable credential is configured for the
/// selected provider; pass `None` when none could be built.
pub async fn resolve<S: LandmarkSource>(
    settings: &Settings,
    city: &str,
    language: Language,
    source: Option<&S>,
) -> SearchOutcome {
    let entry = catalog::lookup(city);
    let source = match (settings.has_key(settings.provider), source) {
        (true, Some(source)) => source,
        _ => {
            // No usable credential: archive hit or nothing.
            return match entry {
                Some(entry) => SearchOutcome::offline(entry, language, None),
                None => SearchOutcome::Failed {
                    message: SearchError::MissingKey(settings.provider).to_string(),
                },
            };
        }
    };

    match source.find_landmarks(city).await {
        Ok(landmarks) if landmarks.is_empty() => SearchOutcome::NoResults {
            message: messages::not_found(city, language),
        },
        Ok(landmarks) => SearchOutcome::Displayed {
            city_name: city.to_owned(),
            center: landmarks[0].center(),
            landmarks,
            warning: None,
            offline: false,
        },
        Err(err) => resolve_failure(city, language, err),
    }
}

/// Apply the fallback rule to a provider failure: load the archive for a
/// known city with a combined warning, else fail with the reason.
pub fn resolve_failure(city: &str, language: Language, err: SearchError) -> SearchOutcome {
    tracing::warn!("search for '{city}' failed: {err}");
    match catalog::lookup(city) {
        Some(entry) => {
            SearchOutcome::offline(entry, language, Some(messages::fallback_warning(&err.to_string())))
        }
        None => SearchOutcome::Failed {
            message: err.to_string(),
        },
    }
}
