//! Landmark and city records.

use crate::{LocalizedText, ProviderKind, SearchError};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LatLng {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl LatLng {
    /// Create a coordinate pair.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and within WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A real-world place associated with a literary work.
///
/// Field names on the wire match the provider contract (`bookTitle`,
/// `travelerNote`, ...). `id` and `coverUrl` are assigned by the caller,
/// never by an adapter.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    /// Identity, unique within a result set.
    #[serde(default)]
    pub id: CompactString,
    /// Landmark name.
    pub name: LocalizedText,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// The book it appears in.
    pub book_title: LocalizedText,
    /// The author.
    pub author: LocalizedText,
    /// A relevant quote describing this spot.
    pub quote: LocalizedText,
    /// A tip for a literary tourist visiting today.
    pub traveler_note: LocalizedText,
    /// Display hint for a cover image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// Review snippets from grounding, at most two retained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<String>>,
    /// Grounded Google Maps link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_maps_uri: Option<String>,
}

impl Landmark {
    /// The landmark's coordinate pair.
    pub fn center(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Check the record invariant: all five localized fields carry text in at
    /// least one language and the coordinates are finite and in range.
    ///
    /// Records failing this are a hard parse error, not silently dropped.
    pub fn validate(&self, provider: ProviderKind) -> Result<(), SearchError> {
        let fields = [
            ("name", &self.name),
            ("bookTitle", &self.book_title),
            ("author", &self.author),
            ("quote", &self.quote),
            ("travelerNote", &self.traveler_note),
        ];
        for (field, text) in fields {
            if text.is_blank() {
                return Err(SearchError::Malformed {
                    provider,
                    reason: format!("landmark record has empty '{field}'"),
                });
            }
        }
        if !self.center().is_valid() {
            return Err(SearchError::Malformed {
                provider,
                reason: format!(
                    "landmark '{}' has invalid coordinates ({}, {})",
                    self.name.en, self.lat, self.lng
                ),
            });
        }
        Ok(())
    }

    /// Attach grounding data, keeping at most two reviews.
    pub fn attach_grounding(&mut self, grounding: Grounding) {
        if grounding.google_maps_uri.is_some() {
            self.google_maps_uri = grounding.google_maps_uri;
        }
        if !grounding.reviews.is_empty() {
            let mut reviews = grounding.reviews;
            reviews.truncate(2);
            self.reviews = Some(reviews);
        }
    }
}

/// Corroborating data attached to a landmark by a maps-grounded lookup.
#[derive(Debug, Clone, Default)]
pub struct Grounding {
    /// Link to the place on Google Maps.
    pub google_maps_uri: Option<String>,
    /// Free-text review snippets.
    pub reviews: Vec<String>,
}

/// A catalog city: localized name, center coordinate and landmarks.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct City {
    /// Localized city name.
    pub name: LocalizedText,
    /// Latitude of the city center.
    pub lat: f64,
    /// Longitude of the city center.
    pub lng: f64,
    /// The city's landmark records, in display order.
    pub locations: Vec<Landmark>,
}

impl City {
    /// The city's center coordinate.
    pub fn center(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProviderKind;

    fn sample() -> Landmark {
        Landmark {
            id: "l1".into(),
            name: LocalizedText::new("221B Baker Street", "贝克街221B"),
            lat: 51.5237,
            lng: -0.1585,
            book_title: LocalizedText::new("Sherlock Holmes", "福尔摩斯探案集"),
            author: LocalizedText::new("Arthur Conan Doyle", "阿瑟·柯南·道尔"),
            quote: LocalizedText::new("The game is afoot.", "游戏开始了。"),
            traveler_note: LocalizedText::new("Now a museum.", "现在是博物馆。"),
            cover_url: None,
            reviews: None,
            google_maps_uri: None,
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(sample().validate(ProviderKind::Gemini).is_ok());
    }

    #[test]
    fn nan_latitude_is_rejected() {
        let mut landmark = sample();
        landmark.lat = f64::NAN;
        assert!(landmark.validate(ProviderKind::Gemini).is_err());
    }

    #[test]
    fn out_of_range_longitude_is_rejected() {
        let mut landmark = sample();
        landmark.lng = 181.0;
        assert!(landmark.validate(ProviderKind::DeepSeek).is_err());
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let mut landmark = sample();
        landmark.quote = LocalizedText::default();
        let err = landmark.validate(ProviderKind::OpenAi).unwrap_err();
        assert!(err.to_string().contains("quote"));
    }

    #[test]
    fn grounding_keeps_at_most_two_reviews() {
        let mut landmark = sample();
        landmark.attach_grounding(Grounding {
            google_maps_uri: Some("https://maps.google.com/?cid=1".into()),
            reviews: vec!["a".into(), "b".into(), "c".into()],
        });
        assert_eq!(landmark.reviews.as_deref().unwrap().len(), 2);
        assert!(landmark.google_maps_uri.is_some());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("bookTitle").is_some());
        assert!(json.get("travelerNote").is_some());
    }
}
