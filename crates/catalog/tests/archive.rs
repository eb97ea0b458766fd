//! Tests for the bundled offline archive.

use acore::{Language, ProviderKind};

#[test]
fn bundles_five_cities() {
    let keys: Vec<_> = atlas_catalog::keys().collect();
    assert_eq!(keys, ["florence", "london", "naples", "rome", "venice"]);
}

#[test]
fn london_entry_matches_the_demo_records() {
    let city = atlas_catalog::lookup("London").expect("london entry");
    assert_eq!(city.name.get(Language::En), "London");
    assert_eq!(city.name.get(Language::Zh), "伦敦");
    assert_eq!(city.lat, 51.5074);
    assert_eq!(city.lng, -0.1278);

    let names: Vec<_> = city
        .locations
        .iter()
        .map(|l| l.name.get(Language::En))
        .collect();
    assert_eq!(names, ["221B Baker Street", "The British Museum"]);
}

#[test]
fn every_bundled_record_satisfies_the_landmark_invariant() {
    for key in atlas_catalog::keys() {
        let city = atlas_catalog::lookup(key).unwrap();
        assert!(!city.locations.is_empty(), "{key} has no landmarks");
        for landmark in &city.locations {
            landmark
                .validate(ProviderKind::Gemini)
                .unwrap_or_else(|e| panic!("{key}/{}: {e}", landmark.id));
            assert!(!landmark.id.is_empty());
            assert!(landmark.cover_url.is_some());
        }
    }
}

#[test]
fn florence_is_the_startup_city() {
    let city = atlas_catalog::lookup("florence").unwrap();
    assert_eq!(city.lat, 43.7696);
    assert_eq!(city.lng, 11.2558);
    assert_eq!(city.locations.len(), 2);
}
