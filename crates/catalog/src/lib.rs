//! The bundled offline archive: a fixed table of demo cities used when no AI
//! credential is configured, or as a fallback when a provider call fails.
//!
//! The table is compiled in, built once on first access and immutable
//! thereafter. Lookup is keyed by lowercase city identifier.

use acore::City;
use std::collections::BTreeMap;
use std::sync::LazyLock;

mod data;

static CITIES: LazyLock<BTreeMap<&'static str, City>> = LazyLock::new(data::cities);

/// Look up a bundled city by name, case-insensitively.
pub fn lookup(city: &str) -> Option<&'static City> {
    CITIES.get(city.trim().to_lowercase().as_str())
}

/// Whether a city is part of the bundled archive.
pub fn contains(city: &str) -> bool {
    lookup(city).is_some()
}

/// All bundled city keys, in stable order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    CITIES.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(lookup("London").is_some());
        assert!(lookup("LONDON").is_some());
        assert!(lookup("  london  ").is_some());
    }

    #[test]
    fn unknown_city_is_absent() {
        assert!(lookup("Atlantis").is_none());
    }
}
