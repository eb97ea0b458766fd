//! Shared types for the Ink & Atlas literary-map engine.
//!
//! This crate provides the data model used across the catalog, the provider
//! adapters and the session layer: `LocalizedText`, `Landmark`, `City`,
//! `Grounding`, plus the `ProviderKind` tag and the `SearchError` taxonomy.

pub use error::SearchError;
pub use kind::ProviderKind;
pub use landmark::{City, Grounding, Landmark, LatLng};
pub use text::{Language, LocalizedText};

mod error;
mod kind;
mod landmark;
mod text;
