//! AI provider adapters for literary-landmark search.
//!
//! One adapter per transport shape: `Gemini` speaks the native
//! `generateContent` API (search-grounded, strict response schema), `OpenAi`
//! covers every chat-completions backend (OpenAI itself and DeepSeek). The
//! unified `Provider` enum is constructed once from a `ProviderKind` plus a
//! credential and dispatches through the `LandmarkSource` trait.

pub use darkroom::DevelopedImage;
pub use gemini::Gemini;
pub use openai::OpenAi;
pub use provider::{LandmarkSource, Provider};
pub use reqwest::Client;

mod darkroom;
mod gemini;
mod openai;
pub mod parse;
pub mod prompt;
mod provider;
