//! Session layer: the search orchestrator, the transient view state and the
//! persisted provider settings.
//!
//! The session is the single owner of mutable state. Searches are
//! cancel-and-replace: `begin_search` issues a ticket and `apply` ignores any
//! outcome whose ticket is no longer the latest, so a stale response can
//! never overwrite a newer one.

pub use search::{SearchOutcome, resolve, resolve_failure};
pub use settings::Settings;
pub use state::{SearchState, SearchTicket, Session, ViewState};

pub mod messages;
mod search;
mod settings;
mod state;
