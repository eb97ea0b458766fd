//! The session: single owner of view state and settings.

use crate::{SearchOutcome, Settings, resolve, resolve_failure};
use acore::{Grounding, Landmark, Language, LatLng};
use compact_str::CompactString;
use provider::{Client, Provider};

/// Where the session is in the search lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No search has been issued yet.
    Idle,
    /// A search is in flight.
    Searching,
    /// A result set is on display.
    Displaying,
    /// The last search settled with a failure or no data.
    Failed,
}

/// Transient per-session display state. Not persisted.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Name of the city on display.
    pub city_name: String,
    /// Map center.
    pub center: LatLng,
    /// Landmarks on display.
    pub landmarks: Vec<Landmark>,
    /// Id of the landmark whose detail panel is open.
    pub selected: Option<CompactString>,
    /// Whether a search is in flight.
    pub loading: bool,
    /// Active display language.
    pub language: Language,
}

impl Default for ViewState {
    /// Startup view: the bundled Florence entry, Chinese active.
    fn default() -> Self {
        let florence = catalog::lookup("florence").expect("florence is bundled");
        Self {
            city_name: "Florence".to_owned(),
            center: florence.center(),
            landmarks: florence.locations.clone(),
            selected: None,
            loading: false,
            language: Language::Zh,
        }
    }
}

/// Identifies one search attempt. Applying an outcome with a superseded
/// ticket is a no-op, so a slow response cannot overwrite a newer search.
#[derive(Debug, Clone, Copy)]
pub struct SearchTicket {
    epoch: u64,
}

/// The owning controller for settings and view state.
#[derive(Debug, Clone)]
pub struct Session {
    /// The persisted provider settings.
    pub settings: Settings,
    view: ViewState,
    state: SearchState,
    epoch: u64,
}

impl Session {
    /// Create a session over the given settings, starting on the bundled
    /// Florence view.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            view: ViewState::default(),
            state: SearchState::Idle,
            epoch: 0,
        }
    }

    /// The current view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The current search lifecycle state.
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Start a search: supersede any in-flight attempt, clear the open
    /// detail panel and raise the loading flag.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.epoch += 1;
        self.state = SearchState::Searching;
        self.view.selected = None;
        self.view.loading = true;
        SearchTicket { epoch: self.epoch }
    }

    /// Apply a settled outcome. Returns `false` (and changes nothing) when
    /// the ticket has been superseded by a newer search.
    pub fn apply(&mut self, ticket: SearchTicket, outcome: &SearchOutcome) -> bool {
        if ticket.epoch != self.epoch {
            tracing::debug!("dropping stale search result (epoch {})", ticket.epoch);
            return false;
        }
        self.view.loading = false;
        match outcome {
            SearchOutcome::Displayed {
                city_name,
                center,
                landmarks,
                ..
            } => {
                self.view.city_name = city_name.clone();
                self.view.center = *center;
                self.view.landmarks = landmarks.clone();
                self.state = SearchState::Displaying;
            }
            SearchOutcome::NoResults { .. } | SearchOutcome::Failed { .. } => {
                self.state = SearchState::Failed;
            }
        }
        true
    }

    /// Run one full search against the configured provider: begin, resolve,
    /// apply. The provider is built here, once, from the active selection.
    pub async fn run_search(&mut self, city: &str, client: Client) -> SearchOutcome {
        let ticket = self.begin_search();
        let kind = self.settings.provider;
        let language = self.view.language;
        let outcome = if self.settings.has_key(kind) {
            match Provider::build(kind, self.settings.key(kind), client) {
                Ok(provider) => resolve(&self.settings, city, language, Some(&provider)).await,
                Err(err) => resolve_failure(city, language, err),
            }
        } else {
            resolve::<Provider>(&self.settings, city, language, None).await
        };
        self.apply(ticket, &outcome);
        outcome
    }

    /// Open the detail panel for a landmark on display.
    pub fn select(&mut self, id: &str) -> Option<&Landmark> {
        let position = self.view.landmarks.iter().position(|l| l.id == id)?;
        self.view.selected = Some(self.view.landmarks[position].id.clone());
        Some(&self.view.landmarks[position])
    }

    /// The landmark whose detail panel is open.
    pub fn selected_landmark(&self) -> Option<&Landmark> {
        let id = self.view.selected.as_ref()?;
        self.view.landmarks.iter().find(|l| &l.id == id)
    }

    /// Attach grounding data to a displayed landmark.
    pub fn attach_grounding(&mut self, id: &str, grounding: Grounding) -> bool {
        match self.view.landmarks.iter_mut().find(|l| l.id == id) {
            Some(landmark) => {
                landmark.attach_grounding(grounding);
                true
            }
            None => false,
        }
    }

    /// Flip the active language.
    pub fn toggle_language(&mut self) -> Language {
        self.view.language = self.view.language.toggle();
        self.view.language
    }

    /// Set the active language.
    pub fn set_language(&mut self, language: Language) {
        self.view.language = language;
    }
}
