use crate::types::DictionaryEntry;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// UI asks the backend to look up a term
    Lookup { seq: u64, term: String },
    LookupFinished { seq: u64, outcome: LookupOutcome },
    /// UI asks the backend to play a normalized clip URL
    PlayAudio { seq: u64, url: String },
    PlaybackFinished { seq: u64, outcome: PlaybackOutcome },
    BackendReady,
    Shutdown,
}

/// Result of one lookup attempt, already classified for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Vec<DictionaryEntry>),
    NotFound,
    Failed,
    NetworkError,
}

impl LookupOutcome {
    /// Text shown to the user, `None` on success
    pub fn message(&self) -> Option<&'static str> {
        match self {
            LookupOutcome::Found(_) => None,
            LookupOutcome::NotFound => Some("Word not found"),
            LookupOutcome::Failed => Some("Failed to fetch definition"),
            LookupOutcome::NetworkError => Some("Network error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed,
    Failed,
    Unsupported,
}
