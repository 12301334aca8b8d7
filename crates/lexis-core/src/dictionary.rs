use lexis_types::{DictionaryEntry, LookupOutcome};
use reqwest::StatusCode;

/// Remote dictionary lookup
#[async_trait::async_trait]
pub trait DictionaryService: Send + Sync {
    /// Fetch every entry the service knows for `term`
    async fn lookup(&self, term: &str) -> Result<Vec<DictionaryEntry>, LookupError>;

    /// Provider name for logs
    fn name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Word not found")]
    NotFound,

    #[error("Dictionary service returned HTTP {0}")]
    Status(StatusCode),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid dictionary endpoint: {0}")]
    InvalidEndpoint(String),

    /// The HTTP client could not be configured
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    /// Collapse into the three user-facing failure kinds.
    ///
    /// Anything that is neither a 404 nor another HTTP status counts as a
    /// transport failure, including a body that never decodes.
    pub fn outcome(&self) -> LookupOutcome {
        match self {
            LookupError::NotFound => LookupOutcome::NotFound,
            LookupError::Status(_) => LookupOutcome::Failed,
            LookupError::Network(_)
            | LookupError::InvalidEndpoint(_)
            | LookupError::Client(_)
            | LookupError::Decode(_) => LookupOutcome::NetworkError,
        }
    }
}

/// Map a raw lookup result onto what the view displays
pub fn classify(result: Result<Vec<DictionaryEntry>, LookupError>) -> LookupOutcome {
    match result {
        Ok(entries) => LookupOutcome::Found(entries),
        Err(e) => e.outcome(),
    }
}

/// Status handling shared by HTTP-backed services
pub fn check_status(status: StatusCode) -> Result<(), LookupError> {
    if status == StatusCode::NOT_FOUND {
        return Err(LookupError::NotFound);
    }

    if !status.is_success() {
        return Err(LookupError::Status(status));
    }

    Ok(())
}
