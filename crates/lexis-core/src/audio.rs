use lexis_types::PlaybackOutcome;
use reqwest::StatusCode;

/// Pronunciation playback
#[async_trait::async_trait]
pub trait AudioPlayer: Send + Sync {
    /// Play the clip at `url`, resolving once playback ends
    async fn play(&self, url: &str) -> Result<(), PlaybackError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    /// Audio output could not be set up at all
    #[error("Audio playback unsupported: {0}")]
    Unsupported(String),

    #[error("Failed to fetch audio: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Audio server returned HTTP {0}")]
    Status(StatusCode),

    #[error("Failed to decode audio: {0}")]
    Decode(String),

    #[error("Playback failed: {0}")]
    Playback(String),
}

impl PlaybackError {
    pub fn outcome(&self) -> PlaybackOutcome {
        match self {
            PlaybackError::Unsupported(_) => PlaybackOutcome::Unsupported,
            _ => PlaybackOutcome::Failed,
        }
    }
}

/// Player used when audio is switched off
pub struct NullPlayer;

#[async_trait::async_trait]
impl AudioPlayer for NullPlayer {
    async fn play(&self, _url: &str) -> Result<(), PlaybackError> {
        Err(PlaybackError::Unsupported("audio disabled".to_string()))
    }
}

/// Resolve a pronunciation reference against the dictionary service origin.
///
/// Scheme-relative references get `https:`, root-relative and bare paths
/// are joined onto `origin`, anything already starting with `http` is kept.
pub fn normalize_audio_url(reference: &str, origin: &str) -> String {
    let origin = origin.trim_end_matches('/');

    if reference.starts_with("//") {
        format!("https:{reference}")
    } else if reference.starts_with('/') {
        format!("{origin}{reference}")
    } else if !reference.starts_with("http") {
        format!("{origin}/{reference}")
    } else {
        reference.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://api.dictionaryapi.dev";

    #[test]
    fn scheme_relative_gets_https() {
        assert_eq!(
            normalize_audio_url("//host/clip.mp3", ORIGIN),
            "https://host/clip.mp3"
        );
    }

    #[test]
    fn root_relative_joins_origin() {
        assert_eq!(
            normalize_audio_url("/clip.mp3", ORIGIN),
            "https://api.dictionaryapi.dev/clip.mp3"
        );
    }

    #[test]
    fn bare_path_joins_origin_with_separator() {
        assert_eq!(
            normalize_audio_url("clip.mp3", ORIGIN),
            "https://api.dictionaryapi.dev/clip.mp3"
        );
        assert_eq!(
            normalize_audio_url("media/en/clip.mp3", "https://api.dictionaryapi.dev/"),
            "https://api.dictionaryapi.dev/media/en/clip.mp3"
        );
    }

    #[test]
    fn qualified_reference_is_unchanged() {
        assert_eq!(
            normalize_audio_url("https://other.com/clip.mp3", ORIGIN),
            "https://other.com/clip.mp3"
        );
        assert_eq!(
            normalize_audio_url("http://other.com/clip.mp3", ORIGIN),
            "http://other.com/clip.mp3"
        );
    }

    #[test]
    fn unsupported_is_distinguished_from_failures() {
        assert_eq!(
            PlaybackError::Unsupported("no device".into()).outcome(),
            PlaybackOutcome::Unsupported
        );
        assert_eq!(
            PlaybackError::Decode("bad frame".into()).outcome(),
            PlaybackOutcome::Failed
        );
        assert_eq!(
            PlaybackError::Status(StatusCode::NOT_FOUND).outcome(),
            PlaybackOutcome::Failed
        );
    }

    #[tokio::test]
    async fn null_player_reports_unsupported() {
        let err = NullPlayer.play("https://host/clip.mp3").await.unwrap_err();
        assert_eq!(err.outcome(), PlaybackOutcome::Unsupported);
    }
}
