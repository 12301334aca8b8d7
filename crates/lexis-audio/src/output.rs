use lexis_core::audio::PlaybackError;
use tokio_util::sync::CancellationToken;

/// Decode and play `clip` on the current thread until it ends or `stop` fires
#[cfg(feature = "playback")]
pub(crate) fn play_blocking(clip: Vec<u8>, stop: CancellationToken) -> Result<(), PlaybackError> {
    use std::io::Cursor;
    use std::time::Duration;

    const POLL_INTERVAL: Duration = Duration::from_millis(20);

    let source =
        rodio::Decoder::new(Cursor::new(clip)).map_err(|e| PlaybackError::Decode(e.to_string()))?;

    // The stream must outlive the sink or playback goes silent
    let (_stream, handle) = rodio::OutputStream::try_default()
        .map_err(|e| PlaybackError::Unsupported(e.to_string()))?;
    let sink =
        rodio::Sink::try_new(&handle).map_err(|e| PlaybackError::Unsupported(e.to_string()))?;

    sink.append(source);
    while !sink.empty() {
        if stop.is_cancelled() {
            tracing::debug!("[AUDIO] Stopping superseded clip");
            sink.stop();
            break;
        }
        std::thread::sleep(POLL_INTERVAL);
    }

    Ok(())
}

#[cfg(not(feature = "playback"))]
pub(crate) fn play_blocking(_clip: Vec<u8>, _stop: CancellationToken) -> Result<(), PlaybackError> {
    Err(PlaybackError::Unsupported(
        "built without the playback feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "playback")]
    #[test]
    fn undecodable_clip_is_rejected_before_output() {
        let err = play_blocking(b"<html>not audio</html>".to_vec(), CancellationToken::new())
            .unwrap_err();
        assert!(matches!(err, PlaybackError::Decode(_)), "{err}");
    }

    #[cfg(not(feature = "playback"))]
    #[test]
    fn without_the_feature_output_is_unsupported() {
        let err = play_blocking(b"ID3".to_vec(), CancellationToken::new()).unwrap_err();
        assert!(matches!(err, PlaybackError::Unsupported(_)));
    }
}
