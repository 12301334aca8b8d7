use std::sync::Arc;

use kanal::AsyncSender;
use lexis_core::audio::AudioPlayer;
use lexis_types::{AppEvent, PlaybackOutcome};

pub async fn handle_playback(
    player: Arc<dyn AudioPlayer>,
    seq: u64,
    url: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("[AUDIO] #{} playing {}", seq, url);

    let outcome = match player.play(&url).await {
        Ok(()) => PlaybackOutcome::Completed,
        Err(e) => {
            tracing::warn!("[AUDIO] #{} failed: {}", seq, e);
            e.outcome()
        }
    };

    app_to_ui_tx
        .send(AppEvent::PlaybackFinished { seq, outcome })
        .await?;

    Ok(())
}
