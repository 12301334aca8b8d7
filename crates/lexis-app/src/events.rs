use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexis_core::audio::AudioPlayer;
use lexis_core::dictionary::DictionaryService;
use lexis_types::AppEvent;
use tokio_util::sync::CancellationToken;

pub mod lookup;
pub mod playback;

use lookup::handle_lookup;
use playback::handle_playback;

/// Backends the event loop hands requests to
#[derive(Clone)]
pub struct Services {
    pub dictionary: Arc<dyn DictionaryService>,
    pub player: Arc<dyn AudioPlayer>,
}

/// App's main loop
///
/// Every request runs in its own task so a slow lookup never holds up the
/// next one. Nothing is cancelled; the UI drops stale replies by sequence
/// number.
pub async fn event_loop(
    services: Services,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        match event {
            AppEvent::Lookup { seq, term } => {
                let dictionary = services.dictionary.clone();
                let tx = app_to_ui_tx.clone();
                tokio::spawn(async move {
                    if let Err(e) = handle_lookup(dictionary, seq, term, &tx).await {
                        tracing::warn!("[LOOKUP] #{} reply dropped: {}", seq, e);
                    }
                });
            }
            AppEvent::PlayAudio { seq, url } => {
                let player = services.player.clone();
                let tx = app_to_ui_tx.clone();
                tokio::spawn(async move {
                    if let Err(e) = handle_playback(player, seq, url, &tx).await {
                        tracing::warn!("[AUDIO] #{} reply dropped: {}", seq, e);
                    }
                });
            }
            AppEvent::Shutdown => {
                tracing::info!("[EVENT_LOOP] Shutdown requested by UI");
                break;
            }
            AppEvent::LookupFinished { .. }
            | AppEvent::PlaybackFinished { .. }
            | AppEvent::BackendReady => {
                // UI-only events
            }
        }
    }

    Ok(())
}
