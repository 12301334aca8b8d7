use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use lexis_core::audio::{AudioPlayer, PlaybackError};
use tokio_util::sync::CancellationToken;

use crate::PLAYBACK_COMPILED;
use crate::fetch::fetch_clip;
use crate::output::play_blocking;

pub struct RodioPlayer {
    client: reqwest::Client,
    next_clip: AtomicU64,
    /// Id and stop handle of the clip currently playing
    current: Mutex<Option<(u64, CancellationToken)>>,
}

impl RodioPlayer {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            next_clip: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    /// Register a new clip, stopping whichever one was playing
    fn take_over(&self) -> (u64, CancellationToken) {
        let id = self.next_clip.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();

        match self.current.lock() {
            Ok(mut current) => {
                if let Some((_, previous)) = current.replace((id, token.clone())) {
                    previous.cancel();
                }
            }
            Err(e) => tracing::warn!("[AUDIO] Player lock poisoned: {}", e),
        }

        (id, token)
    }

    fn release(&self, id: u64) {
        if let Ok(mut current) = self.current.lock()
            && current.as_ref().is_some_and(|(live, _)| *live == id)
        {
            current.take();
        }
    }
}

impl Default for RodioPlayer {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl AudioPlayer for RodioPlayer {
    async fn play(&self, url: &str) -> Result<(), PlaybackError> {
        if !PLAYBACK_COMPILED {
            return Err(PlaybackError::Unsupported(
                "built without the playback feature".to_string(),
            ));
        }

        let clip = fetch_clip(&self.client, url).await?;
        let (id, stop) = self.take_over();

        let result = tokio::task::spawn_blocking(move || play_blocking(clip, stop))
            .await
            .map_err(|e| PlaybackError::Playback(e.to_string()));

        self.release(id);
        result?
    }
}
