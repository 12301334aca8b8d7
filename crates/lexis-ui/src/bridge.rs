use crossterm::event::KeyEvent;
use kanal::{AsyncReceiver, AsyncSender, Receiver, Sender};
use lexis_types::AppEvent;

/// Everything the terminal loop reacts to, merged into one queue
#[derive(Debug)]
pub enum UiInput {
    Key(KeyEvent),
    Resize,
    Tick,
    Backend(AppEvent),
}

/// Bridge between the async backend and the blocking terminal thread
pub struct UiBridge {
    to_ui_tx: AsyncSender<UiInput>,
}

pub struct UiBridgeHandle {
    pub to_ui_rx: Receiver<UiInput>,
    /// Feeds terminal input into the same queue as backend events
    pub input_tx: Sender<UiInput>,
    pub from_ui_tx: Sender<AppEvent>,
}

impl UiBridge {
    pub fn new(ui_to_app_tx: &AsyncSender<AppEvent>) -> (Self, UiBridgeHandle) {
        let (to_ui_tx, to_ui_rx) = kanal::bounded(128);

        (
            UiBridge {
                to_ui_tx: to_ui_tx.clone_async(),
            },
            UiBridgeHandle {
                to_ui_rx,
                input_tx: to_ui_tx,
                from_ui_tx: ui_to_app_tx.clone_sync(),
            },
        )
    }

    pub async fn forward_from_backend(&self, app_to_ui_rx: AsyncReceiver<AppEvent>) {
        while let Ok(event) = app_to_ui_rx.recv().await {
            if self.to_ui_tx.send(UiInput::Backend(event)).await.is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lexis_types::LookupOutcome;

    use super::*;

    #[tokio::test]
    async fn backend_events_reach_the_terminal_queue() {
        let (ui_to_app_tx, ui_to_app_rx) = kanal::bounded_async(4);
        let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async(4);
        let (bridge, handle) = UiBridge::new(&ui_to_app_tx);

        let forward = tokio::spawn(async move { bridge.forward_from_backend(app_to_ui_rx).await });

        app_to_ui_tx
            .send(AppEvent::LookupFinished {
                seq: 3,
                outcome: LookupOutcome::NotFound,
            })
            .await
            .unwrap();
        drop(app_to_ui_tx);
        forward.await.unwrap();

        let received = handle.to_ui_rx.try_recv().unwrap();
        assert!(matches!(
            received,
            Some(UiInput::Backend(AppEvent::LookupFinished { seq: 3, .. }))
        ));

        handle.from_ui_tx.send(AppEvent::Shutdown).unwrap();
        assert!(matches!(ui_to_app_rx.recv().await.unwrap(), AppEvent::Shutdown));
    }

    #[tokio::test]
    async fn forwarding_stops_when_the_terminal_is_gone() {
        let (ui_to_app_tx, _ui_to_app_rx) = kanal::bounded_async(4);
        let (app_to_ui_tx, app_to_ui_rx) = kanal::bounded_async(4);
        let (bridge, handle) = UiBridge::new(&ui_to_app_tx);
        drop(handle);

        app_to_ui_tx.send(AppEvent::BackendReady).await.unwrap();
        bridge.forward_from_backend(app_to_ui_rx).await;
    }
}
