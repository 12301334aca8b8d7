use kanal::{AsyncReceiver, AsyncSender};
use lexis_core::view::LookupView;
use lexis_types::AppEvent;

pub mod bridge;
pub mod keys;
pub mod render;
pub mod terminal;
pub mod theme;
pub mod update;

use bridge::UiBridge;
use terminal::{TerminalOptions, run_terminal};

pub async fn ui_loop(
    view: LookupView,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    options: TerminalOptions,
) -> anyhow::Result<()> {
    let (bridge, handle) = UiBridge::new(&ui_to_app_tx);

    let forward = tokio::spawn(async move { bridge.forward_from_backend(app_to_ui_rx).await });

    let result = tokio::task::spawn_blocking(move || run_terminal(view, handle, options)).await?;

    forward.abort();
    result
}
