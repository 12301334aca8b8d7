use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use lexis_core::preferences::PreferenceStore;
use lexis_core::state::AppState;
use lexis_core::view::{LookupView, ViewSettings};
use lexis_types::AppEvent;
use lexis_ui::terminal::TerminalOptions;

pub async fn ui_loop(
    state: Arc<AppState>,
    store: Box<dyn PreferenceStore>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (settings, options) = {
        let config = state.config.read().await;
        let options = TerminalOptions {
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms.max(10)),
            scroll_step: config.ui.scroll_step,
        };
        (ViewSettings::from(&*config), options)
    };

    let view = LookupView::new(settings, store);
    lexis_ui::ui_loop(view, app_to_ui_rx, ui_to_app_tx, options).await
}
