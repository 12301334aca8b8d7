use std::sync::Arc;

use kanal::AsyncSender;
use lexis_core::dictionary::{DictionaryService, classify};
use lexis_types::AppEvent;

pub async fn handle_lookup(
    dictionary: Arc<dyn DictionaryService>,
    seq: u64,
    term: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("[LOOKUP] #{} '{}' via {}", seq, term, dictionary.name());

    let result = dictionary.lookup(&term).await;
    match &result {
        Ok(entries) => tracing::info!("[LOOKUP] #{} '{}': {} entries", seq, term, entries.len()),
        Err(e) => tracing::warn!("[LOOKUP] #{} '{}' failed: {}", seq, term, e),
    }

    app_to_ui_tx
        .send(AppEvent::LookupFinished {
            seq,
            outcome: classify(result),
        })
        .await?;

    Ok(())
}
