use std::io::Write;

use lexis_config::Config;
use lexis_core::dictionary::{DictionaryService, classify};
use lexis_core::preferences::MemoryPreferenceStore;
use lexis_core::view::{LookupView, ViewSettings};
use lexis_ui::render::{line_text, result_lines};
use lexis_ui::theme::Palette;

/// One lookup rendered as plain text. Returns whether the word was found.
pub async fn print_lookup(
    config: &Config,
    dictionary: &dyn DictionaryService,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut view = LookupView::new(
        ViewSettings::from(config),
        Box::new(MemoryPreferenceStore::new()),
    );

    let Some(request) = view.initialize() else {
        anyhow::bail!("nothing to look up");
    };

    let result = dictionary.lookup(&request.term).await;
    if let Err(e) = &result {
        tracing::warn!("[LOOKUP] '{}' failed: {}", request.term, e);
    }
    view.finish_lookup(request.seq, classify(result));

    if let Some(message) = view.error() {
        writeln!(out, "{message}")?;
        return Ok(false);
    }

    let rendered = result_lines(&view, Palette::for_mode(view.dark_mode()));
    for line in &rendered.lines {
        writeln!(out, "{}", line_text(line))?;
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use lexis_core::dictionary::LookupError;
    use lexis_types::{Definition, DictionaryEntry, Meaning};

    use super::*;

    struct Fixed(Result<Vec<DictionaryEntry>, u16>);

    #[async_trait]
    impl DictionaryService for Fixed {
        async fn lookup(&self, _term: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
            match &self.0 {
                Ok(entries) => Ok(entries.clone()),
                Err(404) => Err(LookupError::NotFound),
                Err(_) => Err(LookupError::InvalidEndpoint("offline".into())),
            }
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn config(term: &str) -> Config {
        let mut config = Config::default();
        config.ui.default_term = term.to_string();
        config
    }

    #[tokio::test]
    async fn prints_entry_text() {
        let dictionary = Fixed(Ok(vec![DictionaryEntry {
            word: "tea".into(),
            meanings: vec![Meaning {
                part_of_speech: "noun".into(),
                definitions: vec![Definition {
                    definition: "A drink.".into(),
                    ..Default::default()
                }],
            }],
            ..Default::default()
        }]));

        let mut out = Vec::new();
        let found = print_lookup(&config("tea"), &dictionary, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(found);
        assert!(text.starts_with("tea\n"));
        assert!(text.contains("  1. A drink."));
        assert!(text.contains("Source: https://en.wiktionary.org/wiki/tea"));
    }

    #[tokio::test]
    async fn failures_print_the_message() {
        for (code, message) in [(404, "Word not found"), (0, "Network error")] {
            let mut out = Vec::new();
            let found = print_lookup(&config("tea"), &Fixed(Err(code)), &mut out)
                .await
                .unwrap();
            assert!(!found);
            assert_eq!(String::from_utf8(out).unwrap(), format!("{message}\n"));
        }
    }

    #[tokio::test]
    async fn blank_term_is_an_error() {
        let mut out = Vec::new();
        assert!(print_lookup(&config("   "), &Fixed(Ok(vec![])), &mut out).await.is_err());
    }
}
