use std::time::Duration;

use async_trait::async_trait;
use lexis_config::network::NetworkConfig;
use lexis_core::dictionary::{DictionaryService, LookupError, check_status};
use lexis_types::DictionaryEntry;
use reqwest::Url;

/// Path under the API base, the word is appended as one more segment
const ENTRIES_PATH: [&str; 4] = ["api", "v2", "entries", "en"];

/// Client for the Free Dictionary API
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    api_base: Url,
}

impl FreeDictionaryClient {
    pub fn new(config: &NetworkConfig) -> Result<Self, LookupError> {
        let api_base = Url::parse(&config.api_base)
            .map_err(|e| LookupError::InvalidEndpoint(format!("{}: {}", config.api_base, e)))?;
        if api_base.cannot_be_a_base() {
            return Err(LookupError::InvalidEndpoint(config.api_base.clone()));
        }

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        Ok(Self {
            client: builder.build().map_err(LookupError::Client)?,
            api_base,
        })
    }

    /// `{api_base}/api/v2/entries/en/{term}` with `term` percent-encoded
    pub fn entry_url(&self, term: &str) -> Result<Url, LookupError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidEndpoint(self.api_base.to_string()))?
            .pop_if_empty()
            .extend(ENTRIES_PATH)
            .push(term);
        Ok(url)
    }
}

#[async_trait]
impl DictionaryService for FreeDictionaryClient {
    async fn lookup(&self, term: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        let url = self.entry_url(term)?;
        tracing::debug!("[LOOKUP] GET {}", url);

        let response = self.client.get(url).send().await?;
        check_status(response.status())?;

        let body = response.bytes().await?;
        let entries: Vec<DictionaryEntry> = serde_json::from_slice(&body)?;
        tracing::debug!("[LOOKUP] '{}': {} entries", term, entries.len());

        Ok(entries)
    }

    fn name(&self) -> &str {
        "Free Dictionary API"
    }
}

#[cfg(test)]
mod tests {
    use lexis_types::LookupOutcome;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    use super::*;

    const BODY: &str = r#"[{"word":"keyboard","phonetic":"/ˈkiːbɔːd/","phonetics":[{"text":"/ˈkiːbɔːd/","audio":"https://api.dictionaryapi.dev/media/pronunciations/en/keyboard-uk.mp3"}],"meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"A set of keys.","synonyms":[],"antonyms":[]}]}]}]"#;

    /// Serve one canned response, reporting the request line it received
    async fn serve_once(status: &str, body: &str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let text = String::from_utf8_lossy(&request);
            let _ = tx.send(text.lines().next().unwrap_or_default().to_string());
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        (base, rx)
    }

    fn client(api_base: &str) -> FreeDictionaryClient {
        FreeDictionaryClient::new(&NetworkConfig {
            api_base: api_base.to_string(),
            ..NetworkConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn entry_url_encodes_term_as_one_segment() {
        let client = client("https://api.dictionaryapi.dev");
        assert_eq!(
            client.entry_url("keyboard").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/keyboard"
        );
        assert_eq!(
            client.entry_url("ice cream/?#").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/ice%20cream%2F%3F%23"
        );
    }

    #[test]
    fn entry_url_keeps_base_path() {
        let client = client("http://proxy.local/dictionary/");
        assert_eq!(
            client.entry_url("word").unwrap().as_str(),
            "http://proxy.local/dictionary/api/v2/entries/en/word"
        );
    }

    #[test]
    fn rejects_unusable_base() {
        for base in ["not a url", "mailto:someone@example.com"] {
            let result = FreeDictionaryClient::new(&NetworkConfig {
                api_base: base.to_string(),
                ..NetworkConfig::default()
            });
            assert!(matches!(result, Err(LookupError::InvalidEndpoint(_))), "{base}");
        }
    }

    #[test]
    fn bad_client_settings_are_not_network_errors() {
        let result = FreeDictionaryClient::new(&NetworkConfig {
            user_agent: "lexis\n".to_string(),
            ..NetworkConfig::default()
        });
        assert!(matches!(result, Err(LookupError::Client(_))));
    }

    #[tokio::test]
    async fn success_parses_entries() {
        let (base, request) = serve_once("200 OK", BODY).await;

        let entries = client(&base).lookup("keyboard").await.unwrap();

        assert_eq!(request.await.unwrap(), "GET /api/v2/entries/en/keyboard HTTP/1.1");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "keyboard");
        assert!(entries[0].has_audio());
    }

    #[tokio::test]
    async fn not_found_ignores_body() {
        let (base, _) = serve_once(
            "404 Not Found",
            r#"{"title":"No Definitions Found","message":"Sorry pal"}"#,
        )
        .await;

        let err = client(&base).lookup("qwertyuiop").await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound));
        assert_eq!(err.outcome(), LookupOutcome::NotFound);
    }

    #[tokio::test]
    async fn server_error_fails_the_fetch() {
        let (base, _) = serve_once("500 Internal Server Error", "oops").await;

        let err = client(&base).lookup("keyboard").await.unwrap_err();
        assert!(matches!(err, LookupError::Status(s) if s.as_u16() == 500));
        assert_eq!(err.outcome(), LookupOutcome::Failed);
    }

    #[tokio::test]
    async fn encoded_term_reaches_the_server() {
        let (base, request) = serve_once("200 OK", "[]").await;

        let entries = client(&base).lookup("hello world").await.unwrap();

        assert!(entries.is_empty());
        assert_eq!(
            request.await.unwrap(),
            "GET /api/v2/entries/en/hello%20world HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = client(&base).lookup("keyboard").await.unwrap_err();
        assert!(matches!(err, LookupError::Network(_)));
        assert_eq!(err.outcome(), LookupOutcome::NetworkError);
    }

    #[tokio::test]
    async fn garbage_body_is_a_network_error() {
        let (base, _) = serve_once("200 OK", "<html>maintenance</html>").await;

        let err = client(&base).lookup("keyboard").await.unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
        assert_eq!(err.outcome(), LookupOutcome::NetworkError);
    }
}
