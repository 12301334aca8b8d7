use lexis_core::audio::PlaybackError;

/// Download a clip into memory
pub async fn fetch_clip(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, PlaybackError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(PlaybackError::Status(status));
    }

    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Err(PlaybackError::Decode("empty audio clip".to_string()));
    }

    tracing::debug!("[AUDIO] Fetched {} bytes from {}", bytes.len(), url);
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    async fn serve_once(status: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let head = format!(
                "HTTP/1.1 {status}\r\ncontent-type: audio/mpeg\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(body).await.unwrap();
            socket.shutdown().await.ok();
        });

        base
    }

    #[tokio::test]
    async fn fetches_clip_bytes() {
        let base = serve_once("200 OK", b"ID3fake").await;
        let bytes = fetch_clip(&reqwest::Client::new(), &format!("{base}/clip.mp3"))
            .await
            .unwrap();
        assert_eq!(bytes, b"ID3fake");
    }

    #[tokio::test]
    async fn missing_clip_is_a_status_error() {
        let base = serve_once("404 Not Found", b"").await;
        let err = fetch_clip(&reqwest::Client::new(), &format!("{base}/clip.mp3"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlaybackError::Status(s) if s.as_u16() == 404));
    }

    #[tokio::test]
    async fn empty_clip_cannot_decode() {
        let base = serve_once("200 OK", b"").await;
        let err = fetch_clip(&reqwest::Client::new(), &format!("{base}/clip.mp3"))
            .await
            .unwrap_err();
        assert!(matches!(err, PlaybackError::Decode(_)));
    }
}
