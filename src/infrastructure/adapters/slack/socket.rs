//! Streaming socket - opening the real-time WebSocket

use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::http::header::ORIGIN;
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::application::errors::BotError;

/// WebSocket stream with optional TLS
pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Open the stream, sending `origin` as the `Origin` header
pub async fn open(url: &str, origin: &str) -> Result<WsStream, BotError> {
    let mut request = url
        .into_client_request()
        .map_err(|e| BotError::WebSocket(format!("Invalid stream URL {}: {}", url, e)))?;

    let origin = HeaderValue::from_str(origin)
        .map_err(|e| BotError::WebSocket(format!("Invalid origin {}: {}", origin, e)))?;
    request.headers_mut().insert(ORIGIN, origin);

    let (stream, _response) = connect_async(request)
        .await
        .map_err(|e| BotError::WebSocket(format!("WebSocket connect failed: {}", e)))?;

    tracing::info!("Stream connected");
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        let err = open("not a url", "https://slack.com/").await.unwrap_err();
        assert!(matches!(err, BotError::WebSocket(_)));
    }

    #[tokio::test]
    async fn test_invalid_origin_is_rejected() {
        let err = open("ws://127.0.0.1:1/", "bad\norigin").await.unwrap_err();
        assert!(matches!(err, BotError::WebSocket(ref msg) if msg.contains("Invalid origin")));
    }
}
