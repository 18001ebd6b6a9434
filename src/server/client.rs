//! Relay client
//!
//! Connects to a running relay, sends one request, reads one response.
//! Used by the `send` subcommand and by integration tests.

use std::io;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::domain::{NotificationRequest, NotificationResponse};
use crate::server::wire::{RequestFrame, ResponseFrame};

/// One-shot client for the notification relay
pub struct RelayClient {
    addr: String,
}

impl RelayClient {
    /// Create a client targeting `host:port`
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }

    /// Send one notification request and wait for the response.
    ///
    /// A connection failure is surfaced to this caller only; the relay
    /// itself is unaffected.
    pub async fn send(&self, request: &NotificationRequest) -> io::Result<NotificationResponse> {
        let stream = TcpStream::connect(&self.addr).await?;
        let (reader, mut writer) = stream.into_split();

        let frame = RequestFrame::send_notification(request);
        let payload = serde_json::to_string(&frame)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writer.write_all(payload.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;

        let mut reader = BufReader::new(reader);
        let mut line = String::new();
        reader.read_line(&mut line).await?;

        let frame: ResponseFrame = serde_json::from_str(line.trim())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(NotificationResponse::from(frame))
    }
}
