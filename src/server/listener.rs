//! TCP relay server
//!
//! Accepts one call per connection, dispatches each to the notification
//! service through a bounded worker pool, and drains in-flight calls on
//! shutdown.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

use crate::application::ports::ToastRenderer;
use crate::application::NotificationService;
use crate::server::wire::{self, ResponseFrame};

/// Bounded-concurrency TCP server for the notification relay.
///
/// Lifecycle: `bind` (Starting, fatal if the port is taken) then `run`
/// (Listening until the shutdown channel fires, then Stopping while
/// in-flight calls drain).
pub struct RelayServer {
    listener: TcpListener,
    workers: Arc<Semaphore>,
}

impl RelayServer {
    /// Bind the listen address.
    ///
    /// Fails if the address is already taken; there is no fallback port.
    pub async fn bind(addr: &str, workers: usize) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            workers: Arc::new(Semaphore::new(workers.max(1))),
        })
    }

    /// The address actually bound (useful when binding port 0 in tests)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept and serve calls until the shutdown channel fires.
    ///
    /// Each call runs on its own task; a failure in one call never affects
    /// another. Once every worker slot is busy, further connections queue in
    /// the listen backlog. On shutdown the listener stops accepting and
    /// waits for in-flight calls to finish (best-effort, no deadline).
    pub async fn run<R>(
        self,
        service: Arc<NotificationService<R>>,
        mut shutdown: mpsc::Receiver<()>,
    ) -> io::Result<()>
    where
        R: ToastRenderer + 'static,
    {
        let mut in_flight = JoinSet::new();

        loop {
            // A worker slot must be free before we accept
            let permit = tokio::select! {
                _ = shutdown.recv() => break,
                permit = Arc::clone(&self.workers).acquire_owned() => match permit {
                    Ok(p) => p,
                    // The semaphore is never closed while the server owns it
                    Err(_) => break,
                },
            };

            let (stream, peer) = tokio::select! {
                _ = shutdown.recv() => break,
                accepted = self.listener.accept() => match accepted {
                    Ok(pair) => pair,
                    Err(e) => {
                        eprintln!("Accept error: {}", e);
                        continue;
                    }
                },
            };

            let service = Arc::clone(&service);
            in_flight.spawn(async move {
                let _permit = permit;
                if let Err(e) = handle_call(stream, service).await {
                    eprintln!("Connection error from {}: {}", peer, e);
                }
            });

            // Reap finished calls without blocking the accept loop
            while in_flight.try_join_next().is_some() {}
        }

        // Stop accepting, let in-flight calls finish
        drop(self.listener);
        while in_flight.join_next().await.is_some() {}

        Ok(())
    }
}

/// Serve a single connection: one request line in, one response line out.
///
/// Bad frames get an answer too; only transport I/O itself may error here.
async fn handle_call<R>(
    stream: TcpStream,
    service: Arc<NotificationService<R>>,
) -> io::Result<()>
where
    R: ToastRenderer + 'static,
{
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);
    let mut line = String::new();
    reader.read_line(&mut line).await?;

    let response = match wire::decode_request(&line) {
        Ok(frame) => {
            let request = frame.into_request();
            ResponseFrame::from(&service.send(&request).await)
        }
        Err(e) => ResponseFrame {
            success: false,
            error_message: e.to_string(),
        },
    };

    writer
        .write_all(wire::encode_response(&response).as_bytes())
        .await?;
    writer.flush().await?;

    Ok(())
}
