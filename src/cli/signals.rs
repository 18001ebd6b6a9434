//! Interrupt handling for the relay server

use std::io;

use colored::Colorize;
use tokio::sync::mpsc;

/// Shutdown signal plumbing.
///
/// OS interrupts are just one producer on the channel; the receiver is what
/// the server runtime selects on, so shutdown is testable without
/// process-level signals.
pub struct ShutdownHandler;

impl ShutdownHandler {
    /// Install Ctrl+C (and SIGTERM on Unix) handlers.
    ///
    /// Returns the receiver for the server runtime and a sender for
    /// non-signal shutdown sources.
    pub async fn install() -> io::Result<(mpsc::Receiver<()>, mpsc::Sender<()>)> {
        let (tx, rx) = mpsc::channel(1);

        let tx_int = tx.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("{} Received interrupt (shutdown)", "↓".cyan());
                let _ = tx_int.send(()).await;
            }
        });

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let mut sigterm = signal(SignalKind::terminate())?;
            let tx_term = tx.clone();
            tokio::spawn(async move {
                sigterm.recv().await;
                eprintln!("{} Received SIGTERM (shutdown)", "↓".cyan());
                let _ = tx_term.send(()).await;
            });
        }

        Ok((rx, tx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn manual_sender_reaches_receiver() {
        let (mut rx, tx) = ShutdownHandler::install().await.unwrap();
        tx.send(()).await.unwrap();
        assert_eq!(rx.recv().await, Some(()));
    }
}
