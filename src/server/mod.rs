//! Server layer - TCP runtime and wire protocol
//!
//! Contains the relay listener, the line-delimited JSON wire format,
//! and the client used by the `send` subcommand.

pub mod client;
pub mod listener;
pub mod wire;

// Re-export commonly used types
pub use client::RelayClient;
pub use listener::RelayServer;
