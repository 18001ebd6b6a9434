//! Toastd - desktop notification relay daemon
//!
//! This crate provides a small TCP service that accepts notification requests
//! over a line-delimited JSON protocol and renders them through the host
//! operating system's native toast mechanism.
//!
//! The channel is unauthenticated and unencrypted. It listens on loopback by
//! default and is intended for same-host or trusted-network use only.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core value objects (requests, responses, severity levels) and errors
//! - **Application**: The send-notification use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust renderer, config store)
//! - **Server**: TCP listener, wire protocol, and relay client
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod server;
