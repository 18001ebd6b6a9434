//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS notification subsystem and the filesystem.

pub mod config;
pub mod renderer;

// Re-export adapters
pub use config::XdgConfigStore;
pub use renderer::NotifyRustRenderer;
