//! Renderer infrastructure module
//!
//! Wraps the host notification subsystem behind the `ToastRenderer` port
//! using notify-rust.

mod notify_rust;

pub use notify_rust::NotifyRustRenderer;
