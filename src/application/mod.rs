//! Application layer - Use case and port interfaces
//!
//! Contains the core send-notification operation and trait definitions
//! for external system interactions.

pub mod ports;
pub mod send_notification;

// Re-export use case types
pub use send_notification::{EventSink, NotificationService, ServiceEvent};
