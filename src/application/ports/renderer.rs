//! Toast renderer port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Level;

/// Renderer errors.
///
/// Carries a human-readable cause; a failing notification subsystem is
/// reported to the caller, never allowed to escape as an unstructured fault.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("failed to show notification: {0}")]
    ShowFailed(String),
}

/// Port for the OS toast capability.
///
/// The single place the system touches platform-specific display code.
/// Implementations must be safe to call concurrently from multiple
/// in-flight requests.
#[async_trait]
pub trait ToastRenderer: Send + Sync {
    /// Display a notification.
    ///
    /// # Arguments
    /// * `title` - The notification title
    /// * `message` - The notification body
    /// * `level` - Severity, mapped to presentation hints
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    async fn render(&self, title: &str, message: &str, level: Level) -> Result<(), RenderError>;
}

/// Blanket implementation for boxed renderer types
#[async_trait]
impl ToastRenderer for Box<dyn ToastRenderer> {
    async fn render(&self, title: &str, message: &str, level: Level) -> Result<(), RenderError> {
        self.as_ref().render(title, message, level).await
    }
}
