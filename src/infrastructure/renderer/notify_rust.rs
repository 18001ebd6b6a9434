//! Cross-platform toast adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;

use crate::application::ports::{RenderError, ToastRenderer};
use crate::domain::config::DEFAULT_APP_NAME;
use crate::domain::Level;

/// Freedesktop icon name for a severity level
const fn icon_name(level: Level) -> &'static str {
    match level {
        Level::Info => "dialog-information",
        Level::Warning => "dialog-warning",
        Level::Error => "dialog-error",
    }
}

/// Urgency hint for a severity level (XDG platforms only)
#[cfg(all(unix, not(target_os = "macos")))]
fn urgency(level: Level) -> notify_rust::Urgency {
    match level {
        Level::Info => notify_rust::Urgency::Low,
        Level::Warning => notify_rust::Urgency::Normal,
        Level::Error => notify_rust::Urgency::Critical,
    }
}

/// Cross-platform toast renderer using notify-rust.
///
/// Holds no OS handle beyond the application name; each render builds an
/// independent notification, so concurrent calls do not contend.
pub struct NotifyRustRenderer {
    /// Application name for notifications
    app_name: String,
}

impl NotifyRustRenderer {
    /// Create a new notify-rust renderer
    pub fn new() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToastRenderer for NotifyRustRenderer {
    async fn render(&self, title: &str, message: &str, level: Level) -> Result<(), RenderError> {
        let title = title.to_owned();
        let message = message.to_owned();
        let app_name = self.app_name.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut toast = notify_rust::Notification::new();
            toast
                .appname(&app_name)
                .summary(&title)
                .body(&message)
                .icon(icon_name(level));

            #[cfg(all(unix, not(target_os = "macos")))]
            toast.urgency(urgency(level));

            toast
                .show()
                .map_err(|e| RenderError::ShowFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| RenderError::ShowFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_creates_successfully() {
        let _renderer = NotifyRustRenderer::new();
    }

    #[test]
    fn renderer_with_custom_app_name() {
        let renderer = NotifyRustRenderer::with_app_name("TestApp");
        assert_eq!(renderer.app_name, "TestApp");
    }

    #[test]
    fn renderer_default_uses_crate_app_name() {
        let renderer = NotifyRustRenderer::default();
        assert_eq!(renderer.app_name, "toastd");
    }

    #[test]
    fn icons_follow_severity() {
        assert_eq!(icon_name(Level::Info), "dialog-information");
        assert_eq!(icon_name(Level::Warning), "dialog-warning");
        assert_eq!(icon_name(Level::Error), "dialog-error");
    }
}
