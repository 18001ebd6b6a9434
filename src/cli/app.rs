//! Serve and send runners

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use crate::application::ports::ConfigStore;
use crate::application::{NotificationService, ServiceEvent};
use crate::domain::config::AppConfig;
use crate::infrastructure::{NotifyRustRenderer, XdgConfigStore};
use crate::server::{RelayClient, RelayServer};

use super::args::{SendOptions, ServeOptions};
use super::presenter::Presenter;
use super::signals::ShutdownHandler;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the relay server until interrupted
pub async fn run_server(options: ServeOptions) -> ExitCode {
    let presenter = Presenter::new();

    // One renderer instance for the process lifetime, passed in explicitly
    let renderer = NotifyRustRenderer::with_app_name(options.app_name.clone());

    // The service reports call stages; presentation stays in this layer
    let log = Presenter::new();
    let service = Arc::new(NotificationService::with_event_sink(
        renderer,
        Box::new(move |event| match event {
            ServiceEvent::Received {
                title,
                message,
                level,
            } => log.info(&format!(
                "Notification received: '{}' - '{}' (level: {})",
                title,
                message,
                level.display_name()
            )),
            ServiceEvent::Rejected { title, reason } => {
                log.warn(&format!("Rejected '{}': {}", title, reason));
            }
            ServiceEvent::Rendered { title } => {
                log.success(&format!("Notification shown: '{}'", title));
            }
            ServiceEvent::RenderFailed { title, cause } => {
                log.error(&format!("Render failed for '{}': {}", title, cause));
            }
        }),
    ));

    // A taken port is fatal; there is no fallback
    let server = match RelayServer::bind(&options.addr, options.workers).await {
        Ok(server) => server,
        Err(e) => {
            presenter.error(&format!("Failed to bind {}: {}", options.addr, e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let (shutdown, _shutdown_tx) = match ShutdownHandler::install().await {
        Ok(pair) => pair,
        Err(e) => {
            presenter.error(&format!("Failed to setup signal handler: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let bound = match server.local_addr() {
        Ok(addr) => addr.to_string(),
        Err(_) => options.addr.clone(),
    };
    presenter.server_status(&format!(
        "Listening on {} ({} workers)",
        bound, options.workers
    ));
    presenter.info("Press Ctrl+C to stop");

    match server.run(service, shutdown).await {
        Ok(()) => {
            presenter.server_status("Stopped");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&format!("Server error: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Send a single notification through a running relay
pub async fn run_send(options: SendOptions) -> ExitCode {
    let presenter = Presenter::new();
    let client = RelayClient::new(options.addr.clone());

    match client.send(&options.request).await {
        Ok(response) if response.is_success() => {
            presenter.success("Notification delivered");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(response) => {
            presenter.error(&format!(
                "Relay rejected the notification: {}",
                response.error_message()
            ));
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            presenter.error(&format!("Failed to reach relay at {}: {}", options.addr, e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        host: env::var("TOASTD_HOST").ok().filter(|s| !s.is_empty()),
        port: env::var("TOASTD_PORT").ok().and_then(|s| s.parse().ok()),
        workers: env::var("TOASTD_WORKERS").ok().and_then(|s| s.parse().ok()),
        app_name: env::var("TOASTD_APP_NAME").ok().filter(|s| !s.is_empty()),
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
