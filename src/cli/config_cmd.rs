//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    validate_config_value(key, value)?;

    let mut config = store.load().await?;
    apply_config_value(&mut config, key, value);
    store.save(&config).await?;

    presenter.success(&format!("Set {} = {}", key, value));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;
    presenter.key_value(key, &display_value(&config, key));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;
    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, &display_value(&config, key));
    }
    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().display().to_string());
    Ok(())
}

/// Validate a value for the given key before storing it
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "port" => match value.parse::<u16>() {
            Ok(_) => Ok(()),
            Err(_) => Err(ConfigError::ValidationError {
                key: key.to_string(),
                message: "expected a port number (0-65535)".to_string(),
            }),
        },
        "workers" => match value.parse::<usize>() {
            Ok(n) if n > 0 => Ok(()),
            _ => Err(ConfigError::ValidationError {
                key: key.to_string(),
                message: "expected a positive integer".to_string(),
            }),
        },
        "host" | "app_name" => {
            if value.trim().is_empty() {
                Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "must not be empty".to_string(),
                })
            } else {
                Ok(())
            }
        }
        _ => Ok(()),
    }
}

/// Store a validated value into the config
fn apply_config_value(config: &mut AppConfig, key: &str, value: &str) {
    match key {
        "host" => config.host = Some(value.to_string()),
        "port" => config.port = value.parse().ok(),
        "workers" => config.workers = value.parse().ok(),
        "app_name" => config.app_name = Some(value.to_string()),
        _ => {}
    }
}

/// Stored value, or the default annotated as such
fn display_value(config: &AppConfig, key: &str) -> String {
    let (stored, default) = match key {
        "host" => (config.host.clone(), config.host_or_default()),
        "port" => (
            config.port.map(|p| p.to_string()),
            config.port_or_default().to_string(),
        ),
        "workers" => (
            config.workers.map(|w| w.to_string()),
            config.workers_or_default().to_string(),
        ),
        "app_name" => (config.app_name.clone(), config.app_name_or_default()),
        _ => (None, String::new()),
    };

    stored.unwrap_or_else(|| format!("{} (default)", default))
}
