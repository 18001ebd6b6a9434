//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::{Level, NotificationRequest};

/// toastd - desktop notification relay
#[derive(Parser, Debug)]
#[command(name = "toastd")]
#[command(version)]
#[command(about = "Relay notification requests to the host OS toast mechanism")]
#[command(long_about = None)]
pub struct Cli {
    /// Listen host (serve mode) or relay host (send mode)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Listen port (serve mode) or relay port (send mode)
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Worker pool size for concurrent calls
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Application name shown on rendered notifications
    #[arg(long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Subcommand; without one, toastd runs the relay server
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a notification through a running relay
    Send {
        /// Notification title
        title: String,
        /// Notification body
        message: String,
        /// Severity level
        #[arg(short, long, value_enum, default_value = "info")]
        level: LevelArg,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Severity argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Info,
    Warning,
    Error,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Info => Level::Info,
            LevelArg::Warning => Level::Warning,
            LevelArg::Error => Level::Error,
        }
    }
}

impl From<Level> for LevelArg {
    fn from(level: Level) -> Self {
        match level {
            Level::Info => LevelArg::Info,
            Level::Warning => LevelArg::Warning,
            Level::Error => LevelArg::Error,
        }
    }
}

/// Parsed serve options
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub addr: String,
    pub workers: usize,
    pub app_name: String,
}

/// Parsed send options
#[derive(Debug, Clone)]
pub struct SendOptions {
    pub addr: String,
    pub request: NotificationRequest,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["host", "port", "workers", "app_name"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["toastd"]);
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(cli.workers.is_none());
        assert!(cli.app_name.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_serve_flags() {
        let cli = Cli::parse_from(["toastd", "--host", "0.0.0.0", "-p", "6000", "--workers", "4"]);
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(6000));
        assert_eq!(cli.workers, Some(4));
    }

    #[test]
    fn cli_parses_send() {
        let cli = Cli::parse_from(["toastd", "send", "Test", "Hello", "--level", "warning"]);
        match cli.command {
            Some(Commands::Send {
                title,
                message,
                level,
            }) => {
                assert_eq!(title, "Test");
                assert_eq!(message, "Hello");
                assert_eq!(level, LevelArg::Warning);
            }
            other => panic!("Expected Send command, got {:?}", other),
        }
    }

    #[test]
    fn cli_send_level_defaults_to_info() {
        let cli = Cli::parse_from(["toastd", "send", "Test", "Hello"]);
        match cli.command {
            Some(Commands::Send { level, .. }) => assert_eq!(level, LevelArg::Info),
            other => panic!("Expected Send command, got {:?}", other),
        }
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["toastd", "config", "set", "port", "6000"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "port");
            assert_eq!(value, "6000");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn level_arg_converts_to_level() {
        assert_eq!(Level::from(LevelArg::Info), Level::Info);
        assert_eq!(Level::from(LevelArg::Warning), Level::Warning);
        assert_eq!(Level::from(LevelArg::Error), Level::Error);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("host"));
        assert!(is_valid_config_key("port"));
        assert!(is_valid_config_key("workers"));
        assert!(is_valid_config_key("app_name"));
        assert!(!is_valid_config_key("invalid_key"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
