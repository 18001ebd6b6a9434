//! toastd CLI entry point

use std::process::ExitCode;

use clap::Parser;

use toastd::cli::{
    app::{load_merged_config, run_send, run_server, EXIT_ERROR},
    args::{Cli, Commands, SendOptions, ServeOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use toastd::domain::config::AppConfig;
use toastd::domain::NotificationRequest;
use toastd::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Send {
            title,
            message,
            level,
        }) => {
            let cli_config = AppConfig {
                host: cli.host,
                port: cli.port,
                ..Default::default()
            };
            let config = load_merged_config(cli_config).await;

            let options = SendOptions {
                addr: config.listen_addr(),
                request: NotificationRequest::new(title, message, level.into()),
            };
            return run_send(options).await;
        }
        None => {}
    }

    // Serve mode
    let cli_config = AppConfig {
        host: cli.host,
        port: cli.port,
        workers: cli.workers,
        app_name: cli.app_name,
    };
    let config = load_merged_config(cli_config).await;

    let options = ServeOptions {
        addr: config.listen_addr(),
        workers: config.workers_or_default(),
        app_name: config.app_name_or_default(),
    };

    run_server(options).await
}
