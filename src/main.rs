mod config;
mod controllers;
mod datasource;
mod error;
mod models;
mod routes;
mod services;

use clap::{Parser, Subcommand};
use config::constants;
use config::loader::Config;
use models::status_dto::ServiceStatus;
use routes::router::{create_routes, AppState};
use services::prepare::PrepareError;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bootstore", version)]
#[command(about = "Jubair Boot House storefront")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, global = true, default_value = constants::DEFAULT_CONFIG_FILE)]
    config: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web application (default)
    Serve,
    /// Check deployment files, generate a secret key and write the checklist
    Prepare {
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Create the schema and load a demo catalog into an empty database
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            serve(&cli.config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Seed => {
            let config = Config::load(&cli.config)?;
            let pool = datasource::db::init_pool(&config.database.url)?;
            services::seed::seed_demo_data(&pool).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Prepare { root } => Ok(exit_code(services::prepare::run(&root))),
    }
}

fn exit_code(result: Result<bool, PrepareError>) -> ExitCode {
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("deployment preparation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn serve(config_file: &str) -> anyhow::Result<()> {
    let config = Config::load(config_file)?;

    let pool = datasource::db::init_pool(&config.database.url)?;
    let status = ServiceStatus::new();

    services::startup::run(&pool, &status, &config).await;

    let addr = config.address();
    let app = create_routes(AppState::new(pool, config, status));

    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(e) => {
                error!("failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(e) => {
                error!("failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
