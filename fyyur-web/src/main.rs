//! fyyur-web - venue/artist/show booking-listing service
//!
//! Serves server-rendered HTML pages over a SQLite database.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use fyyur_common::config::{load_config_file, Config, ConfigOrigin, Overrides};
use fyyur_common::db;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fyyur_web::{build_router, AppState};

/// Command-line arguments for fyyur-web
#[derive(Parser, Debug)]
#[command(name = "fyyur-web")]
#[command(about = "Venue, artist and show booking listings")]
#[command(version)]
struct Args {
    /// Address to listen on [default: 127.0.0.1:5000]
    #[arg(short, long, env = "FYYUR_BIND")]
    bind: Option<String>,

    /// SQLite database file
    #[arg(short, long, env = "FYYUR_DATABASE")]
    database: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, env = "FYYUR_CONFIG")]
    config: Option<PathBuf>,

    /// Tracing filter directive, e.g. "info" or "fyyur_web=debug" [default: info]
    #[arg(long, env = "FYYUR_LOG_LEVEL")]
    log_level: Option<String>,

    /// Also write logs to this file
    #[arg(long, env = "FYYUR_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Roll the schema back to this version and exit
    #[arg(long, value_name = "VERSION")]
    rollback_to: Option<i32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = load_config_file(args.config.as_deref()).context("Failed to load config file")?;
    let config = Config::resolve(
        Overrides {
            bind: args.bind,
            database_path: args.database,
            log_level: args.log_level,
            log_file: args.log_file,
        },
        loaded.file,
    );

    init_tracing(&config)?;

    info!(
        "Starting Fyyur (fyyur-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &loaded.origin {
        ConfigOrigin::Explicit(path) | ConfigOrigin::Default(path) => {
            info!("Config file: {}", path.display())
        }
        ConfigOrigin::Ignored { path, reason } => {
            warn!("Ignoring config file {}: {}", path.display(), reason)
        }
        ConfigOrigin::None => info!("No config file; using defaults"),
    }

    info!("Database path: {}", config.database_path.display());

    if let Some(target) = args.rollback_to {
        let pool = db::open_database(&config.database_path)
            .await
            .context("Failed to open database")?;
        db::rollback_migrations(&pool, target)
            .await
            .with_context(|| format!("Failed to roll back schema to v{}", target))?;
        info!("Schema rolled back to v{}", target);
        return Ok(());
    }

    let pool = db::init_database(&config.database_path)
        .await
        .context("Failed to initialize database")?;
    info!("✓ Database ready");

    let app = build_router(AppState::new(pool));

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;
    info!("fyyur-web listening on http://{}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Console logging plus an optional append-only log file
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
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

    info!("Shutdown signal received");
}
