//! `taskboard` server: serves the task API over HTTP.
//!
//! Configuration is read from the environment (and a `.env` file when
//! present); see [`taskboard::config`] for the variables.

use std::process::ExitCode;
use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use taskboard::{
    api::{AppState, router},
    config::{ConfigurationError, LogFormat, ServerConfig, StorageMode},
    task::{
        adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
        ports::{TaskRepository, TaskRepositoryError},
        services::TaskLifecycleService,
    },
    telemetry,
};
use thiserror::Error;
use tokio::{net::TcpListener, signal};

#[derive(Debug, Error)]
enum ServeError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("task store unavailable: {0}")]
    Store(#[from] TaskRepositoryError),
    #[error("listener failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let loaded = ServerConfig::from_env();
    let format = loaded
        .as_ref()
        .map_or(LogFormat::Pretty, |config| config.log_format);
    if telemetry::init(format).is_err() {
        return ExitCode::FAILURE;
    }

    match run(loaded).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "taskboard stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(loaded: Result<ServerConfig, ConfigurationError>) -> Result<(), ServeError> {
    let config = loaded?;
    let clock = Arc::new(DefaultClock);
    match config.storage_mode {
        StorageMode::InMemory => {
            serve(&config, Arc::new(InMemoryTaskRepository::new()), clock).await
        }
        StorageMode::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or(ConfigurationError::MissingDatabaseUrl)?;
            let repository = PostgresTaskRepository::connect(url, config.pool_size).await?;
            serve(&config, Arc::new(repository), clock).await
        }
    }
}

async fn serve<R, C>(
    config: &ServerConfig,
    repository: Arc<R>,
    clock: Arc<C>,
) -> Result<(), ServeError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let app = router(AppState::new(TaskLifecycleService::new(repository, clock)));
    let listener = TcpListener::bind(config.listen).await?;
    tracing::info!(
        address = %config.listen,
        storage = ?config.storage_mode,
        "taskboard listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("taskboard shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
