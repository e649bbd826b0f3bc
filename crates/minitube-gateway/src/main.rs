use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use jiff::Timestamp;
use minitube_gateway::app::cors_layer;
use minitube_gateway::cli::{Cli, StorageBackendArg};
use minitube_gateway::{App, AppState};
use minitube_generator::ObjectIdGenerator;
use minitube_service::{seed_catalog, VideoService};
use minitube_storage::{InMemoryRepository, MySqlRepository, Repository};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    minitube_telemetry::init(cli.log_format.into())?;

    info!(
        listen_addr = %cli.listen_addr,
        storage_backend = %cli.storage,
        cors_origins = ?cli.cors_origins,
        seed = cli.seed,
        "starting minitube gateway"
    );

    let cors = cors_layer(&cli.cors_origins).context("invalid CORS origin")?;

    match cli.storage {
        StorageBackendArg::InMemory => run_server(&cli, InMemoryRepository::new(), cors).await,
        StorageBackendArg::Mysql => {
            let mysql_dsn = cli
                .mysql_dsn
                .as_deref()
                .context("mysql dsn is required when storage backend is mysql")?;
            let repository = MySqlRepository::connect(mysql_dsn).await?;
            repository.migrate().await?;
            run_server(&cli, repository, cors).await
        }
    }
}

async fn run_server<R: Repository>(cli: &Cli, repository: R, cors: CorsLayer) -> anyhow::Result<()> {
    let generator = ObjectIdGenerator::new();

    if cli.seed {
        seed_catalog(&repository, &generator, Timestamp::now())
            .await
            .context("failed to seed the demo catalog")?;
    }

    let service = VideoService::new(repository, generator);
    let app = App::service(AppState::new(Arc::new(service)), cors);

    let listener = TcpListener::bind(cli.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", cli.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "serving video API");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
