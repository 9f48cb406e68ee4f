use anyhow::Result;
use catalog_core::{
    application::services::ApplicationServices,
    config::{AppConfig, StorageBackend},
    domain::article::ArticleRepository,
    infrastructure::{
        database,
        repositories::{InMemoryArticleRepository, SqliteArticleRepository},
    },
    presentation::http::{
        routes::{RouterOptions, build_router},
        state::HttpState,
    },
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let article_repo = build_article_repository(&config).await?;

    let state = HttpState {
        services: Arc::new(ApplicationServices::new(article_repo)),
    };

    let app = build_router(
        state,
        RouterOptions {
            allowed_origins: config.allowed_origins().to_vec(),
            serve_docs: config.is_development(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_article_repository(config: &AppConfig) -> Result<Arc<dyn ArticleRepository>> {
    match config.backend() {
        StorageBackend::InMemory => {
            tracing::info!("using in-memory article store");
            Ok(Arc::new(InMemoryArticleRepository::new()))
        }
        StorageBackend::Sqlite => {
            tracing::info!(database_url = config.database_url(), "using sqlite article store");
            let pool = database::init_pool(
                config.database_url(),
                config.max_connections(),
                config.command_timeout(),
            )
            .await?;
            database::run_migrations(&pool).await?;
            Ok(Arc::new(SqliteArticleRepository::new(
                Arc::new(pool),
                config.command_timeout(),
            )))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
