use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use furryhaven::config::{Config, RunMode};
use furryhaven::{app, db, load_index_template, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if it exists
    dotenvy::dotenv().ok();

    // Initialize Tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "furryhaven=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Starting FurryHaven ({})...",
        if config.mode == RunMode::Production { "production" } else { "development" }
    );

    let db_pool = db::init_pool(config.seed_data).await?;
    tracing::info!(
        "Store ready: {} animals, {} shop items, {} donation options",
        db::list_animals(&db_pool).await?.len(),
        db::list_shop_items(&db_pool).await?.len(),
        db::list_donation_options(&db_pool).await?.len(),
    );

    let index_template = load_index_template(&config.static_dir);
    let state = AppState::new(db_pool, index_template);
    let router = app(state, &config);

    let addr = config.addr();
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {}", e);
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

    tracing::info!("signal received, starting graceful shutdown");
}
