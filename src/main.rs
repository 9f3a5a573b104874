use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tradesignal::config::Config;
use tradesignal::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tradesignal=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Starting tradesignal server on {} with data from {}",
        config.bind_address(),
        config.data_dir.display()
    );

    let state = AppState::new(config);
    let symbols = state.loader.available_symbols();
    info!("Found {} symbols with price data: {:?}", symbols.len(), symbols);

    let addr = state.config.bind_address();
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("tradesignal server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
