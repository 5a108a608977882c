use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deadoralive::api::{create_router, AppState};
use deadoralive::config::Config;
use deadoralive::overrides::OverrideTable;
use deadoralive::wikidata::{EntitySource, WikidataClient};

#[derive(Parser)]
#[command(name = "deadoralive")]
#[command(about = "Tells you whether a person is dead or alive, using Wikidata")]
struct Args {
    /// Answer a single lookup on stdout and exit instead of serving HTTP
    #[arg(long, value_name = "TERM")]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deadoralive=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    tracing::info!("Using Wikidata API at {}", config.wikidata.base_url);
    let source: Arc<dyn EntitySource> = Arc::new(WikidataClient::new(&config.wikidata)?);

    let overrides = OverrideTable::from_config(&config.lookup)?;
    if overrides.is_empty() {
        tracing::warn!("Override table is empty - every lookup goes to Wikidata");
    }

    let state = AppState::new(config.clone(), source, overrides);

    if let Some(term) = args.query {
        let outcome = state.lookup.resolve_single(&term).await;
        println!("{}", state.renderer.reply(&term, &outcome));
        return Ok(());
    }

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Dead or Alive starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections...");
}
