use std::net::SocketAddr;
use std::sync::Arc;

use api::{app, config::Config, state::AppState};
use lambda_http::{run, Error};
use shared::repositories::game_store::GameStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    // One store for the whole process; it lives until exit.
    let state = AppState::new(Arc::new(GameStore::new()));
    let app = app(state);

    if config.lambda_runtime {
        std::env::set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

        // required to enable CloudWatch error logging by the runtime
        lambda_http::tracing::init_default_subscriber();
        tracing::info!("AWS Lambda runtime detected; serving games api through lambda_http");
        return run(app).await;
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    tracing::info!(bind_addr = %config.bind_addr, "games api listening");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("games api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
