use ministry_match_backend::error::AppError;
use ministry_match_backend::run_server;
use ministry_match_config::get_config;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

// RUST_LOG=tower_http::trace=TRACE cargo run --bin server

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = get_config()?;
    run_server(config).await
}
