//! REST backend for the ministry matching service.
//!
//! The React SPA consumes `/api/...` and is itself served from the
//! configured frontend directory as the route fallback.

pub mod error;
pub mod routes;

use axum::extract::FromRef;
use axum::routing::{get, post};
use axum::Router;
use ministry_match_config::Config;
use ministry_match_store::Store;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::info;

use crate::error::AppError;

#[derive(Clone, FromRef)]
pub struct AppState {
    store: Store,
}

async fn health() -> &'static str {
    "ok"
}

fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/catalog/gifts", get(routes::catalog::gifts))
        .route("/api/catalog/abilities", get(routes::catalog::abilities))
        .route(
            "/api/orgs/:org/opportunities",
            post(routes::opportunities::create).get(routes::opportunities::list),
        )
        .route(
            "/api/orgs/:org/opportunities/:id",
            get(routes::opportunities::get)
                .put(routes::opportunities::update)
                .delete(routes::opportunities::delete),
        )
        .route(
            "/api/orgs/:org/members/:member/assessment",
            post(routes::assessments::submit),
        )
        .route(
            "/api/orgs/:org/members/:member/profile",
            get(routes::assessments::profile),
        )
        .route(
            "/api/orgs/:org/members/:member/matches",
            get(routes::matches::list),
        )
}

fn layers(app: Router<()>) -> Router<()> {
    // layers are in reverse order
    let app = app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::default())
            .on_response(DefaultOnResponse::default()),
    );
    let app = app.layer(CatchPanicLayer::new());
    app.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// The complete application, ready to serve or to drive directly in tests.
#[must_use]
pub fn app(config: &Config, store: Store) -> Router {
    let spa = ServeDir::new(&config.frontend_dir);
    let app = router()
        .fallback_service(spa)
        .with_state(AppState { store });
    layers(app)
}

pub async fn run_server(config: Config) -> Result<(), AppError> {
    let listener = TcpListener::bind(&config.url).await?;
    info!("listening on {}", listener.local_addr()?);
    let app = app(&config, Store::new());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

// https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs
#[allow(clippy::redundant_pub_crate)]
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
