//! HTTP front end for the Game of Life engine: a JSON API under `/api/game`
//! plus the static web UI.

pub mod error;
pub mod handlers;
pub mod state;

use std::io;
use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{HeaderValue, header};
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::ApiError;
pub use state::AppState;

use handlers::{
    cell_handler, method_not_allowed, next_handler, not_found, pattern_handler, patterns_handler,
    random_handler, reset_handler, state_handler,
};

/// Builds the application router. Anything outside `/api/game` is served
/// from `static_dir`, with `/` mapped to `index.html`.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let api = Router::new()
        .route("/state", get(state_handler).fallback(method_not_allowed))
        .route("/next", post(next_handler).fallback(method_not_allowed))
        .route("/reset", post(reset_handler).fallback(method_not_allowed))
        .route("/random", post(random_handler).fallback(method_not_allowed))
        .route("/pattern", post(pattern_handler).fallback(method_not_allowed))
        .route("/patterns", get(patterns_handler).fallback(method_not_allowed))
        .route("/cell", post(cell_handler).fallback(method_not_allowed));

    let static_files = ServeDir::new(static_dir).not_found_service(not_found.into_service());

    Router::new()
        .nest("/api/game", api)
        .fallback_service(static_files)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `bind` and serves until Ctrl-C.
pub async fn serve(bind: SocketAddr, static_dir: &Path) -> io::Result<()> {
    let app = router(AppState::new(), static_dir);
    let listener = TcpListener::bind(bind).await?;

    info!("Serving static files from: {}", static_dir.display());
    info!("Game of Life: http://{}", listener.local_addr()?);
    info!("API available under http://{}/api/game/", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
