use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{middleware, Json, Router};
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::RequestError;
use crate::server::middleware::{
    cors_layer, panic_response, preflight_no_content, rate_limit, with_security_headers,
};
use crate::server::resources::{create_resource, delete_resource, list_resources};
use crate::server::state::AppState;
use crate::server::users::{create_user, delete_user, list_users, update_user};

pub fn build(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route(
            "/users",
            get(list_users)
                .post(create_user)
                .put(update_user)
                .patch(update_user)
                .delete(delete_user)
                .fallback(method_not_allowed),
        )
        .route(
            "/users/:id",
            delete(delete_user)
                .put(update_user)
                .patch(update_user)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/resources",
            get(list_resources)
                .post(create_resource)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/resources/:id",
            delete(delete_resource).fallback(method_not_allowed),
        )
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit));

    let routes = Router::new()
        .merge(api)
        .route("/healthz", get(health).fallback(method_not_allowed));
    with_common_layers(routes, &state.config.server).with_state(state)
}

/// JSON fallback plus the layers every response goes through, innermost first:
/// panic recovery, CORS, preflight status, security headers, tracing.
pub fn with_common_layers<S>(routes: Router<S>, config: &ServerConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let app = routes
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(&config.allowed_origins))
        .layer(middleware::from_fn(preflight_no_content));
    with_security_headers(app).layer(TraceLayer::new_for_http())
}

pub async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = state.config.server.address();
    let app = build(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("starting server on: {}", listener.local_addr()?);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;
    info!("server stopped accepting connections");
    Ok(())
}

#[derive(Clone, Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    match state.db_connection.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse { ok: true })),
        Err(e) => {
            warn!("health check failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse { ok: false }),
            )
        }
    }
}

pub async fn route_not_found() -> RequestError {
    RequestError::RouteNotFound
}

pub async fn method_not_allowed() -> RequestError {
    RequestError::MethodNotAllowed
}

/// Resolves on Ctrl-C or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("failed to listen for SIGTERM: {e}");
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

    info!("shutdown signal received, draining connections");
}
