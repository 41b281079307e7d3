//! Server assembly and startup.
//!
//! # Examples
//!
//! Hello API.
//!
//! ```rust
//! # tokio_test::block_on(async {
//! # let url = hello_demo::server::spawn_app().await;
//! let response = reqwest::get(format!("{}/hello", url)).await.unwrap();
//! assert_eq!(200, response.status());
//! assert_eq!("Hello, World!", response.text().await.unwrap());
//! # });
//! ```
//!
//! Undefined routes give 404.
//!
//! ```rust
//! # tokio_test::block_on(async {
//! # let url = hello_demo::server::spawn_app().await;
//! let response = reqwest::get(format!("{}/goodbye", url)).await.unwrap();
//! assert_eq!(404, response.status());
//! # });
//! ```

use crate::feature::hello::hello_api;
use crate::infra::error::{ApiError, ClientError, InternalError, PanicHandler};
use crate::infra::middleware::MakeRequestIdSpan;
use crate::infra::openapi::ApiDoc;
use crate::infra::shutdown::shutdown_signal;
use axum::error_handling::HandleErrorLayer;
use axum::response::IntoResponse;
use axum::Router;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// A handler for requests to undefined routes.
async fn fallback() -> ApiError {
    ApiError::ClientError(ClientError::NotFound)
}

/// Constructs the full axum application.
pub fn app() -> Router {
    // Fallible middleware from tower, mapped to infallible response with [`HandleErrorLayer`].
    let tower_middleware = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(|e| async move {
            InternalError::Other(format!("Tower middleware failed: {e}")).into_response()
        }))
        .concurrency_limit(100);

    // The API plus its documentation.
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api.json", ApiDoc::openapi()))
        .merge(hello_api::routes())
        .fallback(fallback)
        // Layers
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(MakeRequestIdSpan)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(()),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(tower_middleware)
        .layer(CatchPanicLayer::custom(PanicHandler))
}

/// Starts the axum server.
pub async fn run_app(addr: TcpListener) -> anyhow::Result<()> {
    let app = app().into_make_service();

    tracing::info!("Starting axum on {}", addr.local_addr()?);
    let exit_result = axum::serve(addr, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    match exit_result {
        Ok(_) => tracing::info!("Successfully shut down"),
        Err(e) => tracing::error!("Shutdown failed: {}", e),
    }

    Ok(())
}

/// Spawn a server on a random port.
pub async fn spawn_app() -> String {
    let address = "127.0.0.1";
    let listener = TcpListener::bind(format!("{address}:0")).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(run_app(listener));
    format!("http://{address}:{port}")
}
