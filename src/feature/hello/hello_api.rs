//! Implementation of the hello API. An API that returns a fixed greeting.

use crate::feature::hello::hello_service;
use axum::{routing::get, Router};
use tracing::instrument;

/// The hello API endpoints.
pub fn routes() -> Router {
    Router::new().route("/hello", get(hello))
}

/// A handler for requests to the hello endpoint.
#[utoipa::path(
    get,
    path = "/hello",
    responses(
        (status = 200, description = "Success", body = String),
    )
)]
#[instrument]
pub async fn hello() -> String {
    tracing::info!("Call GET /hello endpoint");
    hello_service::hello()
}

#[cfg(test)]
mod tests {
    use super::hello;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::instrument::WithSubscriber;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Counts events logged at info severity.
    #[derive(Clone, Default)]
    struct CountInfoEvents(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for CountInfoEvents {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::INFO {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    #[tokio::test]
    async fn hello_returns_greeting() {
        let response = hello().await;
        assert_eq!("Hello, World!", response);
    }

    #[tokio::test]
    async fn hello_is_idempotent() {
        let first = hello().await;
        let second = hello().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn hello_logs_exactly_one_info_event() {
        let count = CountInfoEvents::default();
        let subscriber = tracing_subscriber::registry().with(count.clone());
        hello().with_subscriber(subscriber).await;
        assert_eq!(1, count.0.load(Ordering::Relaxed));
    }
}
