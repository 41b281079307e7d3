//! A hello world web service with axum.

use hello_demo::infra::{config, logging};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _guard = logging::init_logging();
    let config = config::load_config()?;

    let listener = TcpListener::bind(&format!(
        "{}:{}",
        config.server.http_address, config.server.http_port
    ))
    .await?;
    hello_demo::server::run_app(listener).await?;

    Ok(())
}
