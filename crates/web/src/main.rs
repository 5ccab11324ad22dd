use anyhow::Context;

use talentnav_web::{app, WebConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    talentnav_observability::init();

    let config = WebConfig::from_env().context("reading configuration")?;
    let app = app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, login_path = %config.login_path, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
