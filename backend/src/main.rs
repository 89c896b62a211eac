use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use smartpos_backend::{app, config::Config, notifications, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        }))
    });

    let notifier = notifications::from_config(&config);
    let state = Arc::new(AppState::new(notifier, config.notify_policy));
    let app = app(state, &config);

    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("Listening on {}", config.socket_addr());
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
