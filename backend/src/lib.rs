//! Backend for the Smart POS marketing site.
//!
//! Serves the contact form endpoint, the plan catalog and, optionally, the
//! built frontend.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod notifications;
pub mod handlers {
    pub mod contact_handlers;
    pub mod plan_handlers;
}

use config::{Config, NotifyFailurePolicy};
use handlers::{contact_handlers, plan_handlers};
use notifications::NotificationSink;

const MAX_BODY_BYTES: usize = 64 * 1024;

pub struct AppState {
    pub notifier: Arc<dyn NotificationSink>,
    pub notify_policy: NotifyFailurePolicy,
}

impl AppState {
    pub fn new(notifier: Arc<dyn NotificationSink>, notify_policy: NotifyFailurePolicy) -> Self {
        Self {
            notifier,
            notify_policy,
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}

pub fn app(state: Arc<AppState>, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(allowed_origin(config));

    let router = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/plans", get(plan_handlers::get_plans))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state);

    match &config.static_dir {
        Some(dir) => {
            let index = dir.join("index.html");
            router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => router,
    }
}

fn allowed_origin(config: &Config) -> AllowOrigin {
    match config.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(e)) => {
            tracing::warn!("FRONTEND_URL is not a valid header value ({}), allowing any origin", e);
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    }
}
