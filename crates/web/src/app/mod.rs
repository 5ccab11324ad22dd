//! HTTP application wiring (Axum router + shared state).
//!
//! - `routes.rs`: handlers for health, identity, menu, sign-out and guarded pages
//! - `errors.rs`: consistent error responses and error-page notices

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower::ServiceBuilder;

use crate::config::WebConfig;
use crate::middleware;
use crate::notice::{NoticeSink, TracingNoticeSink};
use crate::route_table::RouteTable;
use crate::session::SessionRegistry;

pub mod errors;
pub mod routes;

/// State shared by every handler.
pub struct AppState {
    pub routes: RouteTable,
    pub sessions: SessionRegistry,
    pub login_path: String,
    pub notices: Arc<dyn NoticeSink>,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &WebConfig) -> Router {
    build_app_with_notices(config, Arc::new(TracingNoticeSink))
}

pub fn build_app_with_notices(config: &WebConfig, notices: Arc<dyn NoticeSink>) -> Router {
    let jwt = Arc::new(talentnav_auth::Hs256JwtValidator::new(
        config.jwt_secret.clone().into_bytes(),
    ));
    let auth_state = middleware::AuthLayerState { jwt };

    let state = Arc::new(AppState {
        routes: RouteTable::default_routes(),
        sessions: SessionRegistry::new(),
        login_path: config.login_path.clone(),
        notices,
    });

    Router::new()
        .route("/health", get(routes::health))
        .route("/whoami", get(routes::whoami))
        .route("/nav", get(routes::nav))
        .route("/logout", post(routes::logout))
        .fallback(routes::page)
        .layer(Extension(state))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ))
        .layer(ServiceBuilder::new())
}
