use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use talentnav_auth::{AuthState, JwtValidator};

use crate::app::errors::json_error;

#[derive(Clone)]
pub struct AuthLayerState {
    pub jwt: Arc<dyn JwtValidator>,
}

/// Resolve the caller's [`AuthState`] and attach it to the request.
///
/// A missing `Authorization` header means an anonymous visitor; guards decide
/// what that means for each page. A header that is present but unusable is
/// rejected outright.
pub async fn auth_middleware(
    State(state): State<AuthLayerState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let auth = match extract_bearer(req.headers()) {
        Ok(None) => AuthState::anonymous(),
        Ok(Some(token)) => match state.jwt.validate(token, Utc::now()) {
            Ok(claims) => claims.auth_state(),
            Err(e) => {
                tracing::debug!(error = %e, "rejected bearer token");
                return json_error(StatusCode::UNAUTHORIZED, "invalid_token", e.to_string());
            }
        },
        Err(status) => {
            return json_error(status, "invalid_token", "malformed authorization header");
        }
    };

    req.extensions_mut().insert(auth);
    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Result<Option<&str>, StatusCode> {
    let Some(header) = headers.get(axum::http::header::AUTHORIZATION) else {
        return Ok(None);
    };

    let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(Some(token))
}
