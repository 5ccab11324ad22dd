use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use talentnav_auth::{AuthState, NavRole};
use talentnav_core::{DomainError, SessionId};
use talentnav_nav::{Locale, MenuState, NavContext};

use crate::app::{errors, AppState};
use crate::guard::{GuardOutcome, RouteGuard};
use crate::redirect::Location;
use crate::route_table::RouteMatch;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub personality: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NavQuery {
    pub locale: Option<String>,
}

fn session_of(auth: &AuthState) -> Option<SessionId> {
    auth.user().map(|user| SessionId::from(user.id))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(Extension(auth): Extension<AuthState>) -> impl IntoResponse {
    match auth.user() {
        Some(user) => Json(json!({
            "logged_in": true,
            "user_id": user.id.to_string(),
            "roles": user.roles().map(|r| r.as_str()).collect::<Vec<_>>(),
        })),
        None => Json(json!({ "logged_in": false })),
    }
}

/// GET /nav - the session's navigation role and menu state.
pub async fn nav(
    Extension(state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthState>,
    Query(query): Query<NavQuery>,
) -> Response {
    let locale = match query.locale.as_deref() {
        None => Locale::default(),
        Some(s) => match Locale::from_segment(s) {
            Some(locale) => locale,
            None => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_locale",
                    DomainError::validation("locale must be one of: en, fr").to_string(),
                );
            }
        },
    };

    let nav_role = session_of(&auth)
        .map(|session| state.sessions.nav_role(session, Utc::now()))
        .unwrap_or_default();

    Json(MenuState::build(nav_role, &auth, locale)).into_response()
}

/// POST /logout - end the caller's session and drop its navigation context.
pub async fn logout(
    Extension(state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthState>,
) -> Response {
    let ended = session_of(&auth)
        .map(|session| state.sessions.end(session))
        .unwrap_or(false);

    Json(json!({ "ended": ended })).into_response()
}

fn page_response(matched: &RouteMatch<'_>, pathname: &str, nav_role: NavRole, auth: &AuthState) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "page": matched.route.name(),
            "path": pathname,
            "locale": matched.locale,
            "params": matched.params,
            "nav_role": nav_role,
            "menu": MenuState::build(nav_role, auth, matched.locale),
        })),
    )
        .into_response()
}

/// Any other GET: resolve the page, run its guard, render.
pub async fn page(
    Extension(state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthState>,
    Query(query): Query<PageQuery>,
    uri: Uri,
) -> Response {
    let pathname = uri.path();
    let notices = state.notices.as_ref();

    let Some(matched) = state.routes.resolve(pathname) else {
        return errors::error_page(
            notices,
            pathname,
            StatusCode::NOT_FOUND,
            "not_found",
            DomainError::not_found(),
        );
    };

    let session = session_of(&auth);

    let Some(required) = matched.route.required() else {
        let nav_role = session
            .map(|session| state.sessions.nav_role(session, Utc::now()))
            .unwrap_or_default();
        return page_response(&matched, pathname, nav_role, &auth);
    };

    let location = Location {
        pathname: pathname.to_string(),
        personality: query.personality,
    };
    let mut guard = RouteGuard::new(required, state.login_path.clone());

    let outcome = match session {
        Some(session) => state
            .sessions
            .with_context(session, auth.expires_at, Utc::now(), |nav| {
                guard.check(&auth, &location, nav, notices)
            }),
        None => guard.check(&auth, &location, &mut NavContext::new(), notices),
    };

    match outcome {
        Ok(GuardOutcome::Redirect(redirect)) => Redirect::temporary(&redirect.to_uri()).into_response(),
        Ok(GuardOutcome::Render(nav_role)) => page_response(&matched, pathname, nav_role, &auth),
        Err(err) => errors::guard_error_to_response(notices, err),
    }
}
