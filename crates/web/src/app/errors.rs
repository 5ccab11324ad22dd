use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::guard::GuardError;
use crate::notice::{NoticeEvent, NoticeSink};

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Render an error page response and record that the error boundary fired.
pub fn error_page(
    notices: &dyn NoticeSink,
    pathname: &str,
    status: StatusCode,
    code: &'static str,
    err: impl ToString,
) -> axum::response::Response {
    let message = err.to_string();
    notices.notice(NoticeEvent::new("Error page rendered", pathname).with_error(&message));
    json_error(status, code, message)
}

pub fn guard_error_to_response(
    notices: &dyn NoticeSink,
    err: GuardError,
) -> axum::response::Response {
    let GuardError::Unauthorized { pathname } = &err;
    error_page(notices, pathname, StatusCode::FORBIDDEN, "unauthorized", &err)
}
