//! Route guard for protected pages.
//!
//! A guard is mounted per page with the page's required roles. On each check
//! it either redirects anonymous users to sign in, rejects users without a
//! matching role, or reports the page's requirement to the session's
//! [`NavContext`] and lets the page render.

use thiserror::Error;

use talentnav_auth::{authorize_any, AuthState, AuthorizationRole, AuthzError, NavRole};
use talentnav_nav::NavContext;

use crate::notice::{NoticeEvent, NoticeSink};
use crate::redirect::{Location, LoginRedirect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Not signed in: send the user to the login page; render nothing.
    Redirect(LoginRedirect),
    /// Authorized: render the page under this navigation role.
    Render(NavRole),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuardError {
    #[error("unauthorized access to '{pathname}'")]
    Unauthorized { pathname: String },
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    required: Vec<AuthorizationRole>,
    login_path: String,
    /// Whether the nav context has been told about the current authorized outcome.
    notified: bool,
}

impl RouteGuard {
    pub fn new(required: impl Into<Vec<AuthorizationRole>>, login_path: impl Into<String>) -> Self {
        Self {
            required: required.into(),
            login_path: login_path.into(),
            notified: false,
        }
    }

    pub fn required(&self) -> &[AuthorizationRole] {
        &self.required
    }

    pub fn check(
        &mut self,
        auth: &AuthState,
        location: &Location,
        nav: &mut NavContext,
        notices: &dyn NoticeSink,
    ) -> Result<GuardOutcome, GuardError> {
        match authorize_any(auth.user(), &self.required) {
            Ok(()) => {
                if !self.notified {
                    // Only the page's requirement goes to the nav context, never
                    // everything the user holds.
                    nav.on_authorized_roles_changed(&self.required);
                    self.notified = true;
                }
                Ok(GuardOutcome::Render(nav.nav_role()))
            }
            Err(AuthzError::Unauthenticated) => {
                self.notified = false;
                Ok(GuardOutcome::Redirect(LoginRedirect::new(
                    self.login_path.clone(),
                    location,
                )))
            }
            Err(err @ AuthzError::Forbidden(_)) => {
                self.notified = false;
                notices.notice(
                    NoticeEvent::new("Unauthorized access attempt", location.pathname.clone())
                        .with_error(err),
                );
                Err(GuardError::Unauthorized {
                    pathname: location.pathname.clone(),
                })
            }
        }
    }
}
