//! Per-session navigation contexts.
//!
//! Each session owns exactly one [`NavContext`]. Handlers borrow it for the
//! duration of one closure, so every update runs to completion before the
//! next request for the same session sees it.
//!
//! A context lives until its session ends: explicit sign-out ([`SessionRegistry::end`])
//! or expiry of the token that created it. Expired entries are swept on every
//! access.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use talentnav_auth::NavRole;
use talentnav_core::SessionId;
use talentnav_nav::NavContext;

#[derive(Debug)]
struct SessionEntry {
    nav: NavContext,
    /// `None` never expires (sessions created without a token window).
    expires_at: Option<DateTime<Utc>>,
}

impl SessionEntry {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<Mutex<HashMap<SessionId, SessionEntry>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, SessionEntry>> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn sweep(sessions: &mut HashMap<SessionId, SessionEntry>, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, entry| entry.is_live(now));
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, "expired nav contexts evicted");
        }
    }

    /// Run `f` against the session's context, creating it on first use.
    ///
    /// `expires_at` is the end of the session as known from the current
    /// request; a later value extends the entry.
    pub fn with_context<R>(
        &self,
        session: SessionId,
        expires_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
        f: impl FnOnce(&mut NavContext) -> R,
    ) -> R {
        let mut sessions = self.lock();
        Self::sweep(&mut sessions, now);

        let entry = sessions.entry(session).or_insert_with(|| {
            tracing::debug!(%session, "nav context created");
            SessionEntry {
                nav: NavContext::new(),
                expires_at,
            }
        });
        if expires_at > entry.expires_at {
            entry.expires_at = expires_at;
        }
        f(&mut entry.nav)
    }

    /// Current role of a session; unknown or expired sessions are guests.
    pub fn nav_role(&self, session: SessionId, now: DateTime<Utc>) -> NavRole {
        self.lock()
            .get(&session)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.nav.nav_role())
            .unwrap_or_default()
    }

    /// Drop a session's context (sign-out).
    pub fn end(&self, session: SessionId) -> bool {
        let ended = self.lock().remove(&session).is_some();
        if ended {
            tracing::debug!(%session, "nav context ended");
        }
        ended
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
