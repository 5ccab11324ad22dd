//! Navigation context store.
//!
//! One instance per session. It is the only writer of the current `NavRole`;
//! everything else reads it through [`NavContext::nav_role`]. Mutation takes
//! `&mut self`, so whoever owns the context decides who may write.

use talentnav_auth::{AuthorizationRole, NavRole};

use crate::selector::choose_nav_role;

type Listener = Box<dyn FnMut(NavRole) + Send>;

pub struct NavContext {
    nav_role: NavRole,
    listeners: Vec<Listener>,
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            nav_role: NavRole::Guest,
            listeners: Vec::new(),
        }
    }

    pub fn nav_role(&self) -> NavRole {
        self.nav_role
    }

    /// Register an observer called with the new role after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(NavRole) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Re-derive the navigation role for a page requiring `roles`.
    ///
    /// Returns the role now held. Listeners only fire when it changed.
    pub fn on_authorized_roles_changed(&mut self, roles: &[AuthorizationRole]) -> NavRole {
        let previous = self.nav_role;
        let next = choose_nav_role(previous, roles);

        if next != previous {
            tracing::debug!(from = %previous, to = %next, "nav role changed");
            self.nav_role = next;
            for listener in &mut self.listeners {
                listener(next);
            }
        }

        next
    }
}

impl Default for NavContext {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for NavContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavContext")
            .field("nav_role", &self.nav_role)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
