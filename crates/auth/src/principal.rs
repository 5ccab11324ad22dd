use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use talentnav_core::UserId;

use crate::AuthorizationRole;

/// Named role reference inside a role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    pub name: AuthorizationRole,
}

/// One role granted to a user (shape mirrors the authorization API's
/// `roleAssignments[].role.name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: RoleRef,
}

impl RoleAssignment {
    pub fn new(role: AuthorizationRole) -> Self {
        Self {
            role: RoleRef { name: role },
        }
    }

    pub fn role(&self) -> AuthorizationRole {
        self.role.name
    }
}

/// Authorization view of a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAuthInfo {
    pub id: UserId,
    #[serde(rename = "roleAssignments")]
    pub role_assignments: Vec<RoleAssignment>,
}

impl UserAuthInfo {
    pub fn new(id: UserId, roles: impl IntoIterator<Item = AuthorizationRole>) -> Self {
        Self {
            id,
            role_assignments: roles.into_iter().map(RoleAssignment::new).collect(),
        }
    }

    /// Granted roles, in assignment order.
    pub fn roles(&self) -> impl Iterator<Item = AuthorizationRole> + '_ {
        self.role_assignments.iter().map(RoleAssignment::role)
    }

    pub fn has_role(&self, role: AuthorizationRole) -> bool {
        self.roles().any(|r| r == role)
    }
}

/// Authentication state handed to guards and menus.
///
/// `user` is only meaningful when `logged_in` is set. `expires_at` is the end
/// of the signed-in session, when known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub logged_in: bool,
    pub user: Option<UserAuthInfo>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserAuthInfo) -> Self {
        Self {
            logged_in: true,
            user: Some(user),
            expires_at: None,
        }
    }

    pub fn expiring_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn user(&self) -> Option<&UserAuthInfo> {
        if self.logged_in {
            self.user.as_ref()
        } else {
            None
        }
    }
}
