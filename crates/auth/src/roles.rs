use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fine-grained role assigned to a user by the authorization system.
///
/// The set is closed: every value maps to exactly one [`NavRole`] through
/// [`map_to_nav_role`], and adding a variant without extending that match is a
/// compile error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationRole {
    Guest,
    BaseUser,
    Applicant,
    Manager,
    PoolOperator,
    RequestResponder,
    CommunityManager,
    ProcessOperator,
    CommunityRecruiter,
    CommunityAdmin,
    PlatformAdmin,
}

impl AuthorizationRole {
    pub const ALL: [AuthorizationRole; 11] = [
        Self::Guest,
        Self::BaseUser,
        Self::Applicant,
        Self::Manager,
        Self::PoolOperator,
        Self::RequestResponder,
        Self::CommunityManager,
        Self::ProcessOperator,
        Self::CommunityRecruiter,
        Self::CommunityAdmin,
        Self::PlatformAdmin,
    ];

    /// Wire name, as carried in tokens and role assignments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::BaseUser => "base_user",
            Self::Applicant => "applicant",
            Self::Manager => "manager",
            Self::PoolOperator => "pool_operator",
            Self::RequestResponder => "request_responder",
            Self::CommunityManager => "community_manager",
            Self::ProcessOperator => "process_operator",
            Self::CommunityRecruiter => "community_recruiter",
            Self::CommunityAdmin => "community_admin",
            Self::PlatformAdmin => "platform_admin",
        }
    }

    pub fn nav_role(&self) -> NavRole {
        map_to_nav_role(*self)
    }
}

impl core::fmt::Display for AuthorizationRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown authorization role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for AuthorizationRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Coarse navigation perspective: which menu and dashboard a user sees.
///
/// Ordered from least to most privileged. The order comes from [`NavRole::rank`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavRole {
    #[default]
    Guest,
    Applicant,
    Manager,
    Community,
    Admin,
}

impl NavRole {
    pub const ALL: [NavRole; 5] = [
        Self::Guest,
        Self::Applicant,
        Self::Manager,
        Self::Community,
        Self::Admin,
    ];

    /// Privilege rank: `guest = 0` through `admin = 4`.
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Guest => 0,
            Self::Applicant => 1,
            Self::Manager => 2,
            Self::Community => 3,
            Self::Admin => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Applicant => "applicant",
            Self::Manager => "manager",
            Self::Community => "community",
            Self::Admin => "admin",
        }
    }
}

impl PartialOrd for NavRole {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NavRole {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl core::fmt::Display for NavRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a fine-grained authorization role onto its navigation role.
pub fn map_to_nav_role(role: AuthorizationRole) -> NavRole {
    use AuthorizationRole::*;

    match role {
        Guest | BaseUser => NavRole::Guest,
        Applicant => NavRole::Applicant,
        Manager => NavRole::Manager,
        PoolOperator | RequestResponder | CommunityManager | ProcessOperator
        | CommunityRecruiter | CommunityAdmin => NavRole::Community,
        PlatformAdmin => NavRole::Admin,
    }
}
