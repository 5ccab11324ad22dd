//! Menu presentation state derived from the user's roles and the current
//! navigation role.

use serde::Serialize;

use talentnav_auth::{map_to_nav_role, AuthState, AuthorizationRole, NavRole};

use crate::selector::choose_nav_role;

/// Interface language; paths are prefixed with it.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }
}

/// Display label for the role switcher.
pub fn nav_role_label(role: NavRole) -> &'static str {
    match role {
        NavRole::Guest => "Guest",
        NavRole::Applicant => "Applicant",
        NavRole::Manager => "Manager",
        NavRole::Community => "Community",
        NavRole::Admin => "Admin",
    }
}

/// Unlocalized dashboard path for a navigation role.
pub fn dashboard_path(role: NavRole) -> &'static str {
    match role {
        NavRole::Guest => "/",
        NavRole::Applicant => "/applicant",
        NavRole::Manager => "/manager",
        NavRole::Community | NavRole::Admin => "/admin",
    }
}

pub fn dashboard_href(role: NavRole, locale: Locale) -> String {
    match dashboard_path(role) {
        "/" => format!("/{}", locale.as_str()),
        path => format!("/{}{}", locale.as_str(), path),
    }
}

/// Role assignments that say something about navigation (`base_user` does not).
fn useful_roles(auth: &AuthState) -> Vec<AuthorizationRole> {
    auth.user()
        .map(|user| {
            user.roles()
                .filter(|role| *role != AuthorizationRole::BaseUser)
                .collect()
        })
        .unwrap_or_default()
}

/// Distinct navigation roles reachable from `roles`, least privileged first.
pub fn available_nav_roles(roles: impl IntoIterator<Item = AuthorizationRole>) -> Vec<NavRole> {
    let mut out: Vec<NavRole> = roles
        .into_iter()
        .map(map_to_nav_role)
        .filter(|role| *role != NavRole::Guest)
        .collect();
    out.sort();
    out.dedup();
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleLink {
    pub nav_role: NavRole,
    pub label: &'static str,
    pub href: String,
    /// Following this link would land on the current navigation role.
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuState {
    pub nav_role: NavRole,
    pub label: &'static str,
    pub dashboard: String,
    pub show_role_switcher: bool,
    pub hide_home_link: bool,
    pub role_links: Vec<RoleLink>,
}

impl MenuState {
    pub fn build(nav_role: NavRole, auth: &AuthState, locale: Locale) -> Self {
        let useful = useful_roles(auth);

        let only_applicant = useful.len() == 1 && useful[0] == AuthorizationRole::Applicant;
        let only_one_not_applicant = useful.len() == 1 && !only_applicant;
        let show_role_switcher = only_one_not_applicant || useful.len() > 1;
        let hide_home_link = !auth.logged_in || only_applicant || useful.is_empty();

        let role_links = if show_role_switcher {
            available_nav_roles(useful.iter().copied())
                .into_iter()
                .map(|role| RoleLink {
                    nav_role: role,
                    label: nav_role_label(role),
                    href: dashboard_href(role, locale),
                    is_selected: nav_role == choose_nav_role(role, &useful),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            nav_role,
            label: nav_role_label(nav_role),
            dashboard: dashboard_href(nav_role, locale),
            show_role_switcher,
            hide_home_link,
            role_links,
        }
    }
}
