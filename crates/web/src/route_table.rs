//! Page routes and the roles each one requires.
//!
//! Patterns are unlocalized (`/admin/pools/:poolId`); incoming paths may carry
//! an `/en` or `/fr` prefix which is stripped before matching. The first
//! matching route in declaration order wins.

use std::collections::BTreeMap;

use talentnav_auth::AuthorizationRole;
use talentnav_nav::Locale;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    /// Trailing `*`: matches the rest of the path, including nothing.
    Rest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    name: String,
    pattern: String,
    segments: Vec<Segment>,
    required: Option<Vec<AuthorizationRole>>,
}

impl Route {
    fn parse(name: &str, pattern: &str, required: Option<Vec<AuthorizationRole>>) -> Self {
        let segments = split(pattern)
            .map(|segment| match segment {
                "*" => Segment::Rest,
                s if s.starts_with(':') => Segment::Param(s[1..].to_string()),
                s => Segment::Literal(s.to_string()),
            })
            .collect();

        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            segments,
            required,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Roles that may view the page; `None` for public pages.
    pub fn required(&self) -> Option<&[AuthorizationRole]> {
        self.required.as_deref()
    }

    fn matches(&self, parts: &[&str]) -> Option<BTreeMap<String, String>> {
        let mut params = BTreeMap::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Rest => return Some(params),
                Segment::Literal(lit) => {
                    if parts.get(i) != Some(&lit.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(i)?;
                    params.insert(name.clone(), (*value).to_string());
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub locale: Locale,
    pub params: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn public(mut self, name: &str, pattern: &str) -> Self {
        self.routes.push(Route::parse(name, pattern, None));
        self
    }

    pub fn protected(mut self, name: &str, pattern: &str, required: &[AuthorizationRole]) -> Self {
        self.routes
            .push(Route::parse(name, pattern, Some(required.to_vec())));
        self
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let mut parts: Vec<&str> = split(path).collect();

        let locale = match parts.first().and_then(|s| Locale::from_segment(s)) {
            Some(locale) => {
                parts.remove(0);
                locale
            }
            None => Locale::default(),
        };

        self.routes.iter().find_map(|route| {
            route.matches(&parts).map(|params| RouteMatch {
                route,
                locale,
                params,
            })
        })
    }

    /// The application's page routes.
    pub fn default_routes() -> Self {
        use AuthorizationRole::*;

        const ADMIN_AREA: &[AuthorizationRole] = &[
            PoolOperator,
            RequestResponder,
            CommunityManager,
            ProcessOperator,
            CommunityRecruiter,
            CommunityAdmin,
            PlatformAdmin,
        ];
        const USERS: &[AuthorizationRole] = &[PoolOperator, RequestResponder, PlatformAdmin];
        const TEAMS: &[AuthorizationRole] = &[PoolOperator, CommunityManager, PlatformAdmin];
        const TEAM_WRITE: &[AuthorizationRole] = &[CommunityManager, PlatformAdmin];
        const POOLS: &[AuthorizationRole] = &[PoolOperator, CommunityManager, PlatformAdmin];
        const CANDIDATES: &[AuthorizationRole] =
            &[PlatformAdmin, CommunityAdmin, CommunityRecruiter, ProcessOperator];

        Self::new()
            .public("home", "/")
            .public("search", "/search")
            .public("browse_pools", "/browse/pools")
            .public("pool", "/browse/pools/:poolId")
            .public("support", "/support")
            .public("terms_and_conditions", "/terms-and-conditions")
            .public("privacy_policy", "/privacy-policy")
            .public("accessibility_statement", "/accessibility-statement")
            .public("directive", "/directive-on-digital-talent")
            .public("workforce_adjustment", "/workforce-adjustment")
            .public("login", "/login")
            .public("logged_out", "/logged-out")
            .protected(
                "digital_services_contracting_questionnaire",
                "/directive-on-digital-talent/digital-services-contracting-questionnaire",
                &[PlatformAdmin],
            )
            // Applicant
            .protected("create_account", "/create-account", &[Applicant])
            .protected("applicant_dashboard", "/applicant", &[Applicant])
            .protected("notifications", "/applicant/notifications", &[Applicant])
            .protected(
                "profile_and_applications",
                "/applicant/profile-and-applications",
                &[Applicant],
            )
            .protected("skills", "/applicant/skills", &[Applicant])
            .protected("skill_showcase", "/applicant/skills/showcase", &[Applicant])
            .protected("skill", "/applicant/skills/:skillId", &[Applicant])
            .protected("personal_information", "/applicant/personal-information", &[Applicant])
            .protected("career_timeline", "/applicant/career-timeline", &[Applicant])
            .protected("create_experience", "/applicant/career-timeline/create", &[Applicant])
            .protected(
                "edit_experience",
                "/applicant/career-timeline/:experienceId/edit",
                &[Applicant],
            )
            .protected(
                "create_application",
                "/browse/pools/:poolId/create-application",
                &[Applicant],
            )
            .protected("application", "/applications/:applicationId", &[Applicant])
            .protected("talent_profile", "/talent/profile/*", &[Applicant])
            // Manager
            .protected("manager_dashboard", "/manager", &[Manager])
            // Admin area
            .protected("admin_dashboard", "/admin", ADMIN_AREA)
            .protected("users", "/admin/users", USERS)
            .protected("user", "/admin/users/:userId", USERS)
            .protected("user_profile", "/admin/users/:userId/profile", USERS)
            .protected("edit_user", "/admin/users/:userId/edit", &[PlatformAdmin])
            .protected("teams", "/admin/teams", TEAMS)
            .protected("create_team", "/admin/teams/create", TEAM_WRITE)
            .protected("team", "/admin/teams/:teamId", TEAMS)
            .protected("edit_team", "/admin/teams/:teamId/edit", TEAM_WRITE)
            .protected("team_members", "/admin/teams/:teamId/members", TEAMS)
            .protected("pools", "/admin/pools", POOLS)
            .protected("create_pool", "/admin/pools/create", &[PoolOperator])
            .protected("pool_admin", "/admin/pools/:poolId", ADMIN_AREA)
            .protected("edit_pool", "/admin/pools/:poolId/edit", POOLS)
            .protected(
                "pool_candidates",
                "/admin/pools/:poolId/pool-candidates",
                &[PoolOperator, RequestResponder],
            )
            .protected(
                "pool_screening",
                "/admin/pools/:poolId/screening",
                &[PoolOperator, PlatformAdmin],
            )
            .protected("pool_plan", "/admin/pools/:poolId/plan", POOLS)
            .protected("all_pool_candidates", "/admin/pool-candidates", CANDIDATES)
            .protected(
                "candidate_application",
                "/admin/candidates/:poolCandidateId/application",
                USERS,
            )
            .protected("talent_requests", "/admin/talent-requests", &[RequestResponder])
            .protected(
                "talent_request",
                "/admin/talent-requests/:searchRequestId",
                &[RequestResponder],
            )
            // System settings
            .protected("classifications", "/admin/settings/classifications", &[PlatformAdmin])
            .protected("departments", "/admin/settings/departments", &[PlatformAdmin])
            .protected("admin_skills", "/admin/settings/skills", &[PlatformAdmin])
            .protected("skill_families", "/admin/settings/skill-families", &[PlatformAdmin])
            .protected("announcements", "/admin/settings/announcements", &[PlatformAdmin])
    }
}
