//! Navigation role selection.

use talentnav_auth::{map_to_nav_role, AuthorizationRole, NavRole};

/// Decide the navigation role to display next.
///
/// `authorized` is the role requirement of the page being shown. The current
/// role is kept whenever the page still allows it; otherwise the least
/// privileged role the page allows wins. An empty requirement falls back to
/// [`NavRole::Guest`].
pub fn choose_nav_role(current: NavRole, authorized: &[AuthorizationRole]) -> NavRole {
    if authorized.is_empty() {
        return NavRole::Guest;
    }

    let candidates = authorized.iter().copied().map(map_to_nav_role);
    if candidates.clone().any(|candidate| candidate == current) {
        return current;
    }

    candidates.min().unwrap_or(NavRole::Guest)
}

#[cfg(test)]
mod tests {
    use super::*;

    use AuthorizationRole as A;

    #[test]
    fn empty_requirement_falls_back_to_guest() {
        for current in NavRole::ALL {
            assert_eq!(choose_nav_role(current, &[]), NavRole::Guest);
        }
    }

    #[test]
    fn keeps_current_role_when_still_allowed() {
        let roles = [
            A::Guest,
            A::BaseUser,
            A::Applicant,
            A::CommunityManager,
            A::ProcessOperator,
            A::CommunityRecruiter,
            A::CommunityAdmin,
            A::PlatformAdmin,
        ];
        assert_eq!(choose_nav_role(NavRole::Community, &roles), NavRole::Community);
        assert_eq!(choose_nav_role(NavRole::Admin, &roles), NavRole::Admin);
    }

    #[test]
    fn falls_to_least_privileged_when_current_not_allowed() {
        let roles = [
            A::Applicant,
            A::CommunityManager,
            A::ProcessOperator,
            A::CommunityRecruiter,
            A::CommunityAdmin,
        ];
        assert_eq!(choose_nav_role(NavRole::Admin, &roles), NavRole::Applicant);
    }

    #[test]
    fn order_of_requirement_does_not_matter() {
        let roles = [A::PlatformAdmin, A::RequestResponder];
        assert_eq!(choose_nav_role(NavRole::Applicant, &roles), NavRole::Community);

        let reversed = [A::RequestResponder, A::PlatformAdmin];
        assert_eq!(choose_nav_role(NavRole::Applicant, &reversed), NavRole::Community);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_nav_role() -> impl Strategy<Value = NavRole> {
            prop::sample::select(NavRole::ALL.to_vec())
        }

        fn any_roles() -> impl Strategy<Value = Vec<AuthorizationRole>> {
            prop::collection::vec(prop::sample::select(AuthorizationRole::ALL.to_vec()), 0..12)
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: a second selection with the same requirement changes nothing.
            #[test]
            fn selection_is_idempotent(current in any_nav_role(), roles in any_roles()) {
                let once = choose_nav_role(current, &roles);
                prop_assert_eq!(choose_nav_role(once, &roles), once);
            }

            /// Property: the result is reachable from the requirement (or guest when empty).
            #[test]
            fn result_is_reachable(current in any_nav_role(), roles in any_roles()) {
                let chosen = choose_nav_role(current, &roles);
                if roles.is_empty() {
                    prop_assert_eq!(chosen, NavRole::Guest);
                } else {
                    prop_assert!(roles.iter().any(|r| map_to_nav_role(*r) == chosen));
                }
            }

            /// Property: a forced change never lands above a reachable lower role.
            #[test]
            fn forced_change_picks_minimum(current in any_nav_role(), roles in any_roles()) {
                let chosen = choose_nav_role(current, &roles);
                if chosen != current {
                    for r in &roles {
                        prop_assert!(chosen <= map_to_nav_role(*r));
                    }
                }
            }
        }
    }
}
