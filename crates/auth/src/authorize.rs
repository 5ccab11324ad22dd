use thiserror::Error;

use crate::{AuthorizationRole, UserAuthInfo};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("not signed in")]
    Unauthenticated,

    /// Signed in, but none of the granted roles is among the required ones.
    #[error("forbidden: requires one of [{}]", join_roles(.0))]
    Forbidden(Vec<AuthorizationRole>),
}

fn join_roles(roles: &[AuthorizationRole]) -> String {
    roles
        .iter()
        .map(AuthorizationRole::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check that `user` holds at least one of `required`.
///
/// - No IO
/// - No panics
/// - Pure set intersection; privilege is not inherited (an admin does not
///   implicitly hold `applicant`)
pub fn authorize_any(
    user: Option<&UserAuthInfo>,
    required: &[AuthorizationRole],
) -> Result<(), AuthzError> {
    let user = user.ok_or(AuthzError::Unauthenticated)?;

    if user.roles().any(|granted| required.contains(&granted)) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talentnav_core::UserId;

    use AuthorizationRole as A;

    #[test]
    fn anonymous_is_unauthenticated() {
        assert_eq!(
            authorize_any(None, &[A::Applicant]),
            Err(AuthzError::Unauthenticated)
        );
    }

    #[test]
    fn intersection_grants_access() {
        let user = UserAuthInfo::new(UserId::new(), [A::BaseUser, A::CommunityRecruiter]);
        let required = [
            A::PlatformAdmin,
            A::CommunityAdmin,
            A::CommunityRecruiter,
            A::ProcessOperator,
        ];
        assert_eq!(authorize_any(Some(&user), &required), Ok(()));
    }

    #[test]
    fn admin_does_not_inherit_applicant() {
        let user = UserAuthInfo::new(UserId::new(), [A::PlatformAdmin]);
        let err = authorize_any(Some(&user), &[A::Applicant]).unwrap_err();
        assert_eq!(err, AuthzError::Forbidden(vec![A::Applicant]));
        assert_eq!(err.to_string(), "forbidden: requires one of [applicant]");
    }

    #[test]
    fn empty_requirement_never_matches() {
        let user = UserAuthInfo::new(UserId::new(), [A::Applicant]);
        assert!(authorize_any(Some(&user), &[]).is_err());
    }
}
