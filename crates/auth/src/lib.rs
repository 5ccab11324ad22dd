//! `talentnav-auth` — authorization roles and the authentication boundary.
//!
//! Decoupled from HTTP and from navigation state.

pub mod authorize;
pub mod claims;
pub mod principal;
pub mod roles;

pub use authorize::{authorize_any, AuthzError};
pub use claims::{validate_claims, Hs256JwtValidator, JwtValidator, SessionClaims, TokenValidationError};
pub use principal::{AuthState, RoleAssignment, RoleRef, UserAuthInfo};
pub use roles::{map_to_nav_role, AuthorizationRole, NavRole, UnknownRole};
