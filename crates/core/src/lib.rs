//! `talentnav-core` — identifiers and the error model shared by every crate.
//!
//! Nothing in here knows about roles, navigation, or HTTP.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{SessionId, UserId};
