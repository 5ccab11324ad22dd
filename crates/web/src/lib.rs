//! HTTP front for role-aware navigation: guards pages, keeps each session's
//! navigation role, and renders menu state.

pub mod app;
pub mod config;
pub mod guard;
pub mod middleware;
pub mod notice;
pub mod redirect;
pub mod route_table;
pub mod session;

pub use config::{ConfigError, WebConfig};
pub use guard::{GuardError, GuardOutcome, RouteGuard};
pub use notice::{MemoryNoticeSink, NoticeEvent, NoticeSink, TracingNoticeSink};
pub use redirect::{Location, LoginRedirect};
pub use route_table::{Route, RouteMatch, RouteTable};
pub use session::SessionRegistry;
