//! `talentnav-nav` — which navigation perspective a signed-in user sees.
//!
//! - `selector`: pure role selection
//! - `context`: the per-session store that owns the current `NavRole`
//! - `menu`: presentation state derived from roles (role switcher, links)

pub mod context;
pub mod menu;
pub mod selector;

pub use context::NavContext;
pub use menu::{available_nav_roles, dashboard_href, dashboard_path, nav_role_label, Locale, MenuState, RoleLink};
pub use selector::choose_nav_role;
