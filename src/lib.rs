//! # Waypost
//!
//! Permission-aware navigation route trees for dashboard applications.
//!
//! A dashboard declares its navigation as an ordered list of route
//! descriptors. Waypost composes them into an immutable tree with
//! inherited layout slots and deferred metadata, then drives every
//! navigation through a guard that checks required permissions before a
//! single view module is fetched.
//!
//! ## Feature Flags
//!
//! - `routes` - Route descriptors, path grammar and the route tree
//! - `i18n` - Translation boundary, locale catalogs and title casing
//! - `navigation` - Navigation guard, slot loader cache and settings
//! - `workspace` - The workspace dashboard route table
//! - `full` (default) - All of the above
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::HashMap;
//! use std::sync::Arc;
//! use waypost::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let view = |m: &'static str| ComponentRef::eager(Component::marker(m));
//! let tree = RouteTree::build(vec![
//!     RouteDescriptor::new("").named("home").component(view("Home")),
//!     RouteDescriptor::new("403").named("error.403").component(view("403")),
//!     RouteDescriptor::new("404").named("error.404").component(view("404")),
//! ])
//! .unwrap();
//!
//! let navigator = Navigator::builder(Arc::new(tree)).build().unwrap();
//! let report = navigator.navigate_by_path("/missing").await.unwrap();
//! assert_eq!(report.redirect_reason(), Some(RedirectReason::NotFound));
//! # }
//! ```

#[cfg(feature = "i18n")]
pub use waypost_i18n as i18n;
#[cfg(feature = "navigation")]
pub use waypost_navigation as navigation;
#[cfg(feature = "routes")]
pub use waypost_routes as routes;
#[cfg(feature = "workspace")]
pub use waypost_workspace as workspace;

// Re-export route tree types
#[cfg(feature = "routes")]
pub use waypost_routes::{
	Component, ComponentRef, ConfigurationError, LoadError, Permission, PermissionSet,
	QuickAction, RouteDescriptor, RouteMeta, RouteTree, SlotName, SlotProps, ViewRegistry,
};

// Re-export translation types
#[cfg(feature = "i18n")]
pub use waypost_i18n::{MessageCatalog, Translate, Translator, start_case};

// Re-export navigation types
#[cfg(feature = "navigation")]
pub use waypost_navigation::{
	ActiveRoute, NavigationError, NavigationOutcome, NavigationPhase, NavigationReport,
	NavigationSettings, Navigator, PermissionEngine, Principal, RedirectReason,
};

// Re-export the workspace table
#[cfg(feature = "workspace")]
pub use waypost_workspace::{WorkspaceRoutes, workspace_routes};

/// Commonly used types.
pub mod prelude {
	#[cfg(feature = "routes")]
	pub use waypost_routes::prelude::*;

	#[cfg(feature = "i18n")]
	pub use waypost_i18n::{Translate, Translator};

	#[cfg(feature = "navigation")]
	pub use waypost_navigation::{
		ActiveRoute, NavigationOutcome, NavigationPhase, NavigationReport, NavigationSettings,
		Navigator, PermissionEngine, Principal, RedirectReason,
	};
}
