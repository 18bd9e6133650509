//! # waypost-routes
//!
//! Route descriptors and the route tree they compose into.
//!
//! A dashboard's navigation is declared as an ordered list of
//! [`RouteDescriptor`]s. Each one names a relative path segment, one or more
//! component [slots](SlotName), optional deferred [metadata](RouteMeta) and
//! optional children. [`RouteTree::build`] validates the list and produces
//! an immutable tree indexed by effective path and by name:
//!
//! - effective paths are the `/`-concatenation of ancestor segments
//! - children inherit every slot they do not declare themselves
//! - children inherit every metadata resolver they do not declare themselves
//! - names are globally unique; a duplicate is a fatal [`ConfigurationError`]
//!
//! ```
//! use waypost_routes::prelude::*;
//!
//! let view = |m: &'static str| ComponentRef::eager(Component::marker(m));
//! let tree = RouteTree::build(vec![
//!     RouteDescriptor::new("environments")
//!         .named("workspace.environments")
//!         .slot(SlotName::CONTENT, view("views/EnvironmentDashboard"))
//!         .slot(SlotName::LEFT_SIDEBAR, view("views/DashboardSidebar"))
//!         .meta(
//!             RouteMeta::new()
//!                 .required_permissions(|| ["bb.environments.list"].into_iter().collect()),
//!         ),
//! ])
//! .unwrap();
//!
//! let matched = tree.match_path("/environments").unwrap();
//! assert_eq!(matched.node.name(), Some("workspace.environments"));
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod descriptor;
pub mod error;
pub mod meta;
pub mod path;
pub mod tree;

pub use component::{Component, ComponentRef, Loader, SlotName, SlotProps, ViewRegistry};
pub use descriptor::RouteDescriptor;
pub use error::{ConfigResult, ConfigurationError, LoadError, LookupError};
pub use meta::{
	Permission, PermissionSet, PermissionsResolver, QuickAction, QuickActionsResolver,
	ResolvedMeta, RouteMeta, TitleResolver,
};
pub use path::PathPattern;
pub use tree::{ResolvedSlot, RouteId, RouteMatch, RouteNode, RouteTree};

/// Re-export commonly used types.
pub mod prelude {
	pub use crate::component::{Component, ComponentRef, SlotName, SlotProps, ViewRegistry};
	pub use crate::descriptor::RouteDescriptor;
	pub use crate::error::{ConfigurationError, LoadError, LookupError};
	pub use crate::meta::{Permission, PermissionSet, QuickAction, RouteMeta};
	pub use crate::tree::{RouteId, RouteNode, RouteTree};
}
