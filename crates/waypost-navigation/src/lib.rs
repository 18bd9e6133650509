//! # waypost-navigation
//!
//! Permission-gated navigation over a [`waypost_routes::RouteTree`].
//!
//! A [`Navigator`] funnels both entry points, [`Navigator::navigate_by_name`]
//! and [`Navigator::navigate_by_path`], into one guard state machine:
//!
//! 1. the target route's required permissions are resolved and checked by
//!    the external [`PermissionEngine`];
//! 2. a denied navigation is redirected to the forbidden route without
//!    requesting any of the target's slot modules;
//! 3. an allowed navigation loads every slot through the memoizing
//!    [`ComponentLoader`] and only then replaces the [`ActiveRoute`].
//!
//! Starting a navigation supersedes any navigation still in flight; the
//! older one's permission answer and loaded modules are discarded.
//!
//! Fallback route names and the denied-destination behaviour come from
//! [`NavigationSettings`].

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod navigator;
pub mod outcome;
pub mod permission;
pub mod settings;

pub use error::{NavigationError, NavigationResult};
pub use loader::{ComponentLoader, SlotKey};
pub use navigator::{Navigator, NavigatorBuilder};
pub use outcome::{
	ActiveRoute, Breadcrumb, MountedSlot, NavigationOutcome, NavigationPhase, NavigationReport,
	RedirectReason,
};
pub use permission::{HeldPermissions, PermissionEngine, Principal, SharedPrincipal};
pub use settings::{NavigationSettings, SettingsError};
