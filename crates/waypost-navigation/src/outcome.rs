//! Navigation outcomes and the active route snapshot exposed to the shell.

use std::collections::HashMap;
use waypost_routes::{Component, QuickAction, RouteId, SlotName};

/// Guard state of one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationPhase {
	/// No navigation in flight.
	Idle,
	/// Target resolved; required permissions being checked.
	Resolving,
	/// Permission check passed.
	Allowed,
	/// Slot modules being fetched.
	Loading,
	/// Every slot loaded and the route became active.
	Mounted,
	/// Permission check failed.
	Denied,
	/// A fallback route was mounted instead of the requested one.
	Redirected,
	/// A newer navigation started; this one's results were discarded.
	Superseded,
}

impl NavigationPhase {
	/// Returns whether a navigation is in flight in this phase.
	pub fn is_in_flight(self) -> bool {
		matches!(self, Self::Resolving | Self::Allowed | Self::Loading)
	}
}

impl std::fmt::Display for NavigationPhase {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Idle => "idle",
			Self::Resolving => "resolving",
			Self::Allowed => "allowed",
			Self::Loading => "loading",
			Self::Mounted => "mounted",
			Self::Denied => "denied",
			Self::Redirected => "redirected",
			Self::Superseded => "superseded",
		};
		f.write_str(name)
	}
}

/// Why a navigation was redirected to a fallback route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
	/// The principal lacks a required permission.
	Forbidden,
	/// No route matches the requested path or name.
	NotFound,
}

/// A title entry of the active route's ancestor chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
	/// Resolved title.
	pub title: String,
	/// Concrete path of the ancestor.
	pub path: String,
}

/// A slot component mounted by the active route.
#[derive(Debug, Clone, PartialEq)]
pub struct MountedSlot {
	/// Slot name.
	pub slot: SlotName,
	/// Loaded component.
	pub component: Component,
	/// Route parameters forwarded to the component, if the slot forwards them.
	pub props: Option<HashMap<String, String>>,
}

/// The currently displayed route with its metadata resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveRoute {
	/// Node in the route tree.
	pub id: RouteId,
	/// Route name; unnamed leaf routes are reachable by path only.
	pub name: Option<String>,
	/// Concrete path.
	pub path: String,
	/// Effective path pattern of the route.
	pub pattern: String,
	/// Extracted path parameters.
	pub params: HashMap<String, String>,
	/// Title, if the route or an ancestor sets one.
	pub title: Option<String>,
	/// Quick action identifiers in order.
	pub quick_actions: Vec<QuickAction>,
	/// Titles of the ancestor chain, top-level first.
	pub breadcrumbs: Vec<Breadcrumb>,
	/// Every mounted slot, in slot declaration order.
	pub slots: Vec<MountedSlot>,
	/// The requested path this route replaced, for a preserved denial.
	pub redirected_from: Option<String>,
}

impl ActiveRoute {
	/// Returns the mounted slot with the given name.
	pub fn slot(&self, slot: &SlotName) -> Option<&MountedSlot> {
		self.slots.iter().find(|mounted| mounted.slot == *slot)
	}

	/// Returns the module mounted in each slot, for the shell's layout.
	pub fn slot_assignment(&self) -> Vec<(&SlotName, &str)> {
		self.slots
			.iter()
			.map(|mounted| (&mounted.slot, mounted.component.module()))
			.collect()
	}
}

/// How a navigation attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome {
	/// The requested route is now active.
	Mounted(ActiveRoute),
	/// A fallback route is now active instead.
	Redirected {
		/// Why the request was redirected.
		reason: RedirectReason,
		/// The requested path, or the route name for an unknown name.
		requested: String,
		/// The fallback route now active.
		active: ActiveRoute,
	},
	/// A newer navigation started first; nothing was applied.
	Superseded,
}

impl NavigationOutcome {
	/// Returns the route this navigation activated, if any.
	pub fn active(&self) -> Option<&ActiveRoute> {
		match self {
			Self::Mounted(active) | Self::Redirected { active, .. } => Some(active),
			Self::Superseded => None,
		}
	}
}

/// The outcome of one navigation plus the guard phases it went through.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationReport {
	/// How the navigation ended.
	pub outcome: NavigationOutcome,
	/// Guard phases in order, starting with [`NavigationPhase::Idle`].
	pub phases: Vec<NavigationPhase>,
	/// Sequence number of the navigation. Later navigations on the same
	/// navigator carry larger numbers.
	pub generation: u64,
}

impl NavigationReport {
	/// Returns whether the requested route was mounted.
	pub fn is_mounted(&self) -> bool {
		matches!(self.outcome, NavigationOutcome::Mounted(_))
	}

	/// Returns whether the navigation was superseded.
	pub fn is_superseded(&self) -> bool {
		matches!(self.outcome, NavigationOutcome::Superseded)
	}

	/// Returns the redirect reason, if the navigation was redirected.
	pub fn redirect_reason(&self) -> Option<RedirectReason> {
		match self.outcome {
			NavigationOutcome::Redirected { reason, .. } => Some(reason),
			_ => None,
		}
	}
}
