//! The navigation guard.
//!
//! Every navigation runs the same state machine:
//!
//! ```text
//! Idle -> Resolving -> Allowed -> Loading -> Mounted
//!                   \-> Denied -> Redirected
//! ```
//!
//! Permission resolution always finishes before any slot module is
//! requested, so a denied navigation never fetches the target's views.
//! Only one navigation is in flight at a time: starting a new one bumps the
//! navigator's generation, and an older navigation that observes a newer
//! generation after any suspend point discards its results and stops.
//! The active route is replaced only after every slot has loaded.

use crate::error::{NavigationError, NavigationResult};
use crate::loader::ComponentLoader;
use crate::outcome::{
	ActiveRoute, Breadcrumb, MountedSlot, NavigationOutcome, NavigationPhase, NavigationReport,
	RedirectReason,
};
use crate::permission::{HeldPermissions, PermissionEngine, Principal, SharedPrincipal};
use crate::settings::NavigationSettings;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use waypost_routes::path::normalize;
use waypost_routes::{ConfigResult, ConfigurationError, RouteId, RouteNode, RouteTree};

/// Builder for [`Navigator`].
pub struct NavigatorBuilder {
	tree: Arc<RouteTree>,
	engine: Arc<dyn PermissionEngine>,
	principal: SharedPrincipal,
	settings: NavigationSettings,
}

impl NavigatorBuilder {
	/// Sets the permission engine. Defaults to [`HeldPermissions`].
	pub fn permission_engine(mut self, engine: Arc<dyn PermissionEngine>) -> Self {
		self.engine = engine;
		self
	}

	/// Sets the shared principal. Defaults to an anonymous principal.
	pub fn principal(mut self, principal: SharedPrincipal) -> Self {
		self.principal = principal;
		self
	}

	/// Sets the navigation settings.
	pub fn settings(mut self, settings: NavigationSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Assembles the navigator.
	///
	/// # Errors
	///
	/// Returns [`ConfigurationError::UnknownFallbackRoute`] or
	/// [`ConfigurationError::FallbackNotNavigable`] when a fallback route
	/// named in the settings cannot be mounted.
	pub fn build(self) -> ConfigResult<Navigator> {
		let forbidden = fallback(&self.tree, &self.settings.forbidden_route)?;
		let not_found = fallback(&self.tree, &self.settings.not_found_route)?;

		Ok(Navigator {
			tree: self.tree,
			engine: self.engine,
			principal: self.principal,
			settings: self.settings,
			loader: ComponentLoader::new(),
			forbidden,
			not_found,
			generation: AtomicU64::new(0),
			phase: Mutex::new(NavigationPhase::Idle),
			active: RwLock::new(None),
		})
	}

	/// Loads the settings from a TOML file, then assembles the navigator.
	///
	/// # Errors
	///
	/// Returns [`NavigationError::Settings`] when the file cannot be read or
	/// parsed, and [`NavigationError::Configuration`] when a fallback route
	/// it names cannot be mounted.
	pub fn build_from_file(self, path: impl Into<PathBuf>) -> NavigationResult<Navigator> {
		let path = path.into();
		let settings = NavigationSettings::from_file(path.clone())?;
		tracing::debug!(path = %path.display(), "loaded navigation settings");
		Ok(self.settings(settings).build()?)
	}
}

fn fallback(tree: &RouteTree, name: &str) -> ConfigResult<RouteId> {
	let node = tree
		.get(name)
		.ok_or_else(|| ConfigurationError::UnknownFallbackRoute(name.to_string()))?;
	if !node.is_navigable() {
		return Err(ConfigurationError::FallbackNotNavigable(name.to_string()));
	}
	Ok(node.id())
}

/// A navigation target after lookup.
struct Target<'a> {
	node: &'a RouteNode,
	path: String,
	params: HashMap<String, String>,
}

/// Drives navigations over one route tree for one navigation surface.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use std::sync::Arc;
/// use waypost_navigation::{NavigationOutcome, Navigator};
/// use waypost_routes::prelude::*;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let view = |m: &'static str| ComponentRef::eager(Component::marker(m));
/// let tree = RouteTree::build(vec![
///     RouteDescriptor::new("").named("home").component(view("Home")),
///     RouteDescriptor::new("403").named("error.403").component(view("403")),
///     RouteDescriptor::new("404").named("error.404").component(view("404")),
/// ])
/// .unwrap();
///
/// let navigator = Navigator::builder(Arc::new(tree)).build().unwrap();
/// let report = navigator.navigate_by_name("home", &HashMap::new()).await.unwrap();
///
/// assert!(matches!(report.outcome, NavigationOutcome::Mounted(_)));
/// assert_eq!(navigator.active().unwrap().name.as_deref(), Some("home"));
/// # }
/// ```
pub struct Navigator {
	tree: Arc<RouteTree>,
	engine: Arc<dyn PermissionEngine>,
	principal: SharedPrincipal,
	settings: NavigationSettings,
	loader: ComponentLoader,
	forbidden: RouteId,
	not_found: RouteId,
	generation: AtomicU64,
	phase: Mutex<NavigationPhase>,
	active: RwLock<Option<ActiveRoute>>,
}

impl Navigator {
	/// Starts building a navigator over `tree`.
	pub fn builder(tree: Arc<RouteTree>) -> NavigatorBuilder {
		NavigatorBuilder {
			tree,
			engine: Arc::new(HeldPermissions),
			principal: Arc::new(RwLock::new(Principal::anonymous())),
			settings: NavigationSettings::default(),
		}
	}

	/// The route tree.
	pub fn tree(&self) -> &Arc<RouteTree> {
		&self.tree
	}

	/// The settings in effect.
	pub fn settings(&self) -> &NavigationSettings {
		&self.settings
	}

	/// The slot module cache.
	pub fn loader(&self) -> &ComponentLoader {
		&self.loader
	}

	/// The shared principal handle.
	pub fn principal(&self) -> &SharedPrincipal {
		&self.principal
	}

	/// The currently displayed route, if any navigation has mounted.
	pub fn active(&self) -> Option<ActiveRoute> {
		self.active.read().clone()
	}

	/// Guard phase of the latest navigation.
	pub fn phase(&self) -> NavigationPhase {
		*self.phase.lock()
	}

	/// Navigates to a named route.
	///
	/// An unknown name, or the name of a layout host, redirects to the
	/// not-found route.
	///
	/// # Errors
	///
	/// Returns [`NavigationError::MissingParameter`] when `params` lacks a
	/// placeholder value, or [`NavigationError::LoadFailure`] when a slot
	/// module fails to load.
	pub async fn navigate_by_name(
		&self,
		name: &str,
		params: &HashMap<String, String>,
	) -> NavigationResult<NavigationReport> {
		let generation = self.begin();
		let mut phases = vec![NavigationPhase::Idle];
		self.enter(generation, NavigationPhase::Resolving, &mut phases);

		let node = match self.tree.get(name) {
			Some(node) if node.is_navigable() => node,
			_ => return self.redirect_not_found(generation, name, phases).await,
		};
		let path = node.pattern().reverse(params).map_err(|param| {
			self.abort(generation);
			NavigationError::MissingParameter {
				route: name.to_string(),
				param,
			}
		})?;
		let params = node
			.pattern()
			.param_names()
			.iter()
			.filter_map(|param| params.get(param).map(|value| (param.clone(), value.clone())))
			.collect();

		self.guard(generation, Target { node, path, params }, phases)
			.await
	}

	/// Navigates to the first route matching a concrete path.
	///
	/// A path matching no route redirects to the not-found route.
	///
	/// # Errors
	///
	/// Returns [`NavigationError::LoadFailure`] when a slot module fails to
	/// load.
	pub async fn navigate_by_path(&self, path: &str) -> NavigationResult<NavigationReport> {
		let generation = self.begin();
		let mut phases = vec![NavigationPhase::Idle];
		self.enter(generation, NavigationPhase::Resolving, &mut phases);

		match self.tree.match_path(path) {
			Some(matched) => {
				let target = Target {
					node: matched.node,
					path: normalize(path).to_string(),
					params: matched.params,
				};
				self.guard(generation, target, phases).await
			}
			None => self.redirect_not_found(generation, path, phases).await,
		}
	}

	/// Starts a new navigation, superseding any in-flight one.
	fn begin(&self) -> u64 {
		let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
		tracing::debug!(generation, "navigation started");
		generation
	}

	fn is_current(&self, generation: u64) -> bool {
		self.generation.load(Ordering::SeqCst) == generation
	}

	fn enter(&self, generation: u64, phase: NavigationPhase, phases: &mut Vec<NavigationPhase>) {
		phases.push(phase);
		if self.is_current(generation) {
			*self.phase.lock() = phase;
		}
		tracing::debug!(generation, phase = %phase, "navigation phase");
	}

	fn abort(&self, generation: u64) {
		if self.is_current(generation) {
			*self.phase.lock() = NavigationPhase::Idle;
		}
	}

	fn superseded(&self, generation: u64, mut phases: Vec<NavigationPhase>) -> NavigationReport {
		tracing::debug!(generation, "navigation superseded, discarding results");
		phases.push(NavigationPhase::Superseded);
		NavigationReport {
			outcome: NavigationOutcome::Superseded,
			phases,
			generation,
		}
	}

	async fn guard(
		&self,
		generation: u64,
		target: Target<'_>,
		mut phases: Vec<NavigationPhase>,
	) -> NavigationResult<NavigationReport> {
		let required = target.node.meta().resolve_required_permissions();
		let allowed = if required.is_unrestricted() {
			true
		} else {
			let principal = self.principal.read().clone();
			let allowed = self.engine.has_permissions(&principal, &required).await;
			if !self.is_current(generation) {
				return Ok(self.superseded(generation, phases));
			}
			if !allowed {
				let missing: Vec<&str> = principal
					.permissions
					.missing(&required)
					.map(|permission| permission.as_str())
					.collect();
				tracing::warn!(
					path = %target.path,
					principal = %principal.id,
					required = %required,
					missing = ?missing,
					"navigation denied"
				);
			}
			allowed
		};

		if !allowed {
			self.enter(generation, NavigationPhase::Denied, &mut phases);
			self.enter(generation, NavigationPhase::Redirected, &mut phases);
			let redirected_from = self
				.settings
				.preserve_denied_destination
				.then(|| target.path.clone());
			return self
				.redirect(
					generation,
					self.forbidden,
					RedirectReason::Forbidden,
					target.path,
					redirected_from,
					phases,
				)
				.await;
		}

		self.enter(generation, NavigationPhase::Allowed, &mut phases);
		self.enter(generation, NavigationPhase::Loading, &mut phases);
		let Some(active) = self.mount(generation, &target, None).await? else {
			return Ok(self.superseded(generation, phases));
		};
		self.enter(generation, NavigationPhase::Mounted, &mut phases);
		tracing::info!(
			route = active.name.as_deref().unwrap_or(""),
			path = %active.path,
			generation,
			"navigation mounted"
		);

		Ok(NavigationReport {
			outcome: NavigationOutcome::Mounted(active),
			phases,
			generation,
		})
	}

	async fn redirect_not_found(
		&self,
		generation: u64,
		requested: &str,
		mut phases: Vec<NavigationPhase>,
	) -> NavigationResult<NavigationReport> {
		tracing::debug!(requested, "no route matches, redirecting to not-found route");
		self.enter(generation, NavigationPhase::Redirected, &mut phases);
		self.redirect(
			generation,
			self.not_found,
			RedirectReason::NotFound,
			normalize(requested).to_string(),
			None,
			phases,
		)
		.await
	}

	/// Mounts a fallback route. Fallback routes skip the permission check.
	async fn redirect(
		&self,
		generation: u64,
		fallback: RouteId,
		reason: RedirectReason,
		requested: String,
		redirected_from: Option<String>,
		phases: Vec<NavigationPhase>,
	) -> NavigationResult<NavigationReport> {
		let Some(node) = self.tree.node(fallback) else {
			return Err(ConfigurationError::UnknownFallbackRoute(fallback.to_string()).into());
		};
		let target = Target {
			node,
			path: node.effective_path().to_string(),
			params: HashMap::new(),
		};
		let Some(active) = self.mount(generation, &target, redirected_from).await? else {
			return Ok(self.superseded(generation, phases));
		};
		tracing::info!(
			route = active.name.as_deref().unwrap_or(""),
			requested = %requested,
			reason = ?reason,
			"navigation redirected"
		);

		Ok(NavigationReport {
			outcome: NavigationOutcome::Redirected {
				reason,
				requested,
				active,
			},
			phases,
			generation,
		})
	}

	/// Loads every slot of `target`, then makes it the active route.
	///
	/// Returns `None` when a newer navigation started while loading.
	async fn mount(
		&self,
		generation: u64,
		target: &Target<'_>,
		redirected_from: Option<String>,
	) -> NavigationResult<Option<ActiveRoute>> {
		let node = target.node;
		let mut slots = Vec::with_capacity(node.slots().len());
		for slot in node.slots() {
			let loaded = self.loader.load(slot).await;
			if !self.is_current(generation) {
				return Ok(None);
			}
			let component = loaded.map_err(|source| {
				tracing::warn!(
					path = %target.path,
					slot = %slot.slot,
					error = %source,
					"slot failed to load, keeping previous route"
				);
				self.abort(generation);
				NavigationError::LoadFailure {
					route: node.effective_path().to_string(),
					slot: slot.slot.clone(),
					source,
				}
			})?;
			slots.push(MountedSlot {
				slot: slot.slot.clone(),
				component,
				props: slot.forward_props.then(|| target.params.clone()),
			});
		}

		let display = node.meta().resolve_display();
		let breadcrumbs = self
			.tree
			.ancestors(node.id())
			.into_iter()
			.filter_map(|ancestor| {
				let title = ancestor.resolve_own_title()?;
				let path = ancestor
					.pattern()
					.reverse(&target.params)
					.unwrap_or_else(|_| ancestor.effective_path().to_string());
				Some(Breadcrumb { title, path })
			})
			.collect();

		let active = ActiveRoute {
			id: node.id(),
			name: node.name().map(str::to_string),
			path: target.path.clone(),
			pattern: node.effective_path().to_string(),
			params: target.params.clone(),
			title: display.title,
			quick_actions: display.quick_actions,
			breadcrumbs,
			slots,
			redirected_from,
		};
		let mut current = self.active.write();
		if !self.is_current(generation) {
			return Ok(None);
		}
		*current = Some(active.clone());
		Ok(Some(active))
	}
}

impl std::fmt::Debug for Navigator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Navigator")
			.field("routes", &self.tree.len())
			.field("settings", &self.settings)
			.field("generation", &self.generation.load(Ordering::SeqCst))
			.field("phase", &self.phase())
			.finish()
	}
}
