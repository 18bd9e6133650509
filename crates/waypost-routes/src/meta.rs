//! Deferred route metadata.
//!
//! Titles, quick actions and permission requirements depend on the live
//! locale and session, so descriptors store zero-argument resolvers that are
//! evaluated on every navigation rather than precomputed values.

use std::collections::BTreeSet;
use std::sync::Arc;

/// A capability identifier such as `bb.policies.get`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permission(String);

impl Permission {
	/// Creates a permission identifier.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// Returns the identifier.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for Permission {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Permission {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

/// A set of permissions; as a requirement, all of them must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
	/// Creates an empty set (no restriction).
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns whether the set imposes no restriction.
	pub fn is_unrestricted(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns whether the permission is in the set.
	pub fn contains(&self, permission: &Permission) -> bool {
		self.0.contains(permission)
	}

	/// Returns whether every permission of `required` is in this set.
	pub fn is_superset(&self, required: &PermissionSet) -> bool {
		self.0.is_superset(&required.0)
	}

	/// Returns the permissions of `required` missing from this set.
	pub fn missing<'a>(&'a self, required: &'a PermissionSet) -> impl Iterator<Item = &'a Permission> {
		required.0.difference(&self.0)
	}

	/// Adds a permission.
	pub fn insert(&mut self, permission: Permission) -> bool {
		self.0.insert(permission)
	}

	/// Iterates in sorted order.
	pub fn iter(&self) -> impl Iterator<Item = &Permission> {
		self.0.iter()
	}

	/// Number of permissions.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns whether the set is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<P: Into<Permission>> FromIterator<P> for PermissionSet {
	fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

impl std::fmt::Display for PermissionSet {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let ids: Vec<&str> = self.0.iter().map(Permission::as_str).collect();
		write!(f, "[{}]", ids.join(", "))
	}
}

/// Opaque shortcut identifier rendered by the outer shell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuickAction(String);

impl QuickAction {
	/// Creates a quick action identifier.
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// Returns the identifier.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl From<&str> for QuickAction {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

/// Resolves a display title.
pub type TitleResolver = Arc<dyn Fn() -> String + Send + Sync>;
/// Resolves the ordered quick actions.
pub type QuickActionsResolver = Arc<dyn Fn() -> Vec<QuickAction> + Send + Sync>;
/// Resolves the required permissions.
pub type PermissionsResolver = Arc<dyn Fn() -> PermissionSet + Send + Sync>;

/// Optional bundle of deferred resolvers attached to a route.
#[derive(Clone, Default)]
pub struct RouteMeta {
	title: Option<TitleResolver>,
	quick_actions: Option<QuickActionsResolver>,
	required_permissions: Option<PermissionsResolver>,
}

impl RouteMeta {
	/// Creates an empty bundle.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the title resolver.
	pub fn title<F>(mut self, resolver: F) -> Self
	where
		F: Fn() -> String + Send + Sync + 'static,
	{
		self.title = Some(Arc::new(resolver));
		self
	}

	/// Sets the quick actions resolver.
	pub fn quick_actions<F>(mut self, resolver: F) -> Self
	where
		F: Fn() -> Vec<QuickAction> + Send + Sync + 'static,
	{
		self.quick_actions = Some(Arc::new(resolver));
		self
	}

	/// Sets the required permissions resolver.
	pub fn required_permissions<F>(mut self, resolver: F) -> Self
	where
		F: Fn() -> PermissionSet + Send + Sync + 'static,
	{
		self.required_permissions = Some(Arc::new(resolver));
		self
	}

	/// Returns the title resolver, if any.
	pub fn title_resolver(&self) -> Option<&TitleResolver> {
		self.title.as_ref()
	}

	/// Fills every missing resolver from `parent`.
	pub(crate) fn inherit(&self, parent: &RouteMeta) -> RouteMeta {
		RouteMeta {
			title: self.title.clone().or_else(|| parent.title.clone()),
			quick_actions: self
				.quick_actions
				.clone()
				.or_else(|| parent.quick_actions.clone()),
			required_permissions: self
				.required_permissions
				.clone()
				.or_else(|| parent.required_permissions.clone()),
		}
	}

	/// Evaluates the title resolver. `None` means no title override.
	pub fn resolve_title(&self) -> Option<String> {
		self.title.as_ref().map(|resolve| resolve())
	}

	/// Evaluates the quick actions resolver. Absent means none.
	pub fn resolve_quick_actions(&self) -> Vec<QuickAction> {
		self.quick_actions
			.as_ref()
			.map(|resolve| resolve())
			.unwrap_or_default()
	}

	/// Evaluates the permissions resolver. Absent means unrestricted.
	pub fn resolve_required_permissions(&self) -> PermissionSet {
		self.required_permissions
			.as_ref()
			.map(|resolve| resolve())
			.unwrap_or_default()
	}

	/// Evaluates title and quick actions together.
	pub fn resolve_display(&self) -> ResolvedMeta {
		ResolvedMeta {
			title: self.resolve_title(),
			quick_actions: self.resolve_quick_actions(),
		}
	}
}

impl std::fmt::Debug for RouteMeta {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouteMeta")
			.field("has_title", &self.title.is_some())
			.field("has_quick_actions", &self.quick_actions.is_some())
			.field(
				"has_required_permissions",
				&self.required_permissions.is_some(),
			)
			.finish()
	}
}

/// Display metadata evaluated for one navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedMeta {
	/// Display title, if the route overrides it.
	pub title: Option<String>,
	/// Quick action identifiers in order.
	pub quick_actions: Vec<QuickAction>,
}
