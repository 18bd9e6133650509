//! Route descriptors: the atomic unit of route configuration.

use crate::component::{ComponentRef, SlotName, SlotProps};
use crate::meta::RouteMeta;

/// A route as declared in the static configuration list.
///
/// Descriptors are value objects. Building one has no side effects and
/// performs no validation; every rule is checked by
/// [`RouteTree::build`](crate::tree::RouteTree::build).
///
/// # Examples
///
/// ```
/// use waypost_routes::{Component, ComponentRef, RouteDescriptor, SlotName, SlotProps};
///
/// let sidebar = ComponentRef::eager(Component::marker("views/DashboardSidebar"));
/// let descriptor = RouteDescriptor::new("sql-review")
///     .slot(SlotName::CONTENT, ComponentRef::eager(Component::marker("layouts/SettingLayout")))
///     .slot(SlotName::LEFT_SIDEBAR, sidebar)
///     .props(SlotProps::All)
///     .child(
///         RouteDescriptor::new("new")
///             .named("workspace.sql-review.create")
///             .component(ComponentRef::eager(Component::marker("views/SQLReviewCreate"))),
///     );
///
/// assert_eq!(descriptor.path(), "sql-review");
/// assert!(descriptor.name().is_none());
/// assert_eq!(descriptor.children().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteDescriptor {
	path: String,
	name: Option<String>,
	slots: Vec<(SlotName, ComponentRef)>,
	props: SlotProps,
	meta: RouteMeta,
	children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
	/// Creates a descriptor for a path segment relative to its parent.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			..Self::default()
		}
	}

	/// Sets the globally unique route name.
	pub fn named(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Declares (or replaces) the component for a slot.
	pub fn slot(mut self, slot: SlotName, component: ComponentRef) -> Self {
		if let Some(existing) = self.slots.iter_mut().find(|(name, _)| *name == slot) {
			existing.1 = component;
		} else {
			self.slots.push((slot, component));
		}
		self
	}

	/// Declares the component for the default slot.
	pub fn component(self, component: ComponentRef) -> Self {
		self.slot(SlotName::DEFAULT, component)
	}

	/// Sets which slots receive route parameters.
	pub fn props(mut self, props: SlotProps) -> Self {
		self.props = props;
		self
	}

	/// Attaches deferred metadata.
	pub fn meta(mut self, meta: RouteMeta) -> Self {
		self.meta = meta;
		self
	}

	/// Appends one child.
	pub fn child(mut self, child: RouteDescriptor) -> Self {
		self.children.push(child);
		self
	}

	/// Appends children in order.
	pub fn with_children<I>(mut self, children: I) -> Self
	where
		I: IntoIterator<Item = RouteDescriptor>,
	{
		self.children.extend(children);
		self
	}

	/// Own path segment.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Route name, if any.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Declared slots in declaration order.
	pub fn slots(&self) -> &[(SlotName, ComponentRef)] {
		&self.slots
	}

	/// Slot props flags.
	pub fn slot_props(&self) -> &SlotProps {
		&self.props
	}

	/// Deferred metadata.
	pub fn route_meta(&self) -> &RouteMeta {
		&self.meta
	}

	/// Nested descriptors.
	pub fn children(&self) -> &[RouteDescriptor] {
		&self.children
	}

	/// Returns whether this descriptor only hosts layout for its children.
	pub fn is_layout_host(&self) -> bool {
		self.name.is_none() && !self.children.is_empty()
	}
}
