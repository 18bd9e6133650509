//! Route tree assembly.
//!
//! [`RouteTree::build`] turns the ordered descriptor list into an immutable
//! arena of nodes. Effective paths, inherited slots and inherited metadata
//! are fully materialized per node, so lookups never walk parent chains.

use crate::component::{ComponentRef, SlotName};
use crate::descriptor::RouteDescriptor;
use crate::error::{ConfigResult, ConfigurationError, LookupError};
use crate::meta::{RouteMeta, TitleResolver};
use crate::path::{PathPattern, Segment, normalize, parse_segments};
use std::collections::HashMap;

/// Stable identifier of a node within one [`RouteTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(usize);

impl RouteId {
	/// Position of the node in registration (depth-first) order.
	pub fn index(self) -> usize {
		self.0
	}
}

impl std::fmt::Display for RouteId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A slot after inheritance.
#[derive(Debug, Clone)]
pub struct ResolvedSlot {
	/// Slot name.
	pub slot: SlotName,
	/// Node whose descriptor declared this component.
	pub origin: RouteId,
	/// The component reference.
	pub component: ComponentRef,
	/// Whether route parameters are forwarded to the component.
	pub forward_props: bool,
}

/// One route in the assembled tree.
pub struct RouteNode {
	id: RouteId,
	parent: Option<RouteId>,
	children: Vec<RouteId>,
	name: Option<String>,
	own_path: String,
	pattern: PathPattern,
	slots: Vec<ResolvedSlot>,
	meta: RouteMeta,
	own_title: Option<TitleResolver>,
	layout_host: bool,
}

impl RouteNode {
	/// Node identifier.
	pub fn id(&self) -> RouteId {
		self.id
	}

	/// Parent node, if any.
	pub fn parent(&self) -> Option<RouteId> {
		self.parent
	}

	/// Child nodes in declaration order.
	pub fn children(&self) -> &[RouteId] {
		&self.children
	}

	/// Route name, if any.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// The descriptor's own path segment.
	pub fn own_path(&self) -> &str {
		&self.own_path
	}

	/// The effective path (`sql-review/:slug`).
	pub fn effective_path(&self) -> &str {
		self.pattern.pattern()
	}

	/// The compiled effective path.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// Slots after inheritance: parent slots first, overridden in place,
	/// followed by the slots only this node declares.
	pub fn slots(&self) -> &[ResolvedSlot] {
		&self.slots
	}

	/// Looks up one resolved slot.
	pub fn slot(&self, slot: &SlotName) -> Option<&ResolvedSlot> {
		self.slots.iter().find(|resolved| resolved.slot == *slot)
	}

	/// Metadata after inheritance.
	pub fn meta(&self) -> &RouteMeta {
		&self.meta
	}

	/// Evaluates the title this node declares itself (used for breadcrumbs).
	pub fn resolve_own_title(&self) -> Option<String> {
		self.own_title.as_ref().map(|resolve| resolve())
	}

	/// Returns whether this node only hosts layout for its children.
	pub fn is_layout_host(&self) -> bool {
		self.layout_host
	}

	/// Returns whether this node can be the target of a navigation.
	pub fn is_navigable(&self) -> bool {
		!self.layout_host
	}
}

impl std::fmt::Debug for RouteNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouteNode")
			.field("id", &self.id)
			.field("parent", &self.parent)
			.field("name", &self.name)
			.field("path", &self.effective_path())
			.field("slots", &self.slots)
			.field("meta", &self.meta)
			.field("has_own_title", &self.own_title.is_some())
			.field("layout_host", &self.layout_host)
			.finish()
	}
}

/// A successful path match.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
	/// The matched node.
	pub node: &'a RouteNode,
	/// Extracted path parameters.
	pub params: HashMap<String, String>,
}

/// The immutable, fully materialized route tree.
#[derive(Debug)]
pub struct RouteTree {
	nodes: Vec<RouteNode>,
	roots: Vec<RouteId>,
	by_name: HashMap<String, RouteId>,
	/// Navigable nodes in first-match order.
	match_order: Vec<RouteId>,
}

impl RouteTree {
	/// Assembles the tree from the top-level descriptor list.
	///
	/// Assembly is depth-first; declaration order decides which node wins
	/// when two effective paths could match the same URL.
	///
	/// # Errors
	///
	/// Returns a [`ConfigurationError`] for a duplicate or empty name, a
	/// malformed path, a repeated parameter name, or a descriptor without
	/// slots. No partial tree is ever returned.
	///
	/// # Examples
	///
	/// ```
	/// use waypost_routes::{Component, ComponentRef, RouteDescriptor, RouteTree, SlotName};
	///
	/// let view = |m: &'static str| ComponentRef::eager(Component::marker(m));
	/// let tree = RouteTree::build(vec![
	///     RouteDescriptor::new("sql-review")
	///         .slot(SlotName::LEFT_SIDEBAR, view("views/DashboardSidebar"))
	///         .slot(SlotName::CONTENT, view("layouts/SettingLayout"))
	///         .child(RouteDescriptor::new("").named("list").component(view("views/List")))
	///         .child(RouteDescriptor::new("new").named("create").component(view("views/Create")))
	///         .child(RouteDescriptor::new(":slug").named("detail").component(view("views/Detail"))),
	/// ])
	/// .unwrap();
	///
	/// assert_eq!(tree.get("list").unwrap().effective_path(), "sql-review");
	/// assert_eq!(tree.get("create").unwrap().effective_path(), "sql-review/new");
	/// assert_eq!(tree.get("detail").unwrap().effective_path(), "sql-review/:slug");
	/// assert!(tree.get("detail").unwrap().slot(&SlotName::LEFT_SIDEBAR).is_some());
	/// ```
	pub fn build<I>(descriptors: I) -> ConfigResult<Self>
	where
		I: IntoIterator<Item = RouteDescriptor>,
	{
		let mut tree = Self {
			nodes: Vec::new(),
			roots: Vec::new(),
			by_name: HashMap::new(),
			match_order: Vec::new(),
		};

		for descriptor in descriptors {
			let id = tree.assemble(&descriptor, None, &[])?;
			tree.roots.push(id);
		}

		tracing::debug!(
			nodes = tree.nodes.len(),
			named = tree.by_name.len(),
			navigable = tree.match_order.len(),
			"route tree built"
		);

		Ok(tree)
	}

	fn assemble(
		&mut self,
		descriptor: &RouteDescriptor,
		parent: Option<RouteId>,
		parent_segments: &[Segment],
	) -> ConfigResult<RouteId> {
		let mut segments = parent_segments.to_vec();
		segments.extend(parse_segments(descriptor.path())?);
		let pattern = PathPattern::compile(&segments)?;

		if let Some(name) = descriptor.name() {
			if name.trim().is_empty() {
				return Err(ConfigurationError::EmptyName {
					path: pattern.pattern().to_string(),
				});
			}
			if let Some(existing) = self.by_name.get(name) {
				return Err(ConfigurationError::DuplicateName {
					name: name.to_string(),
					first: self.nodes[existing.0].effective_path().to_string(),
					second: pattern.pattern().to_string(),
				});
			}
		}

		if descriptor.slots().is_empty() {
			return Err(ConfigurationError::NoSlots {
				path: pattern.pattern().to_string(),
			});
		}

		let id = RouteId(self.nodes.len());
		let (mut slots, meta) = match parent {
			Some(parent) => {
				let parent = &self.nodes[parent.0];
				(
					parent.slots.clone(),
					descriptor.route_meta().inherit(&parent.meta),
				)
			}
			None => (Vec::new(), descriptor.route_meta().clone()),
		};

		for (slot, component) in descriptor.slots() {
			let resolved = ResolvedSlot {
				slot: slot.clone(),
				origin: id,
				component: component.clone(),
				forward_props: descriptor.slot_props().forwards(slot),
			};
			match slots.iter_mut().find(|existing| existing.slot == *slot) {
				Some(existing) => *existing = resolved,
				None => slots.push(resolved),
			}
		}

		let layout_host = descriptor.is_layout_host();
		self.nodes.push(RouteNode {
			id,
			parent,
			children: Vec::new(),
			name: descriptor.name().map(str::to_string),
			own_path: descriptor.path().to_string(),
			pattern,
			slots,
			meta,
			own_title: descriptor.route_meta().title_resolver().cloned(),
			layout_host,
		});

		if let Some(name) = descriptor.name() {
			self.by_name.insert(name.to_string(), id);
		}
		if !layout_host {
			self.match_order.push(id);
		}

		let mut children = Vec::with_capacity(descriptor.children().len());
		for child in descriptor.children() {
			children.push(self.assemble(child, Some(id), &segments)?);
		}
		self.nodes[id.0].children = children;

		Ok(id)
	}

	/// Returns the node with the given id.
	pub fn node(&self, id: RouteId) -> Option<&RouteNode> {
		self.nodes.get(id.0)
	}

	/// Returns the node registered under `name`.
	pub fn get(&self, name: &str) -> Option<&RouteNode> {
		self.by_name.get(name).map(|id| &self.nodes[id.0])
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.by_name.contains_key(name)
	}

	/// Top-level nodes in declaration order.
	pub fn roots(&self) -> impl Iterator<Item = &RouteNode> {
		self.roots.iter().map(|id| &self.nodes[id.0])
	}

	/// All nodes in depth-first registration order.
	pub fn iter(&self) -> impl Iterator<Item = &RouteNode> {
		self.nodes.iter()
	}

	/// Number of nodes, layout hosts included.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns whether the tree has no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// The chain from the top-level ancestor down to `id`, inclusive.
	pub fn ancestors(&self, id: RouteId) -> Vec<&RouteNode> {
		let mut chain = Vec::new();
		let mut current = self.nodes.get(id.0);
		while let Some(node) = current {
			chain.push(node);
			current = node.parent.and_then(|parent| self.nodes.get(parent.0));
		}
		chain.reverse();
		chain
	}

	/// Matches a concrete path; the first navigable node in declaration
	/// order wins.
	pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
		let path = normalize(path);
		self.match_order.iter().find_map(|id| {
			let node = &self.nodes[id.0];
			node.pattern.matches(path).map(|params| RouteMatch { node, params })
		})
	}

	/// Builds the concrete path of a named route.
	///
	/// # Errors
	///
	/// Returns [`LookupError::UnknownName`] or
	/// [`LookupError::MissingParameter`].
	pub fn reverse(&self, name: &str, params: &HashMap<String, String>) -> Result<String, LookupError> {
		let node = self
			.get(name)
			.ok_or_else(|| LookupError::UnknownName(name.to_string()))?;
		node.pattern
			.reverse(params)
			.map_err(|param| LookupError::MissingParameter {
				route: name.to_string(),
				param,
			})
	}
}
