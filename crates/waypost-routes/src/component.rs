//! Named component slots and their (possibly deferred) view modules.

use crate::error::LoadError;
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::any::Any;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// A named region of the screen into which a route's component is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotName(Cow<'static, str>);

impl SlotName {
	/// The unnamed slot used by descriptors that declare a single component.
	pub const DEFAULT: SlotName = SlotName(Cow::Borrowed("default"));
	/// Primary content region.
	pub const CONTENT: SlotName = SlotName(Cow::Borrowed("content"));
	/// Shared left sidebar region.
	pub const LEFT_SIDEBAR: SlotName = SlotName(Cow::Borrowed("leftSidebar"));

	/// Creates a slot name.
	pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
		Self(name.into())
	}

	/// Returns the slot name as a string.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for SlotName {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&'static str> for SlotName {
	fn from(name: &'static str) -> Self {
		Self(Cow::Borrowed(name))
	}
}

/// A loaded view module.
///
/// The routing core never inspects the payload; it only carries it from
/// the loader to the mounted slot.
#[derive(Clone)]
pub struct Component {
	module: Arc<str>,
	payload: Arc<dyn Any + Send + Sync>,
}

impl Component {
	/// Wraps a loaded module payload.
	pub fn new<T: Any + Send + Sync>(module: impl Into<Arc<str>>, payload: T) -> Self {
		Self {
			module: module.into(),
			payload: Arc::new(payload),
		}
	}

	/// Creates a component identified only by its module id.
	pub fn marker(module: impl Into<Arc<str>>) -> Self {
		Self::new(module, ())
	}

	/// Returns the module identifier.
	pub fn module(&self) -> &str {
		&self.module
	}

	/// Downcasts the payload.
	pub fn payload<T: Any + Send + Sync>(&self) -> Option<&T> {
		self.payload.downcast_ref::<T>()
	}
}

impl std::fmt::Debug for Component {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Component")
			.field("module", &self.module)
			.finish()
	}
}

impl PartialEq for Component {
	fn eq(&self, other: &Self) -> bool {
		self.module == other.module && Arc::ptr_eq(&self.payload, &other.payload)
	}
}

/// Zero-argument deferred module fetch.
pub type Loader = Arc<dyn Fn() -> BoxFuture<'static, Result<Component, LoadError>> + Send + Sync>;

/// External registry of view modules.
#[async_trait]
pub trait ViewRegistry: Send + Sync {
	/// Fetches the module with the given identifier.
	async fn load(&self, module: &str) -> Result<Component, LoadError>;
}

/// Reference to the component mounted in a slot.
#[derive(Clone)]
pub enum ComponentRef {
	/// Already loaded; mounting never fetches.
	Eager(Component),
	/// Fetched on first mount, then memoized by the navigation layer.
	Deferred {
		/// Identifier of the module the loader fetches.
		module: Arc<str>,
		/// The loader itself.
		loader: Loader,
	},
}

impl ComponentRef {
	/// Creates an eager reference.
	pub fn eager(component: Component) -> Self {
		Self::Eager(component)
	}

	/// Creates a deferred reference from a loader closure.
	pub fn deferred<F>(module: impl Into<Arc<str>>, loader: F) -> Self
	where
		F: Fn() -> BoxFuture<'static, Result<Component, LoadError>> + Send + Sync + 'static,
	{
		Self::Deferred {
			module: module.into(),
			loader: Arc::new(loader),
		}
	}

	/// Creates a deferred reference fetched through a [`ViewRegistry`].
	pub fn from_registry(registry: Arc<dyn ViewRegistry>, module: &'static str) -> Self {
		Self::deferred(module, move || {
			let registry = Arc::clone(&registry);
			Box::pin(async move { registry.load(module).await })
		})
	}

	/// Returns the module identifier.
	pub fn module(&self) -> &str {
		match self {
			Self::Eager(component) => component.module(),
			Self::Deferred { module, .. } => module,
		}
	}

	/// Returns whether this reference is already loaded.
	pub fn is_eager(&self) -> bool {
		matches!(self, Self::Eager(_))
	}
}

impl std::fmt::Debug for ComponentRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Eager(component) => f.debug_tuple("Eager").field(component).finish(),
			Self::Deferred { module, .. } => f.debug_struct("Deferred").field("module", module).finish(),
		}
	}
}

/// Which slots receive the route's parameters as inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SlotProps {
	/// No slot receives parameters.
	#[default]
	None,
	/// Every slot declared by the descriptor receives parameters.
	All,
	/// Per-slot flags; unlisted slots receive nothing.
	PerSlot(HashMap<SlotName, bool>),
}

impl SlotProps {
	/// Builds per-slot flags from `(slot, forward)` pairs.
	pub fn per_slot<I>(flags: I) -> Self
	where
		I: IntoIterator<Item = (SlotName, bool)>,
	{
		Self::PerSlot(flags.into_iter().collect())
	}

	/// Returns whether the given slot receives parameters.
	pub fn forwards(&self, slot: &SlotName) -> bool {
		match self {
			Self::None => false,
			Self::All => true,
			Self::PerSlot(flags) => flags.get(slot).copied().unwrap_or(false),
		}
	}
}
