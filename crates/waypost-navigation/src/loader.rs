//! Memoized slot loading.
//!
//! Deferred slot modules are fetched on first mount and cached for the life
//! of the loader, keyed by the route that declared the slot and the slot
//! name. An inherited slot is therefore fetched once no matter how many
//! children mount it. Concurrent loads of the same key share one in-flight
//! fetch; a failed fetch is evicted so the next attempt refetches.

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use parking_lot::Mutex;
use std::collections::HashMap;
use waypost_routes::{Component, ComponentRef, LoadError, ResolvedSlot, RouteId, SlotName};

type SharedLoad = Shared<BoxFuture<'static, Result<Component, LoadError>>>;

/// Cache key of a loaded slot module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
	/// Route whose descriptor declared the slot.
	pub origin: RouteId,
	/// Slot name.
	pub slot: SlotName,
}

impl SlotKey {
	/// Creates a key.
	pub fn new(origin: RouteId, slot: SlotName) -> Self {
		Self { origin, slot }
	}
}

/// Memo cache for deferred slot components.
#[derive(Default)]
pub struct ComponentLoader {
	entries: Mutex<HashMap<SlotKey, SharedLoad>>,
}

impl ComponentLoader {
	/// Creates an empty loader.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the component for `slot`, fetching it on first use.
	///
	/// Eager components are returned directly and never cached.
	///
	/// # Errors
	///
	/// Returns the loader's [`LoadError`]; the failed entry is evicted.
	pub async fn load(&self, slot: &ResolvedSlot) -> Result<Component, LoadError> {
		let loader = match &slot.component {
			ComponentRef::Eager(component) => return Ok(component.clone()),
			ComponentRef::Deferred { loader, .. } => loader,
		};

		let key = SlotKey::new(slot.origin, slot.slot.clone());
		let fetch = {
			let mut entries = self.entries.lock();
			match entries.get(&key) {
				Some(existing) => {
					tracing::debug!(origin = %key.origin, slot = %key.slot, "slot module cache hit");
					existing.clone()
				}
				None => {
					tracing::debug!(
						origin = %key.origin,
						slot = %key.slot,
						module = slot.component.module(),
						"slot module cache miss, fetching"
					);
					let fetch = loader().shared();
					entries.insert(key.clone(), fetch.clone());
					fetch
				}
			}
		};

		let result = fetch.clone().await;
		if result.is_err() {
			let mut entries = self.entries.lock();
			if entries.get(&key).is_some_and(|current| current.ptr_eq(&fetch)) {
				entries.remove(&key);
			}
		}
		result
	}

	/// Returns whether a fetch for `key` is cached or in flight.
	pub fn contains(&self, key: &SlotKey) -> bool {
		self.entries.lock().contains_key(key)
	}

	/// Number of cached or in-flight entries.
	pub fn len(&self) -> usize {
		self.entries.lock().len()
	}

	/// Returns whether nothing has been fetched.
	pub fn is_empty(&self) -> bool {
		self.entries.lock().is_empty()
	}

	/// Drops every cached module.
	pub fn clear(&self) {
		self.entries.lock().clear();
	}
}

impl std::fmt::Debug for ComponentLoader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ComponentLoader")
			.field("entries", &self.len())
			.finish()
	}
}
