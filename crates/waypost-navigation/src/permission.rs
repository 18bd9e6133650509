//! Permission engine boundary.
//!
//! The navigator only produces the set of permissions a route requires and
//! consumes a yes/no answer; deciding is the engine's job.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use waypost_routes::PermissionSet;

/// The identity a navigation is evaluated for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
	/// Principal identifier, e.g. an email address.
	pub id: String,
	/// Permissions the principal currently holds.
	pub permissions: PermissionSet,
}

impl Principal {
	/// Creates a principal with the given held permissions.
	pub fn new(id: impl Into<String>, permissions: PermissionSet) -> Self {
		Self {
			id: id.into(),
			permissions,
		}
	}

	/// A principal holding no permissions.
	pub fn anonymous() -> Self {
		Self::default()
	}
}

/// Externally owned principal, read by the navigator at resolve time.
pub type SharedPrincipal = Arc<RwLock<Principal>>;

/// External permission check.
#[async_trait]
pub trait PermissionEngine: Send + Sync {
	/// Returns whether `principal` holds every permission in `required`.
	async fn has_permissions(&self, principal: &Principal, required: &PermissionSet) -> bool;
}

/// Engine that answers from the principal's held permission set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldPermissions;

#[async_trait]
impl PermissionEngine for HeldPermissions {
	async fn has_permissions(&self, principal: &Principal, required: &PermissionSet) -> bool {
		principal.permissions.is_superset(required)
	}
}
