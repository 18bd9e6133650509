//! Navigation error types.

use crate::settings::SettingsError;
use thiserror::Error;
use waypost_routes::{ConfigurationError, LoadError, SlotName};

/// Result type for navigation operations.
pub type NavigationResult<T> = Result<T, NavigationError>;

/// Errors surfaced by the navigator.
///
/// Permission denial and unknown destinations are not errors; they resolve
/// to a redirect inside the guard.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NavigationError {
	/// A slot module failed to load. The navigation was aborted and the
	/// previously active route is still displayed; retrying is allowed.
	#[error("route '{route}' could not mount slot '{slot}': {source}")]
	LoadFailure {
		/// Effective path of the route being mounted.
		route: String,
		/// Slot whose module failed.
		slot: SlotName,
		/// Underlying load error.
		#[source]
		source: LoadError,
	},

	/// A by-name navigation omitted a placeholder value.
	#[error("route '{route}' requires parameter '{param}'")]
	MissingParameter {
		/// Route name.
		route: String,
		/// Parameter without a value.
		param: String,
	},

	/// The navigator could not be assembled.
	#[error(transparent)]
	Configuration(#[from] ConfigurationError),

	/// The navigation settings document is invalid.
	#[error(transparent)]
	Settings(#[from] SettingsError),
}

impl NavigationError {
	/// Returns whether repeating the navigation may succeed.
	pub fn is_retryable(&self) -> bool {
		matches!(self, Self::LoadFailure { .. })
	}
}
