//! Error types for route configuration and view module loading.

use thiserror::Error;

/// Result type for route tree assembly.
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Fatal route configuration errors, detected while the tree is built.
///
/// None of these are recoverable at runtime: an application whose route
/// table produces one of them must not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
	/// Two descriptors declare the same route name.
	#[error("duplicate route name '{name}': declared at '{first}' and again at '{second}'")]
	DuplicateName {
		/// The conflicting name.
		name: String,
		/// Effective path of the first declaration.
		first: String,
		/// Effective path of the second declaration.
		second: String,
	},

	/// A descriptor declares a name that is empty or only whitespace.
	#[error("route at '{path}' declares an empty name")]
	EmptyName {
		/// Effective path of the offending descriptor.
		path: String,
	},

	/// A path segment does not follow the segment grammar.
	#[error("malformed path '{path}': {reason}")]
	MalformedPath {
		/// The descriptor's own path segment.
		path: String,
		/// What is wrong with it.
		reason: String,
	},

	/// The same parameter name appears twice along one effective path.
	#[error("parameter ':{param}' appears more than once in '{path}'")]
	DuplicateParameter {
		/// Effective path containing the duplicate.
		path: String,
		/// Parameter name.
		param: String,
	},

	/// A descriptor declares no component slot of its own.
	#[error("route at '{path}' declares no component slot")]
	NoSlots {
		/// Effective path of the offending descriptor.
		path: String,
	},

	/// A fallback route (forbidden / not found) is missing from the tree.
	#[error("fallback route '{0}' is not registered")]
	UnknownFallbackRoute(String),

	/// A fallback route exists but is a pure layout host.
	#[error("fallback route '{0}' is not a navigation target")]
	FallbackNotNavigable(String),
}

/// Errors from looking up a route by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
	/// No route carries this name.
	#[error("unknown route name: {0}")]
	UnknownName(String),

	/// A placeholder in the route's path has no value.
	#[error("route '{route}' requires parameter '{param}'")]
	MissingParameter {
		/// Route name.
		route: String,
		/// Parameter without a value.
		param: String,
	},
}

/// A view module failed to load.
///
/// Load errors are cloneable because a single in-flight fetch may be shared
/// by several navigations waiting on the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load view module '{module}': {message}")]
pub struct LoadError {
	/// Identifier of the module that failed.
	pub module: String,
	/// Underlying failure description.
	pub message: String,
}

impl LoadError {
	/// Creates a new load error.
	pub fn new(module: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			module: module.into(),
			message: message.into(),
		}
	}
}
