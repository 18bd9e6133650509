//! Navigator settings.
//!
//! Settings are plain serde structs loaded from TOML. Every field has a
//! default, so an empty document is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading [`NavigationSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings file could not be read.
	#[error("File error: {0}")]
	FileError(String),

	/// The settings document is not valid TOML for these settings.
	#[error("Parse error: {0}")]
	ParseError(String),
}

/// Navigator configuration.
///
/// # Example
///
/// ```
/// use waypost_navigation::NavigationSettings;
///
/// let settings = NavigationSettings::from_toml_str(r#"
/// forbidden_route = "workspace.forbidden"
/// preserve_denied_destination = false
/// "#).unwrap();
///
/// assert_eq!(settings.forbidden_route, "workspace.forbidden");
/// assert_eq!(settings.not_found_route, "error.404");
/// assert!(!settings.preserve_denied_destination);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationSettings {
	/// Name of the route mounted when a navigation is denied.
	pub forbidden_route: String,

	/// Name of the route mounted when nothing matches.
	pub not_found_route: String,

	/// Record the denied destination on the mounted forbidden route.
	pub preserve_denied_destination: bool,
}

impl Default for NavigationSettings {
	fn default() -> Self {
		Self {
			forbidden_route: "error.403".to_string(),
			not_found_route: "error.404".to_string(),
			preserve_denied_destination: true,
		}
	}
}

impl NavigationSettings {
	/// Sets the forbidden route name.
	pub fn with_forbidden_route(mut self, name: impl Into<String>) -> Self {
		self.forbidden_route = name.into();
		self
	}

	/// Sets the not-found route name.
	pub fn with_not_found_route(mut self, name: impl Into<String>) -> Self {
		self.not_found_route = name.into();
		self
	}

	/// Enables or disables recording the denied destination.
	pub fn with_preserve_denied_destination(mut self, preserve: bool) -> Self {
		self.preserve_denied_destination = preserve;
		self
	}

	/// Parses settings from a TOML document.
	pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
		toml::from_str(contents)
			.map_err(|e| SettingsError::ParseError(format!("TOML parse error: {}", e)))
	}

	/// Loads settings from a TOML file.
	pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			SettingsError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;
		Self::from_toml_str(&contents)
	}
}
