//! Message catalog for storing translations

use std::collections::HashMap;
use thiserror::Error;

/// Result type for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error raised while reading a locale document.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The document is not valid JSON.
	#[error("invalid locale document for '{locale}': {source}")]
	Parse {
		/// Locale being loaded.
		locale: String,
		/// Parser error.
		#[source]
		source: serde_json::Error,
	},

	/// The document root is not an object.
	#[error("locale document for '{0}' must be a JSON object")]
	NotAnObject(String),
}

/// A message catalog containing translations for a specific locale
///
/// # Example
/// ```
/// use waypost_i18n::MessageCatalog;
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add_translation("common.projects", "Projets");
///
/// assert_eq!(catalog.get("common.projects"), Some(&"Projets".to_string()));
/// assert_eq!(catalog.get("common.instances"), None);
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Builds a catalog from a nested JSON locale document.
	///
	/// Nested objects are flattened into dotted keys, so
	/// `{"sql-review": {"create": {"breadcrumb": "Create"}}}` yields the key
	/// `sql-review.create.breadcrumb`. Non-string leaves are skipped.
	///
	/// ```
	/// use waypost_i18n::MessageCatalog;
	///
	/// let catalog = MessageCatalog::from_json_str(
	///     "en",
	///     r#"{"common": {"projects": "Projects"}, "anomaly-center": "Anomaly Center"}"#,
	/// )
	/// .unwrap();
	///
	/// assert_eq!(catalog.get("common.projects"), Some(&"Projects".to_string()));
	/// assert_eq!(catalog.get("anomaly-center"), Some(&"Anomaly Center".to_string()));
	/// ```
	pub fn from_json_str(locale: &str, document: &str) -> CatalogResult<Self> {
		let value: serde_json::Value =
			serde_json::from_str(document).map_err(|source| CatalogError::Parse {
				locale: locale.to_string(),
				source,
			})?;
		let serde_json::Value::Object(root) = value else {
			return Err(CatalogError::NotAnObject(locale.to_string()));
		};

		let mut catalog = Self::new(locale);
		let mut stack: Vec<(String, serde_json::Map<String, serde_json::Value>)> =
			vec![(String::new(), root)];
		while let Some((prefix, object)) = stack.pop() {
			for (key, value) in object {
				let full_key = if prefix.is_empty() {
					key
				} else {
					format!("{}.{}", prefix, key)
				};
				match value {
					serde_json::Value::String(text) => catalog.add_translation(full_key, text),
					serde_json::Value::Object(nested) => stack.push((full_key, nested)),
					_ => tracing::debug!(locale, key = %full_key, "skipping non-string message"),
				}
			}
		}
		Ok(catalog)
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a simple translation
	pub fn add_translation(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	/// Get a translation
	pub fn get(&self, message: &str) -> Option<&String> {
		self.messages.get(message)
	}

	/// Number of messages in the catalog
	pub fn len(&self) -> usize {
		self.messages.len()
	}

	/// Returns whether the catalog has no messages
	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}
}
