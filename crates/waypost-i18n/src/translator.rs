//! Translation boundary and the catalog-backed translator.

use crate::catalog::MessageCatalog;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Maps a message key to display text in the active locale.
///
/// Route titles call this lazily, so a locale switch is reflected the next
/// time a title is resolved.
pub trait Translate: Send + Sync {
	/// Returns the text for `key`, or the key itself when no catalog has it.
	fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
	F: Fn(&str) -> String + Send + Sync,
{
	fn translate(&self, key: &str) -> String {
		self(key)
	}
}

/// Catalog-backed translator with a switchable active locale.
///
/// Lookup order is the active locale, then the fallback locale, then the key.
///
/// ```
/// use waypost_i18n::{MessageCatalog, Translate, Translator};
///
/// let mut en = MessageCatalog::new("en");
/// en.add_translation("common.projects", "Projects");
/// let mut zh = MessageCatalog::new("zh-CN");
/// zh.add_translation("common.projects", "项目");
///
/// let translator = Translator::new("en").with_catalog(en).with_catalog(zh);
/// assert_eq!(translator.translate("common.projects"), "Projects");
///
/// translator.set_locale("zh-CN");
/// assert_eq!(translator.translate("common.projects"), "项目");
/// assert_eq!(translator.translate("common.missing"), "common.missing");
/// ```
#[derive(Debug)]
pub struct Translator {
	catalogs: HashMap<String, MessageCatalog>,
	fallback_locale: String,
	active_locale: RwLock<String>,
}

impl Translator {
	/// Creates a translator whose active and fallback locale is `fallback_locale`.
	pub fn new(fallback_locale: impl Into<String>) -> Self {
		let fallback_locale = fallback_locale.into();
		Self {
			catalogs: HashMap::new(),
			active_locale: RwLock::new(fallback_locale.clone()),
			fallback_locale,
		}
	}

	/// Registers a catalog, replacing any catalog for the same locale.
	pub fn with_catalog(mut self, catalog: MessageCatalog) -> Self {
		self.catalogs.insert(catalog.locale().to_string(), catalog);
		self
	}

	/// Switches the active locale.
	///
	/// Switching to a locale with no catalog is allowed; lookups then go
	/// straight to the fallback locale.
	pub fn set_locale(&self, locale: impl Into<String>) {
		let locale = locale.into();
		if !self.catalogs.contains_key(&locale) {
			tracing::warn!(locale = %locale, "no catalog registered for locale");
		}
		*self.active_locale.write() = locale;
	}

	/// Returns the active locale.
	pub fn locale(&self) -> String {
		self.active_locale.read().clone()
	}

	/// Returns the fallback locale.
	pub fn fallback_locale(&self) -> &str {
		&self.fallback_locale
	}

	/// Returns whether a catalog for `locale` is registered.
	pub fn has_locale(&self, locale: &str) -> bool {
		self.catalogs.contains_key(locale)
	}
}

impl Translate for Translator {
	fn translate(&self, key: &str) -> String {
		let active = self.active_locale.read();
		[active.as_str(), self.fallback_locale.as_str()]
			.into_iter()
			.filter_map(|locale| self.catalogs.get(locale))
			.find_map(|catalog| catalog.get(key))
			.cloned()
			.unwrap_or_else(|| key.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn translator() -> Translator {
		let mut en = MessageCatalog::new("en");
		en.add_translation("common.settings", "Settings");
		en.add_translation("common.sql-review", "SQL Review");
		let mut ja = MessageCatalog::new("ja");
		ja.add_translation("common.settings", "設定");
		Translator::new("en").with_catalog(en).with_catalog(ja)
	}

	#[rstest]
	fn test_falls_back_to_default_locale(translator: Translator) {
		// Arrange
		translator.set_locale("ja");

		// Act
		let own = translator.translate("common.settings");
		let fallback = translator.translate("common.sql-review");

		// Assert
		assert_eq!(own, "設定");
		assert_eq!(fallback, "SQL Review");
	}

	#[rstest]
	fn test_unknown_locale_uses_fallback(translator: Translator) {
		translator.set_locale("fr");
		assert_eq!(translator.locale(), "fr");
		assert!(!translator.has_locale("fr"));
		assert_eq!(translator.translate("common.settings"), "Settings");
	}

	#[rstest]
	fn test_missing_key_returns_key(translator: Translator) {
		assert_eq!(translator.translate("nope.nothing"), "nope.nothing");
	}

	#[rstest]
	fn test_closure_translator() {
		let upper = |key: &str| key.to_uppercase();
		assert_eq!(upper.translate("abc"), "ABC");
	}
}
