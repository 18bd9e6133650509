//! Translation support for waypost route titles.
//!
//! Route titles and breadcrumbs are produced lazily through the [`Translate`]
//! boundary so the displayed text always follows the active locale. This crate
//! provides:
//!
//! - [`MessageCatalog`]: per-locale messages, loadable from nested JSON
//!   locale documents.
//! - [`Translator`]: catalog-backed [`Translate`] implementation with a
//!   switchable locale and a fallback locale.
//! - [`start_case`]: the title-case transform used for some workspace titles.

#![warn(missing_docs)]

pub mod case;
pub mod catalog;
pub mod translator;

pub use case::start_case;
pub use catalog::{CatalogError, CatalogResult, MessageCatalog};
pub use translator::{Translate, Translator};
