//! # waypost-workspace
//!
//! The workspace dashboard's navigation: landing page, issue list, the
//! project / instance / environment dashboards, the review, export and
//! anomaly centers, user profiles, the `403` / `404` fallbacks, and the
//! workspace settings pages grouped under the setting layout.
//!
//! Every content route shares the dashboard sidebar. Titles resolve through
//! a [`Translate`](waypost_i18n::Translate) implementation at navigation
//! time, so they follow the active locale.

#![warn(missing_docs)]

pub mod names;
pub mod routes;
pub mod views;

pub use routes::{WorkspaceRoutes, workspace_routes};
