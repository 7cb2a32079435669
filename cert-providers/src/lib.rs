//! Collaborator traits and reference implementations consumed by the
//! certificate mobile adapter.
//!
//! Every boundary the adapter touches (issue storage, permissions,
//! localization, site URLs, plugin settings and templating) is expressed as a
//! trait here so the host application can plug in its own implementation.
//! The `imp` submodules contain simple implementations usable in tests,
//! demos and standalone deployments.

pub mod common_models;
pub mod issue_repository;
pub mod localizer;
pub mod permission;
pub mod plugin_config;
pub mod template_renderer;
pub mod url_builder;
