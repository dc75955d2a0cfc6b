// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Wire types shared with the remote API
// - config.rs: Remote API base URL and storage key
// - api/: HTTP client for the remote service (both targets)
// - session.rs, auth.rs, catalog.rs, entry.rs, lifecycle.rs: screen logic,
//   free of any DOM dependency
// - components/, pages/, app.rs: Leptos UI (both SSR and hydrate)

pub mod model;
pub mod config;
pub mod api;
pub mod session;
pub mod auth;
pub mod catalog;
pub mod entry;
pub mod lifecycle;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
