// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Alert, Loading, etc.)
// - auth.rs: Registration and login forms
// - catalog.rs: Search bar, product cards, grid and pagination

pub mod common;
pub mod auth;
pub mod catalog;

// Re-export commonly used components for convenience
pub use common::*;
pub use auth::*;
pub use catalog::*;
