// web_app/api/mod.rs - Remote API module
//
// Client and error types for the third-party auth/catalog service.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
