// web_app/pages/mod.rs - Page components module
//
// - EntryPage: registration/login switcher at `/`
// - ProductsPage: authenticated catalog at `/products`

pub mod entry;
pub mod products;

// Re-export page components
pub use entry::EntryPage;
pub use products::ProductsPage;
