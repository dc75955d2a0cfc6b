// web_app/app.rs - Root application component
//
// Sets up meta tags, routing, and the context every screen draws on:
// the API configuration and the session token store.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::config::ApiConfig;
use crate::web_app::pages::{EntryPage, ProductsPage};
use crate::web_app::session::Session;

pub const INDEX_ROUTE: &str = "/";
pub const PRODUCTS_ROUTE: &str = "/products";

/// API configuration provided by [`App`]
///
/// Handlers capture this and build an `ApiClient` when they fire.
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_default()
}

/// Session provided by [`App`]; falls back to the platform store
pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(|| {
        tracing::warn!("No Session in context, using platform default");
        Session::for_platform()
    })
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    provide_context(ApiConfig::default());
    provide_context(Session::for_platform());

    view! {
        <Title text="Product Catalog" />
        <Meta name="description" content="Sign up, log in and browse the product catalog" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/catalog_portal.css" />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=EntryPage />
                    <Route path=path!("/products") view=ProductsPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href=INDEX_ROUTE
                    class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Back to start"
                </a>
            </div>
        </div>
    }
}
