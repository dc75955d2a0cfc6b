// web_app/pages/products.rs - Catalog page
//
// On mount (client only) resolves the user and fetches the listing, then
// filters and pages it locally. Results that arrive after the page has been
// left are dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::web_app::api::ApiClient;
use crate::web_app::app::{use_api_config, use_session, INDEX_ROUTE};
use crate::web_app::catalog::{load_catalog, Catalog, CatalogSnapshot};
use crate::web_app::components::{ErrorDisplay, Loading, Pagination, ProductGrid, SearchBar};
use crate::web_app::lifecycle::Liveness;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let config = use_api_config();
    let session = use_session();
    let navigate = use_navigate();

    let catalog = RwSignal::new(Catalog::default());
    let user_email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.end()
    });

    // Effects only run in the browser, so SSR never issues these requests
    {
        let session = session.clone();
        Effect::new(move |_| {
            let api = ApiClient::new(config.clone());
            let session = session.clone();
            let liveness = liveness.clone();
            spawn_local(async move {
                let snapshot = load_catalog(&api, &session).await;
                liveness.deliver(snapshot, |snapshot: CatalogSnapshot| {
                    if let Some(email) = snapshot.user_email {
                        user_email.set(email);
                    }
                    catalog.update(|c| c.set_products(snapshot.products));
                    error.set(snapshot.error);
                    loading.set(false);
                });
            });
        });
    }

    let visible = Signal::derive(move || catalog.with(Catalog::visible));
    let query = Signal::derive(move || catalog.with(|c| c.query().to_string()));
    let current_page = Signal::derive(move || catalog.with(Catalog::current_page));
    let total_pages = Signal::derive(move || catalog.with(Catalog::total_pages));
    let can_go_prev = Signal::derive(move || catalog.with(Catalog::can_go_prev));
    let can_go_next = Signal::derive(move || catalog.with(Catalog::can_go_next));

    let on_search = Callback::new(move |text: String| catalog.update(|c| c.set_query(text)));
    let on_prev = Callback::new(move |()| catalog.update(Catalog::prev_page));
    let on_next = Callback::new(move |()| catalog.update(Catalog::next_page));

    let on_logout = move |_| {
        session.clear();
        tracing::info!("Session cleared");
        navigate(INDEX_ROUTE, NavigateOptions::default());
    };

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <header class="bg-white shadow-sm border-b border-gray-200">
                <div class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                    <h1 class="text-xl font-bold">
                        "Logged in as " {move || user_email.get()}
                    </h1>
                    <button
                        type="button"
                        class="px-4 py-2 bg-white text-gray-700 rounded-lg hover:bg-gray-50 \
                               border border-gray-300 font-medium shadow-sm"
                        on:click=on_logout
                    >
                        "Log out"
                    </button>
                </div>
            </header>

            <main class="max-w-6xl mx-auto px-4 py-8">
                <SearchBar query=query on_input=on_search />

                {move || error.get().map(|e| view! { <ErrorDisplay error=e /> })}

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <Loading message="Loading products..." /> }
                >
                    <ProductGrid products=visible />
                </Show>

                <Pagination
                    current_page=current_page
                    total_pages=total_pages
                    can_go_prev=can_go_prev
                    can_go_next=can_go_next
                    on_prev=on_prev
                    on_next=on_next
                />
            </main>
        </div>
    }
}
