// web_app/components/catalog.rs - Catalog UI components
//
// - SearchBar: live title filter
// - ProductCard: thumbnail, price and title for one product
// - ProductGrid: current page of cards, or the empty-state line
// - Pagination: Previous/Next with "Page X of Y"

use leptos::prelude::*;

use crate::web_app::catalog::EMPTY_CATALOG;
use crate::web_app::model::Product;

/// Search input; every keystroke is reported through `on_input`
#[component]
pub fn SearchBar(
    /// Current search text
    #[prop(into)]
    query: Signal<String>,
    /// Called with the new text on each edit
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="relative w-full mb-6">
            <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                <span class="text-gray-400">"🔍"</span>
            </div>
            <input
                type="search"
                placeholder="Search products..."
                aria-label="Search products"
                class="w-full pl-10 pr-4 py-3 border-2 border-gray-200 rounded-xl \
                       focus:ring-4 focus:ring-blue-100 focus:border-blue-500 \
                       outline-none text-lg transition-all shadow-sm"
                prop:value=move || query.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Product card for the catalog grid
#[component]
pub fn ProductCard(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let price_display = product.price_display();

    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-100 \
                    flex flex-col h-72 overflow-hidden">
            <img
                src=product.thumbnail.clone()
                alt=product.title.clone()
                class="h-36 w-full object-contain mx-auto mt-2"
            />
            <div class="p-4 flex flex-col flex-1 items-center justify-center text-center">
                <span class="text-sm font-semibold bg-white px-2 py-1 rounded shadow mb-2">
                    {price_display}
                </span>
                <h3 class="font-bold text-gray-900 text-lg line-clamp-2">
                    {product.title.clone()}
                </h3>
            </div>
        </div>
    }
}

/// Grid of product cards with an empty state
#[component]
pub fn ProductGrid(
    /// Products on the current page
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !products.get().is_empty()
            fallback=|| view! {
                <p class="text-center text-gray-500 py-16">{EMPTY_CATALOG}</p>
            }
        >
            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4">
                // Remote ids are not guaranteed unique, so the position is part of the key
                <For
                    each=move || products.get().into_iter().enumerate()
                    key=|(index, p)| (*index, p.id)
                    children=move |(_, product)| view! { <ProductCard product=product /> }
                />
            </div>
        </Show>
    }
}

/// Pagination controls
#[component]
pub fn Pagination(
    /// Current page (1-indexed)
    current_page: Signal<usize>,
    /// Total number of pages for the filtered list
    total_pages: Signal<usize>,
    can_go_prev: Signal<bool>,
    can_go_next: Signal<bool>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    let button_class = "px-4 py-2 bg-blue-600 text-white rounded-lg shadow-sm \
                        disabled:opacity-50 disabled:cursor-not-allowed \
                        hover:bg-blue-700 transition-all font-medium";

    view! {
        <div class="flex items-center justify-center gap-4 mt-8 mb-8">
            <button
                type="button"
                class=button_class
                disabled=move || !can_go_prev.get()
                on:click=move |_| on_prev.run(())
            >
                "Previous"
            </button>

            <span class="text-sm font-medium text-gray-600">
                {move || format!("Page {} of {}", current_page.get(), total_pages.get())}
            </span>

            <button
                type="button"
                class=button_class
                disabled=move || !can_go_next.get()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}
