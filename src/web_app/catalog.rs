// web_app/catalog.rs - Product catalog view state and loading
//
// The whole listing is fetched once; searching and paging happen locally
// over that array. Pages are 1-based and always PAGE_SIZE items wide.

use crate::web_app::api::{ApiClient, ApiError};
use crate::web_app::model::Product;
use crate::web_app::session::Session;

pub const PAGE_SIZE: usize = 8;

pub const UNEXPECTED_FORMAT: &str = "Unexpected response format.";
pub const FETCH_FAILURE_FALLBACK: &str = "Failed to fetch products.";
pub const EMPTY_CATALOG: &str = "No products available.";

/// Products whose title contains `query`, ignoring case
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .collect()
}

/// Number of pages needed for `item_count` items (0 for an empty list)
pub fn total_pages(item_count: usize) -> usize {
    item_count.div_ceil(PAGE_SIZE)
}

/// Items on 1-based `page`; empty when the page is out of range
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

/// Search and pagination state over a fetched product list
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    query: String,
    current_page: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            query: String::new(),
            current_page: 1,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.current_page = 1;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Update the search text. Always returns to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.current_page = 1;
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn filtered(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.query)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len())
    }

    /// Products shown on the current page
    pub fn visible(&self) -> Vec<Product> {
        let filtered = self.filtered();
        page_slice(&filtered, self.current_page)
            .iter()
            .map(|p| (*p).clone())
            .collect()
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn prev_page(&mut self) {
        if self.can_go_prev() {
            self.current_page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.current_page += 1;
        }
    }
}

/// Everything the catalog screen learns on mount
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub user_email: Option<String>,
    pub products: Vec<Product>,
    pub error: Option<String>,
}

/// Resolve the current user, then fetch the product listing.
///
/// The two requests run one after the other with the same token. A failure
/// in either stops the sequence; an identity resolved before a failed
/// product fetch is still reported.
pub async fn load_catalog(api: &ApiClient, session: &Session) -> CatalogSnapshot {
    let token = session.token();
    let mut snapshot = CatalogSnapshot::default();

    let identity = match api.current_user(token.as_deref()).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!("Failed to resolve current user: {}", e);
            snapshot.error = Some(catalog_error_message(&e));
            return snapshot;
        }
    };
    snapshot.user_email = Some(identity.sub);

    match api.products(token.as_deref()).await {
        Ok(products) => {
            tracing::info!("Loaded catalog with {} products", products.len());
            snapshot.products = products;
        }
        Err(e) => {
            tracing::warn!("Failed to fetch products: {}", e);
            snapshot.error = Some(catalog_error_message(&e));
        }
    }

    snapshot
}

fn catalog_error_message(err: &ApiError) -> String {
    match err {
        ApiError::UnexpectedShape => UNEXPECTED_FORMAT.to_string(),
        other => other.user_message(FETCH_FAILURE_FALLBACK),
    }
}
