//! Read side of the catalog: a pure projection from session state to the
//! page a listing screen renders. Never mutates state; callers re-project
//! after every transition.

use std::collections::HashSet;

use super::model::{CatalogTab, CatalogView};
use crate::domain::catalog::model::CatalogState;
use crate::domain::product::model::Product;

/// Projects the current page of products for `tab`.
///
/// The filter pipeline is conjunctive and applied in a fixed order: tab,
/// category, price range, brand set, rating threshold, stock, search term.
/// Filtering is stable, so catalog order is preserved. A stored page
/// outside `[1, total_pages]` yields an empty page rather than an error.
pub fn project(state: &CatalogState, tab: CatalogTab) -> CatalogView {
    let filtered: Vec<&Product> = state
        .products()
        .iter()
        .filter(|product| passes_filters(state, tab, product))
        .collect();

    let pagination = state.pagination();
    let total_filtered = filtered.len();
    let total_pages = total_pages(total_filtered, pagination.items_per_page);
    let items = visible_slice(&filtered, pagination.current_page, pagination.items_per_page);

    CatalogView {
        items,
        page: pagination.current_page,
        total_pages,
        total_filtered,
        total_favorites: state.favorites().len(),
        category_count: distinct_count(state.products(), |product| &product.category),
        brand_count: distinct_count(state.products(), |product| &product.brand),
        max_price: max_price(state.products()),
    }
}

fn passes_filters(state: &CatalogState, tab: CatalogTab, product: &Product) -> bool {
    let filters = state.filters();

    if tab == CatalogTab::Favorites && !state.favorites().contains(&product.id) {
        return false;
    }

    if !filters.category.accepts(&product.category) {
        return false;
    }

    if !filters.price_range.contains(product.price) {
        return false;
    }

    if !filters.brands.is_empty() && !filters.brands.contains(&product.brand) {
        return false;
    }

    if filters.rating > 0.0 && product.rating < filters.rating {
        return false;
    }

    if filters.in_stock_only && product.stock == 0 {
        return false;
    }

    if !state.search_term().is_empty() && !product.matches_search(state.search_term()) {
        return false;
    }

    true
}

fn total_pages(filtered: usize, items_per_page: usize) -> usize {
    filtered.div_ceil(items_per_page).max(1)
}

fn visible_slice(filtered: &[&Product], page: usize, items_per_page: usize) -> Vec<Product> {
    if page == 0 {
        return Vec::new();
    }
    let start = (page - 1) * items_per_page;
    if start >= filtered.len() {
        return Vec::new();
    }
    let end = (start + items_per_page).min(filtered.len());
    filtered[start..end].iter().map(|product| (*product).clone()).collect()
}

fn distinct_count<F>(products: &[Product], key: F) -> usize
where
    F: Fn(&Product) -> &String,
{
    products
        .iter()
        .map(|product| key(product).as_str())
        .collect::<HashSet<&str>>()
        .len()
}

fn max_price(products: &[Product]) -> f64 {
    products.iter().map(|product| product.price).fold(0.0, f64::max)
}
