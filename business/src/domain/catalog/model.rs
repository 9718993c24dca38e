use std::collections::{BTreeSet, HashSet};

use super::value_objects::{
    CategoryFilter, DEFAULT_PRICE_CEILING, Pagination, PriceRange, ProductFilters,
};
use crate::domain::cart::model::{CartLine, CartSummary};
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::shared::value_objects::ProductId;

/// Session-scoped aggregate root: the product list plus everything the user
/// has done with it (favorites, cart, filters, search, pagination, the
/// product staged for editing).
///
/// Fields are private so every mutation goes through a transition method.
/// Each transition leaves the aggregate fully consistent: favorites and cart
/// never reference a product that is no longer in the catalog, the cart has
/// at most one line per product, and the stored page size is always positive.
#[derive(Debug, Clone)]
pub struct CatalogState {
    products: Vec<Product>,
    favorites: HashSet<ProductId>,
    cart: Vec<CartLine>,
    filters: ProductFilters,
    search_term: String,
    pagination: Pagination,
    editing_product: Option<Product>,
}

impl CatalogState {
    /// Creates a session state over `products`. The initial price filter
    /// spans the full observed range.
    pub fn new(products: Vec<Product>) -> Self {
        let ceiling = observed_price_ceiling(&products);
        Self {
            products,
            favorites: HashSet::new(),
            cart: Vec::new(),
            filters: ProductFilters::unrestricted(ceiling),
            search_term: String::new(),
            pagination: Pagination::default(),
            editing_product: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn favorites(&self) -> &HashSet<ProductId> {
        &self.favorites
    }

    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    pub fn filters(&self) -> &ProductFilters {
        &self.filters
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn editing_product(&self) -> Option<&Product> {
        self.editing_product.as_ref()
    }

    pub fn product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn cart_summary(&self) -> CartSummary {
        CartSummary::of(&self.cart)
    }

    /// Flips favorite membership for `id`. Ids that do not reference a
    /// catalog product are ignored, so the favorite set only ever holds
    /// live products.
    pub fn toggle_favorite(&mut self, id: ProductId) {
        if self.product_by_id(id).is_none() {
            return;
        }
        if !self.favorites.remove(&id) {
            self.favorites.insert(id);
        }
    }

    /// Adds one unit of `product` to the cart: bumps the existing line's
    /// quantity, or appends a fresh line at the end of the cart.
    pub fn add_to_cart(&mut self, product: Product) {
        match self.cart.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.cart.push(CartLine::new(product)),
        }
    }

    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.retain(|line| line.product.id != id);
    }

    /// Sets the line quantity for `id` absolutely. A quantity of zero or
    /// below removes the line; an id without a line is left alone (only
    /// `add_to_cart` creates lines).
    pub fn update_cart_quantity(&mut self, id: ProductId, quantity: i32) {
        if quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }
        if let Some(line) = self.cart.iter_mut().find(|line| line.product.id == id) {
            line.quantity = quantity as u32;
        }
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.filters.category = category;
        self.reset_page();
    }

    pub fn set_price_filter(&mut self, range: PriceRange) {
        self.filters.price_range = range;
        self.reset_page();
    }

    pub fn set_brands_filter(&mut self, brands: BTreeSet<String>) {
        self.filters.brands = brands;
        self.reset_page();
    }

    pub fn set_rating_filter(&mut self, threshold: f64) {
        self.filters.rating = threshold;
        self.reset_page();
    }

    pub fn set_in_stock_filter(&mut self, in_stock_only: bool) {
        self.filters.in_stock_only = in_stock_only;
        self.reset_page();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.reset_page();
    }

    /// Restores the unrestricted filter set and clears the search term.
    /// The price range snaps back to the full observed range.
    pub fn clear_filters(&mut self) {
        self.filters = ProductFilters::unrestricted(observed_price_ceiling(&self.products));
        self.search_term.clear();
        self.reset_page();
    }

    /// Stores the page as given. Out-of-range pages are allowed here; the
    /// projector degrades them to an empty page instead of erroring.
    pub fn set_current_page(&mut self, page: usize) {
        self.pagination.current_page = page;
    }

    /// Replaces the page size and returns to page 1. A size of zero would
    /// break the page-count computation, so it is rejected by ignoring.
    pub fn set_items_per_page(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        self.pagination.items_per_page = size;
        self.reset_page();
    }

    /// Validates and prepends a new product, newest first. The id is the
    /// current maximum plus one, or 1 for an empty catalog.
    pub fn add_product(&mut self, props: NewProductProps) -> Result<Product, ProductError> {
        let product = Product::new(self.next_product_id(), props)?;
        self.products.insert(0, product.clone());
        Ok(product)
    }

    /// Replaces the product with the same id, preserving its position.
    /// Returns false when the id is not in the catalog.
    pub fn update_product(&mut self, product: Product) -> bool {
        match self.products.iter_mut().find(|slot| slot.id == product.id) {
            Some(slot) => {
                *slot = product;
                true
            }
            None => false,
        }
    }

    /// Removes the product and cascades the removal into favorites and
    /// cart. Callers never observe the cascade half-applied. Returns false
    /// when the id is not in the catalog.
    pub fn delete_product(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|product| product.id != id);
        if self.products.len() == before {
            return false;
        }
        self.favorites.remove(&id);
        self.cart.retain(|line| line.product.id != id);
        true
    }

    /// Stages a product for the edit form hand-off, or clears the staging
    /// field. Has no effect on any derived computation.
    pub fn set_editing_product(&mut self, product: Option<Product>) {
        self.editing_product = product;
    }

    fn reset_page(&mut self) {
        self.pagination.current_page = 1;
    }

    fn next_product_id(&self) -> ProductId {
        let max = self
            .products
            .iter()
            .map(|product| product.id.value())
            .max()
            .unwrap_or(0);
        ProductId::new(max + 1)
    }
}

fn observed_price_ceiling(products: &[Product]) -> f64 {
    if products.is_empty() {
        return DEFAULT_PRICE_CEILING;
    }
    products.iter().map(|product| product.price).fold(0.0, f64::max)
}
