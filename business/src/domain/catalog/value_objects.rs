use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Price ceiling assumed when there are no products to observe one from.
pub const DEFAULT_PRICE_CEILING: f64 = 2000.0;

/// Page size a fresh session starts with.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 8;

/// Category selector: everything, or one exact category value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn accepts(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(selected) => selected == category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Category(selected) => write!(f, "{}", selected),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        match s {
            "all" => CategoryFilter::All,
            other => CategoryFilter::Category(other.to_string()),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        CategoryFilter::from(s.as_str())
    }
}

/// Inclusive price bounds. Bounds are stored low-to-high regardless of the
/// order they arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// The conjunctive filter set the projector applies to the catalog.
/// An empty brand set and a rating of 0 mean "no restriction".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFilters {
    pub category: CategoryFilter,
    pub price_range: PriceRange,
    pub brands: BTreeSet<String>,
    pub rating: f64,
    pub in_stock_only: bool,
}

impl ProductFilters {
    /// Filter set that lets every product through, up to `price_ceiling`.
    pub fn unrestricted(price_ceiling: f64) -> Self {
        Self {
            category: CategoryFilter::All,
            price_range: PriceRange::new(0.0, price_ceiling),
            brands: BTreeSet::new(),
            rating: 0.0,
            in_stock_only: false,
        }
    }
}

/// 1-based page cursor over the filtered product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}
