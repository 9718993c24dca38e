use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

/// A catalog entry. Immutable once created; "updates" replace the whole
/// record through the catalog aggregate. Field names follow the seed JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub brand: String,
    pub thumbnail: String,
    pub rating: f64,
    pub discount_percentage: f64,
    pub category: String,
    pub stock: u32,
}

pub struct NewProductProps {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub brand: String,
    pub thumbnail: String,
    pub rating: f64,
    pub discount_percentage: f64,
    pub category: String,
    pub stock: u32,
}

impl Product {
    pub fn new(id: ProductId, props: NewProductProps) -> Result<Self, ProductError> {
        if props.title.trim().is_empty() {
            return Err(ProductError::TitleEmpty);
        }

        if props.price < 0.0 {
            return Err(ProductError::PriceNegative);
        }

        if props.rating < 0.0 || props.rating > 5.0 {
            return Err(ProductError::RatingOutOfRange);
        }

        if props.discount_percentage < 0.0 || props.discount_percentage > 100.0 {
            return Err(ProductError::DiscountOutOfRange);
        }

        Ok(Self {
            id,
            title: props.title,
            description: props.description,
            price: props.price,
            brand: props.brand,
            thumbnail: props.thumbnail,
            rating: props.rating,
            discount_percentage: props.discount_percentage,
            category: props.category,
            stock: props.stock,
        })
    }

    /// Price after the advertised discount is applied.
    pub fn discounted_price(&self) -> f64 {
        self.price * (1.0 - self.discount_percentage / 100.0)
    }

    /// Case-insensitive substring match against title, description, or brand.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self.brand.to_lowercase().contains(&term)
    }
}
