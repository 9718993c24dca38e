use crate::domain::product::model::Product;

/// The demo catalog every new session starts from.
const SEED_PRODUCTS: &str = include_str!("seed_products.json");

/// Deserializes the embedded seed catalog. Seed data is trusted and skips
/// the validating constructor, like any record restored from storage.
pub fn seed_products() -> Result<Vec<Product>, serde_json::Error> {
    serde_json::from_str(SEED_PRODUCTS)
}
