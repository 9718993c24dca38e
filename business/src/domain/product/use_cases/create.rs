use crate::domain::catalog::model::CatalogState;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
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

pub trait CreateProductUseCase: Send + Sync {
    fn execute(
        &self,
        state: &mut CatalogState,
        params: CreateProductParams,
    ) -> Result<Product, ProductError>;
}
