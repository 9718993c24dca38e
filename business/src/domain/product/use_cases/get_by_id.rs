use crate::domain::catalog::model::CatalogState;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

pub trait GetProductByIdUseCase: Send + Sync {
    fn execute(
        &self,
        state: &CatalogState,
        product_id: ProductId,
    ) -> Result<Product, ProductError>;
}
