use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use crate::domain::shared::value_objects::ProductId;

pub struct GetProductByIdUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    fn execute(
        &self,
        state: &CatalogState,
        product_id: ProductId,
    ) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product: {}", product_id));

        state
            .product_by_id(product_id)
            .cloned()
            .ok_or(ProductError::NotFound)
    }
}
