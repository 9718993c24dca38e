use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::logger::Logger;
use crate::domain::product::use_cases::delete::DeleteProductUseCase;
use crate::domain::shared::value_objects::ProductId;

pub struct DeleteProductUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, product_id: ProductId) {
        self.logger
            .info(&format!("Deleting product: {}", product_id));

        if state.delete_product(product_id) {
            self.logger
                .info(&format!("Product deleted with favorites and cart cascade: {}", product_id));
        } else {
            self.logger
                .warn(&format!("Product not found for delete: {}", product_id));
        }
    }
}
