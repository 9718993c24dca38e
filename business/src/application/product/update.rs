use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::update::UpdateProductUseCase;

pub struct UpdateProductUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, product: Product) {
        self.logger
            .info(&format!("Updating product: {}", product.id));

        let id = product.id;
        if state.update_product(product) {
            self.logger.info(&format!("Product updated: {}", id));
        } else {
            self.logger
                .warn(&format!("Product not found for update: {}", id));
        }
    }
}
