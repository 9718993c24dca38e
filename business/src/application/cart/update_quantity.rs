use std::sync::Arc;

use crate::domain::cart::use_cases::update_quantity::UpdateCartQuantityUseCase;
use crate::domain::catalog::model::CatalogState;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

pub struct UpdateCartQuantityUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, product_id: ProductId, quantity: i32) {
        self.logger.info(&format!(
            "Setting cart quantity for product {} to {}",
            product_id, quantity
        ));

        state.update_cart_quantity(product_id, quantity);
    }
}
