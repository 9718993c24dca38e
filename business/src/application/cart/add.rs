use std::sync::Arc;

use crate::domain::cart::use_cases::add::AddToCartUseCase;
use crate::domain::catalog::model::CatalogState;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;

pub struct AddToCartUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl AddToCartUseCase for AddToCartUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, product: Product) {
        self.logger
            .info(&format!("Adding product to cart: {}", product.id));

        state.add_to_cart(product);

        self.logger
            .debug(&format!("Cart now holds {} lines", state.cart().len()));
    }
}
