use std::sync::Arc;

use crate::domain::cart::use_cases::remove::RemoveFromCartUseCase;
use crate::domain::catalog::model::CatalogState;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

pub struct RemoveFromCartUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, product_id: ProductId) {
        self.logger
            .info(&format!("Removing product from cart: {}", product_id));

        state.remove_from_cart(product_id);
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::catalog::seed::seed_products;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[test]
    fn should_remove_the_matching_cart_line() {
        let mut state = CatalogState::new(seed_products().unwrap());
        let kept = state.product_by_id(ProductId::new(2)).unwrap().clone();
        let dropped = state.product_by_id(ProductId::new(6)).unwrap().clone();
        state.add_to_cart(kept);
        state.add_to_cart(dropped);
        let use_case = RemoveFromCartUseCaseImpl {
            logger: mock_logger(),
        };

        use_case.execute(&mut state, ProductId::new(6));

        assert_eq!(state.cart().len(), 1);
        assert_eq!(state.cart()[0].product.id, ProductId::new(2));
    }

    #[test]
    fn should_leave_cart_alone_when_product_not_carted() {
        let mut state = CatalogState::new(seed_products().unwrap());
        let kept = state.product_by_id(ProductId::new(2)).unwrap().clone();
        state.add_to_cart(kept);
        let use_case = RemoveFromCartUseCaseImpl {
            logger: mock_logger(),
        };

        use_case.execute(&mut state, ProductId::new(6));

        assert_eq!(state.cart().len(), 1);
    }
}
