use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::set_editing::SetEditingProductUseCase;

pub struct SetEditingProductUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl SetEditingProductUseCase for SetEditingProductUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, product: Option<Product>) {
        match &product {
            Some(staged) => self
                .logger
                .info(&format!("Staging product for edit: {}", staged.id)),
            None => self.logger.debug("Clearing staged product edit"),
        }

        state.set_editing_product(product);
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::catalog::seed::seed_products;
    use crate::domain::shared::value_objects::ProductId;

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
    fn should_stage_product_for_editing() {
        let mut state = CatalogState::new(seed_products().unwrap());
        let product = state.product_by_id(ProductId::new(3)).unwrap().clone();
        let use_case = SetEditingProductUseCaseImpl {
            logger: mock_logger(),
        };

        use_case.execute(&mut state, Some(product.clone()));

        assert_eq!(state.editing_product(), Some(&product));
    }

    #[test]
    fn should_clear_staged_product() {
        let mut state = CatalogState::new(seed_products().unwrap());
        let product = state.product_by_id(ProductId::new(3)).unwrap().clone();
        state.set_editing_product(Some(product));
        let use_case = SetEditingProductUseCaseImpl {
            logger: mock_logger(),
        };

        use_case.execute(&mut state, None);

        assert!(state.editing_product().is_none());
    }
}
