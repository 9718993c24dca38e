use std::sync::Arc;

use crate::domain::cart::model::CartSummary;
use crate::domain::cart::use_cases::summarize::SummarizeCartUseCase;
use crate::domain::catalog::model::CatalogState;
use crate::domain::logger::Logger;

pub struct SummarizeCartUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl SummarizeCartUseCase for SummarizeCartUseCaseImpl {
    fn execute(&self, state: &CatalogState) -> CartSummary {
        let summary = state.cart_summary();

        self.logger.debug(&format!(
            "Cart summary: {} items totalling {:.2}",
            summary.total_items, summary.total_price
        ));

        summary
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
    fn should_total_items_and_prices_across_the_cart() {
        let mut state = CatalogState::new(seed_products().unwrap());
        let headphones = state.product_by_id(ProductId::new(4)).unwrap().clone();
        let console = state.product_by_id(ProductId::new(12)).unwrap().clone();
        state.add_to_cart(headphones.clone());
        state.add_to_cart(headphones);
        state.add_to_cart(console);
        let use_case = SummarizeCartUseCaseImpl {
            logger: mock_logger(),
        };

        let summary = use_case.execute(&state);

        assert_eq!(summary.total_items, 3);
        assert!((summary.total_price - 1297.0).abs() < 1e-9);
    }

    #[test]
    fn should_report_an_empty_cart_as_zero() {
        let state = CatalogState::new(seed_products().unwrap());
        let use_case = SummarizeCartUseCaseImpl {
            logger: mock_logger(),
        };

        let summary = use_case.execute(&state);

        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.total_price, 0.0);
    }
}
