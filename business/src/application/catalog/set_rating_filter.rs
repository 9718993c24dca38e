use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::catalog::use_cases::set_rating_filter::SetRatingFilterUseCase;
use crate::domain::logger::Logger;

pub struct SetRatingFilterUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl SetRatingFilterUseCase for SetRatingFilterUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, threshold: f64) {
        self.logger
            .info(&format!("Filtering catalog by minimum rating: {}", threshold));

        state.set_rating_filter(threshold);
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
    fn should_replace_rating_threshold_and_reset_page() {
        let mut state = CatalogState::new(seed_products().unwrap());
        state.set_current_page(2);
        let use_case = SetRatingFilterUseCaseImpl {
            logger: mock_logger(),
        };

        use_case.execute(&mut state, 4.5);

        assert_eq!(state.filters().rating, 4.5);
        assert_eq!(state.pagination().current_page, 1);
    }
}
