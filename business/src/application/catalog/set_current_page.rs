use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::catalog::use_cases::set_current_page::SetCurrentPageUseCase;
use crate::domain::logger::Logger;

pub struct SetCurrentPageUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl SetCurrentPageUseCase for SetCurrentPageUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, page: usize) {
        self.logger.debug(&format!("Moving to page {}", page));

        state.set_current_page(page);
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
    fn should_store_the_requested_page() {
        let mut state = CatalogState::new(seed_products().unwrap());
        let use_case = SetCurrentPageUseCaseImpl {
            logger: mock_logger(),
        };

        use_case.execute(&mut state, 2);

        assert_eq!(state.pagination().current_page, 2);
    }

    #[test]
    fn should_store_out_of_range_pages_verbatim() {
        let mut state = CatalogState::new(seed_products().unwrap());
        let use_case = SetCurrentPageUseCaseImpl {
            logger: mock_logger(),
        };

        use_case.execute(&mut state, 99);

        assert_eq!(state.pagination().current_page, 99);
    }
}
