use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::catalog::use_cases::set_items_per_page::SetItemsPerPageUseCase;
use crate::domain::logger::Logger;

pub struct SetItemsPerPageUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl SetItemsPerPageUseCase for SetItemsPerPageUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, size: usize) {
        if size == 0 {
            self.logger.warn("Ignoring page size of zero");
            return;
        }

        self.logger
            .info(&format!("Setting page size to {}", size));

        state.set_items_per_page(size);
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
    fn should_replace_page_size_and_reset_page() {
        let mut state = CatalogState::new(seed_products().unwrap());
        state.set_current_page(2);
        let use_case = SetItemsPerPageUseCaseImpl {
            logger: mock_logger(),
        };

        use_case.execute(&mut state, 4);

        assert_eq!(state.pagination().items_per_page, 4);
        assert_eq!(state.pagination().current_page, 1);
    }

    #[test]
    fn should_warn_and_keep_previous_size_for_zero() {
        let mut state = CatalogState::new(seed_products().unwrap());
        let mut logger = MockLog::new();
        logger.expect_warn().times(1).returning(|_| ());
        let use_case = SetItemsPerPageUseCaseImpl {
            logger: Arc::new(logger),
        };

        use_case.execute(&mut state, 0);

        assert_eq!(state.pagination().items_per_page, 8);
    }
}
