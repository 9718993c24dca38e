use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::catalog::use_cases::set_brands_filter::SetBrandsFilterUseCase;
use crate::domain::logger::Logger;

pub struct SetBrandsFilterUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl SetBrandsFilterUseCase for SetBrandsFilterUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, brands: BTreeSet<String>) {
        if brands.is_empty() {
            self.logger.info("Clearing brand filter");
        } else {
            self.logger.info(&format!(
                "Filtering catalog by {} brands",
                brands.len()
            ));
        }

        state.set_brands_filter(brands);
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
    fn should_replace_brand_set_and_reset_page() {
        let mut state = CatalogState::new(seed_products().unwrap());
        state.set_current_page(2);
        let use_case = SetBrandsFilterUseCaseImpl {
            logger: mock_logger(),
        };

        use_case.execute(
            &mut state,
            BTreeSet::from(["Apple".to_string(), "Sony".to_string()]),
        );

        assert_eq!(state.filters().brands.len(), 2);
        assert_eq!(state.pagination().current_page, 1);
    }

    #[test]
    fn should_accept_an_empty_set_as_no_restriction() {
        let mut state = CatalogState::new(seed_products().unwrap());
        state.set_brands_filter(BTreeSet::from(["Apple".to_string()]));
        let use_case = SetBrandsFilterUseCaseImpl {
            logger: mock_logger(),
        };

        use_case.execute(&mut state, BTreeSet::new());

        assert!(state.filters().brands.is_empty());
    }
}
