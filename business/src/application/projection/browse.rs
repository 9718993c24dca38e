use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::logger::Logger;
use crate::domain::projection::model::{CatalogTab, CatalogView};
use crate::domain::projection::services;
use crate::domain::projection::use_cases::browse::BrowseCatalogUseCase;

pub struct BrowseCatalogUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl BrowseCatalogUseCase for BrowseCatalogUseCaseImpl {
    fn execute(&self, state: &CatalogState, tab: CatalogTab) -> CatalogView {
        let view = services::project(state, tab);

        self.logger.debug(&format!(
            "Projected page {}/{} with {} of {} products for tab {}",
            view.page,
            view.total_pages,
            view.items.len(),
            view.total_filtered,
            tab
        ));

        view
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
    fn should_project_the_first_page_of_the_seed_catalog() {
        let state = CatalogState::new(seed_products().unwrap());
        let use_case = BrowseCatalogUseCaseImpl {
            logger: mock_logger(),
        };

        let view = use_case.execute(&state, CatalogTab::All);

        assert_eq!(view.items.len(), 8);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.total_filtered, 12);
    }

    #[test]
    fn should_project_only_favorites_for_the_favorites_tab() {
        let mut state = CatalogState::new(seed_products().unwrap());
        state.toggle_favorite(ProductId::new(1));
        state.toggle_favorite(ProductId::new(12));
        let use_case = BrowseCatalogUseCaseImpl {
            logger: mock_logger(),
        };

        let view = use_case.execute(&state, CatalogTab::Favorites);

        assert_eq!(view.total_filtered, 2);
        assert_eq!(view.total_favorites, 2);
    }
}
