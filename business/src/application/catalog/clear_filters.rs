use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::catalog::use_cases::clear_filters::ClearFiltersUseCase;
use crate::domain::logger::Logger;

pub struct ClearFiltersUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl ClearFiltersUseCase for ClearFiltersUseCaseImpl {
    fn execute(&self, state: &mut CatalogState) {
        self.logger.info("Clearing all catalog filters");

        state.clear_filters();
    }
}
