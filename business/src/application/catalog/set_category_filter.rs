use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::catalog::use_cases::set_category_filter::SetCategoryFilterUseCase;
use crate::domain::catalog::value_objects::CategoryFilter;
use crate::domain::logger::Logger;

pub struct SetCategoryFilterUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl SetCategoryFilterUseCase for SetCategoryFilterUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, category: CategoryFilter) {
        self.logger
            .info(&format!("Filtering catalog by category: {}", category));

        state.set_category_filter(category);
    }
}
