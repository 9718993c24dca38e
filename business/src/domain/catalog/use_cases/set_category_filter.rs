use crate::domain::catalog::model::CatalogState;
use crate::domain::catalog::value_objects::CategoryFilter;

pub trait SetCategoryFilterUseCase: Send + Sync {
    fn execute(&self, state: &mut CatalogState, category: CategoryFilter);
}
