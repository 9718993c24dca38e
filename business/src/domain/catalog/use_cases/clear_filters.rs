use crate::domain::catalog::model::CatalogState;

pub trait ClearFiltersUseCase: Send + Sync {
    fn execute(&self, state: &mut CatalogState);
}
