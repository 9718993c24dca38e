use crate::domain::catalog::model::CatalogState;

pub trait SetCurrentPageUseCase: Send + Sync {
    fn execute(&self, state: &mut CatalogState, page: usize);
}
