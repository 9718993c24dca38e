use crate::domain::catalog::model::CatalogState;

pub trait SetItemsPerPageUseCase: Send + Sync {
    fn execute(&self, state: &mut CatalogState, size: usize);
}
