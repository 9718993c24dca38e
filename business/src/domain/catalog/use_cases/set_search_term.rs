use crate::domain::catalog::model::CatalogState;

pub trait SetSearchTermUseCase: Send + Sync {
    fn execute(&self, state: &mut CatalogState, term: String);
}
