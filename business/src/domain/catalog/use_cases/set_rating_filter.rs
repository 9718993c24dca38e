use crate::domain::catalog::model::CatalogState;

pub trait SetRatingFilterUseCase: Send + Sync {
    fn execute(&self, state: &mut CatalogState, threshold: f64);
}
