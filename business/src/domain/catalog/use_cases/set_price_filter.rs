use crate::domain::catalog::model::CatalogState;
use crate::domain::catalog::value_objects::PriceRange;

pub trait SetPriceFilterUseCase: Send + Sync {
    fn execute(&self, state: &mut CatalogState, range: PriceRange);
}
