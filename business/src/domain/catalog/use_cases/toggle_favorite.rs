use crate::domain::catalog::model::CatalogState;
use crate::domain::shared::value_objects::ProductId;

pub trait ToggleFavoriteUseCase: Send + Sync {
    fn execute(&self, state: &mut CatalogState, product_id: ProductId);
}
