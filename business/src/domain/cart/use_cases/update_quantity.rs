use crate::domain::catalog::model::CatalogState;
use crate::domain::shared::value_objects::ProductId;

pub trait UpdateCartQuantityUseCase: Send + Sync {
    fn execute(&self, state: &mut CatalogState, product_id: ProductId, quantity: i32);
}
