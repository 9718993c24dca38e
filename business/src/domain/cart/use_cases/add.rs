use crate::domain::catalog::model::CatalogState;
use crate::domain::product::model::Product;

pub trait AddToCartUseCase: Send + Sync {
    fn execute(&self, state: &mut CatalogState, product: Product);
}
