use crate::domain::catalog::model::CatalogState;
use crate::domain::product::model::Product;

pub trait UpdateProductUseCase: Send + Sync {
    fn execute(&self, state: &mut CatalogState, product: Product);
}
