use crate::domain::catalog::model::CatalogState;
use crate::domain::product::model::Product;

pub trait SetEditingProductUseCase: Send + Sync {
    fn execute(&self, state: &mut CatalogState, product: Option<Product>);
}
