use crate::domain::catalog::model::CatalogState;

pub trait SetInStockFilterUseCase: Send + Sync {
    fn execute(&self, state: &mut CatalogState, in_stock_only: bool);
}
