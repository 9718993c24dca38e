use crate::domain::cart::model::CartSummary;
use crate::domain::catalog::model::CatalogState;

pub trait SummarizeCartUseCase: Send + Sync {
    fn execute(&self, state: &CatalogState) -> CartSummary;
}
