use crate::domain::catalog::model::CatalogState;
use crate::domain::projection::model::{CatalogTab, CatalogView};

pub trait BrowseCatalogUseCase: Send + Sync {
    fn execute(&self, state: &CatalogState, tab: CatalogTab) -> CatalogView;
}
