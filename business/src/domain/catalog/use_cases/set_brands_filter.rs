use std::collections::BTreeSet;

use crate::domain::catalog::model::CatalogState;

pub trait SetBrandsFilterUseCase: Send + Sync {
    fn execute(&self, state: &mut CatalogState, brands: BTreeSet<String>);
}
