use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::catalog::use_cases::set_in_stock_filter::SetInStockFilterUseCase;
use crate::domain::logger::Logger;

pub struct SetInStockFilterUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl SetInStockFilterUseCase for SetInStockFilterUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, in_stock_only: bool) {
        self.logger
            .info(&format!("Setting in-stock-only filter: {}", in_stock_only));

        state.set_in_stock_filter(in_stock_only);
    }
}
