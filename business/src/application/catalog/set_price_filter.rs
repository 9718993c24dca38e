use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::catalog::use_cases::set_price_filter::SetPriceFilterUseCase;
use crate::domain::catalog::value_objects::PriceRange;
use crate::domain::logger::Logger;

pub struct SetPriceFilterUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl SetPriceFilterUseCase for SetPriceFilterUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, range: PriceRange) {
        self.logger.info(&format!(
            "Filtering catalog by price range: {} - {}",
            range.min, range.max
        ));

        state.set_price_filter(range);
    }
}
