use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::catalog::use_cases::toggle_favorite::ToggleFavoriteUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

pub struct ToggleFavoriteUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl ToggleFavoriteUseCase for ToggleFavoriteUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, product_id: ProductId) {
        self.logger
            .info(&format!("Toggling favorite for product: {}", product_id));

        state.toggle_favorite(product_id);

        self.logger
            .debug(&format!("{} products favorited", state.favorites().len()));
    }
}
