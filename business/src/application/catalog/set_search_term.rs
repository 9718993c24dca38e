use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::catalog::use_cases::set_search_term::SetSearchTermUseCase;
use crate::domain::logger::Logger;

pub struct SetSearchTermUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl SetSearchTermUseCase for SetSearchTermUseCaseImpl {
    fn execute(&self, state: &mut CatalogState, term: String) {
        if term.is_empty() {
            self.logger.info("Clearing search term");
        } else {
            self.logger.info(&format!("Searching catalog for: {}", term));
        }

        state.set_search_term(term);
    }
}
