use std::env;

use business::domain::projection::model::CatalogTab;

/// Session configuration for the catalog walkthrough
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub items_per_page: usize,
    pub initial_tab: CatalogTab,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_ITEMS_PER_PAGE: Products per page (default: 8)
    /// - CATALOG_TAB: Initial tab, "all" or "favorites" (default: "all")
    pub fn from_env() -> Self {
        let items_per_page = env::var("CATALOG_ITEMS_PER_PAGE")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(8);
        let initial_tab = env::var("CATALOG_TAB")
            .ok()
            .and_then(|value| value.parse::<CatalogTab>().ok())
            .unwrap_or(CatalogTab::All);

        Self {
            items_per_page,
            initial_tab,
        }
    }
}
