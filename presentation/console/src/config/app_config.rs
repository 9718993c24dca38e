use super::catalog_config::CatalogConfig;

pub struct AppConfig {
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            catalog: CatalogConfig::from_env(),
        }
    }
}
