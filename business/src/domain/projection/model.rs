use serde::{Deserialize, Serialize};

use crate::domain::product::model::Product;

/// Which product collection the caller is looking at. This is ephemeral UI
/// selection supplied per projection, deliberately kept out of the
/// persisted session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogTab {
    All,
    Favorites,
}

impl std::fmt::Display for CatalogTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogTab::All => write!(f, "all"),
            CatalogTab::Favorites => write!(f, "favorites"),
        }
    }
}

impl std::str::FromStr for CatalogTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CatalogTab::All),
            "favorites" => Ok(CatalogTab::Favorites),
            _ => Err(format!("Invalid catalog tab: {}", s)),
        }
    }
}

/// One renderable page of the catalog: the visible products plus the
/// aggregate counts a listing screen shows around them. `page` echoes the
/// stored cursor; `category_count`, `brand_count`, and `max_price` are
/// computed over the full unfiltered catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    pub items: Vec<Product>,
    pub page: usize,
    pub total_pages: usize,
    pub total_filtered: usize,
    pub total_favorites: usize,
    pub category_count: usize,
    pub brand_count: usize,
    pub max_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_catalog_tab() {
        assert_eq!(format!("{}", CatalogTab::All), "all");
        assert_eq!(format!("{}", CatalogTab::Favorites), "favorites");
    }

    #[test]
    fn should_parse_catalog_tab_from_str() {
        assert_eq!("all".parse::<CatalogTab>().unwrap(), CatalogTab::All);
        assert_eq!(
            "favorites".parse::<CatalogTab>().unwrap(),
            CatalogTab::Favorites
        );
    }

    #[test]
    fn should_reject_unknown_catalog_tab() {
        assert!("wishlist".parse::<CatalogTab>().is_err());
    }
}
