use std::sync::Arc;

use logger::TracingLogger;

use business::application::cart::add::AddToCartUseCaseImpl;
use business::application::cart::remove::RemoveFromCartUseCaseImpl;
use business::application::cart::summarize::SummarizeCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::catalog::clear_filters::ClearFiltersUseCaseImpl;
use business::application::catalog::set_brands_filter::SetBrandsFilterUseCaseImpl;
use business::application::catalog::set_category_filter::SetCategoryFilterUseCaseImpl;
use business::application::catalog::set_current_page::SetCurrentPageUseCaseImpl;
use business::application::catalog::set_in_stock_filter::SetInStockFilterUseCaseImpl;
use business::application::catalog::set_items_per_page::SetItemsPerPageUseCaseImpl;
use business::application::catalog::set_price_filter::SetPriceFilterUseCaseImpl;
use business::application::catalog::set_rating_filter::SetRatingFilterUseCaseImpl;
use business::application::catalog::set_search_term::SetSearchTermUseCaseImpl;
use business::application::catalog::toggle_favorite::ToggleFavoriteUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::set_editing::SetEditingProductUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::projection::browse::BrowseCatalogUseCaseImpl;

use business::domain::cart::use_cases::add::AddToCartUseCase;
use business::domain::cart::use_cases::remove::RemoveFromCartUseCase;
use business::domain::cart::use_cases::summarize::SummarizeCartUseCase;
use business::domain::cart::use_cases::update_quantity::UpdateCartQuantityUseCase;
use business::domain::catalog::use_cases::clear_filters::ClearFiltersUseCase;
use business::domain::catalog::use_cases::set_brands_filter::SetBrandsFilterUseCase;
use business::domain::catalog::use_cases::set_category_filter::SetCategoryFilterUseCase;
use business::domain::catalog::use_cases::set_current_page::SetCurrentPageUseCase;
use business::domain::catalog::use_cases::set_in_stock_filter::SetInStockFilterUseCase;
use business::domain::catalog::use_cases::set_items_per_page::SetItemsPerPageUseCase;
use business::domain::catalog::use_cases::set_price_filter::SetPriceFilterUseCase;
use business::domain::catalog::use_cases::set_rating_filter::SetRatingFilterUseCase;
use business::domain::catalog::use_cases::set_search_term::SetSearchTermUseCase;
use business::domain::catalog::use_cases::toggle_favorite::ToggleFavoriteUseCase;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::DeleteProductUseCase;
use business::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use business::domain::product::use_cases::set_editing::SetEditingProductUseCase;
use business::domain::product::use_cases::update::UpdateProductUseCase;
use business::domain::projection::use_cases::browse::BrowseCatalogUseCase;

pub struct DependencyContainer {
    pub browse: Arc<dyn BrowseCatalogUseCase>,
    pub toggle_favorite: Arc<dyn ToggleFavoriteUseCase>,
    pub add_to_cart: Arc<dyn AddToCartUseCase>,
    pub remove_from_cart: Arc<dyn RemoveFromCartUseCase>,
    pub update_cart_quantity: Arc<dyn UpdateCartQuantityUseCase>,
    pub summarize_cart: Arc<dyn SummarizeCartUseCase>,
    pub set_category_filter: Arc<dyn SetCategoryFilterUseCase>,
    pub set_price_filter: Arc<dyn SetPriceFilterUseCase>,
    pub set_brands_filter: Arc<dyn SetBrandsFilterUseCase>,
    pub set_rating_filter: Arc<dyn SetRatingFilterUseCase>,
    pub set_in_stock_filter: Arc<dyn SetInStockFilterUseCase>,
    pub set_search_term: Arc<dyn SetSearchTermUseCase>,
    pub clear_filters: Arc<dyn ClearFiltersUseCase>,
    pub set_current_page: Arc<dyn SetCurrentPageUseCase>,
    pub set_items_per_page: Arc<dyn SetItemsPerPageUseCase>,
    pub create_product: Arc<dyn CreateProductUseCase>,
    pub update_product: Arc<dyn UpdateProductUseCase>,
    pub delete_product: Arc<dyn DeleteProductUseCase>,
    pub get_product_by_id: Arc<dyn GetProductByIdUseCase>,
    pub set_editing_product: Arc<dyn SetEditingProductUseCase>,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);

        Self {
            browse: Arc::new(BrowseCatalogUseCaseImpl {
                logger: logger.clone(),
            }),
            toggle_favorite: Arc::new(ToggleFavoriteUseCaseImpl {
                logger: logger.clone(),
            }),
            add_to_cart: Arc::new(AddToCartUseCaseImpl {
                logger: logger.clone(),
            }),
            remove_from_cart: Arc::new(RemoveFromCartUseCaseImpl {
                logger: logger.clone(),
            }),
            update_cart_quantity: Arc::new(UpdateCartQuantityUseCaseImpl {
                logger: logger.clone(),
            }),
            summarize_cart: Arc::new(SummarizeCartUseCaseImpl {
                logger: logger.clone(),
            }),
            set_category_filter: Arc::new(SetCategoryFilterUseCaseImpl {
                logger: logger.clone(),
            }),
            set_price_filter: Arc::new(SetPriceFilterUseCaseImpl {
                logger: logger.clone(),
            }),
            set_brands_filter: Arc::new(SetBrandsFilterUseCaseImpl {
                logger: logger.clone(),
            }),
            set_rating_filter: Arc::new(SetRatingFilterUseCaseImpl {
                logger: logger.clone(),
            }),
            set_in_stock_filter: Arc::new(SetInStockFilterUseCaseImpl {
                logger: logger.clone(),
            }),
            set_search_term: Arc::new(SetSearchTermUseCaseImpl {
                logger: logger.clone(),
            }),
            clear_filters: Arc::new(ClearFiltersUseCaseImpl {
                logger: logger.clone(),
            }),
            set_current_page: Arc::new(SetCurrentPageUseCaseImpl {
                logger: logger.clone(),
            }),
            set_items_per_page: Arc::new(SetItemsPerPageUseCaseImpl {
                logger: logger.clone(),
            }),
            create_product: Arc::new(CreateProductUseCaseImpl {
                logger: logger.clone(),
            }),
            update_product: Arc::new(UpdateProductUseCaseImpl {
                logger: logger.clone(),
            }),
            delete_product: Arc::new(DeleteProductUseCaseImpl {
                logger: logger.clone(),
            }),
            get_product_by_id: Arc::new(GetProductByIdUseCaseImpl {
                logger: logger.clone(),
            }),
            set_editing_product: Arc::new(SetEditingProductUseCaseImpl { logger }),
        }
    }
}
