use std::sync::Arc;

use crate::domain::catalog::model::CatalogState;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl CreateProductUseCase for CreateProductUseCaseImpl {
    fn execute(
        &self,
        state: &mut CatalogState,
        params: CreateProductParams,
    ) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.title));

        let product = state.add_product(NewProductProps {
            title: params.title,
            description: params.description,
            price: params.price,
            brand: params.brand,
            thumbnail: params.thumbnail,
            rating: params.rating,
            discount_percentage: params.discount_percentage,
            category: params.category,
            stock: params.stock,
        })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
