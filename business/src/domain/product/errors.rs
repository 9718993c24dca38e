#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.title_empty")]
    TitleEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.rating_out_of_range")]
    RatingOutOfRange,
    #[error("product.discount_out_of_range")]
    DiscountOutOfRange,
    #[error("product.not_found")]
    NotFound,
}
