#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.slug_invalid")]
    SlugInvalid,
    #[error("product.negative_price")]
    NegativePrice,
    /// More than two decimals, or beyond what NUMERIC(10, 2) holds
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.negative_stock")]
    NegativeStock,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
