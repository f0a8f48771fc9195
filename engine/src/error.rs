use crate::catalog::ProductId;
use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur inside the recommendation engine. All are local,
/// recoverable conditions for the caller to handle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A product with this id is already in the catalog.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    /// No product with this id exists in the catalog.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// `top_n` must be positive.
    #[error("top_n must be positive, got {0}")]
    InvalidArgument(i64),
}
