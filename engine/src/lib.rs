pub mod catalog;
pub mod engine;
pub mod error;
pub mod index;
pub mod likes;
pub mod recommend;
pub mod tokenizer;

pub use catalog::{Catalog, Product, ProductId};
pub use engine::RecEngine;
pub use error::{EngineError, Result};
pub use index::SimilarityIndex;
pub use likes::LikeTracker;
pub use recommend::Recommendation;
