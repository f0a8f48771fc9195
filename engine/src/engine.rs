use crate::catalog::{Catalog, Product, ProductId};
use crate::error::Result;
use crate::index::SimilarityIndex;
use crate::likes::LikeTracker;
use crate::recommend::{self, Recommendation};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

/// Shared engine state behind reader/writer locks. The similarity index is
/// an immutable snapshot swapped wholesale on `build`, so in-flight readers
/// keep a consistent prior snapshot instead of observing a partial build.
///
/// Lock order: catalog, likes, index.
pub struct RecEngine {
    catalog: RwLock<Catalog>,
    likes: RwLock<LikeTracker>,
    index: RwLock<Arc<SimilarityIndex>>,
}

impl RecEngine {
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(Catalog::new()),
            likes: RwLock::new(LikeTracker::new()),
            index: RwLock::new(Arc::new(SimilarityIndex::default())),
        }
    }

    /// Append a product under the next sequential id. Not reflected in
    /// similarity queries until the next `build`.
    pub fn add_product(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: Option<String>,
    ) -> ProductId {
        self.catalog.write().add(title, description, image_url)
    }

    /// Direct insertion with an explicit id; fails on a duplicate.
    pub fn insert_product(&self, product: Product) -> Result<ProductId> {
        self.catalog.write().insert(product)
    }

    pub fn product(&self, id: ProductId) -> Result<Product> {
        self.catalog.read().get(id).cloned()
    }

    /// All products in insertion order.
    pub fn products(&self) -> Vec<Product> {
        self.catalog.read().all().to_vec()
    }

    /// Rebuild the similarity index from the current catalog and swap it in.
    pub fn build(&self) {
        let snapshot = {
            let catalog = self.catalog.read();
            Arc::new(SimilarityIndex::build(&catalog))
        };
        *self.index.write() = snapshot;
        tracing::info!(num_products = self.index.read().len(), "index rebuilt");
    }

    /// Handle to the current index snapshot. The handle stays valid across
    /// later `build` calls and keeps answering from its own build.
    pub fn index(&self) -> Arc<SimilarityIndex> {
        self.index.read().clone()
    }

    pub fn like(&self, id: ProductId) -> Result<()> {
        let catalog = self.catalog.read();
        self.likes.write().like(id, &catalog)
    }

    pub fn liked(&self) -> HashSet<ProductId> {
        self.likes.read().liked()
    }

    /// Rank the catalog against the current like set. See
    /// [`recommend::recommend`] for the scoring rules.
    pub fn recommend(&self, top_n: i64) -> Result<Vec<Recommendation>> {
        let catalog = self.catalog.read();
        let liked = self.likes.read().liked();
        let index = self.index.read().clone();
        recommend::recommend(&catalog, &index, &liked, top_n)
    }
}

impl Default for RecEngine {
    fn default() -> Self {
        Self::new()
    }
}
