use crate::catalog::{Catalog, ProductId};
use crate::error::{EngineError, Result};
use std::collections::HashSet;

/// Session-scoped like set. Grows monotonically; there is no unlike.
#[derive(Debug, Default)]
pub struct LikeTracker {
    liked: HashSet<ProductId>,
}

impl LikeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a like for a catalog product. Liking an already-liked id is a
    /// no-op; an id the catalog does not know is an error.
    pub fn like(&mut self, id: ProductId, catalog: &Catalog) -> Result<()> {
        if !catalog.contains(id) {
            return Err(EngineError::NotFound(id));
        }
        self.liked.insert(id);
        Ok(())
    }

    /// Owned snapshot of the like set, safe to iterate while later likes land.
    pub fn liked(&self) -> HashSet<ProductId> {
        self.liked.clone()
    }

    pub fn len(&self) -> usize {
        self.liked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.liked.is_empty()
    }
}
