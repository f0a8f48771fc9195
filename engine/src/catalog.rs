use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub type ProductId = u32;

/// A catalog entry. Immutable once added; ids are assigned sequentially
/// starting at 1 in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// Ordered, in-memory product catalog. The sole id authority: `add` assigns
/// the next sequential id, `insert` accepts an explicit id but rejects
/// duplicates.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    ids: HashSet<ProductId>,
    next_id: ProductId,
}

impl Catalog {
    pub fn new() -> Self {
        Self { products: Vec::new(), ids: HashSet::new(), next_id: 1 }
    }

    /// Append a product under the next sequential id and return that id.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: Option<String>,
    ) -> ProductId {
        let id = self.next_id;
        self.next_id += 1;
        self.ids.insert(id);
        self.products.push(Product {
            id,
            title: title.into(),
            description: description.into(),
            image_url,
        });
        id
    }

    /// Append a product carrying an explicit id. The auto-assign counter is
    /// advanced past the inserted id so later `add` calls stay unique.
    pub fn insert(&mut self, product: Product) -> Result<ProductId> {
        if self.ids.contains(&product.id) {
            return Err(EngineError::DuplicateId(product.id));
        }
        let id = product.id;
        self.ids.insert(id);
        self.next_id = self.next_id.max(id + 1);
        self.products.push(product);
        Ok(id)
    }

    pub fn get(&self, id: ProductId) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(EngineError::NotFound(id))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// All products in insertion order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
