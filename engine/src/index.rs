use crate::catalog::{Catalog, ProductId};
use crate::tokenizer::tokenize;
use std::collections::{HashMap, HashSet};

/// Immutable similarity snapshot over one catalog build. Holds each product's
/// term profile for pairwise scoring and an inverted term -> ids map for
/// candidate lookup. Rebuilt wholesale; never patched incrementally.
#[derive(Debug, Default)]
pub struct SimilarityIndex {
    terms: HashMap<ProductId, HashSet<String>>,
    postings: HashMap<String, Vec<ProductId>>,
}

impl SimilarityIndex {
    /// Build an index from the current catalog. Total: an empty catalog
    /// produces an empty index.
    pub fn build(catalog: &Catalog) -> Self {
        let mut terms: HashMap<ProductId, HashSet<String>> = HashMap::new();
        let mut postings: HashMap<String, Vec<ProductId>> = HashMap::new();
        for product in catalog.all() {
            let mut profile = HashSet::new();
            let text = format!("{} {}", product.title, product.description);
            for term in tokenize(&text) {
                if profile.insert(term.clone()) {
                    // catalog order is ascending id, so postings stay sorted
                    postings.entry(term).or_default().push(product.id);
                }
            }
            terms.insert(product.id, profile);
        }
        tracing::debug!(
            num_products = terms.len(),
            num_terms = postings.len(),
            "similarity index built"
        );
        Self { terms, postings }
    }

    /// Jaccard overlap of the two products' term sets, in [0, 1]. Ids missing
    /// from this snapshot count as empty sets, and two empty sets compare
    /// equal, so the function is total and `similarity(a, a)` is always 1.0.
    pub fn similarity(&self, a: ProductId, b: ProductId) -> f32 {
        if a == b {
            return 1.0;
        }
        let empty = HashSet::new();
        let ta = self.terms.get(&a).unwrap_or(&empty);
        let tb = self.terms.get(&b).unwrap_or(&empty);
        let intersection = ta.intersection(tb).count();
        let union = ta.len() + tb.len() - intersection;
        if union == 0 {
            return 1.0;
        }
        intersection as f32 / union as f32
    }

    /// Term profile for a product, if it was part of this build.
    pub fn term_set(&self, id: ProductId) -> Option<&HashSet<String>> {
        self.terms.get(&id)
    }

    /// Ids of all indexed products containing `term`, ascending.
    pub fn products_with_term(&self, term: &str) -> &[ProductId] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of products covered by this snapshot.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
