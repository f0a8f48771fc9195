use crate::catalog::{Catalog, Product, ProductId};
use crate::error::{EngineError, Result};
use crate::index::SimilarityIndex;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

/// A ranked catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub product: Product,
    pub score: f32,
}

/// Score every catalog product against the like set and rank.
///
/// With an empty like set everything scores 0.0; otherwise a product's score
/// is the mean similarity to the liked ids. Liked products contribute their
/// own self-similarity term of 1.0, so liked items stay eligible to
/// resurface. Ordering is score descending, ties by ascending id; `top_n` is
/// clamped to the catalog size.
pub fn recommend(
    catalog: &Catalog,
    index: &SimilarityIndex,
    liked: &HashSet<ProductId>,
    top_n: i64,
) -> Result<Vec<Recommendation>> {
    if top_n <= 0 {
        return Err(EngineError::InvalidArgument(top_n));
    }

    let mut ranked: Vec<Recommendation> = catalog
        .all()
        .iter()
        .map(|product| {
            let score = if liked.is_empty() {
                0.0
            } else {
                let total: f32 = liked
                    .iter()
                    .map(|&l| index.similarity(product.id, l))
                    .sum();
                total / liked.len() as f32
            };
            Recommendation { product: product.clone(), score }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.product.id.cmp(&b.product.id))
    });
    ranked.truncate((top_n as usize).min(catalog.len()));
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Catalog, SimilarityIndex) {
        let mut catalog = Catalog::new();
        catalog.add("Wireless Headphones", "Bluetooth noise cancelling", None);
        catalog.add("Running Shoes", "Lightweight breathable mesh", None);
        catalog.add("Bluetooth Speaker", "Portable bluetooth speaker", None);
        let index = SimilarityIndex::build(&catalog);
        (catalog, index)
    }

    #[test]
    fn non_positive_top_n_is_rejected() {
        let (catalog, index) = fixture();
        let liked = HashSet::new();
        assert_eq!(
            recommend(&catalog, &index, &liked, 0).unwrap_err(),
            EngineError::InvalidArgument(0)
        );
        assert_eq!(
            recommend(&catalog, &index, &liked, -3).unwrap_err(),
            EngineError::InvalidArgument(-3)
        );
    }

    #[test]
    fn empty_like_set_yields_zero_scores_in_id_order() {
        let (catalog, index) = fixture();
        let recs = recommend(&catalog, &index, &HashSet::new(), 2).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].product.id, 1);
        assert_eq!(recs[1].product.id, 2);
        assert!(recs.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn top_n_clamps_to_catalog_size() {
        let (catalog, index) = fixture();
        let recs = recommend(&catalog, &index, &HashSet::new(), 50).unwrap();
        assert_eq!(recs.len(), 3);
    }

    #[test]
    fn empty_catalog_degrades_to_empty_result() {
        let catalog = Catalog::new();
        let index = SimilarityIndex::build(&catalog);
        let recs = recommend(&catalog, &index, &HashSet::new(), 5).unwrap();
        assert!(recs.is_empty());
    }

    #[test]
    fn shared_term_outranks_disjoint_product() {
        let (catalog, index) = fixture();
        let liked: HashSet<ProductId> = [1].into_iter().collect();
        let recs = recommend(&catalog, &index, &liked, 2).unwrap();
        // the liked product itself scores 1.0 and comes first
        assert_eq!(recs[0].product.id, 1);
        assert_eq!(recs[0].score, 1.0);
        // the speaker shares "bluetooth" with the liked headphones
        assert_eq!(recs[1].product.id, 3);
        assert!(recs[1].score > 0.0);
    }

    #[test]
    fn score_averages_over_all_liked_ids() {
        let (catalog, index) = fixture();
        let liked: HashSet<ProductId> = [1, 2].into_iter().collect();
        let recs = recommend(&catalog, &index, &liked, 3).unwrap();
        let speaker = recs.iter().find(|r| r.product.id == 3).unwrap();
        let expected = (index.similarity(3, 1) + index.similarity(3, 2)) / 2.0;
        assert!((speaker.score - expected).abs() < f32::EPSILON);
    }
}
