use super::FeatureWeights;
use crate::offer::{Offer, OfferQuery};

/// An offer ranked against a query
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityResult<'a> {
    pub offer: &'a Offer,
    /// 1-based position in the result list
    pub rank: usize,
    pub distance: f64,
    /// Percentage in [0, 100]
    pub similarity_score: i32,
}

impl SimilarityResult<'_> {
    /// Unclamped `(1 - distance) * 100`, may fall outside [0, 100]
    pub fn raw_score(&self) -> f64 {
        ((1.0 - self.distance) * 100.0).round()
    }
}

fn numeric_term(weight: f64, scale: f64, value: f64, target: Option<f64>) -> f64 {
    match target {
        Some(target) => {
            let diff = (value - target) / scale;
            weight * diff * diff
        }
        None => 0.0,
    }
}

fn categorical_term(weight: f64, value: &str, target: Option<&str>) -> f64 {
    match target {
        Some(target) if target != value => weight,
        _ => 0.0,
    }
}

/// Weighted Euclidean distance between a query and an offer
pub fn weighted_distance(query: &OfferQuery, offer: &Offer, weights: &FeatureWeights) -> f64 {
    let sum = numeric_term(weights.ram, weights.ram_scale, offer.ram as f64, query.ram)
        + numeric_term(
            weights.storage,
            weights.storage_scale,
            offer.storage as f64,
            query.storage,
        )
        + numeric_term(
            weights.screen_size,
            weights.screen_size_scale,
            offer.screen_size,
            query.screen_size,
        )
        + categorical_term(weights.cpu, &offer.cpu, query.cpu.as_deref())
        + categorical_term(weights.gpu, &offer.gpu, query.gpu.as_deref())
        + categorical_term(weights.os, &offer.os, query.os.as_deref());

    sum.sqrt()
}

fn similarity_score(distance: f64) -> i32 {
    ((1.0 - distance) * 100.0).round().clamp(0.0, 100.0) as i32
}

/// Find the `k` offers closest to `query` using the default weights
pub fn find_similar<'a>(
    query: &OfferQuery,
    offers: &'a [Offer],
    k: usize,
) -> Vec<SimilarityResult<'a>> {
    find_similar_with(query, offers, k, &FeatureWeights::DEFAULT)
}

/// Find the `k` offers closest to `query`
///
/// Returns `min(k, offers.len())` results ordered by ascending distance.
/// Equal distances keep the order of `offers`. Absent query fields are
/// skipped, so an empty query scores every offer at distance 0.
pub fn find_similar_with<'a>(
    query: &OfferQuery,
    offers: &'a [Offer],
    k: usize,
    weights: &FeatureWeights,
) -> Vec<SimilarityResult<'a>> {
    if offers.is_empty() || k == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(&Offer, f64)> = offers
        .iter()
        .map(|offer| (offer, weighted_distance(query, offer, weights)))
        .collect();

    // sort_by is stable, ties keep collection order
    scored.sort_by(|a, b| a.1.total_cmp(&b.1));

    let results: Vec<_> = scored
        .into_iter()
        .take(k)
        .enumerate()
        .map(|(i, (offer, distance))| SimilarityResult {
            offer,
            rank: i + 1,
            distance,
            similarity_score: similarity_score(distance),
        })
        .collect();

    tracing::debug!(
        candidates = offers.len(),
        returned = results.len(),
        "similarity search complete"
    );

    results
}
