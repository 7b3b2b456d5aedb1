mod centroid;
mod distance;
mod feature;
mod kmeans;
mod normalize;
mod projection;
mod stats;
mod types;


pub use centroid::compute_centroid;
pub use distance::euclidean_distance;
pub use feature::{Feature, FeatureVector, UnknownFeature};
pub use kmeans::{cluster, kmeans, kmeans_from};
pub use normalize::{NormalizedOffer, normalize};
pub use projection::{ClusterPoint, project};
pub use stats::{ClusterStats, cluster_stats};
pub use types::{Cluster, ClusterAssignment, ClusterConfig, ClusterId, ClusterResult};

use crate::offer::Offer;

/// Normalized offers together with their clustering
///
/// Keeps the normalization around so the result can be projected onto
/// any pair of features without recomputing.
#[derive(Debug, Clone)]
pub struct Segmentation<'a> {
    pub normalized: Vec<NormalizedOffer<'a>>,
    pub result: ClusterResult,
}

impl<'a> Segmentation<'a> {
    pub fn run(offers: &'a [Offer], config: &ClusterConfig) -> Self {
        let normalized = normalize(offers);
        let vectors: Vec<FeatureVector> = normalized.iter().map(|n| n.features).collect();
        let mut rng = config.rng();
        let result = kmeans(&vectors, config.k, config.max_iterations, &mut rng);

        Self { normalized, result }
    }

    pub fn project(&self, x: Feature, y: Feature) -> Vec<ClusterPoint<'a>> {
        project(&self.normalized, &self.result.assignments, x, y)
    }

    pub fn stats(&self) -> Vec<ClusterStats<'a>> {
        cluster_stats(
            self.normalized.iter().map(|n| n.offer),
            &self.result.assignments,
        )
    }
}
