// Public API exports
pub mod clusterer;
pub mod config;
pub mod distribution;
pub mod loader;
pub mod offer;
pub mod prediction;
pub mod similarity;
pub mod synthetic;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigError};
pub use offer::{Offer, OfferId, OfferQuery};

pub use similarity::{FeatureWeights, SimilarityResult, find_similar};

pub use clusterer::{
    ClusterAssignment, ClusterConfig, ClusterPoint, ClusterResult, ClusterStats, Feature,
    FeatureVector, NormalizedOffer, Segmentation, cluster, cluster_stats, kmeans, normalize,
    project,
};

pub use loader::{DataSource, LoadError, OfferCache, OfferSnapshot};

pub use prediction::{DeviceType, FeatureValues, PredictionClient, PredictionError};

pub use synthetic::generate_offers;
