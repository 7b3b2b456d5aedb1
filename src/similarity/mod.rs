mod search;
mod weights;


pub use search::{SimilarityResult, find_similar, find_similar_with, weighted_distance};
pub use weights::FeatureWeights;

/// Number of similar offers shown by default
pub const DEFAULT_K: usize = 5;
