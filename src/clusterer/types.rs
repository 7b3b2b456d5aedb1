use super::FeatureVector;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub type ClusterId = usize;

/// Cluster id for every offer, indexed by the offer's position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterAssignment(Vec<ClusterId>);

impl ClusterAssignment {
    pub fn new(ids: Vec<ClusterId>) -> Self {
        Self(ids)
    }

    pub fn cluster_of(&self, index: usize) -> Option<ClusterId> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ClusterId> + '_ {
        self.0.iter().copied()
    }

    /// Offer indices assigned to `cluster`, in collection order
    pub fn members(&self, cluster: ClusterId) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, c)| *c == cluster)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn as_slice(&self) -> &[ClusterId] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub id: ClusterId,
    pub members: Vec<usize>,
    pub centroid: FeatureVector,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterResult {
    pub assignments: ClusterAssignment,
    pub centroids: Vec<FeatureVector>,
    pub iterations: usize,
    /// Stopped because no assignment changed
    pub converged: bool,
}

impl ClusterResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// One entry per centroid, including clusters that ended up empty
    pub fn clusters(&self) -> Vec<Cluster> {
        self.centroids
            .iter()
            .enumerate()
            .map(|(id, centroid)| Cluster {
                id,
                members: self.assignments.members(id),
                centroid: *centroid,
            })
            .collect()
    }
}

/// Parameters for a clustering run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterConfig {
    pub k: usize,
    pub max_iterations: usize,
    /// Fixed seed for reproducible runs, fresh entropy when `None`
    pub seed: Option<u64>,
}

impl ClusterConfig {
    pub const DEFAULT_K: usize = 3;
    pub const DEFAULT_MAX_ITERATIONS: usize = 10;

    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            k: Self::DEFAULT_K,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}
