use crate::clusterer::{
    centroid::compute_centroid,
    distance::euclidean_distance,
    normalize::normalize,
    types::{ClusterAssignment, ClusterConfig, ClusterResult},
    FeatureVector,
};
use crate::offer::Offer;
use rand::Rng;

/// Normalize `offers` and cluster them with the given config
pub fn cluster(offers: &[Offer], config: &ClusterConfig) -> ClusterResult {
    let vectors: Vec<FeatureVector> = normalize(offers).iter().map(|n| n.features).collect();
    let mut rng = config.rng();
    kmeans(&vectors, config.k, config.max_iterations, &mut rng)
}

/// Lloyd's k-means with centroids sampled uniformly (with replacement)
///
/// An empty input or `k == 0` gives an empty result; `k` above the
/// number of vectors is clamped.
pub fn kmeans<R: Rng + ?Sized>(
    vectors: &[FeatureVector],
    k: usize,
    max_iterations: usize,
    rng: &mut R,
) -> ClusterResult {
    let n = vectors.len();
    if n == 0 || k == 0 {
        tracing::debug!(vectors = n, k, "nothing to cluster");
        return ClusterResult::empty();
    }

    let k = if k > n {
        tracing::warn!(k, vectors = n, "k exceeds collection size, clamping");
        n
    } else {
        k
    };

    // 1. Pick random initial centers
    let centroids: Vec<FeatureVector> = (0..k).map(|_| vectors[rng.gen_range(0..n)]).collect();

    kmeans_from(vectors, centroids, max_iterations)
}

/// Lloyd's k-means starting from explicit centroids
pub fn kmeans_from(
    vectors: &[FeatureVector],
    mut centroids: Vec<FeatureVector>,
    max_iterations: usize,
) -> ClusterResult {
    let n = vectors.len();
    let k = centroids.len();
    if n == 0 || k == 0 {
        return ClusterResult::empty();
    }

    let mut assignments = vec![0usize; n];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..max_iterations {
        iterations += 1;

        // 2. Assign each vector to nearest centroid
        let mut changed = 0usize;
        for (i, vector) in vectors.iter().enumerate() {
            let best = nearest_centroid(vector, &centroids);
            if assignments[i] != best {
                changed += 1;
                assignments[i] = best;
            }
        }

        tracing::debug!(iteration = iterations, changed, "k-means assignment step");

        if changed == 0 {
            converged = true;
            break;
        }

        // 3. Recompute centroids, empty clusters keep their previous one
        for (c, centroid) in centroids.iter_mut().enumerate() {
            let members: Vec<&FeatureVector> = vectors
                .iter()
                .zip(assignments.iter())
                .filter(|&(_, a)| *a == c)
                .map(|(v, _)| v)
                .collect();

            if let Some(updated) = compute_centroid(&members) {
                *centroid = updated;
            }
        }
    }

    tracing::debug!(k, iterations, converged, "k-means finished");

    ClusterResult {
        assignments: ClusterAssignment::new(assignments),
        centroids,
        iterations,
        converged,
    }
}

/// Closest centroid, ties go to the lowest index
fn nearest_centroid(vector: &FeatureVector, centroids: &[FeatureVector]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;

    for (c, center) in centroids.iter().enumerate() {
        let distance = euclidean_distance(vector, center);
        if distance < best_distance {
            best = c;
            best_distance = distance;
        }
    }

    best
}
