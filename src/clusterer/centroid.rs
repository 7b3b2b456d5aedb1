use super::FeatureVector;

/// Coordinate-wise mean, `None` for an empty member set
pub fn compute_centroid(vectors: &[&FeatureVector]) -> Option<FeatureVector> {
    if vectors.is_empty() {
        return None;
    }

    let mut out = [0.0; FeatureVector::DIM];

    for v in vectors {
        for i in 0..FeatureVector::DIM {
            out[i] += v.0[i];
        }
    }

    let n = vectors.len() as f64;
    for value in out.iter_mut() {
        *value /= n;
    }

    Some(FeatureVector(out))
}
