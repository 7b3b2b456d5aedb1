use super::FeatureVector;

pub fn euclidean_distance(a: &FeatureVector, b: &FeatureVector) -> f64 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
