/// Weights and scale divisors for the offer distance function
///
/// Numeric features contribute `weight * (diff / scale)^2`; categorical
/// features contribute `weight` on mismatch and nothing on match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureWeights {
    pub ram: f64,
    pub ram_scale: f64,
    pub storage: f64,
    pub storage_scale: f64,
    pub screen_size: f64,
    pub screen_size_scale: f64,
    pub cpu: f64,
    pub gpu: f64,
    pub os: f64,
}

impl FeatureWeights {
    pub const DEFAULT: Self = Self {
        ram: 0.20,
        ram_scale: 64.0,
        storage: 0.15,
        storage_scale: 2048.0,
        screen_size: 0.15,
        screen_size_scale: 4.0,
        cpu: 0.20,
        gpu: 0.20,
        os: 0.10,
    };
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
