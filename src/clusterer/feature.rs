use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use thiserror::Error;

/// The normalized features an offer is clustered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Ram,
    ScreenSize,
    Price,
    ProductType,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Ram,
        Feature::ScreenSize,
        Feature::Price,
        Feature::ProductType,
    ];

    /// Position of this feature inside a [`FeatureVector`]
    pub const fn index(self) -> usize {
        match self {
            Feature::Ram => 0,
            Feature::ScreenSize => 1,
            Feature::Price => 2,
            Feature::ProductType => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::Ram => "ram",
            Feature::ScreenSize => "screen-size",
            Feature::Price => "price",
            Feature::ProductType => "product-type",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Feature::Ram => "RAM",
            Feature::ScreenSize => "Screen Size",
            Feature::Price => "Price",
            Feature::ProductType => "Product Type",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown feature '{0}' (expected ram, screen-size, price or product-type)")]
pub struct UnknownFeature(pub String);

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Also accepts the dashboard's camelCase keys
        match s.to_ascii_lowercase().as_str() {
            "ram" | "normalizedram" => Ok(Feature::Ram),
            "screen-size" | "screen_size" | "screensize" | "normalizedscreensize" => {
                Ok(Feature::ScreenSize)
            }
            "price" | "normalizedprice" => Ok(Feature::Price),
            "product-type" | "product_type" | "producttype" | "normalizedproducttype" => {
                Ok(Feature::ProductType)
            }
            _ => Err(UnknownFeature(s.to_string())),
        }
    }
}

/// Fixed-size vector of normalized features, indexed by [`Feature`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureVector(pub [f64; 4]);

impl FeatureVector {
    pub const DIM: usize = 4;

    pub fn new(ram: f64, screen_size: f64, price: f64, product_type: f64) -> Self {
        Self([ram, screen_size, price, product_type])
    }

    pub fn as_array(&self) -> &[f64; 4] {
        &self.0
    }
}

impl Index<Feature> for FeatureVector {
    type Output = f64;

    fn index(&self, feature: Feature) -> &f64 {
        &self.0[feature.index()]
    }
}

impl IndexMut<Feature> for FeatureVector {
    fn index_mut(&mut self, feature: Feature) -> &mut f64 {
        &mut self.0[feature.index()]
    }
}
