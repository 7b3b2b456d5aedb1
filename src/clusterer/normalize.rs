use super::{Feature, FeatureVector};
use crate::offer::{Offer, product_types};

/// An offer paired with its min-max normalized features
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedOffer<'a> {
    pub offer: &'a Offer,
    pub features: FeatureVector,
}

impl NormalizedOffer<'_> {
    pub fn get(&self, feature: Feature) -> f64 {
        self.features[feature]
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

fn scale(value: f64, (min, max): (f64, f64)) -> f64 {
    if max == min {
        0.0
    } else {
        (value - min) / (max - min)
    }
}

/// Normalize every offer against the whole collection
///
/// RAM, screen size and price are min-max scaled to [0, 1]; a feature with
/// a single distinct value maps to 0. Product type becomes its
/// first-appearance index divided by the number of distinct types.
pub fn normalize(offers: &[Offer]) -> Vec<NormalizedOffer<'_>> {
    if offers.is_empty() {
        return Vec::new();
    }

    let ram = bounds(offers.iter().map(|o| o.ram as f64));
    let screen = bounds(offers.iter().map(|o| o.screen_size));
    let price = bounds(offers.iter().map(|o| o.price));
    let types = product_types(offers);
    let type_count = types.len() as f64;

    offers
        .iter()
        .map(|offer| {
            let type_index = types
                .iter()
                .position(|t| *t == offer.product_type)
                .unwrap_or(0);

            NormalizedOffer {
                offer,
                features: FeatureVector::new(
                    scale(offer.ram as f64, ram),
                    scale(offer.screen_size, screen),
                    scale(offer.price, price),
                    type_index as f64 / type_count,
                ),
            }
        })
        .collect()
}
