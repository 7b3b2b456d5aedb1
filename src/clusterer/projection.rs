use super::{ClusterAssignment, ClusterId, Feature, NormalizedOffer};
use serde::Serialize;

/// A clustered offer placed on two chosen feature axes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterPoint<'a> {
    pub x: f64,
    pub y: f64,
    pub cluster: ClusterId,
    pub title: &'a str,
    pub brand: &'a str,
    pub price: f64,
    pub ram: u32,
    pub screen_size: f64,
    pub product_type: &'a str,
}

/// Pick two normalized features as plot coordinates
pub fn project<'a>(
    normalized: &[NormalizedOffer<'a>],
    assignment: &ClusterAssignment,
    x: Feature,
    y: Feature,
) -> Vec<ClusterPoint<'a>> {
    normalized
        .iter()
        .zip(assignment.iter())
        .map(|(n, cluster)| ClusterPoint {
            x: n.features[x],
            y: n.features[y],
            cluster,
            title: &n.offer.title,
            brand: &n.offer.brand,
            price: n.offer.price,
            ram: n.offer.ram,
            screen_size: n.offer.screen_size,
            product_type: &n.offer.product_type,
        })
        .collect()
}
