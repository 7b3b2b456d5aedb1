use super::{ClusterAssignment, ClusterId};
use crate::offer::Offer;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of the offers that share a cluster
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStats<'a> {
    pub cluster: ClusterId,
    pub count: usize,
    pub avg_price: f64,
    pub avg_ram: f64,
    pub avg_screen_size: f64,
    /// Most frequent product type, ties go to the first one seen
    pub dominant_product_type: &'a str,
}

/// Per-cluster statistics, ascending by cluster id
///
/// Only clusters with at least one member are reported.
pub fn cluster_stats<'a>(
    offers: impl IntoIterator<Item = &'a Offer>,
    assignment: &ClusterAssignment,
) -> Vec<ClusterStats<'a>> {
    let mut groups: BTreeMap<ClusterId, Vec<&'a Offer>> = BTreeMap::new();
    for (offer, cluster) in offers.into_iter().zip(assignment.iter()) {
        groups.entry(cluster).or_default().push(offer);
    }

    groups
        .into_iter()
        .map(|(cluster, members)| {
            let n = members.len() as f64;
            ClusterStats {
                cluster,
                count: members.len(),
                avg_price: members.iter().map(|o| o.price).sum::<f64>() / n,
                avg_ram: members.iter().map(|o| o.ram as f64).sum::<f64>() / n,
                avg_screen_size: members.iter().map(|o| o.screen_size).sum::<f64>() / n,
                dominant_product_type: mode(members.iter().map(|o| o.product_type.as_str())),
            }
        })
        .collect()
}

fn mode<'a>(values: impl Iterator<Item = &'a str>) -> &'a str {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value).unwrap_or_default()
}
