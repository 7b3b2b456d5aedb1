// Distinct categorical values, used to populate filter options
use super::Offer;
use std::collections::HashSet;

/// Collect distinct values in first-appearance order
pub fn distinct_in_order<'a, F>(offers: &'a [Offer], field: F) -> Vec<&'a str>
where
    F: Fn(&'a Offer) -> &'a str,
{
    let mut seen = HashSet::new();
    offers
        .iter()
        .map(field)
        .filter(|value| seen.insert(*value))
        .collect()
}

pub fn brands(offers: &[Offer]) -> Vec<&str> {
    distinct_in_order(offers, |o| o.brand.as_str())
}

pub fn product_types(offers: &[Offer]) -> Vec<&str> {
    distinct_in_order(offers, |o| o.product_type.as_str())
}

pub fn cpus(offers: &[Offer]) -> Vec<&str> {
    distinct_in_order(offers, |o| o.cpu.as_str())
}

pub fn gpus(offers: &[Offer]) -> Vec<&str> {
    distinct_in_order(offers, |o| o.gpu.as_str())
}

pub fn oses(offers: &[Offer]) -> Vec<&str> {
    distinct_in_order(offers, |o| o.os.as_str())
}
