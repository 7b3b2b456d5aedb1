use crate::offer::{Offer, product_types};
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_BIN_SIZE: u32 = 500;
pub const DEFAULT_MAX_BINNED_PRICE: u32 = 5000;

/// One bar of the price histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceBin {
    /// Display label, e.g. `$500-$999` or `$5000+`
    pub label: String,
    pub lower: u32,
    /// Inclusive upper bound, `None` for the overflow bin
    pub upper: Option<u32>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RamPrice {
    pub ram: u32,
    pub average_price: f64,
    pub count: usize,
}

/// Box-plot figures for one product type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary<'a> {
    pub product_type: &'a str,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
}

/// Bucket prices into fixed-width bins plus one overflow bin
///
/// Every bin is returned, including empty ones. The last fixed bin is cut
/// short when `max_price` is not a multiple of `bin_size`. A zero
/// `bin_size` is treated as the default. Negative prices count towards
/// the first bin, so the counts always add up to `offers.len()`.
pub fn price_histogram(offers: &[Offer], bin_size: u32, max_price: u32) -> Vec<PriceBin> {
    let bin_size = if bin_size == 0 {
        DEFAULT_BIN_SIZE
    } else {
        bin_size
    };
    let bin_count = max_price.div_ceil(bin_size);

    let mut bins: Vec<PriceBin> = (0..bin_count)
        .map(|i| {
            // i * bin_size < max_price, only the upper edge can overflow
            let lower = i * bin_size;
            let upper = (i + 1).saturating_mul(bin_size).min(max_price) - 1;
            PriceBin {
                label: format!("${}-${}", lower, upper),
                lower,
                upper: Some(upper),
                count: 0,
            }
        })
        .collect();
    bins.push(PriceBin {
        label: format!("${}+", max_price),
        lower: max_price,
        upper: None,
        count: 0,
    });

    let overflow = bin_count as usize;
    for offer in offers {
        let price = offer.price;
        let index = if price >= max_price as f64 {
            overflow
        } else if price > 0.0 {
            ((price / bin_size as f64).floor() as usize).min(overflow)
        } else {
            0
        };
        bins[index].count += 1;
    }

    bins
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Average price per RAM size, ascending by RAM
pub fn ram_price(offers: &[Offer]) -> Vec<RamPrice> {
    let mut totals: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    for offer in offers {
        let entry = totals.entry(offer.ram).or_insert((0.0, 0));
        entry.0 += offer.price;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(ram, (total, count))| RamPrice {
            ram,
            average_price: round2(total / count as f64),
            count,
        })
        .collect()
}

/// Price spread per product type, in first-appearance order
///
/// Quartiles are taken at `floor(n/4)` and `floor(3n/4)` of the sorted
/// prices, the median is the midpoint average for even counts.
pub fn product_type_prices(offers: &[Offer]) -> Vec<PriceSummary<'_>> {
    product_types(offers)
        .into_iter()
        .map(|product_type| {
            let mut prices: Vec<f64> = offers
                .iter()
                .filter(|o| o.product_type == product_type)
                .map(|o| o.price)
                .collect();
            prices.sort_by(|a, b| a.total_cmp(b));

            let n = prices.len();
            let median = if n % 2 == 0 {
                (prices[n / 2 - 1] + prices[n / 2]) / 2.0
            } else {
                prices[n / 2]
            };

            PriceSummary {
                product_type,
                count: n,
                min: prices[0],
                max: prices[n - 1],
                avg: prices.iter().sum::<f64>() / n as f64,
                median,
                q1: prices[n / 4],
                q3: prices[n * 3 / 4],
            }
        })
        .collect()
}
