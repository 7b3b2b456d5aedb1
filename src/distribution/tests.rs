use super::*;
use crate::test_support::{offer, typed_offer};
use crate::Offer;

fn branded(id: u64, brand: &str, title: &str) -> Offer {
    let mut o = offer(id, 8, 256, 14.0, 800.0, "A", "X", "Win");
    o.brand = brand.to_string();
    o.title = title.to_string();
    o
}

#[test]
fn test_brand_distribution_sorted_by_count() {
    let offers = vec![
        branded(1, "Dell", "a"),
        branded(2, "HP", "b"),
        branded(3, "HP", "c"),
        branded(4, "Asus", "d"),
        branded(5, "Dell", "e"),
        branded(6, "HP", "f"),
    ];

    let dist = brand_distribution(&offers);
    let pairs: Vec<_> = dist.iter().map(|c| (c.name, c.count)).collect();
    assert_eq!(pairs, vec![("HP", 3), ("Dell", 2), ("Asus", 1)]);
}

#[test]
fn test_equal_counts_keep_first_appearance() {
    let offers = vec![branded(1, "Lenovo", "a"), branded(2, "Acer", "b")];
    let names: Vec<_> = brand_distribution(&offers).iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Lenovo", "Acer"]);
}

#[test]
fn test_screen_size_distribution_ascending() {
    let offers = vec![
        offer(1, 8, 256, 17.3, 800.0, "A", "X", "Win"),
        offer(2, 8, 256, 13.3, 800.0, "A", "X", "Win"),
        offer(3, 8, 256, 15.6, 800.0, "A", "X", "Win"),
        offer(4, 8, 256, 13.3, 800.0, "A", "X", "Win"),
    ];

    let dist = screen_size_distribution(&offers);
    let pairs: Vec<_> = dist.iter().map(|c| (c.screen_size, c.count)).collect();
    assert_eq!(pairs, vec![(13.3, 2), (15.6, 1), (17.3, 1)]);
}

#[test]
fn test_top_models_truncates() {
    let offers = vec![
        branded(1, "HP", "Pavilion"),
        branded(2, "HP", "Envy"),
        branded(3, "HP", "Pavilion"),
        branded(4, "HP", "Omen"),
    ];

    let top = top_models(&offers, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].name, "Pavilion");
    assert_eq!(top[0].count, 2);
    assert_eq!(top[1].name, "Envy");
}

#[test]
fn test_price_histogram_bins() {
    let prices = [0.0, 499.0, 500.0, 999.99, 4999.0, 5000.0, 12000.0];
    let offers: Vec<_> = prices
        .iter()
        .enumerate()
        .map(|(i, p)| offer(i as u64, 8, 256, 14.0, *p, "A", "X", "Win"))
        .collect();

    let bins = price_histogram(&offers, DEFAULT_BIN_SIZE, DEFAULT_MAX_BINNED_PRICE);
    assert_eq!(bins.len(), 11);
    assert_eq!(bins[0].label, "$0-$499");
    assert_eq!(bins[0].count, 2);
    assert_eq!(bins[1].label, "$500-$999");
    assert_eq!(bins[1].count, 2);
    assert_eq!(bins[9].label, "$4500-$4999");
    assert_eq!(bins[9].count, 1);
    assert_eq!(bins[10].label, "$5000+");
    assert_eq!(bins[10].upper, None);
    assert_eq!(bins[10].count, 2);

    let total: usize = bins.iter().map(|b| b.count).sum();
    assert_eq!(total, offers.len());
}

#[test]
fn test_price_histogram_empty_input_keeps_bins() {
    let bins = price_histogram(&[], DEFAULT_BIN_SIZE, DEFAULT_MAX_BINNED_PRICE);
    assert_eq!(bins.len(), 11);
    assert!(bins.iter().all(|b| b.count == 0));
}

#[test]
fn test_price_histogram_uneven_max_caps_last_bin() {
    let offers = vec![
        offer(1, 8, 256, 14.0, 650.0, "A", "X", "Win"),
        offer(2, 8, 256, 14.0, 900.0, "A", "X", "Win"),
        offer(3, 8, 256, 14.0, 1200.0, "A", "X", "Win"),
    ];

    let bins = price_histogram(&offers, 700, 1000);
    let labels: Vec<&str> = bins.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["$0-$699", "$700-$999", "$1000+"]);
    assert_eq!(bins[1].upper, Some(999));

    let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![1, 1, 1]);
}

#[test]
fn test_price_histogram_huge_bin_size_does_not_overflow() {
    let bins = price_histogram(&[], 3_000_000_000, 4_000_000_000);

    assert_eq!(bins.len(), 3);
    assert_eq!(bins[0].label, "$0-$2999999999");
    assert_eq!(bins[1].lower, 3_000_000_000);
    assert_eq!(bins[1].upper, Some(3_999_999_999));
    assert_eq!(bins[2].label, "$4000000000+");
}

#[test]
fn test_price_histogram_counts_negative_prices_in_first_bin() {
    let offers = vec![
        offer(1, 8, 256, 14.0, -20.0, "A", "X", "Win"),
        offer(2, 8, 256, 14.0, 100.0, "A", "X", "Win"),
    ];

    let bins = price_histogram(&offers, DEFAULT_BIN_SIZE, DEFAULT_MAX_BINNED_PRICE);
    assert_eq!(bins[0].count, 2);

    let total: usize = bins.iter().map(|b| b.count).sum();
    assert_eq!(total, offers.len());
}

#[test]
fn test_ram_price_average() {
    let offers = vec![
        offer(1, 16, 256, 14.0, 1000.0, "A", "X", "Win"),
        offer(2, 8, 256, 14.0, 600.0, "A", "X", "Win"),
        offer(3, 16, 256, 14.0, 1333.333, "A", "X", "Win"),
    ];

    let rows = ram_price(&offers);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].ram, 8);
    assert_eq!(rows[0].average_price, 600.0);
    assert_eq!(rows[1].ram, 16);
    assert_eq!(rows[1].count, 2);
    assert_eq!(rows[1].average_price, 1166.67);
}

#[test]
fn test_product_type_prices() {
    let offers = vec![
        typed_offer(1, 8, 14.0, 400.0, "Gaming"),
        typed_offer(2, 8, 14.0, 900.0, "Business"),
        typed_offer(3, 8, 14.0, 100.0, "Gaming"),
        typed_offer(4, 8, 14.0, 300.0, "Gaming"),
        typed_offer(5, 8, 14.0, 200.0, "Gaming"),
    ];

    let summary = product_type_prices(&offers);
    assert_eq!(summary.len(), 2);

    let gaming = &summary[0];
    assert_eq!(gaming.product_type, "Gaming");
    assert_eq!(gaming.count, 4);
    assert_eq!(gaming.min, 100.0);
    assert_eq!(gaming.max, 400.0);
    assert_eq!(gaming.avg, 250.0);
    assert_eq!(gaming.median, 250.0);
    assert_eq!(gaming.q1, 200.0);
    assert_eq!(gaming.q3, 400.0);

    let business = &summary[1];
    assert_eq!(business.median, 900.0);
    assert_eq!(business.q1, 900.0);
    assert_eq!(business.q3, 900.0);
}

#[test]
fn test_empty_collections() {
    assert!(brand_distribution(&[]).is_empty());
    assert!(screen_size_distribution(&[]).is_empty());
    assert!(top_models(&[], 10).is_empty());
    assert!(ram_price(&[]).is_empty());
    assert!(product_type_prices(&[]).is_empty());
}
