//! Synthetic laptop offers with realistic correlations between
//! brand, product type, components and price.
use crate::offer::Offer;
use rand::seq::SliceRandom;
use rand::Rng;

const BRANDS: &[&str] = &[
    "HP", "Dell", "Lenovo", "Asus", "Acer", "Apple", "MSI", "Samsung", "Microsoft",
];
const SERIES: &[&str] = &[
    "Pavilion",
    "Inspiron",
    "ThinkPad",
    "ZenBook",
    "Predator",
    "MacBook Pro",
    "GF",
    "Galaxy Book",
    "Surface",
];
const APPLE_SERIES: &[&str] = &["MacBook Air", "MacBook Pro"];
const PRODUCT_TYPES: &[&str] = &[
    "Gaming",
    "Multimedia",
    "Business",
    "Ultrabook",
    "Convertible",
    "Studio",
];
const PC_CPUS: &[&str] = &[
    "Intel Core i3-1115G4",
    "Intel Core i5-1135G7",
    "Intel Core i7-1165G7",
    "AMD Ryzen 3 5300U",
    "AMD Ryzen 5 5500U",
    "AMD Ryzen 7 5700U",
];
const APPLE_CPUS: &[&str] = &["Apple M1", "Apple M1 Pro", "Apple M2"];
const GAMING_GPUS: &[&str] = &[
    "NVIDIA GeForce RTX 3050",
    "NVIDIA GeForce RTX 3060",
    "AMD Radeon RX 6600M",
];
const APPLE_GPUS: &[&str] = &["Apple M1 GPU", "Apple M1 Pro GPU", "Apple M2 GPU"];
const INTEGRATED_GPUS: &[&str] = &["Intel UHD Graphics", "Intel Iris Xe", "AMD Radeon Graphics"];
const PC_OSES: &[&str] = &["Windows 10", "Windows 11", "Chrome OS", "Linux"];

// Duplicates weight the draw towards 8 and 16 GB
const RAM_OPTIONS: &[u32] = &[4, 8, 8, 16, 16, 16, 32, 32, 64];
const STORAGE_OPTIONS: &[u32] = &[256, 512, 512, 1024, 1024, 2048];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

fn pick_num<R: Rng + ?Sized, T: Copy + Default>(rng: &mut R, options: &[T]) -> T {
    options.choose(rng).copied().unwrap_or_default()
}

fn base_price<R: Rng + ?Sized>(rng: &mut R, brand: &str, product_type: &str) -> f64 {
    let (floor, spread) = match (brand, product_type) {
        ("Apple", _) => (1000, 2000),
        (_, "Gaming") => (800, 1500),
        (_, "Business" | "Ultrabook") => (700, 1300),
        _ => (500, 700),
    };
    (floor + rng.gen_range(0..spread)) as f64
}

fn clock_speed<R: Rng + ?Sized>(rng: &mut R, cpu: &str) -> f64 {
    let (base, spread) = if cpu.contains("i3") {
        (2.4, 0.6)
    } else if cpu.contains("i5") {
        (2.6, 0.8)
    } else if cpu.contains("i7") {
        (2.8, 1.0)
    } else if cpu.contains("Ryzen 3") {
        (2.6, 0.7)
    } else if cpu.contains("Ryzen 5") {
        (2.7, 0.9)
    } else if cpu.contains("Ryzen 7") {
        (3.0, 1.2)
    } else {
        (3.2, 0.6)
    };
    let raw: f64 = base + rng.gen::<f64>() * spread;
    (raw * 10.0).round() / 10.0
}

fn offer_count<R: Rng + ?Sized>(rng: &mut R, price: f64) -> u32 {
    if price < 700.0 {
        1 + rng.gen_range(0..5)
    } else if price < 1200.0 {
        3 + rng.gen_range(0..7)
    } else {
        2 + rng.gen_range(0..4)
    }
}

/// Generate `count` offers with ids `1..=count`
pub fn generate_offers<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Offer> {
    (1..=count as u64).map(|id| generate_offer(id, rng)).collect()
}

fn generate_offer<R: Rng + ?Sized>(id: u64, rng: &mut R) -> Offer {
    let brand = pick(rng, BRANDS);
    let is_apple = brand == "Apple";
    let series = if is_apple {
        pick(rng, APPLE_SERIES)
    } else {
        pick(rng, SERIES)
    };
    let product_type = pick(rng, PRODUCT_TYPES);

    let base = base_price(rng, brand, product_type);

    let ram = pick_num(rng, RAM_OPTIONS);
    let ram_price = (ram as f64 - 8.0) * 40.0;

    let storage = pick_num(rng, STORAGE_OPTIONS);
    let storage_price = (storage as f64 - 512.0) * 0.1;

    let cpu = if is_apple {
        pick(rng, APPLE_CPUS)
    } else {
        pick(rng, PC_CPUS)
    };

    let gpu = if product_type == "Gaming" {
        pick(rng, GAMING_GPUS)
    } else if is_apple {
        pick(rng, APPLE_GPUS)
    } else {
        pick(rng, INTEGRATED_GPUS)
    };

    let os = if is_apple { "macOS" } else { pick(rng, PC_OSES) };

    let screen_size = match product_type {
        "Gaming" => pick_num(rng, &[15.6, 17.3]),
        "Ultrabook" | "Convertible" => pick_num(rng, &[13.3, 14.0, 15.6]),
        _ => pick_num(rng, &[13.3, 14.0, 15.6, 17.3]),
    };
    let screen_price = (screen_size - 14.0) * 50.0;

    let jitter = 0.9 + rng.gen::<f64>() * 0.2;
    let price = ((base + ram_price + storage_price + screen_price) * jitter).round();

    let clock_speed = clock_speed(rng, cpu);
    let offer_count = offer_count(rng, price);

    let title = format!(
        "{} {} {}\" - {} - {}GB RAM - {}GB - {}",
        brand, series, screen_size, cpu, ram, storage, os
    );

    Offer {
        id,
        title,
        brand: brand.to_string(),
        series: series.to_string(),
        offer_count,
        product_type: product_type.to_string(),
        cpu: cpu.to_string(),
        gpu: gpu.to_string(),
        os: os.to_string(),
        ram,
        storage,
        screen_size,
        price,
        clock_speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_same_seed_same_dataset() {
        let a = generate_offers(50, &mut ChaCha8Rng::seed_from_u64(42));
        let b = generate_offers(50, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ids_are_sequential() {
        let offers = generate_offers(20, &mut ChaCha8Rng::seed_from_u64(1));
        let ids: Vec<u64> = offers.iter().map(|o| o.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_brand_rules_hold() {
        let offers = generate_offers(300, &mut ChaCha8Rng::seed_from_u64(7));

        for o in &offers {
            if o.brand == "Apple" {
                assert_eq!(o.os, "macOS");
                assert!(APPLE_CPUS.contains(&o.cpu.as_str()));
                assert!(APPLE_SERIES.contains(&o.series.as_str()));
            } else {
                assert_ne!(o.os, "macOS");
                assert!(PC_CPUS.contains(&o.cpu.as_str()));
            }

            if o.product_type == "Gaming" {
                assert!(GAMING_GPUS.contains(&o.gpu.as_str()));
                assert!(o.screen_size >= 15.6);
            }

            assert!(RAM_OPTIONS.contains(&o.ram));
            assert!(STORAGE_OPTIONS.contains(&o.storage));
            assert!(o.price > 0.0);
            assert!(o.offer_count >= 1);
        }
    }

    #[test]
    fn test_clock_speed_has_one_decimal() {
        let offers = generate_offers(100, &mut ChaCha8Rng::seed_from_u64(3));
        for o in &offers {
            let scaled = o.clock_speed * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
            assert!((2.4..=4.2).contains(&o.clock_speed));
        }
    }

    #[test]
    fn test_title_format() {
        let offers = generate_offers(1, &mut ChaCha8Rng::seed_from_u64(5));
        let o = &offers[0];
        assert!(o.title.starts_with(&o.brand));
        assert!(o.title.contains(&format!("{}GB RAM", o.ram)));
        assert!(o.title.ends_with(&o.os));
    }
}
