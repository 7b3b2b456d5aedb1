//! Aggregations behind the dashboard charts
mod counts;
mod prices;

#[cfg(test)]
mod tests;

pub use counts::{
    CategoryCount, ScreenSizeCount, brand_distribution, screen_size_distribution, top_models,
};
pub use prices::{
    PriceBin, PriceSummary, RamPrice, DEFAULT_BIN_SIZE, DEFAULT_MAX_BINNED_PRICE, price_histogram,
    product_type_prices, ram_price,
};
