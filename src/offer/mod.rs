mod catalog;
mod types;


pub use catalog::{brands, cpus, distinct_in_order, gpus, oses, product_types};
pub use types::{Offer, OfferId, OfferQuery};
