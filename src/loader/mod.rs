mod cache;
mod error;
mod source;


pub use cache::{OfferCache, OfferSnapshot, parse_offers};
pub use error::LoadError;
pub use source::DataSource;
