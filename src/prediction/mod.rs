mod client;
mod types;


pub use client::{PredictionClient, PredictionError, DEFAULT_TIMEOUT};
pub use types::{
    DeviceType, FeatureValues, PricePrediction, RemoteSimilarProduct, UnknownDeviceType,
};
