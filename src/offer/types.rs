use serde::{Deserialize, Serialize};

/// Unique identifier for an offer
pub type OfferId = u64;

/// A single laptop offer as published in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: OfferId,
    pub title: String,
    pub brand: String,
    #[serde(default)]
    pub series: String,
    #[serde(default)]
    pub offer_count: u32,
    pub product_type: String,
    pub cpu: String,
    pub gpu: String,
    pub os: String,
    /// RAM in GB
    pub ram: u32,
    /// Storage in GB
    pub storage: u32,
    /// Screen diagonal in inches
    pub screen_size: f64,
    pub price: f64,
    /// Base clock in GHz
    pub clock_speed: f64,
}

/// Desired offer attributes used as a similarity query
///
/// Absent fields do not contribute to the distance at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferQuery {
    pub ram: Option<f64>,
    pub storage: Option<f64>,
    pub screen_size: Option<f64>,
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub os: Option<String>,
}

impl OfferQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ram(mut self, ram: f64) -> Self {
        self.ram = Some(ram);
        self
    }

    pub fn with_storage(mut self, storage: f64) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_screen_size(mut self, screen_size: f64) -> Self {
        self.screen_size = Some(screen_size);
        self
    }

    pub fn with_cpu(mut self, cpu: impl Into<String>) -> Self {
        self.cpu = Some(cpu.into());
        self
    }

    pub fn with_gpu(mut self, gpu: impl Into<String>) -> Self {
        self.gpu = Some(gpu.into());
        self
    }

    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = Some(os.into());
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.ram.is_none()
            && self.storage.is_none()
            && self.screen_size.is_none()
            && self.cpu.is_none()
            && self.gpu.is_none()
            && self.os.is_none()
    }

    /// Build a query that matches an existing offer on every field
    pub fn from_offer(offer: &Offer) -> Self {
        Self {
            ram: Some(offer.ram as f64),
            storage: Some(offer.storage as f64),
            screen_size: Some(offer.screen_size),
            cpu: Some(offer.cpu.clone()),
            gpu: Some(offer.gpu.clone()),
            os: Some(offer.os.clone()),
        }
    }
}
