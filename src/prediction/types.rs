// Request and response bodies of the price-prediction cloud functions
use crate::offer::OfferQuery;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    #[default]
    Laptop,
    Desktop,
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceType::Laptop => f.write_str("laptop"),
            DeviceType::Desktop => f.write_str("desktop"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid device type '{0}' (expected laptop or desktop)")]
pub struct UnknownDeviceType(pub String);

impl FromStr for DeviceType {
    type Err = UnknownDeviceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "laptop" => Ok(DeviceType::Laptop),
            "desktop" => Ok(DeviceType::Desktop),
            _ => Err(UnknownDeviceType(s.to_string())),
        }
    }
}

/// Feature name to value map, keyed by the model's column names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureValues(Map<String, Value>);

impl FeatureValues {
    pub const CPU: &'static str = "procesador";
    pub const CLOCK_SPEED: &'static str = "procesador_frecuencia_turbo_max_ghz";
    pub const GPU: &'static str = "grafica_tarjeta";
    pub const STORAGE: &'static str = "disco_duro_capacidad_de_memoria_ssd_gb";
    pub const RAM: &'static str = "ram_memoria_gb";
    pub const OS: &'static str = "sistema_operativo_sistema_operativo";

    pub fn new() -> Self {
        Self::default()
    }

    /// Map the query fields the models know about
    pub fn from_query(query: &OfferQuery) -> Self {
        let mut values = Self::new();
        if let Some(cpu) = &query.cpu {
            values.insert(Self::CPU, cpu.as_str());
        }
        if let Some(gpu) = &query.gpu {
            values.insert(Self::GPU, gpu.as_str());
        }
        if let Some(storage) = query.storage {
            values.insert(Self::STORAGE, storage);
        }
        if let Some(ram) = query.ram {
            values.insert(Self::RAM, ram);
        }
        if let Some(os) = &query.os {
            values.insert(Self::OS, os.as_str());
        }
        values
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PredictionRequest<'a> {
    pub device_type: DeviceType,
    pub feature_values: &'a FeatureValues,
}

#[derive(Debug, Serialize)]
pub(crate) struct SimilarRequest<'a> {
    pub device_type: DeviceType,
    pub feature_values: &'a FeatureValues,
    pub k: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePrediction {
    pub model_type_used: DeviceType,
    pub predicted_price: f64,
    #[serde(default)]
    pub feature_importances: HashMap<String, f64>,
}

impl PricePrediction {
    /// Importances from most to least influential
    pub fn ranked_importances(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .feature_importances
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// A neighbour returned by the remote k-NN model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteSimilarProduct {
    pub similarity_distance: f64,
    #[serde(rename = "titulo", default)]
    pub title: Option<String>,
    #[serde(rename = "precio_mean", default)]
    pub mean_price: Option<f64>,
    /// Remaining returned columns, passed through untouched
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimilarResponse {
    pub similar_products: Vec<RemoteSimilarProduct>,
}
