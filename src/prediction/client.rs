use super::types::{PredictionRequest, SimilarRequest, SimilarResponse};
use super::{DeviceType, FeatureValues, PricePrediction, RemoteSimilarProduct};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Client for the remote price-prediction and similar-product functions
pub struct PredictionClient {
    http: Client,
    prediction_url: String,
    similar_url: String,
}

impl PredictionClient {
    pub fn new(
        prediction_url: impl Into<String>,
        similar_url: impl Into<String>,
    ) -> Result<Self, PredictionError> {
        Self::with_timeout(prediction_url, similar_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        prediction_url: impl Into<String>,
        similar_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PredictionError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, prediction_url, similar_url))
    }

    pub fn with_client(
        http: Client,
        prediction_url: impl Into<String>,
        similar_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            prediction_url: prediction_url.into(),
            similar_url: similar_url.into(),
        }
    }

    /// Predict a price for the given features
    pub async fn predict_price(
        &self,
        device_type: DeviceType,
        feature_values: &FeatureValues,
    ) -> Result<PricePrediction, PredictionError> {
        if feature_values.is_empty() {
            return Err(PredictionError::InvalidRequest(
                "feature_values must not be empty".to_string(),
            ));
        }

        let req = PredictionRequest {
            device_type,
            feature_values,
        };
        let prediction: PricePrediction = self.post(&self.prediction_url, &req).await?;

        tracing::info!(
            %device_type,
            predicted_price = prediction.predicted_price,
            "received price prediction"
        );
        Ok(prediction)
    }

    /// Ask the remote k-NN model for the `k` closest products
    pub async fn find_similar_remote(
        &self,
        device_type: DeviceType,
        feature_values: &FeatureValues,
        k: usize,
    ) -> Result<Vec<RemoteSimilarProduct>, PredictionError> {
        if feature_values.is_empty() {
            return Err(PredictionError::InvalidRequest(
                "feature_values must not be empty".to_string(),
            ));
        }
        if k == 0 {
            return Ok(Vec::new());
        }

        let req = SimilarRequest {
            device_type,
            feature_values,
            k,
        };
        let res: SimilarResponse = self.post(&self.similar_url, &req).await?;

        tracing::info!(
            %device_type,
            k,
            returned = res.similar_products.len(),
            "received remote neighbours"
        );
        Ok(res.similar_products)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, PredictionError> {
        let response = self.http.post(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(url, status = status.as_u16(), "remote call failed");
            return Err(PredictionError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
