use super::{DataSource, LoadError};
use crate::offer::Offer;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Decode a JSON array of offers
pub fn parse_offers(bytes: &[u8]) -> Result<Vec<Offer>, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// An immutable, loaded copy of the dataset
#[derive(Debug, Clone)]
pub struct OfferSnapshot {
    pub offers: Vec<Offer>,
    pub loaded_at: DateTime<Utc>,
    /// SHA-256 of the raw bytes, hex encoded
    pub fingerprint: String,
}

impl OfferSnapshot {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        let offers = parse_offers(bytes)?;
        Ok(Self {
            offers,
            loaded_at: Utc::now(),
            fingerprint: hex::encode(Sha256::digest(bytes)),
        })
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

/// Lazily loaded, shared offer collection
///
/// The first `get` loads the dataset; concurrent callers wait on the same
/// load and every later caller receives the cached snapshot until
/// `reset` is called. Failed loads are not cached.
pub struct OfferCache {
    source: DataSource,
    http: reqwest::Client,
    slot: Mutex<Option<Arc<OfferSnapshot>>>,
}

impl OfferCache {
    pub fn new(source: DataSource) -> Self {
        Self::with_client(source, reqwest::Client::new())
    }

    pub fn with_client(source: DataSource, http: reqwest::Client) -> Self {
        Self {
            source,
            http,
            slot: Mutex::new(None),
        }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub async fn get(&self) -> Result<Arc<OfferSnapshot>, LoadError> {
        let mut slot = self.slot.lock().await;
        if let Some(snapshot) = slot.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let bytes = self.source.fetch(&self.http).await?;
        let snapshot = Arc::new(OfferSnapshot::from_bytes(&bytes)?);
        tracing::info!(
            source = %self.source,
            offers = snapshot.len(),
            fingerprint = %snapshot.fingerprint,
            "loaded offer dataset"
        );

        *slot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drop the cached snapshot so the next `get` reloads
    pub async fn reset(&self) {
        if self.slot.lock().await.take().is_some() {
            tracing::debug!(source = %self.source, "offer cache invalidated");
        }
    }

    pub async fn is_loaded(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}
