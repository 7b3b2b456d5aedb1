// Shared fixtures for unit tests
use crate::offer::Offer;
use axum::Router;
use axum::body::Bytes;
use axum::http::{Method, StatusCode, Uri, header};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[allow(clippy::too_many_arguments)]
pub fn offer(
    id: u64,
    ram: u32,
    storage: u32,
    screen_size: f64,
    price: f64,
    cpu: &str,
    gpu: &str,
    os: &str,
) -> Offer {
    Offer {
        id,
        title: format!("Offer {} - {}GB RAM - {}GB", id, ram, storage),
        brand: "HP".to_string(),
        series: "Pavilion".to_string(),
        offer_count: 1,
        product_type: "Business".to_string(),
        cpu: cpu.to_string(),
        gpu: gpu.to_string(),
        os: os.to_string(),
        ram,
        storage,
        screen_size,
        price,
        clock_speed: 2.8,
    }
}

pub fn typed_offer(id: u64, ram: u32, screen_size: f64, price: f64, product_type: &str) -> Offer {
    let mut o = offer(id, ram, 512, screen_size, price, "A", "X", "Win");
    o.product_type = product_type.to_string();
    o
}

/// HTTP client that never routes through an environment proxy
pub fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// What a test endpoint received
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub body: Bytes,
}

/// Answer every request on a random local port with `status` and `body`
///
/// Returns the base URL and a receiver resolving to the first request.
pub async fn spawn_endpoint(
    status: StatusCode,
    body: &str,
) -> (String, oneshot::Receiver<CapturedRequest>) {
    let (tx, rx) = oneshot::channel();
    let tx = Arc::new(Mutex::new(Some(tx)));
    let body = body.to_string();

    let app = Router::new().fallback(move |method: Method, uri: Uri, request_body: Bytes| {
        let tx = Arc::clone(&tx);
        let body = body.clone();
        async move {
            if let Some(tx) = tx.lock().unwrap().take() {
                let _ = tx.send(CapturedRequest {
                    method,
                    path: uri.path().to_string(),
                    body: request_body,
                });
            }
            (status, [(header::CONTENT_TYPE, "application/json")], body)
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (format!("http://{}", addr), rx)
}

/// Body of a captured request, parsed as JSON
pub fn request_json(request: &CapturedRequest) -> serde_json::Value {
    serde_json::from_slice(&request.body).unwrap()
}
