//! Shared test helpers: a scripted mock gateway

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// One request as recorded by the mock gateway
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Canned response the mock gateway serves
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    /// JSON response with the given status
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    /// Raw text response with the given status
    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// Scripted mock gateway
///
/// Serves the queued responses in order, repeating the last one, and records
/// every request it sees. Runs on an ephemeral loopback port for the lifetime
/// of the test.
pub struct MockGateway {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockGateway {
    /// Start a gateway that serves the given responses in order
    pub async fn start(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock gateway");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));
        let responses: Arc<Mutex<VecDeque<CannedResponse>>> =
            Arc::new(Mutex::new(responses.into()));

        let requests_clone = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let requests = requests_clone.clone();
                let responses = responses.clone();

                tokio::spawn(async move {
                    let io = TokioIo::new(stream);
                    let service = service_fn(move |req: Request<Incoming>| {
                        let requests = requests.clone();
                        let responses = responses.clone();
                        async move { handle(req, requests, responses).await }
                    });
                    let _ = http1::Builder::new().serve_connection(io, service).await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// Requests recorded so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("Request log poisoned").clone()
    }
}

async fn handle(
    req: Request<Incoming>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<VecDeque<CannedResponse>>>,
) -> std::result::Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let authorization = req
        .headers()
        .get(hyper::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let body_bytes = req.into_body().collect().await?.to_bytes();
    let body = serde_json::from_slice(&body_bytes).ok();

    requests
        .lock()
        .expect("Request log poisoned")
        .push(RecordedRequest {
            method,
            path,
            authorization,
            body,
        });

    let canned = {
        let mut queue = responses.lock().expect("Response queue poisoned");
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
    .unwrap_or_else(|| CannedResponse::json(200, serde_json::json!({})));

    let response = Response::builder()
        .status(StatusCode::from_u16(canned.status).expect("Invalid canned status"))
        .header(hyper::header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(canned.body)))
        .expect("Failed to build response");

    Ok(response)
}
