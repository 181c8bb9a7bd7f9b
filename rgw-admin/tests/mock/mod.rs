use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{TimeZone, Utc};
use rgw_admin::{Client, Config, Context, HttpSend, StaticClock};

/// A request as it reached the transport.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: http::Method,
    pub uri: String,
    pub headers: http::HeaderMap,
    pub body: Bytes,
}

impl Recorded {
    pub fn header(&self, name: &str) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// Transport recording every request and answering with queued responses.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    requests: Arc<Mutex<Vec<Recorded>>>,
    responses: Arc<Mutex<VecDeque<http::Response<Bytes>>>>,
}

impl MockHttpSend {
    pub fn new(responses: impl IntoIterator<Item = http::Response<Bytes>>) -> Self {
        Self {
            requests: Arc::default(),
            responses: Arc::new(Mutex::new(responses.into_iter().collect())),
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(
        &self,
        req: http::Request<Bytes>,
    ) -> rgw_admin_core::Result<http::Response<Bytes>> {
        let (parts, body) = req.into_parts();
        self.requests.lock().unwrap().push(Recorded {
            method: parts.method,
            uri: parts.uri.to_string(),
            headers: parts.headers,
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| rgw_admin_core::Error::unexpected("no response queued"))
    }
}

pub fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

pub fn empty() -> http::Response<Bytes> {
    response(200, "")
}

pub fn context(http: MockHttpSend) -> Context {
    Context::new()
        .with_http_send(http)
        .with_clock(StaticClock(
            Utc.with_ymd_and_hms(2022, 8, 15, 16, 50, 12).unwrap(),
        ))
}

/// Client with the credentials used across the suite and `responses` queued.
pub fn client(config: Config, responses: Vec<http::Response<Bytes>>) -> (Client, MockHttpSend) {
    let _ = env_logger::builder().is_test(true).try_init();

    let http = MockHttpSend::new(responses);
    let client = Client::new("http://gateway", config)
        .and_then(|c| c.with_context(context(http.clone())))
        .unwrap();

    (client, http)
}

pub fn v2_client(responses: Vec<http::Response<Bytes>>) -> (Client, MockHttpSend) {
    client(Config::new("acesskey", "secretkey"), responses)
}
