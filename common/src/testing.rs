//! Canned transport for tests. Records every request it is handed and
//! answers each one with the same status and body.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, Response, Url};

use crate::transport::Transport;

#[derive(Clone, Debug)]
pub struct SentRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl SentRequest {
    /// Query string pairs in the order they were sent
    pub fn query(&self) -> Vec<(String, String)> {
        self.url.query_pairs().into_owned().collect()
    }

    /// Form body pairs in the order they were sent
    pub fn form(&self) -> Vec<(String, String)> {
        self.body
            .as_deref()
            .map(|b| url::form_urlencoded::parse(b).into_owned().collect())
            .unwrap_or_default()
    }
}

pub struct FakeTransport {
    status: u16,
    body: String,
    sent: Mutex<Vec<SentRequest>>,
}

impl FakeTransport {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> SentRequest {
        self.sent().pop().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: Request) -> reqwest::Result<Response> {
        let sent = SentRequest {
            method: request.method().clone(),
            url: request.url().clone(),
            headers: request.headers().clone(),
            body: request
                .body()
                .and_then(|b| b.as_bytes())
                .map(|b| b.to_vec()),
        };
        self.sent.lock().unwrap().push(sent);

        let response = http::Response::builder()
            .status(self.status)
            .body(self.body.clone())
            .expect("valid canned response");
        Ok(Response::from(response))
    }
}
