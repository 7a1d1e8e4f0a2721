#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tokio::io::AsyncReadExt;

use filerobot_api::error::{ApiError, ApiResult};
use filerobot_api::transport::{
    FileContent, HttpTransport, RequestBody, TransportRequest, TransportResponse,
};

/// A request as the client handed it to the transport, with multipart
/// content drained to bytes so tests can assert on it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: CapturedBody,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
pub enum CapturedBody {
    Empty,
    Json(Value),
    Multipart {
        field: String,
        file_name: String,
        content: Vec<u8>,
    },
}

impl CapturedBody {
    pub fn as_json(&self) -> &Value {
        match self {
            CapturedBody::Json(value) => value,
            other => panic!("expected JSON body, got {other:?}"),
        }
    }
}

enum MockReply {
    Status(StatusCode, Bytes),
    TransportError(String),
}

#[derive(Default)]
struct State {
    requests: Vec<CapturedRequest>,
    replies: VecDeque<MockReply>,
}

/// Transport that records every request and serves canned replies.
/// With no canned reply queued it answers `200 {"status":"success"}`.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_with(self, status: u16, body: &str) -> Self {
        self.inner.lock().unwrap().replies.push_back(MockReply::Status(
            StatusCode::from_u16(status).unwrap(),
            Bytes::copy_from_slice(body.as_bytes()),
        ));
        self
    }

    pub fn reply_transport_error(self, message: &str) -> Self {
        self.inner
            .lock()
            .unwrap()
            .replies
            .push_back(MockReply::TransportError(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> CapturedRequest {
        self.requests().pop().expect("no request captured")
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: TransportRequest) -> ApiResult<TransportResponse> {
        let body = match request.body {
            RequestBody::Empty => CapturedBody::Empty,
            RequestBody::Json(value) => CapturedBody::Json(value),
            RequestBody::Multipart(file) => {
                let content = match file.content {
                    FileContent::Buffered(bytes) => bytes.to_vec(),
                    FileContent::Streamed(mut reader) => {
                        let mut buf = Vec::new();
                        reader.read_to_end(&mut buf).await?;
                        buf
                    }
                };
                CapturedBody::Multipart {
                    field: file.field,
                    file_name: file.file_name,
                    content,
                }
            }
        };

        let mut state = self.inner.lock().unwrap();
        state.requests.push(CapturedRequest {
            method: request.method,
            url: request.url,
            headers: request.headers,
            body,
        });

        match state.replies.pop_front() {
            Some(MockReply::Status(status, body)) => Ok(TransportResponse { status, body }),
            Some(MockReply::TransportError(message)) => Err(ApiError::transport(
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, message),
            )),
            None => Ok(TransportResponse {
                status: StatusCode::OK,
                body: Bytes::from_static(b"{\"status\":\"success\"}"),
            }),
        }
    }
}
