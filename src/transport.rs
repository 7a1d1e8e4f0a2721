use std::fmt;
use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Method, StatusCode};
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

use crate::error::ApiResult;

/// Boxed async byte source used for streamed uploads
pub type ByteSource = Pin<Box<dyn AsyncRead + Send>>;

/// One file part of a `multipart/form-data` upload
pub struct MultipartFile {
    /// Form field name, always `attachment` for the Filerobot API
    pub field: String,
    /// File name reported to the server
    pub file_name: String,
    pub content: FileContent,
}

/// Content of a multipart file part
pub enum FileContent {
    /// Fully buffered in memory
    Buffered(Bytes),
    /// Read incrementally, so large files never have to be resident in memory
    Streamed(ByteSource),
}

impl MultipartFile {
    pub fn buffered(
        field: impl Into<String>,
        file_name: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content: FileContent::Buffered(bytes.into()),
        }
    }

    pub fn streamed(
        field: impl Into<String>,
        file_name: impl Into<String>,
        reader: impl AsyncRead + Send + 'static,
    ) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content: FileContent::Streamed(Box::pin(reader)),
        }
    }
}

impl fmt::Debug for MultipartFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content = match &self.content {
            FileContent::Buffered(bytes) => format!("buffered({} bytes)", bytes.len()),
            FileContent::Streamed(_) => "streamed".to_string(),
        };
        f.debug_struct("MultipartFile")
            .field("field", &self.field)
            .field("file_name", &self.file_name)
            .field("content", &content)
            .finish()
    }
}

/// Body of an outgoing request
#[derive(Debug)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartFile),
}

/// A fully assembled request handed to the transport
#[derive(Debug)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

/// Response as seen by the transport, before any status or JSON handling
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// A single HTTP request/response exchange.
///
/// The concrete HTTP implementation is injected through this trait so it can
/// be swapped out, and so tests can capture outgoing requests. Implementations
/// must not retry; deadline and cancellation behavior is whatever the
/// underlying HTTP stack provides.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> ApiResult<TransportResponse>;
}

/// Production transport backed by [`reqwest::Client`]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured reqwest client, e.g. with a custom timeout
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> ApiResult<TransportResponse> {
        tracing::debug!(
            target: "filerobot::transport",
            method = %request.method,
            url = %request.url,
            "sending request"
        );

        let mut builder = self.http.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(file) => {
                let body = match file.content {
                    FileContent::Buffered(bytes) => reqwest::Body::from(bytes),
                    FileContent::Streamed(reader) => {
                        reqwest::Body::wrap_stream(ReaderStream::new(reader))
                    }
                };
                let part = reqwest::multipart::Part::stream(body).file_name(file.file_name);
                let form = reqwest::multipart::Form::new().part(file.field, part);
                builder.multipart(form)
            }
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(TransportResponse { status, body })
    }
}
