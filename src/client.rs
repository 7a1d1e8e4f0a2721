use std::sync::Arc;

use bytes::Bytes;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::transport::{
    HttpTransport, MultipartFile, ReqwestTransport, RequestBody, TransportRequest,
};

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "X-Filerobot-Key";

const DEFAULT_FILES_URL: &str = "https://api.filerobot.com/fdocs/v4/files";
const DEFAULT_FILE_META_URL: &str = "https://api.filerobot.com/fdocs/v4/file";
const DEFAULT_FOLDERS_URL: &str = "https://api.filerobot.com/fdocs/v4/folders";

/// Client configuration, immutable once the client is constructed
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_key: String,
    files_url: String,
    file_meta_url: String,
    folders_url: String,
}

impl ClientConfig {
    /// Configuration with the production endpoint URLs
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            files_url: DEFAULT_FILES_URL.to_string(),
            file_meta_url: DEFAULT_FILE_META_URL.to_string(),
            folders_url: DEFAULT_FOLDERS_URL.to_string(),
        }
    }

    /// Point all three endpoints at a different API root, keeping the
    /// standard `files`/`file`/`folders` suffixes. Useful for test servers.
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        let base = trim_slashes(base.into());
        self.files_url = format!("{}/files", base);
        self.file_meta_url = format!("{}/file", base);
        self.folders_url = format!("{}/folders", base);
        self
    }

    pub fn with_files_url(mut self, url: impl Into<String>) -> Self {
        self.files_url = trim_slashes(url.into());
        self
    }

    pub fn with_file_meta_url(mut self, url: impl Into<String>) -> Self {
        self.file_meta_url = trim_slashes(url.into());
        self
    }

    pub fn with_folders_url(mut self, url: impl Into<String>) -> Self {
        self.folders_url = trim_slashes(url.into());
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn files_url(&self) -> &str {
        &self.files_url
    }

    pub fn file_meta_url(&self) -> &str {
        &self.file_meta_url
    }

    pub fn folders_url(&self) -> &str {
        &self.folders_url
    }
}

fn trim_slashes(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// A successful (2xx) response with its undecoded payload.
///
/// Returned by the `*_raw` upload variants; [`json`](RawResponse::json) and
/// [`into_value`](RawResponse::into_value) decode on demand.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    body: Bytes,
}

impl RawResponse {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_slice(&self.body).map_err(ApiError::from)
    }

    pub fn into_value(self) -> ApiResult<Value> {
        self.json()
    }
}

/// Filerobot API client.
///
/// Stateless apart from its immutable configuration; cloning is cheap and the
/// client can be shared across tasks. Every method issues exactly one HTTP
/// request through the injected [`HttpTransport`].
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl Client {
    /// Client over the default reqwest transport
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }

    /// Client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: impl HttpTransport + 'static) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn headers(&self, json_content: bool) -> Vec<(String, String)> {
        let mut headers = vec![(API_KEY_HEADER.to_string(), self.config.api_key.clone())];
        if json_content {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        headers
    }

    /// Perform one exchange and enforce a 2xx status
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: String,
        body: RequestBody,
    ) -> ApiResult<RawResponse> {
        // Multipart requests leave Content-Type to the HTTP layer so the
        // form boundary ends up in the header.
        let json_content = !matches!(body, RequestBody::Multipart(_));

        tracing::debug!(target: "filerobot::client", method = %method, url = %url, "api call");

        let request = TransportRequest {
            method,
            url: url.clone(),
            headers: self.headers(json_content),
            body,
        };

        let response = self.transport.send(request).await?;
        if !response.status.is_success() {
            tracing::warn!(
                target: "filerobot::client",
                status = response.status.as_u16(),
                url = %url,
                "api call failed"
            );
            return Err(ApiError::Status {
                status: response.status.as_u16(),
                body: response.body,
            });
        }

        Ok(RawResponse {
            status: response.status,
            body: response.body,
        })
    }

    pub(crate) async fn request_json(
        &self,
        method: Method,
        url: String,
        body: Option<Value>,
    ) -> ApiResult<Value> {
        let body = body.map(RequestBody::Json).unwrap_or(RequestBody::Empty);
        self.execute(method, url, body).await?.into_value()
    }

    pub(crate) async fn request_multipart(
        &self,
        url: String,
        file: MultipartFile,
    ) -> ApiResult<RawResponse> {
        self.execute(Method::POST, url, RequestBody::Multipart(file))
            .await
    }
}
