use std::path::Path;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::Bytes;
use reqwest::Method;
use serde_json::{json, Value};

use crate::client::{Client, RawResponse};
use crate::error::ApiResult;
use crate::models::files::ListFilesParams;
use crate::transport::{ByteSource, FileContent, MultipartFile, RequestBody};

/// Form field name the remote API expects for uploaded files
pub const ATTACHMENT_FIELD: &str = "attachment";

/// File API methods
#[async_trait]
pub trait FilesApi {
    /// List files, optionally filtered by folder, search query, mime or format
    async fn list_files(&self, params: &ListFilesParams) -> ApiResult<Value>;

    /// Get a single file descriptor
    async fn get_file(&self, file_id: &str) -> ApiResult<Value>;

    /// Rename a file
    async fn rename_file(&self, file_id: &str, new_name: &str) -> ApiResult<Value>;

    /// Move a file into another folder
    async fn move_file(&self, file_id: &str, folder_id: &str) -> ApiResult<Value>;

    /// Delete a file
    async fn delete_file(&self, file_id: &str) -> ApiResult<Value>;

    /// Upload a local file as a fully buffered multipart request
    async fn upload_file_multipart(
        &self,
        folder: &str,
        path: &Path,
        file_name: &str,
    ) -> ApiResult<Value>;

    /// Upload from an async byte source without buffering it in memory.
    /// The source is consumed and dropped on every exit path, including
    /// transport failure.
    async fn stream_upload_file(
        &self,
        folder: &str,
        reader: ByteSource,
        file_name: &str,
    ) -> ApiResult<Value>;

    /// Replace a file's metadata. `meta_json` must be a JSON document; it is
    /// parsed locally and a parse failure fails the call before any request
    /// is sent.
    async fn update_file_metadata(&self, file_id: &str, meta_json: &str) -> ApiResult<Value>;

    /// Ask the server to fetch files from remote URLs. `files_urls_json` must
    /// be a JSON document (typically an array of URLs).
    async fn upload_file_remote(&self, folder: &str, files_urls_json: &str) -> ApiResult<Value>;

    /// Upload base64-encoded content; the server decodes it
    async fn upload_file_binary(&self, name: &str, base64_data: &str) -> ApiResult<Value>;
}

#[async_trait]
impl FilesApi for Client {
    async fn list_files(&self, params: &ListFilesParams) -> ApiResult<Value> {
        let url = format!("{}?{}", self.config().files_url(), params.to_query());
        self.request_json(Method::GET, url, None).await
    }

    async fn get_file(&self, file_id: &str) -> ApiResult<Value> {
        self.request_json(Method::GET, self.file_url(file_id), None)
            .await
    }

    async fn rename_file(&self, file_id: &str, new_name: &str) -> ApiResult<Value> {
        self.request_json(
            Method::PATCH,
            self.file_url(file_id),
            Some(json!({ "name": new_name })),
        )
        .await
    }

    async fn move_file(&self, file_id: &str, folder_id: &str) -> ApiResult<Value> {
        let url = format!(
            "{}/{}/folders/{}",
            self.config().files_url(),
            urlencoding::encode(file_id),
            urlencoding::encode(folder_id)
        );
        self.request_json(Method::PUT, url, None).await
    }

    async fn delete_file(&self, file_id: &str) -> ApiResult<Value> {
        self.request_json(Method::DELETE, self.file_url(file_id), None)
            .await
    }

    async fn upload_file_multipart(
        &self,
        folder: &str,
        path: &Path,
        file_name: &str,
    ) -> ApiResult<Value> {
        self.upload_file_multipart_raw(folder, path, file_name)
            .await?
            .into_value()
    }

    async fn stream_upload_file(
        &self,
        folder: &str,
        reader: ByteSource,
        file_name: &str,
    ) -> ApiResult<Value> {
        self.stream_upload_file_raw(folder, reader, file_name)
            .await?
            .into_value()
    }

    async fn update_file_metadata(&self, file_id: &str, meta_json: &str) -> ApiResult<Value> {
        self.update_file_metadata_raw(file_id, meta_json)
            .await?
            .into_value()
    }

    async fn upload_file_remote(&self, folder: &str, files_urls_json: &str) -> ApiResult<Value> {
        self.upload_file_remote_raw(folder, files_urls_json)
            .await?
            .into_value()
    }

    async fn upload_file_binary(&self, name: &str, base64_data: &str) -> ApiResult<Value> {
        self.upload_file_binary_raw(name, base64_data)
            .await?
            .into_value()
    }
}

/// Raw-response variants of the upload-style calls, for callers that need the
/// undecoded payload, plus local-file conveniences.
impl Client {
    pub async fn upload_file_multipart_raw(
        &self,
        folder: &str,
        path: impl AsRef<Path> + Send,
        file_name: &str,
    ) -> ApiResult<RawResponse> {
        let bytes = tokio::fs::read(path).await?;
        let file = MultipartFile::buffered(ATTACHMENT_FIELD, file_name, Bytes::from(bytes));
        self.request_multipart(self.upload_url(folder), file).await
    }

    pub async fn stream_upload_file_raw(
        &self,
        folder: &str,
        reader: ByteSource,
        file_name: &str,
    ) -> ApiResult<RawResponse> {
        let file = MultipartFile {
            field: ATTACHMENT_FIELD.to_string(),
            file_name: file_name.to_string(),
            content: FileContent::Streamed(reader),
        };
        self.request_multipart(self.upload_url(folder), file).await
    }

    /// Open a local file and stream it, without reading it into memory first
    pub async fn stream_upload_path(
        &self,
        folder: &str,
        path: impl AsRef<Path> + Send,
        file_name: &str,
    ) -> ApiResult<Value> {
        let file = tokio::fs::File::open(path).await?;
        self.stream_upload_file(folder, Box::pin(file), file_name)
            .await
    }

    pub async fn update_file_metadata_raw(
        &self,
        file_id: &str,
        meta_json: &str,
    ) -> ApiResult<RawResponse> {
        let meta: Value = serde_json::from_str(meta_json)?;
        let url = format!(
            "{}/{}/meta",
            self.config().file_meta_url(),
            urlencoding::encode(file_id)
        );
        self.execute(Method::PUT, url, RequestBody::Json(json!({ "meta": meta })))
            .await
    }

    pub async fn upload_file_remote_raw(
        &self,
        folder: &str,
        files_urls_json: &str,
    ) -> ApiResult<RawResponse> {
        let files_urls: Value = serde_json::from_str(files_urls_json)?;
        self.execute(
            Method::POST,
            self.upload_url(folder),
            RequestBody::Json(json!({ "files_urls": files_urls })),
        )
        .await
    }

    pub async fn upload_file_binary_raw(
        &self,
        name: &str,
        base64_data: &str,
    ) -> ApiResult<RawResponse> {
        let body = json!({
            "name": name,
            "data": base64_data,
            "postactions": "decode_base64",
        });
        self.execute(
            Method::POST,
            self.config().files_url().to_string(),
            RequestBody::Json(body),
        )
        .await
    }

    /// Base64-encode local bytes and upload them via [`FilesApi::upload_file_binary`]
    pub async fn upload_file_binary_bytes(&self, name: &str, data: &[u8]) -> ApiResult<Value> {
        let encoded = BASE64.encode(data);
        self.upload_file_binary(name, &encoded).await
    }

    fn file_url(&self, file_id: &str) -> String {
        format!(
            "{}/{}",
            self.config().files_url(),
            urlencoding::encode(file_id)
        )
    }

    fn upload_url(&self, folder: &str) -> String {
        format!(
            "{}?folder={}",
            self.config().files_url(),
            urlencoding::encode(folder)
        )
    }
}
