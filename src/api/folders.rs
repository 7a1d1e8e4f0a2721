use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};

use crate::client::Client;
use crate::error::ApiResult;
use crate::models::folders::ListFoldersParams;

/// Folder API methods
#[async_trait]
pub trait FoldersApi {
    /// List folders, optionally filtered by parent folder or search query
    async fn list_folders(&self, params: &ListFoldersParams) -> ApiResult<Value>;

    /// Get a single folder descriptor
    async fn get_folder(&self, folder_id: &str) -> ApiResult<Value>;

    /// Rename a folder
    async fn rename_folder(&self, folder_id: &str, new_name: &str) -> ApiResult<Value>;

    /// Move a folder into another folder
    async fn move_folder(&self, folder_id: &str, destination_folder_id: &str) -> ApiResult<Value>;

    /// Delete a folder
    async fn delete_folder(&self, folder_id: &str) -> ApiResult<Value>;

    /// Create a folder
    async fn create_folder(&self, name: &str) -> ApiResult<Value>;
}

#[async_trait]
impl FoldersApi for Client {
    async fn list_folders(&self, params: &ListFoldersParams) -> ApiResult<Value> {
        let url = format!("{}?{}", self.config().folders_url(), params.to_query());
        self.request_json(Method::GET, url, None).await
    }

    async fn get_folder(&self, folder_id: &str) -> ApiResult<Value> {
        self.request_json(Method::GET, self.folder_url(folder_id), None)
            .await
    }

    async fn rename_folder(&self, folder_id: &str, new_name: &str) -> ApiResult<Value> {
        self.request_json(
            Method::PATCH,
            self.folder_url(folder_id),
            Some(json!({ "name": new_name })),
        )
        .await
    }

    async fn move_folder(&self, folder_id: &str, destination_folder_id: &str) -> ApiResult<Value> {
        let url = format!(
            "{}/{}/folders/{}",
            self.config().folders_url(),
            urlencoding::encode(folder_id),
            urlencoding::encode(destination_folder_id)
        );
        self.request_json(Method::PUT, url, None).await
    }

    async fn delete_folder(&self, folder_id: &str) -> ApiResult<Value> {
        self.request_json(Method::DELETE, self.folder_url(folder_id), None)
            .await
    }

    async fn create_folder(&self, name: &str) -> ApiResult<Value> {
        self.request_json(
            Method::POST,
            self.config().folders_url().to_string(),
            Some(json!({ "name": name })),
        )
        .await
    }
}

impl Client {
    fn folder_url(&self, folder_id: &str) -> String {
        format!(
            "{}/{}",
            self.config().folders_url(),
            urlencoding::encode(folder_id)
        )
    }
}
