//! # Filerobot API Client
//!
//! A Rust client for the Filerobot document management REST API: file and
//! folder CRUD, search, metadata updates, and multipart/streamed/remote/base64
//! uploads.
//!
//! ## Features
//!
//! - One typed method per remote endpoint, grouped into [`FilesApi`] and
//!   [`FoldersApi`]
//! - Injected [`HttpTransport`] so the HTTP implementation is swappable and
//!   mockable in tests
//! - Streamed multipart uploads that never buffer the whole file in memory
//! - Distinguishable transport, status, and decode errors; no hidden retries
//!
//! ## Example
//!
//! ```no_run
//! use filerobot_api::{Client, ClientConfig, FilesApi, FoldersApi};
//! use filerobot_api::models::files::ListFilesParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientConfig::new("your-api-key"));
//!
//!     // Search for PNG files
//!     let params = ListFilesParams::default().with_query("logo").with_format("png");
//!     let listing = client.list_files(&params).await?;
//!     println!("{listing:#}");
//!
//!     // Organize them
//!     let folder = client.create_folder("Logos").await?;
//!     if let Some(folder_id) = folder["folder"]["uuid"].as_str() {
//!         client.move_file("file-uuid", folder_id).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use api::{FilesApi, FoldersApi, ATTACHMENT_FIELD};
pub use client::{Client, ClientConfig, RawResponse, API_KEY_HEADER};
pub use error::{ApiError, ApiResult};
pub use transport::{ByteSource, HttpTransport, ReqwestTransport};
