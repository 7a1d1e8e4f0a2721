mod files;
mod folders;

pub use files::{FilesApi, ATTACHMENT_FIELD};
pub use folders::FoldersApi;
