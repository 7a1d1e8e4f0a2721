use super::{encode_pairs, DEFAULT_LIMIT, DEFAULT_ORDER};

/// Parameters for listing and searching folders.
///
/// Same shape as [`ListFilesParams`](super::files::ListFilesParams) without
/// the mime and format filters; keys are serialized in the fixed order
/// `folder, q, limit, offset, order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFoldersParams {
    /// Parent folder UUID, empty for the root
    pub folder: String,
    pub query: String,
    pub limit: u32,
    pub offset: u32,
    pub order: String,
}

impl Default for ListFoldersParams {
    fn default() -> Self {
        Self {
            folder: String::new(),
            query: String::new(),
            limit: DEFAULT_LIMIT,
            offset: 0,
            order: DEFAULT_ORDER.to_string(),
        }
    }
}

impl ListFoldersParams {
    pub fn in_folder(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = order.into();
        self
    }

    pub fn with_page(mut self, limit: u32, offset: u32) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    pub(crate) fn to_query(&self) -> String {
        let limit = self.limit.to_string();
        let offset = self.offset.to_string();
        encode_pairs(&[
            ("folder", self.folder.as_str()),
            ("q", self.query.as_str()),
            ("limit", limit.as_str()),
            ("offset", offset.as_str()),
            ("order", self.order.as_str()),
        ])
    }
}
