use super::{encode_pairs, DEFAULT_LIMIT, DEFAULT_ORDER};

/// Parameters for listing and searching files.
///
/// All fields are always serialized, empty strings included, in the fixed
/// order `folder, q, limit, offset, order, mime, format`. The `order` string
/// is a comma-joined `field,direction` pair sent to the server verbatim; the
/// client never parses or validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilesParams {
    /// Folder UUID to list, empty for the whole library
    pub folder: String,
    /// Free-text search query
    pub query: String,
    pub limit: u32,
    pub offset: u32,
    pub order: String,
    /// Mime type filter, e.g. `image/jpeg`
    pub mime: String,
    /// Format filter, e.g. `png`
    pub format: String,
}

impl Default for ListFilesParams {
    fn default() -> Self {
        Self {
            folder: String::new(),
            query: String::new(),
            limit: DEFAULT_LIMIT,
            offset: 0,
            order: DEFAULT_ORDER.to_string(),
            mime: String::new(),
            format: String::new(),
        }
    }
}

impl ListFilesParams {
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

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = mime.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
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
            ("mime", self.mime.as_str()),
            ("format", self.format.as_str()),
        ])
    }
}
