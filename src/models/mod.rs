pub mod files;
pub mod folders;

/// Default sort order for listings, passed through to the server verbatim
pub const DEFAULT_ORDER: &str = "filename,asc";

/// Default page size for listings
pub const DEFAULT_LIMIT: u32 = 50;

/// Serialize query pairs in the given order, percent-encoding values.
/// Keys are kept even when their value is empty; the remote API treats an
/// empty string as "no filter".
pub(crate) fn encode_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
