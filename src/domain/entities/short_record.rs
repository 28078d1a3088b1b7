//! Short record entity representing a code → URL binding.

/// A short code bound to its destination URL.
///
/// Records are created by a successful shorten and never mutated afterwards.
/// Many codes may point at the same `url`; `code` is unique among live records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortRecord {
    pub code: String,
    pub url: String,
}

impl ShortRecord {
    /// Creates a new ShortRecord instance.
    pub fn new(code: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            url: url.into(),
        }
    }

    /// Builds the public short URL by joining `base_url` and the code.
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.code)
    }
}
