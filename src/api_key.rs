use std::fmt;

/// An API key extracted from a request, redacted in all formatted output.
///
/// `ApiKey` is what [`extract_api_key`](crate::extract_api_key) hands back so
/// that a credential pulled off the wire cannot end up in a log line or an
/// error message by accident. The raw value is only reachable through
/// [`expose_secret`](Self::expose_secret) or [`into_inner`](Self::into_inner).
///
/// # Examples
///
/// ```
/// use api_key_auth::{extract_api_key, Headers};
///
/// let mut headers = Headers::new();
/// headers.append("Authorization", "ApiKey sk-1234567890");
///
/// let key = extract_api_key(&headers).unwrap();
///
/// assert_eq!(format!("{:?}", key), "[REDACTED]");
/// assert_eq!(format!("{}", key), "[REDACTED]");
/// assert_eq!(key.expose_secret(), "sk-1234567890");
/// ```
// Do NOT derive Clone, PartialEq or Default. Copies and comparisons go
// through expose_secret().
pub struct ApiKey {
    inner: String,
}

impl ApiKey {
    pub(crate) fn new(value: String) -> Self {
        Self { inner: value }
    }

    /// Returns the raw key.
    ///
    /// The name is intentionally loud: whatever is done with the returned
    /// value must not log or display it.
    pub fn expose_secret(&self) -> &str {
        &self.inner
    }

    /// Consumes the wrapper and returns the raw key.
    pub fn into_inner(self) -> String {
        self.inner
    }

    /// Returns `true` if the header carried an empty key.
    ///
    /// An empty key is not an extraction error (e.g. `"ApiKey  k"` yields
    /// one), so callers that require a key should check this.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// No Deref, AsRef or Borrow: access is through expose_secret() only.

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_redacts_debug() {
        let key = ApiKey::new("hunter2".to_string());
        let debug_output = format!("{:?}", key);

        assert_eq!(debug_output, "[REDACTED]");
        assert!(!debug_output.contains("hunter2"));
        assert!(!debug_output.contains("ApiKey")); // No type leak
    }

    #[test]
    fn api_key_redacts_display() {
        let key = ApiKey::new("sk-1234567890".to_string());
        let display_output = key.to_string();

        assert_eq!(display_output, "[REDACTED]");
        assert!(!display_output.contains("sk-"));
    }

    #[test]
    fn api_key_redacts_inside_containers() {
        let key = Some(ApiKey::new("nested-secret".to_string()));
        let output = format!("{:?}", key);

        assert_eq!(output, "Some([REDACTED])");
    }

    #[test]
    fn api_key_exposes_when_explicit() {
        let key = ApiKey::new("validkey123".to_string());
        assert_eq!(key.expose_secret(), "validkey123");
        assert!(!key.is_empty());
        assert_eq!(key.into_inner(), "validkey123");
    }

    #[test]
    fn empty_api_key_is_reported() {
        let key = ApiKey::new(String::new());
        assert!(key.is_empty());
        assert_eq!(format!("{:?}", key), "[REDACTED]");
    }
}
