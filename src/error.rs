use std::fmt;

/// Errors that can occur while extracting an API key from request headers.
///
/// The hosting server decides which HTTP status each variant maps to.
/// Compare with `==` or `matches!` rather than by message.
///
/// # Examples
///
/// ```
/// use api_key_auth::{get_api_key, AuthError, Headers};
///
/// let headers = Headers::new();
/// let err = get_api_key(&headers).unwrap_err();
///
/// assert_eq!(err, AuthError::NoAuthHeader);
/// assert!(err.is_missing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthError {
    /// The request carried no authorization header at all
    NoAuthHeader,
    /// An authorization header was present but could not be parsed
    MalformedHeader,
}

impl AuthError {
    /// Returns `true` if the header was absent.
    ///
    /// Middleware typically answers this with 401 Unauthorized.
    pub fn is_missing(&self) -> bool {
        matches!(self, AuthError::NoAuthHeader)
    }

    /// Returns `true` if the header was present but malformed.
    pub fn is_malformed(&self) -> bool {
        matches!(self, AuthError::MalformedHeader)
    }

    /// Returns the fixed human-readable message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::NoAuthHeader => "no authorization header included",
            AuthError::MalformedHeader => "malformed authorization header",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AuthError {}
