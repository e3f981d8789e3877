//! Parsing of `ApiKey <token>` authorization headers.

use crate::api_key::ApiKey;
use crate::error::AuthError;
use crate::headers::{HeaderCollection, HeaderValueRef};

/// Name of the header consulted by default.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Scheme literal expected before the key by default.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extracts API keys from a configured header using a configured scheme.
///
/// The default extractor reads `Authorization` and expects `ApiKey <token>`.
/// Extraction is pure: it never mutates the headers and holds no state, so a
/// single extractor can be shared freely across request handlers.
///
/// # Parsing rules
///
/// 1. The first value of the header is used; later duplicates are ignored.
///    An empty first value counts as no header at all.
/// 2. The value is split on every single space character (runs are not
///    collapsed, other whitespace is not a separator).
/// 3. Fewer than two fields, or a first field other than the exact scheme,
///    is [`AuthError::MalformedHeader`].
/// 4. The second field is returned verbatim. It may be empty.
///
/// # Examples
///
/// ```
/// use api_key_auth::{ApiKeyExtractor, AuthError, Headers};
///
/// let extractor = ApiKeyExtractor::new();
///
/// let mut headers = Headers::new();
/// headers.append("authorization", "ApiKey validkey123");
/// assert_eq!(extractor.extract(&headers), Ok("validkey123".to_string()));
///
/// headers.insert("Authorization", "Bearer someapikey");
/// assert_eq!(extractor.extract(&headers), Err(AuthError::MalformedHeader));
/// ```
///
/// A different header or scheme can be configured up front:
///
/// ```
/// use api_key_auth::{ApiKeyExtractor, Headers};
///
/// let extractor = ApiKeyExtractor::new()
///     .with_header("X-Service-Auth")
///     .with_scheme("Token");
///
/// let mut headers = Headers::new();
/// headers.append("x-service-auth", "Token abc");
/// assert_eq!(extractor.extract(&headers).unwrap(), "abc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiKeyExtractor {
    header: &'static str,
    scheme: &'static str,
}

impl ApiKeyExtractor {
    /// Creates an extractor for `Authorization: ApiKey <token>`.
    pub const fn new() -> Self {
        Self {
            header: AUTHORIZATION_HEADER,
            scheme: API_KEY_SCHEME,
        }
    }

    /// Reads the key from `header` instead of `Authorization`.
    pub const fn with_header(self, header: &'static str) -> Self {
        Self { header, ..self }
    }

    /// Expects `scheme` instead of `ApiKey`. The comparison is case-sensitive.
    pub const fn with_scheme(self, scheme: &'static str) -> Self {
        Self { scheme, ..self }
    }

    /// Returns the header name this extractor reads.
    pub fn header(&self) -> &'static str {
        self.header
    }

    /// Returns the scheme literal this extractor expects.
    pub fn scheme(&self) -> &'static str {
        self.scheme
    }

    /// Extracts the key from `headers`.
    ///
    /// # Errors
    ///
    /// - [`AuthError::NoAuthHeader`] if the header is absent, has no values,
    ///   or its first value is empty.
    /// - [`AuthError::MalformedHeader`] if the first value does not have the
    ///   form `<scheme> <key>` or is not readable as text.
    pub fn extract<H>(&self, headers: &H) -> Result<String, AuthError>
    where
        H: HeaderCollection + ?Sized,
    {
        let value = match headers.first_value(self.header) {
            Some(HeaderValueRef::Text("")) => {
                return Err(self.reject(AuthError::NoAuthHeader, "header empty"));
            }
            Some(HeaderValueRef::Text(value)) => value,
            Some(HeaderValueRef::Opaque) => {
                return Err(self.reject(AuthError::MalformedHeader, "non-text value"));
            }
            None => return Err(self.reject(AuthError::NoAuthHeader, "header absent")),
        };

        let key = self.parse(value)?;

        tracing::trace!(
            target: "api_key_auth",
            header = self.header,
            key_len = key.len(),
            "api key extracted"
        );

        Ok(key.to_string())
    }

    /// Extracts the key from `headers`, wrapped so it cannot be logged.
    ///
    /// # Errors
    ///
    /// Same as [`extract`](Self::extract).
    pub fn extract_key<H>(&self, headers: &H) -> Result<ApiKey, AuthError>
    where
        H: HeaderCollection + ?Sized,
    {
        self.extract(headers).map(ApiKey::new)
    }

    fn parse<'a>(&self, value: &'a str) -> Result<&'a str, AuthError> {
        let mut fields = value.split(' ');

        // split always yields at least one field
        let scheme = fields.next().unwrap_or_default();
        let Some(key) = fields.next() else {
            return Err(self.reject(AuthError::MalformedHeader, "missing key"));
        };

        if scheme != self.scheme {
            return Err(self.reject(AuthError::MalformedHeader, "unexpected scheme"));
        }

        Ok(key)
    }

    fn reject(&self, error: AuthError, reason: &'static str) -> AuthError {
        // Never record the header value itself.
        tracing::debug!(
            target: "api_key_auth",
            header = self.header,
            reason,
            error = %error,
            "authorization header rejected"
        );
        error
    }
}

impl Default for ApiKeyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the key from an `Authorization: ApiKey <token>` header.
///
/// Shorthand for [`ApiKeyExtractor::new().extract(headers)`](ApiKeyExtractor::extract).
///
/// # Errors
///
/// Returns [`AuthError::NoAuthHeader`] when the header is missing and
/// [`AuthError::MalformedHeader`] when it cannot be parsed.
///
/// # Examples
///
/// ```
/// use api_key_auth::{get_api_key, AuthError};
/// use http::{HeaderMap, HeaderValue, header::AUTHORIZATION};
///
/// let mut headers = HeaderMap::new();
/// assert_eq!(get_api_key(&headers), Err(AuthError::NoAuthHeader));
///
/// headers.insert(AUTHORIZATION, HeaderValue::from_static("ApiKey validkey123"));
/// assert_eq!(get_api_key(&headers).unwrap(), "validkey123");
/// ```
pub fn get_api_key<H>(headers: &H) -> Result<String, AuthError>
where
    H: HeaderCollection + ?Sized,
{
    ApiKeyExtractor::new().extract(headers)
}

/// Like [`get_api_key`], but returns the key as a redacting [`ApiKey`].
///
/// # Errors
///
/// Same as [`get_api_key`].
pub fn extract_api_key<H>(headers: &H) -> Result<ApiKey, AuthError>
where
    H: HeaderCollection + ?Sized,
{
    ApiKeyExtractor::new().extract_key(headers)
}
