//! Extraction of API keys from HTTP `Authorization` headers.
//!
//! This crate parses the custom `ApiKey <token>` authorization scheme. Given
//! the headers of an incoming request it produces either the key string or
//! one of two classified errors:
//!
//! - [`AuthError::NoAuthHeader`]: no `Authorization` header was sent
//! - [`AuthError::MalformedHeader`]: the header is not `ApiKey <token>`
//!
//! Validating the key against a store, and mapping errors to HTTP responses,
//! is left to the caller.
//!
//! # Core Types
//!
//! - [`get_api_key`]: Extracts the key as a `String`
//! - [`extract_api_key`]: Extracts the key as a redacting [`ApiKey`]
//! - [`ApiKeyExtractor`]: Extractor with a configurable header and scheme
//! - [`HeaderCollection`]: Read-only header lookup, implemented for
//!   [`http::HeaderMap`] and [`Headers`]
//!
//! # Examples
//!
//! ```
//! use api_key_auth::{get_api_key, AuthError, Headers};
//!
//! let mut headers = Headers::new();
//! headers.append("Authorization", "ApiKey validkey123");
//! assert_eq!(get_api_key(&headers).unwrap(), "validkey123");
//!
//! let mut headers = Headers::new();
//! headers.append("Authorization", "Bearer someapikey");
//! assert_eq!(get_api_key(&headers), Err(AuthError::MalformedHeader));
//! ```
//!
//! # Whitespace
//!
//! The value is split on every single space, and the key is the second field.
//! Runs of spaces are not collapsed, so `"ApiKey    k"` yields an empty key
//! without an error, while a value with leading spaces is malformed.
//! Existing clients depend on this exact behavior.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api_key;
mod error;
mod extract;
mod headers;

#[cfg(test)]
mod test_utils;

pub use api_key::ApiKey;
pub use error::AuthError;
pub use extract::{
    extract_api_key, get_api_key, ApiKeyExtractor, API_KEY_SCHEME, AUTHORIZATION_HEADER,
};
pub use headers::{HeaderCollection, HeaderValueRef, Headers};
