//! Read-only header lookup for request header collections.
//!
//! Extraction never depends on a particular HTTP framework. It reads headers
//! through the [`HeaderCollection`] trait, which is implemented here for
//! [`http::HeaderMap`] and for the owned [`Headers`] collection.

use http::HeaderMap;

/// A borrowed view of a single header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderValueRef<'a> {
    /// The value is valid visible text
    Text(&'a str),
    /// The value contains bytes that cannot be read as text
    Opaque,
}

impl<'a> HeaderValueRef<'a> {
    /// Returns the value as a string slice, if it is text.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            HeaderValueRef::Text(s) => Some(s),
            HeaderValueRef::Opaque => None,
        }
    }
}

/// A collection of request headers that can be queried by name.
///
/// Names are compared ASCII case-insensitively, following HTTP convention.
/// A name may carry several values; implementations return them in the order
/// they were received.
///
/// # Examples
///
/// ```
/// use api_key_auth::{HeaderCollection, HeaderValueRef};
///
/// // A framework-specific request type can plug straight into extraction.
/// struct SingleHeader {
///     name: &'static str,
///     value: String,
/// }
///
/// impl HeaderCollection for SingleHeader {
///     fn first_value(&self, name: &str) -> Option<HeaderValueRef<'_>> {
///         self.name
///             .eq_ignore_ascii_case(name)
///             .then(|| HeaderValueRef::Text(&self.value))
///     }
/// }
///
/// let req = SingleHeader { name: "Authorization", value: "ApiKey k1".to_string() };
/// assert_eq!(api_key_auth::get_api_key(&req).unwrap(), "k1");
/// ```
pub trait HeaderCollection {
    /// Returns the first value recorded for `name`, or `None` if the header
    /// is absent or has no values.
    fn first_value(&self, name: &str) -> Option<HeaderValueRef<'_>>;
}

/// Values that are not visible ASCII (e.g. obs-text bytes such as `\xe9`)
/// are reported as [`HeaderValueRef::Opaque`], which extraction rejects as
/// malformed.
impl HeaderCollection for HeaderMap {
    fn first_value(&self, name: &str) -> Option<HeaderValueRef<'_>> {
        // HeaderMap::get yields the first value and returns None for names
        // that are not valid header names.
        self.get(name).map(|value| match value.to_str() {
            Ok(s) => HeaderValueRef::Text(s),
            Err(_) => HeaderValueRef::Opaque,
        })
    }
}

impl<T: HeaderCollection + ?Sized> HeaderCollection for &T {
    fn first_value(&self, name: &str) -> Option<HeaderValueRef<'_>> {
        (**self).first_value(name)
    }
}

/// An owned, ordered, multi-valued header collection.
///
/// `Headers` is useful where no `http::HeaderMap` is at hand, e.g. when
/// headers arrive from a non-`http` framework or in tests. Names keep the
/// casing they were added with but are looked up case-insensitively.
///
/// # Examples
///
/// ```
/// use api_key_auth::Headers;
///
/// let mut headers = Headers::new();
/// headers.append("Authorization", "ApiKey first");
/// headers.append("authorization", "ApiKey second");
///
/// assert_eq!(headers.get("AUTHORIZATION"), Some("ApiKey first"));
/// assert_eq!(headers.get_all("Authorization").count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Creates an empty header collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value for `name`, keeping any existing values.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Sets `name` to a single value, replacing any existing values.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.remove(&name);
        self.entries.push((name, value.into()));
    }

    /// Removes every value for `name`, returning how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        before - self.entries.len()
    }

    /// Returns the first value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns all values for `name` in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if at least one value is present for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the total number of values across all names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection holds no values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HeaderCollection for Headers {
    fn first_value(&self, name: &str) -> Option<HeaderValueRef<'_>> {
        self.get(name).map(HeaderValueRef::Text)
    }
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.append(name, value);
        }
        headers
    }
}
