//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

/// A key token as it would appear after the scheme: printable ASCII, no
/// spaces, possibly empty.
pub(crate) fn arb_key_token() -> impl Strategy<Value = String> {
    prop::string::string_regex("[!-~]{0,64}").expect("valid regex")
}

/// An arbitrary header value, spaces and tabs included.
pub(crate) fn arb_header_value() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \\t!-~]{0,80}").expect("valid regex")
}
