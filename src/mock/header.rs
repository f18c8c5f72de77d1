//! Header name normalization and `Authorization` value helpers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";

/// Canonical MIME form of a header name: the first letter and any letter
/// following a hyphen are upper case, the rest lower case.
///
/// Smocker compares header names case-sensitively, and HTTP clients put the
/// canonical form on the wire. Names containing bytes that are not valid in a
/// header token (spaces included) are returned unchanged.
pub fn canonical_header_key(key: &str) -> String {
    if !key.bytes().all(is_token_byte) {
        return key.to_string();
    }

    let mut upper = true;
    key.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

/// `Bearer <token>`
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// `Basic <base64(user:password)>` using the standard, padded alphabet.
pub fn basic_value(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{user}:{password}")))
}
