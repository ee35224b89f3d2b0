//! Content-Encoding handling for product card responses.
//!
//! Only `gzip` is decoded. Every other value, including `br` and `zstd` that the
//! request advertises, passes through untouched and fails later as JSON.

use flate2::read::GzDecoder;
use std::borrow::Cow;
use std::io::{self, Read};

/// Returns true when the header value is exactly `gzip`.
pub fn is_gzip(content_encoding: Option<&str>) -> bool {
    content_encoding == Some("gzip")
}

/// Decodes a raw response body according to its `Content-Encoding`.
pub fn decode_body(content_encoding: Option<&str>, raw: &[u8]) -> io::Result<Cow<'_, [u8]>> {
    if !is_gzip(content_encoding) {
        return Ok(Cow::Borrowed(raw));
    }

    let mut decoded = Vec::with_capacity(raw.len() * 4);
    GzDecoder::new(raw).read_to_end(&mut decoded)?;
    Ok(Cow::Owned(decoded))
}
