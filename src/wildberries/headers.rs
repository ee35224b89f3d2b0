//! Static request headers that make the lookup look like a top-level browser navigation.
//!
//! Values are taken from a real Firefox session on Linux and are intentionally not
//! configurable.

use wreq::header::{HeaderMap, HeaderName, HeaderValue};

/// Host of the product card API.
pub const HOST: &str = "card.wb.ru";

/// Destination (delivery region) sent with every lookup.
pub const DEST: i64 = -1257786;

/// Header name/value pairs applied to every product request, in send order.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    ("accept-encoding", "gzip, deflate, br, zstd"),
    ("user-agent", "Mozilla/5.0 (X11; Linux x86_64; rv:137.0) Gecko/20100101 Firefox/137.0"),
    ("host", HOST),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "none"),
    ("sec-fetch-user", "?1"),
    ("sec-gpc", "1"),
    ("upgrade-insecure-requests", "1"),
];

/// Builds the header map for a request, one value per name.
///
/// Applied with replace semantics, so these values win over anything the
/// browser emulation profile set for the same names.
pub fn header_map() -> HeaderMap {
    BROWSER_HEADERS
        .iter()
        .map(|&(name, value)| (HeaderName::from_static(name), HeaderValue::from_static(value)))
        .collect()
}
