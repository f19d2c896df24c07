// Client identifier used to key the rate limiter: the first x-forwarded-for
// hop, trimmed. Any client can set that header, so behind a proxy that
// appends rather than overwrites it the identifier is spoofable.

use axum::http::HeaderMap;

pub const FORWARDED_FOR: &str = "x-forwarded-for";
pub const UNKNOWN_CLIENT: &str = "unknown";

pub fn client_identifier(headers: &HeaderMap) -> String {
    let Some(value) = headers.get(FORWARDED_FOR) else {
        return UNKNOWN_CLIENT.to_string();
    };

    // header bytes read as Latin-1, so non-ASCII and tabs survive
    let decoded: String = value.as_bytes().iter().copied().map(char::from).collect();

    decoded
        .split(',')
        .next()
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .unwrap_or(UNKNOWN_CLIENT)
        .to_string()
}
