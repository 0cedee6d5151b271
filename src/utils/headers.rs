use axum::http::{header, HeaderMap, HeaderName};

/// Headers that only describe the connection they arrived on (RFC 7230 §6.1).
static HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

fn connection_tokens(headers: &HeaderMap) -> Vec<HeaderName> {
    headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|token| HeaderName::from_bytes(token.trim().as_bytes()).ok())
        .collect()
}

pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(name)
}

/// Copies every end-to-end header, keeping repeated values (e.g. `set-cookie`) in order.
pub fn end_to_end(headers: &HeaderMap) -> HeaderMap {
    let listed = connection_tokens(headers);
    let mut filtered = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers.iter() {
        if is_hop_by_hop(name) || listed.contains(name) {
            continue;
        }
        filtered.append(name.clone(), value.clone());
    }

    filtered
}
