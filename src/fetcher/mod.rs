pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// Phrase the server returns in an HTML body (sometimes with HTTP 200)
/// when the requested feed or file does not exist.
pub const NOT_FOUND_SENTINEL: &str = "the file you requested was not found";

#[async_trait]
pub trait Fetcher {
    /// GET a URL and return the full response body.
    ///
    /// Fails with [`MagsyncError::NotFound`](crate::app::MagsyncError) when
    /// the body carries the server's not-found page instead of the
    /// resource, even on a success status.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// True when a body is the server's not-found page. Binary bodies are
/// never matched; only the leading chunk is inspected so large media
/// downloads are not scanned end to end.
pub fn body_is_not_found(body: &[u8]) -> bool {
    let head = &body[..body.len().min(4096)];
    match std::str::from_utf8(head) {
        Ok(text) => text.to_ascii_lowercase().contains(NOT_FOUND_SENTINEL),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_detected_case_insensitively() {
        let body = b"<html>Sorry, The File You Requested Was Not Found.</html>";
        assert!(body_is_not_found(body));
    }

    #[test]
    fn ordinary_xml_is_not_matched() {
        assert!(!body_is_not_found(b"<?xml version=\"1.0\"?><rss/>"));
    }

    #[test]
    fn binary_bodies_never_match() {
        let mut body = vec![0xffu8, 0xfe, 0x00];
        body.extend_from_slice(NOT_FOUND_SENTINEL.as_bytes());
        assert!(!body_is_not_found(&body));
    }
}
