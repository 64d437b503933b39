//! `data:` URL encoding for inline image previews

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// MIME type used when the browser reports none, as `FileReader` does.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Encode `bytes` as a base64 `data:` URL with the given MIME type.
pub fn encode(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() {
        FALLBACK_MIME_TYPE
    } else {
        mime_type
    };
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}
