//! Content deserializer boundary.
//!
//! Post content is stored as an opaque serialized payload and only decoded
//! when a single post is fetched for display. The codec is a pure function
//! boundary so the storage format can change without touching the slice.

use serde_json::Value;

/// Decodes a stored content payload into its display-ready structure
///
/// Implementations must be pure: same input, same output, no I/O.
/// A decode failure rejects the surrounding get operation.
pub trait ContentCodec: Send + Sync {
    /// Decode a raw stored payload
    ///
    /// # Errors
    ///
    /// Returns the failure message when the payload cannot be decoded.
    fn decode(&self, raw: &str) -> Result<Value, String>;
}

/// Codec for content stored as a JSON document
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonContentCodec;

impl ContentCodec for JsonContentCodec {
    fn decode(&self, raw: &str) -> Result<Value, String> {
        serde_json::from_str(raw).map_err(|e| format!("content decode failed: {e}"))
    }
}
