//! Wire types for the posts API
//!
//! These structs mirror the REST surface exactly. Field names on the wire
//! are camelCase; anything the client does not understand is round-tripped
//! unchanged through a flattened map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-assigned post identifier
///
/// Opaque to the client: assigned on create, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    /// View the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A post as the server returns it
///
/// `content` stays serialized on the wire; it is only decoded when a
/// single post is fetched for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned identifier.
    pub id: PostId,

    /// Opaque serialized content payload.
    pub content: String,

    /// Any other fields, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating a post
///
/// The server assigns the id; everything else is caller-provided.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    /// Serialized content payload.
    pub content: String,

    /// Any other fields, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial payload for updating a post
///
/// Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPatch {
    /// Replacement content, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Any other fields, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of the posts collection
///
/// `GET /posts?page={n}` response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    /// Posts in server response order.
    pub results: Vec<Post>,

    /// The page this response covers.
    pub page: u32,

    /// Total number of pages the server reports.
    pub total_pages: u32,
}

/// Envelope around a single fetched post
///
/// `GET /posts/{id}` response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PostEnvelope {
    /// The post, content still serialized.
    pub post: Post,
}

/// Structured error body the server sends on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure message.
    pub message: String,
}
