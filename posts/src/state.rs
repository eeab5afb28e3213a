//! Posts state types.
//!
//! This module defines the client-side view of the posts collection.
//! All types are `Clone` to support the functional architecture pattern.

use quill_api::{Post, PostId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root posts state.
///
/// Created once at application start, mutated only through the reducer,
/// and alive for the session. There is deliberately no error field here:
/// rejection messages travel on the completion actions and the error
/// channel, not in state.
///
/// # Examples
///
/// ```
/// # use quill_posts::PostsState;
/// let state = PostsState::default();
/// assert!(state.items.is_empty());
/// assert_eq!((state.page, state.total_pages), (1, 1));
/// assert!(!state.is_loading);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostsState {
    /// Posts of the last successfully fetched page, in server response
    /// order. Replaced wholesale on each successful list fetch.
    pub items: Vec<Post>,

    /// True after a successful create or update. Never auto-reset;
    /// only `Reset` clears it.
    pub submitted: bool,

    /// The post last opened via get, content decoded. Either absent or
    /// fully materialized; cleared when a get fails.
    pub current_post: Option<PostDetail>,

    /// Page covered by `items`.
    pub page: u32,

    /// Total pages the server reported. `page <= total_pages` is trusted
    /// from the server, not enforced here.
    pub total_pages: u32,

    /// True while an operation is in flight. Shared across all five
    /// operations: any pending operation sets it, any settling operation
    /// clears it, so overlapping operations can race on this flag.
    pub is_loading: bool,
}

impl Default for PostsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            submitted: false,
            current_post: None,
            page: 1,
            total_pages: 1,
            is_loading: false,
        }
    }
}

/// A fully materialized post, ready for display.
///
/// Unlike the wire [`Post`], `content` here has been run through the
/// content codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    /// Server-assigned identifier.
    pub id: PostId,

    /// Decoded content structure.
    pub content: Value,

    /// Any other fields, passed through unchanged from the wire.
    pub extra: Map<String, Value>,
}

impl PostDetail {
    /// Materialize a wire post with its decoded content
    #[must_use]
    pub fn new(post: Post, content: Value) -> Self {
        Self {
            id: post.id,
            content,
            extra: post.extra,
        }
    }
}
