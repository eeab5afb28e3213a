//! Posts actions.
//!
//! This module defines all possible inputs to the posts reducer. Actions
//! come in two kinds:
//!
//! - **Intents**: what the UI asks for (`Fetch`, `Create`, ...)
//! - **Completions**: how the resulting asynchronous operation settled
//!   (`FetchSucceeded`, `FetchFailed`, ...)
//!
//! The pending/fulfilled/rejected phases of each operation are explicit
//! variants: the intent is the pending phase, the completions are the
//! fulfilled and rejected phases.

use crate::state::PostDetail;
use quill_api::{Post, PostDraft, PostId, PostPatch};

/// Posts action.
///
/// Actions are the **only** way to communicate with the posts slice.
/// The reducer is a pure function: `(State, Action, Env) → (State, Effects)`.
///
/// Rejected completions carry the normalized failure message; the same
/// message is forwarded to the process-wide error channel by the
/// environment. State itself stores no error payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PostsAction {
    // ═══════════════════════════════════════════════════════════════════════
    // Intents
    // ═══════════════════════════════════════════════════════════════════════
    /// Fetch a page of the collection.
    ///
    /// `None` means "the page currently in state".
    Fetch {
        /// Page to fetch, defaulting to the current one.
        page: Option<u32>,
    },

    /// Create a new post.
    ///
    /// Not idempotent: sending this twice creates two posts.
    Create {
        /// Full payload for the new post.
        draft: PostDraft,
    },

    /// Apply a partial update to an existing post.
    Update {
        /// Post to update.
        id: PostId,
        /// Fields to change.
        patch: PostPatch,
    },

    /// Fetch a single post for display.
    Get {
        /// Post to fetch.
        id: PostId,
    },

    /// Delete a post.
    Delete {
        /// Post to delete.
        id: PostId,
    },

    /// Restore the initial state. Synchronous; produces no effect.
    Reset,

    // ═══════════════════════════════════════════════════════════════════════
    // Completions
    // ═══════════════════════════════════════════════════════════════════════
    /// A list fetch settled successfully.
    FetchSucceeded {
        /// Posts in server response order.
        results: Vec<Post>,
        /// Page the response covers.
        page: u32,
        /// Total pages the server reported.
        total_pages: u32,
    },

    /// A list fetch settled with a failure.
    FetchFailed {
        /// Normalized failure message.
        message: String,
    },

    /// A create settled successfully.
    CreateSucceeded,

    /// A create settled with a failure.
    CreateFailed {
        /// Normalized failure message.
        message: String,
    },

    /// An update settled successfully.
    UpdateSucceeded,

    /// An update settled with a failure.
    UpdateFailed {
        /// Normalized failure message.
        message: String,
    },

    /// A single-post fetch settled successfully, content decoded.
    GetSucceeded {
        /// The materialized post.
        post: PostDetail,
    },

    /// A single-post fetch settled with a failure (including a content
    /// decode failure).
    GetFailed {
        /// Normalized failure message.
        message: String,
    },

    /// A delete settled successfully.
    DeleteSucceeded {
        /// Identifier of the deleted post.
        id: PostId,
    },

    /// A delete settled with a failure.
    DeleteFailed {
        /// Normalized failure message.
        message: String,
    },
}

impl PostsAction {
    /// True for completion variants (the fulfilled/rejected phases)
    #[must_use]
    pub const fn is_completion(&self) -> bool {
        !matches!(
            self,
            Self::Fetch { .. }
                | Self::Create { .. }
                | Self::Update { .. }
                | Self::Get { .. }
                | Self::Delete { .. }
                | Self::Reset
        )
    }

    /// The failure message of a rejected completion, if this is one
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::FetchFailed { message }
            | Self::CreateFailed { message }
            | Self::UpdateFailed { message }
            | Self::GetFailed { message }
            | Self::DeleteFailed { message } => Some(message),
            _ => None,
        }
    }
}
