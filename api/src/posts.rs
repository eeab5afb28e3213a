//! Posts REST endpoints
//!
//! Consumes the exact REST surface of the posts service:
//!
//! - `GET /posts?page={n}` → `{ results, page, totalPages }`
//! - `POST /posts` → created post
//! - `PATCH /posts/{id}` → updated post
//! - `GET /posts/{id}` → `{ post }` (content still serialized)
//! - `DELETE /posts/{id}` → empty body
//!
//! Reads go through the public channel, mutations through the private one.

use crate::client::Channel;
use crate::error::ApiError;
use crate::types::{Post, PostDraft, PostEnvelope, PostId, PostPage, PostPatch};

/// Client for the posts endpoint group
///
/// Obtained from [`crate::ApiClient::posts`].
#[derive(Clone)]
pub struct PostsClient {
    public: Channel,
    private: Channel,
}

impl PostsClient {
    pub(crate) fn new(public: Channel, private: Channel) -> Self {
        Self { public, private }
    }

    /// Fetch one page of the posts collection
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with the normalized failure message.
    pub async fn list(&self, page: u32) -> Result<PostPage, ApiError> {
        self.public.get("posts", &[("page", page.to_string())]).await
    }

    /// Create a post; the server assigns the id
    ///
    /// Not idempotent: a second call creates a second post.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with the normalized failure message.
    pub async fn create(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        self.private.post("posts", draft).await
    }

    /// Apply a partial update to an existing post
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with the normalized failure message.
    pub async fn update(&self, id: &PostId, patch: &PostPatch) -> Result<Post, ApiError> {
        self.private.patch(&format!("posts/{id}"), patch).await
    }

    /// Fetch a single post, content still serialized
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with the normalized failure message.
    pub async fn get(&self, id: &PostId) -> Result<Post, ApiError> {
        let envelope: PostEnvelope = self.public.get(&format!("posts/{id}"), &[]).await?;
        Ok(envelope.post)
    }

    /// Delete a post
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with the normalized failure message.
    pub async fn delete(&self, id: &PostId) -> Result<(), ApiError> {
        self.private.delete(&format!("posts/{id}")).await
    }
}
