//! Posts environment.
//!
//! The environment is the slice's injected collaborator set. Each method
//! describes one remote operation as an [`Effect`] whose future performs
//! the request and resolves to the matching completion action.
//!
//! The failure policy lives here: every failed operation forwards its
//! normalized message to the process-wide [`ErrorReporter`] in addition to
//! settling its rejected phase. This applies uniformly, list fetches
//! included.

use crate::actions::PostsAction;
use crate::content::ContentCodec;
use crate::state::PostDetail;
use quill_api::{ApiClient, PostDraft, PostId, PostPatch, PostsClient};
use quill_core::effect::Effect;
use quill_core::environment::ErrorReporter;
use std::sync::Arc;

/// Posts environment.
///
/// One method per remote operation; each returns the effect describing
/// that operation. Implementations decide how the request is performed
/// and are responsible for error-channel forwarding.
pub trait PostsEnvironment: Send + Sync {
    /// Fetch one page of the collection.
    fn list_posts(&self, page: u32) -> Effect<PostsAction>;

    /// Create a post from a full payload.
    fn create_post(&self, draft: PostDraft) -> Effect<PostsAction>;

    /// Apply a partial update to a post.
    fn update_post(&self, id: PostId, patch: PostPatch) -> Effect<PostsAction>;

    /// Fetch a single post and decode its content.
    fn fetch_post(&self, id: PostId) -> Effect<PostsAction>;

    /// Delete a post.
    fn delete_post(&self, id: PostId) -> Effect<PostsAction>;
}

/// Production environment backed by the HTTP client wrapper.
///
/// Owns the posts endpoint group, the content codec, and the error
/// reporter. Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct HttpPostsEnvironment {
    posts: PostsClient,
    codec: Arc<dyn ContentCodec>,
    reporter: Arc<dyn ErrorReporter>,
}

impl HttpPostsEnvironment {
    /// Create a production environment
    ///
    /// # Arguments
    ///
    /// - `client`: The configured API client
    /// - `codec`: Content decoder applied on single-post fetches
    /// - `reporter`: The process-wide error channel
    #[must_use]
    pub fn new(
        client: &ApiClient,
        codec: Arc<dyn ContentCodec>,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            posts: client.posts(),
            codec,
            reporter,
        }
    }

    /// Report a failure and build the rejected completion
    fn reject(
        reporter: &Arc<dyn ErrorReporter>,
        context: &str,
        message: String,
        build: impl FnOnce(String) -> PostsAction,
    ) -> PostsAction {
        tracing::warn!(context, %message, "Operation failed");
        reporter.report(context, &message);
        build(message)
    }
}

impl PostsEnvironment for HttpPostsEnvironment {
    fn list_posts(&self, page: u32) -> Effect<PostsAction> {
        let posts = self.posts.clone();
        let reporter = Arc::clone(&self.reporter);

        Effect::future(async move {
            match posts.list(page).await {
                Ok(fetched) => Some(PostsAction::FetchSucceeded {
                    results: fetched.results,
                    page: fetched.page,
                    total_pages: fetched.total_pages,
                }),
                Err(err) => Some(Self::reject(
                    &reporter,
                    "posts.fetch",
                    err.message(),
                    |message| PostsAction::FetchFailed { message },
                )),
            }
        })
    }

    fn create_post(&self, draft: PostDraft) -> Effect<PostsAction> {
        let posts = self.posts.clone();
        let reporter = Arc::clone(&self.reporter);

        Effect::future(async move {
            match posts.create(&draft).await {
                Ok(_) => Some(PostsAction::CreateSucceeded),
                Err(err) => Some(Self::reject(
                    &reporter,
                    "posts.create",
                    err.message(),
                    |message| PostsAction::CreateFailed { message },
                )),
            }
        })
    }

    fn update_post(&self, id: PostId, patch: PostPatch) -> Effect<PostsAction> {
        let posts = self.posts.clone();
        let reporter = Arc::clone(&self.reporter);

        Effect::future(async move {
            match posts.update(&id, &patch).await {
                Ok(_) => Some(PostsAction::UpdateSucceeded),
                Err(err) => Some(Self::reject(
                    &reporter,
                    "posts.update",
                    err.message(),
                    |message| PostsAction::UpdateFailed { message },
                )),
            }
        })
    }

    fn fetch_post(&self, id: PostId) -> Effect<PostsAction> {
        let posts = self.posts.clone();
        let codec = Arc::clone(&self.codec);
        let reporter = Arc::clone(&self.reporter);

        Effect::future(async move {
            let post = match posts.get(&id).await {
                Ok(post) => post,
                Err(err) => {
                    return Some(Self::reject(
                        &reporter,
                        "posts.get",
                        err.message(),
                        |message| PostsAction::GetFailed { message },
                    ));
                },
            };

            // A fulfilled get requires decoded content; a decode failure
            // is a rejection like any other.
            match codec.decode(&post.content) {
                Ok(content) => Some(PostsAction::GetSucceeded {
                    post: PostDetail::new(post, content),
                }),
                Err(message) => Some(Self::reject(
                    &reporter,
                    "posts.get",
                    message,
                    |message| PostsAction::GetFailed { message },
                )),
            }
        })
    }

    fn delete_post(&self, id: PostId) -> Effect<PostsAction> {
        let posts = self.posts.clone();
        let reporter = Arc::clone(&self.reporter);

        Effect::future(async move {
            match posts.delete(&id).await {
                Ok(()) => Some(PostsAction::DeleteSucceeded { id }),
                Err(err) => Some(Self::reject(
                    &reporter,
                    "posts.delete",
                    err.message(),
                    |message| PostsAction::DeleteFailed { message },
                )),
            }
        })
    }
}
