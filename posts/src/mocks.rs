//! Mock environments for testing.
//!
//! Available with the `test-utils` feature (on by default). The mock
//! records which operations the reducer requested and can be scripted
//! with the completion each operation should settle with.

#![allow(clippy::expect_used)] // Mutex poison is unrecoverable in test utilities

use crate::actions::PostsAction;
use crate::environment::PostsEnvironment;
use quill_api::{PostDraft, PostId, PostPatch};
use quill_core::effect::Effect;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scriptable posts environment
///
/// Each operation records a call label (`list:3`, `delete:p-1`, ...) and
/// settles with the next scripted completion, or with no action at all
/// when nothing is scripted.
///
/// # Example
///
/// ```
/// use quill_posts::mocks::MockPostsEnvironment;
/// use quill_posts::{PostsAction, PostsEnvironment};
///
/// let env = MockPostsEnvironment::new();
/// env.enqueue(PostsAction::CreateSucceeded);
///
/// let _effect = env.create_post(Default::default());
/// assert_eq!(env.calls(), vec!["create".to_string()]);
/// ```
#[derive(Clone, Default)]
pub struct MockPostsEnvironment {
    outcomes: Arc<Mutex<VecDeque<PostsAction>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPostsEnvironment {
    /// Create a mock with no scripted completions
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the completion the next operation settles with
    ///
    /// Completions are consumed in FIFO order across all operations.
    pub fn enqueue(&self, completion: PostsAction) {
        self.outcomes
            .lock()
            .expect("mock mutex poisoned")
            .push_back(completion);
    }

    /// Call labels recorded so far, in invocation order
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock mutex poisoned").clone()
    }

    fn operation(&self, label: String) -> Effect<PostsAction> {
        self.calls
            .lock()
            .expect("mock mutex poisoned")
            .push(label);

        let next = self
            .outcomes
            .lock()
            .expect("mock mutex poisoned")
            .pop_front();

        match next {
            Some(action) => Effect::future(async move { Some(action) }),
            None => Effect::future(async { None }),
        }
    }
}

impl PostsEnvironment for MockPostsEnvironment {
    fn list_posts(&self, page: u32) -> Effect<PostsAction> {
        self.operation(format!("list:{page}"))
    }

    fn create_post(&self, _draft: PostDraft) -> Effect<PostsAction> {
        self.operation("create".to_string())
    }

    fn update_post(&self, id: PostId, _patch: PostPatch) -> Effect<PostsAction> {
        self.operation(format!("update:{id}"))
    }

    fn fetch_post(&self, id: PostId) -> Effect<PostsAction> {
        self.operation(format!("get:{id}"))
    }

    fn delete_post(&self, id: PostId) -> Effect<PostsAction> {
        self.operation(format!("delete:{id}"))
    }
}
