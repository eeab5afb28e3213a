//! The posts reducer.
//!
//! Implements the state transitions for all five remote operations plus
//! the synchronous reset. The reducer is a pure function; every side
//! effect is returned as a description for the runtime to execute.

use crate::actions::PostsAction;
use crate::environment::PostsEnvironment;
use crate::state::PostsState;
use quill_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Posts reducer
///
/// Each intent sets `is_loading` and hands the operation to the
/// environment; each completion settles the state:
///
/// | Operation | fulfilled | rejected |
/// |---|---|---|
/// | fetch | replace `items`/`page`/`total_pages` | reset to empty first page |
/// | create | `submitted = true` | no state change beyond the flag |
/// | update | `submitted = true` | no state change beyond the flag |
/// | get | `current_post` materialized | `current_post` cleared |
/// | delete | matching id filtered out of `items` | no state change beyond the flag |
///
/// Every completion clears `is_loading`. Overlapping operations share the
/// flag, so completions apply in resolution order and the last writer wins.
///
/// Generic over the environment type `E` to work with any collaborator set.
#[derive(Debug, Clone, Copy)]
pub struct PostsReducer<E> {
    _phantom: std::marker::PhantomData<E>,
}

impl<E> PostsReducer<E> {
    /// Create a new posts reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<E> Default for PostsReducer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PostsEnvironment> Reducer for PostsReducer<E> {
    type State = PostsState;
    type Action = PostsAction;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════════
            // Intents (pending phase)
            // ═══════════════════════════════════════════════════════════════
            PostsAction::Fetch { page } => {
                state.is_loading = true;
                // No explicit page means the one currently in state
                let page = page.unwrap_or(state.page);
                smallvec![environment.list_posts(page)]
            },

            PostsAction::Create { draft } => {
                state.is_loading = true;
                smallvec![environment.create_post(draft)]
            },

            PostsAction::Update { id, patch } => {
                state.is_loading = true;
                smallvec![environment.update_post(id, patch)]
            },

            PostsAction::Get { id } => {
                state.is_loading = true;
                smallvec![environment.fetch_post(id)]
            },

            PostsAction::Delete { id } => {
                state.is_loading = true;
                smallvec![environment.delete_post(id)]
            },

            PostsAction::Reset => {
                *state = PostsState::default();
                smallvec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════════
            // Completions (fulfilled / rejected phases)
            // ═══════════════════════════════════════════════════════════════
            PostsAction::FetchSucceeded {
                results,
                page,
                total_pages,
            } => {
                tracing::debug!(page, total_pages, count = results.len(), "Fetch fulfilled");
                state.items = results;
                state.page = page;
                state.total_pages = total_pages;
                state.is_loading = false;
                smallvec![Effect::None]
            },

            PostsAction::FetchFailed { .. } => {
                // A failed list fetch empties the view back to page one
                state.items = Vec::new();
                state.page = 1;
                state.total_pages = 1;
                state.is_loading = false;
                smallvec![Effect::None]
            },

            PostsAction::CreateSucceeded | PostsAction::UpdateSucceeded => {
                state.submitted = true;
                state.is_loading = false;
                smallvec![Effect::None]
            },

            PostsAction::CreateFailed { .. } | PostsAction::UpdateFailed { .. } => {
                state.is_loading = false;
                smallvec![Effect::None]
            },

            PostsAction::GetSucceeded { post } => {
                state.current_post = Some(post);
                state.is_loading = false;
                smallvec![Effect::None]
            },

            PostsAction::GetFailed { .. } => {
                state.current_post = None;
                state.is_loading = false;
                smallvec![Effect::None]
            },

            PostsAction::DeleteSucceeded { id } => {
                state.items.retain(|post| post.id != id);
                state.is_loading = false;
                smallvec![Effect::None]
            },

            PostsAction::DeleteFailed { .. } => {
                state.is_loading = false;
                smallvec![Effect::None]
            },
        }
    }
}
