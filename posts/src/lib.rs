//! # Quill Posts
//!
//! The posts feature slice: state, actions, reducer, and environment for
//! synchronizing a remote posts collection into client state.
//!
//! ## Architecture
//!
//! The slice follows the unidirectional-data-flow pattern:
//!
//! - **[`PostsState`]**: one value owning the collection view (items,
//!   pagination, loading and submission flags, the currently open post)
//! - **[`PostsAction`]**: intents (what the UI asks for) and completions
//!   (how each asynchronous operation settled)
//! - **[`PostsReducer`]**: pure state transitions; every side effect is
//!   returned as an [`Effect`](quill_core::effect::Effect) description
//! - **[`PostsEnvironment`]**: the injected collaborator set (HTTP client,
//!   content codec, error reporter)
//!
//! Each remote operation has three observable phases: the intent sets
//! `is_loading`, the environment performs the request, and the completion
//! action settles the state. Overlapping operations are not serialized
//! against each other; completions apply in resolution order.
//!
//! ## Example
//!
//! ```ignore
//! use quill_posts::{PostsAction, PostsReducer, PostsState, HttpPostsEnvironment};
//! use quill_runtime::Store;
//!
//! let store = Store::new(PostsState::default(), PostsReducer::new(), env);
//!
//! store.send(PostsAction::Fetch { page: None }).await?;
//! let count = store.state(|s| s.items.len()).await;
//! ```

/// Posts state types
pub mod state;

/// Posts actions (intents and completions)
pub mod actions;

/// Content deserializer boundary
pub mod content;

/// Environment trait and production implementation
pub mod environment;

/// The posts reducer
pub mod reducer;

/// Mock environments for testing
#[cfg(feature = "test-utils")]
pub mod mocks;

pub use actions::PostsAction;
pub use content::{ContentCodec, JsonContentCodec};
pub use environment::{HttpPostsEnvironment, PostsEnvironment};
pub use reducer::PostsReducer;
pub use state::{PostDetail, PostsState};
