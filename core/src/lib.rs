//! # Quill Core
//!
//! Core traits and types for the quill client architecture.
//!
//! This crate provides the fundamental abstractions for building a
//! unidirectional-data-flow client: a feature owns a state value, describes
//! everything that can happen to it as an action sum type, and processes
//! actions through a reducer that returns side-effect descriptions.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer (intents and completions)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use quill_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! impl Reducer for FeedReducer {
//!     type State = FeedState;
//!     type Action = FeedAction;
//!     type Environment = FeedEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut FeedState,
//!         action: FeedAction,
//!         env: &FeedEnvironment,
//!     ) -> SmallVec<[Effect<FeedAction>; 4]> {
//!         match action {
//!             FeedAction::Refresh => {
//!                 state.is_loading = true;
//!                 smallvec![env.load_feed()]
//!             }
//!             _ => smallvec![Effect::None],
//!         }
//!     }
//! }
//! ```

// Re-export commonly used types
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for feature logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all state-transition logic and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for feature logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for FeedReducer {
    ///     type State = FeedState;
    ///     type Action = FeedAction;
    ///     type Environment = FeedEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut FeedState,
    ///         action: FeedAction,
    ///         env: &FeedEnvironment,
    ///     ) -> SmallVec<[Effect<FeedAction>; 4]> {
    ///         // State transitions go here
    ///         smallvec![Effect::None]
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Inspects the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into
        /// the reducer. This is how network calls report their outcome: the
        /// future resolves to a fulfilled or rejected completion action.
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Build a Future effect from an async block
        ///
        /// Boxes and pins the future so reducers and environments don't have
        /// to spell the pinning out at every call site.
        pub fn future<F>(fut: F) -> Effect<Action>
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(fut))
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use tokio::sync::mpsc;

    /// A single failure forwarded to the process-wide error channel
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ErrorReport {
        /// Which operation failed (e.g. `posts.fetch`)
        pub context: String,
        /// The failure message, already reduced to a plain string
        pub message: String,
    }

    /// `ErrorReporter` trait - the process-wide error-reporting channel
    ///
    /// Failed operations forward their failure message here in addition to
    /// settling their own rejected phase. Reporting is fire-and-forget: it
    /// never blocks and never fails the caller. The consumer of the channel
    /// (typically whatever surfaces errors to the user) is out of scope for
    /// this crate.
    pub trait ErrorReporter: Send + Sync {
        /// Forward a failure to the channel
        fn report(&self, context: &str, message: &str);
    }

    /// Error reporter backed by an unbounded tokio channel
    ///
    /// Reports are pushed into the channel for an out-of-process-of-mind
    /// consumer to drain. If the receiving half is gone the report is logged
    /// instead of lost silently.
    #[derive(Debug, Clone)]
    pub struct ChannelErrorReporter {
        tx: mpsc::UnboundedSender<ErrorReport>,
    }

    impl ChannelErrorReporter {
        /// Create a reporter together with the receiving half of its channel
        #[must_use]
        pub fn new() -> (Self, mpsc::UnboundedReceiver<ErrorReport>) {
            let (tx, rx) = mpsc::unbounded_channel();
            (Self { tx }, rx)
        }
    }

    impl ErrorReporter for ChannelErrorReporter {
        fn report(&self, context: &str, message: &str) {
            let report = ErrorReport {
                context: context.to_string(),
                message: message.to_string(),
            };
            if self.tx.send(report).is_err() {
                tracing::warn!(context, message, "error channel closed, dropping report");
            }
        }
    }

    /// Error reporter that discards every report
    ///
    /// For callers that opt out of the error channel entirely.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct NullErrorReporter;

    impl ErrorReporter for NullErrorReporter {
        fn report(&self, _context: &str, _message: &str) {}
    }
}
