//! # Quill Runtime
//!
//! Runtime implementation for the quill client architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Effect Executor**: Executes effect descriptions and feeds actions back to reducers
//! - **Action Broadcast**: Observers receive every action produced by effects
//!
//! ## Example
//!
//! ```ignore
//! use quill_runtime::Store;
//! use quill_core::reducer::Reducer;
//!
//! let store = Store::new(
//!     initial_state,
//!     my_reducer,
//!     environment,
//! );
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use quill_core::effect::Effect;
use quill_core::reducer::Reducer;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::{RwLock, watch};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after shutdown initiated.
        #[error("Store is shutting down")]
        ShutdownInProgress,

        /// Shutdown timed out waiting for effects to complete
        ///
        /// Some effects were still running when the timeout elapsed.
        #[error("Shutdown timed out with {0} effects still running")]
        ShutdownTimeout(usize),

        /// Timeout waiting for terminal action
        ///
        /// Returned by `send_and_wait_for` when the timeout expires before
        /// a matching action is received.
        #[error("Timeout waiting for action")]
        Timeout,

        /// Action broadcast channel closed
        ///
        /// The action broadcast channel was closed, typically because the
        /// store is shutting down.
        #[error("Action broadcast channel closed")]
        ChannelClosed,
    }
}

pub use error::StoreError;
pub use store::Store;

/// Handle for waiting on effect completion
///
/// Returned by [`Store::send`]. Tracks every effect spawned by that send,
/// including the feedback reduction of any action an effect produces.
///
/// # Example
///
/// ```ignore
/// let mut handle = store.send(Action::Start).await?;
/// handle.wait().await;
/// // All effects from Action::Start are now complete
/// ```
#[derive(Clone)]
pub struct EffectHandle {
    effects: Arc<AtomicUsize>,
    completion: watch::Receiver<()>,
}

impl EffectHandle {
    /// Create a new effect handle together with its tracking context
    ///
    /// The handle is returned to the caller for waiting; the tracking half
    /// is carried through effect execution to count pending effects.
    fn new() -> (Self, EffectTracking) {
        let counter = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = watch::channel(());

        let handle = Self {
            effects: Arc::clone(&counter),
            completion: rx,
        };

        let tracking = EffectTracking {
            counter,
            notifier: tx,
        };

        (handle, tracking)
    }

    /// Create a handle that's already complete
    ///
    /// Useful for initialization in loops where you need a `last_handle`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut last_handle = EffectHandle::completed();
    /// for action in actions {
    ///     last_handle = store.send(action).await?;
    /// }
    /// last_handle.wait().await;
    /// ```
    #[must_use]
    pub fn completed() -> Self {
        let (tx, rx) = watch::channel(());
        let _ = tx.send(());

        Self {
            effects: Arc::new(AtomicUsize::new(0)),
            completion: rx,
        }
    }

    /// Wait for all effects to complete
    ///
    /// Blocks until the effect counter reaches zero.
    pub async fn wait(&mut self) {
        while self.effects.load(Ordering::SeqCst) > 0 {
            let _ = self.completion.changed().await;
        }
    }

    /// Wait for all effects to complete with a timeout
    ///
    /// # Arguments
    ///
    /// - `timeout`: Maximum duration to wait
    ///
    /// # Errors
    ///
    /// Returns `Err(())` if the timeout expires before all effects complete.
    pub async fn wait_with_timeout(&mut self, timeout: Duration) -> Result<(), ()> {
        tokio::time::timeout(timeout, self.wait())
            .await
            .map_err(|_| ())
    }
}

impl std::fmt::Debug for EffectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectHandle")
            .field("pending_effects", &self.effects.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

/// Internal: Effect tracking context passed through effect execution
///
/// This type is internal to the runtime and not exposed to users.
/// It carries the tracking state through effect execution.
#[derive(Clone)]
struct EffectTracking {
    counter: Arc<AtomicUsize>,
    notifier: watch::Sender<()>,
}

impl EffectTracking {
    /// Increment the effect counter (effect started)
    fn increment(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    /// Decrement the effect counter (effect completed)
    fn decrement(&self) {
        if self.counter.fetch_sub(1, Ordering::SeqCst) == 1 {
            // Counter reached zero, notify waiters
            let _ = self.notifier.send(());
        }
    }
}

/// Internal: RAII guard that decrements effect counter on drop
///
/// Ensures the effect counter is always decremented, even if the effect panics.
struct DecrementGuard(EffectTracking);

impl Drop for DecrementGuard {
    fn drop(&mut self) {
        self.0.decrement();
    }
}

/// Guard that decrements an atomic counter on drop (for shutdown tracking)
struct AtomicCounterGuard(Arc<AtomicUsize>);

impl Drop for AtomicCounterGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Store module - The runtime for reducers
///
/// Store runtime for coordinating reducer execution and effect handling.
pub mod store {
    use super::{
        Arc, AtomicBool, AtomicCounterGuard, AtomicUsize, DecrementGuard, Duration, Effect,
        EffectHandle, EffectTracking, Ordering, Reducer, RwLock, StoreError,
    };
    use tokio::sync::broadcast;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` for concurrent access)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Concurrency
    ///
    /// The reducer runs while holding the state write lock, so each
    /// reduction is atomic with respect to all other state access. There is
    /// no mutual exclusion between in-flight effects: overlapping operations
    /// settle in resolution order, not invocation order, and the last writer
    /// wins on shared state fields.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(
    ///     PostsState::default(),
    ///     PostsReducer::new(),
    ///     production_environment(),
    /// );
    ///
    /// store.send(PostsAction::Fetch { page: None }).await?;
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        shutdown: Arc<AtomicBool>,
        pending_effects: Arc<AtomicUsize>,
        /// Action broadcast channel for observing actions produced by effects.
        ///
        /// All actions produced by effects (e.g., from `Effect::Future`) are
        /// broadcast to observers. This is how callers obtain the fulfilled
        /// or rejected completion of an operation they sent.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        A: Send + Clone + 'static,
        S: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Creates a Store with the default action broadcast capacity of 16
        /// (increase with `with_broadcast_capacity`).
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        /// - `environment`: Injected dependencies
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            let (action_broadcast, _) = broadcast::channel(16);

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                shutdown: Arc::new(AtomicBool::new(false)),
                pending_effects: Arc::new(AtomicUsize::new(0)),
                action_broadcast,
            }
        }

        /// Create a new Store with custom action broadcast capacity
        ///
        /// Default capacity is 16. Increase if observers frequently lag.
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        /// - `environment`: Injected dependencies
        /// - `capacity`: Action broadcast channel capacity (number of actions buffered)
        #[must_use]
        pub fn with_broadcast_capacity(
            initial_state: S,
            reducer: R,
            environment: E,
            capacity: usize,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(capacity);

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                shutdown: Arc::new(AtomicBool::new(false)),
                pending_effects: Arc::new(AtomicUsize::new(0)),
                action_broadcast,
            }
        }

        /// Initiate graceful shutdown of the store
        ///
        /// This method:
        /// 1. Sets the shutdown flag (rejecting new actions)
        /// 2. Waits for pending effects to complete (with timeout)
        ///
        /// # Arguments
        ///
        /// - `timeout`: Maximum time to wait for effects to complete
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownTimeout`] if the timeout expires
        /// before all pending effects complete.
        pub async fn shutdown(&self, timeout: Duration) -> Result<(), StoreError> {
            tracing::info!("Initiating graceful shutdown");
            metrics::counter!("store.shutdown.initiated").increment(1);

            // Set shutdown flag to reject new actions
            self.shutdown.store(true, Ordering::Release);

            // Wait for pending effects with timeout
            let start = std::time::Instant::now();
            let poll_interval = Duration::from_millis(100);

            loop {
                let pending = self.pending_effects.load(Ordering::Acquire);

                if pending == 0 {
                    tracing::info!("All effects completed, shutdown successful");
                    return Ok(());
                }

                if start.elapsed() >= timeout {
                    tracing::error!(
                        pending_effects = pending,
                        "Shutdown timeout: {} effects still running",
                        pending
                    );
                    return Err(StoreError::ShutdownTimeout(pending));
                }

                tokio::time::sleep(poll_interval).await;
            }
        }

        /// Send an action to the store
        ///
        /// This is the primary way to interact with the store:
        /// 1. Acquires write lock on state
        /// 2. Calls reducer with (state, action, environment)
        /// 3. Executes returned effects asynchronously
        /// 4. Effects may produce more actions (feedback loop)
        ///
        /// # Concurrency and Effect Execution
        ///
        /// - The reducer executes synchronously while holding a write lock
        /// - Effects execute asynchronously in spawned tasks
        /// - `send()` returns after starting effect execution, not completion
        /// - Multiple concurrent `send()` calls serialize at the reducer level
        /// - Effects may complete in non-deterministic order
        ///
        /// # Returns
        ///
        /// An [`EffectHandle`] that can be used to wait for effect completion.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<EffectHandle, StoreError>
        where
            R: Clone,
            E: Clone,
        {
            // Check if store is shutting down
            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                return Err(StoreError::ShutdownInProgress);
            }

            tracing::debug!("Processing action");
            metrics::counter!("store.actions.total").increment(1);

            // Create tracking for this action
            let (handle, tracking) = EffectHandle::new();

            let effects = {
                let mut state = self.state.write().await;

                // Metrics: Time reducer execution
                let start = std::time::Instant::now();
                let effects = self.reducer.reduce(&mut state, action, &self.environment);
                let duration = start.elapsed();
                metrics::histogram!("store.reducer.duration_seconds").record(duration.as_secs_f64());

                tracing::trace!("Reducer completed, returned {} effects", effects.len());

                effects
            };

            // Execute effects with tracking
            for effect in effects {
                self.execute_effect_internal(effect, tracking.clone());
            }

            Ok(handle)
        }

        /// Send an action and wait for a matching result action
        ///
        /// This method is designed for request-response patterns. It
        /// subscribes to the action broadcast, sends the initial action,
        /// then waits for an action matching the predicate.
        ///
        /// # How It Works
        ///
        /// 1. Subscribe to action broadcast BEFORE sending (avoids race conditions)
        /// 2. Send the initial action through the store
        /// 3. Wait for actions produced by effects
        /// 4. Return the first action matching the predicate
        ///
        /// # Arguments
        ///
        /// - `action`: The initial action to send
        /// - `predicate`: Function to test if an action is the terminal result
        /// - `timeout`: Maximum time to wait for matching action
        ///
        /// # Errors
        ///
        /// - [`StoreError::Timeout`]: Timeout expired before matching action received
        /// - [`StoreError::ChannelClosed`]: Action broadcast channel closed
        /// - [`StoreError::ShutdownInProgress`]: Store is shutting down
        ///
        /// # Example
        ///
        /// ```ignore
        /// let result = store.send_and_wait_for(
        ///     PostsAction::Fetch { page: Some(1) },
        ///     |a| matches!(a,
        ///         PostsAction::FetchSucceeded { .. } |
        ///         PostsAction::FetchFailed { .. }
        ///     ),
        ///     Duration::from_secs(10),
        /// ).await?;
        /// ```
        ///
        /// # Notes
        ///
        /// - Only actions produced by effects are broadcast (not the initial action)
        /// - If the channel lags and drops actions, continues waiting (timeout catches it)
        pub async fn send_and_wait_for<F>(
            &self,
            action: A,
            predicate: F,
            timeout: Duration,
        ) -> Result<A, StoreError>
        where
            R: Clone,
            E: Clone,
            F: Fn(&A) -> bool,
        {
            // Subscribe BEFORE sending to avoid race condition
            let mut rx = self.action_broadcast.subscribe();

            // Send the initial action
            self.send(action).await?;

            // Wait for matching action with timeout
            tokio::time::timeout(timeout, async {
                loop {
                    match rx.recv().await {
                        Ok(action) if predicate(&action) => return Ok(action),
                        Ok(_) => {} // Not the action we want, keep waiting
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            // Slow consumer, some actions were dropped.
                            // Continue waiting - the timeout catches a dropped terminal.
                            tracing::warn!(skipped, "Action observer lagged");
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            return Err(StoreError::ChannelClosed);
                        }
                    }
                }
            })
            .await
            .map_err(|_| StoreError::Timeout)?
        }

        /// Subscribe to all actions from this store
        ///
        /// Returns a receiver that gets a clone of every action produced by
        /// effects. This is how observers (and the error-surfacing layer)
        /// see operation completions without polling state.
        ///
        /// # Notes
        ///
        /// - Only actions produced by effects are broadcast (not initial actions sent via `send`)
        /// - If the receiver lags, it will skip old actions and receive `RecvError::Lagged`
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let count = store.state(|s| s.items.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Execute a single effect with tracking
        ///
        /// # Effect Types
        ///
        /// - `None`: No-op
        /// - `Future`: Executes async computation, sends resulting action if `Some`
        /// - `Parallel`: Executes effects concurrently
        ///
        /// # Error Handling Strategy
        ///
        /// **Reducer panics**: Propagate (fail fast). Reducers should be pure
        /// functions that do not panic.
        ///
        /// **Effect execution failures**: Effects are fire-and-forget. The
        /// [`DecrementGuard`] ensures the counter is updated even on panic.
        #[allow(clippy::needless_pass_by_value)] // tracking is cloned, so pass by value is intentional
        fn execute_effect_internal(&self, effect: Effect<A>, tracking: EffectTracking)
        where
            R: Clone,
            E: Clone,
        {
            match effect {
                Effect::None => {
                    metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                },
                Effect::Future(fut) => {
                    metrics::counter!("store.effects.executed", "type" => "future").increment(1);
                    tracking.increment();

                    // Track global pending effects for shutdown
                    self.pending_effects.fetch_add(1, Ordering::SeqCst);
                    let pending_guard = AtomicCounterGuard(Arc::clone(&self.pending_effects));

                    let tracking_clone = tracking.clone();
                    let store = self.clone();

                    tokio::spawn(async move {
                        let _guard = DecrementGuard(tracking_clone.clone());
                        let _pending_guard = pending_guard; // Decrement on drop

                        if let Some(action) = fut.await {
                            tracing::trace!("Effect::Future produced an action, sending to store");

                            // Broadcast to observers
                            let _ = store.action_broadcast.send(action.clone());

                            // Send action back to store (auto-feedback)
                            let _ = store.send(action).await;
                        } else {
                            tracing::trace!("Effect::Future completed with no action");
                        }
                    });
                },
                Effect::Parallel(effects) => {
                    metrics::counter!("store.effects.executed", "type" => "parallel").increment(1);

                    // Execute all effects concurrently, each with the same tracking
                    for effect in effects {
                        self.execute_effect_internal(effect, tracking.clone());
                    }
                },
            }
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                shutdown: Arc::clone(&self.shutdown),
                pending_effects: Arc::clone(&self.pending_effects),
                action_broadcast: self.action_broadcast.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::store::Store;
    use super::{EffectHandle, StoreError};
    use quill_core::effect::Effect;
    use quill_core::reducer::Reducer;
    use quill_core::{SmallVec, smallvec};
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Ping,
        Pong,
        Bump,
    }

    #[derive(Debug, Clone, Default)]
    struct TestState {
        pings: u32,
        pongs: u32,
        bumps: u32,
    }

    #[derive(Clone)]
    struct TestEnvironment;

    #[derive(Clone)]
    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnvironment;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Ping => {
                    state.pings += 1;
                    smallvec![Effect::future(async { Some(TestAction::Pong) })]
                },
                TestAction::Pong => {
                    state.pongs += 1;
                    smallvec![Effect::None]
                },
                TestAction::Bump => {
                    state.bumps += 1;
                    smallvec![Effect::None]
                },
            }
        }
    }

    fn test_store() -> Store<TestState, TestAction, TestEnvironment, TestReducer> {
        Store::new(TestState::default(), TestReducer, TestEnvironment)
    }

    #[tokio::test]
    async fn send_applies_reducer_synchronously() {
        let store = test_store();

        let _ = store.send(TestAction::Bump).await.unwrap();

        let bumps = store.state(|s| s.bumps).await;
        assert_eq!(bumps, 1);
    }

    #[tokio::test]
    async fn effect_handle_waits_for_feedback() {
        let store = test_store();

        let mut handle = store.send(TestAction::Ping).await.unwrap();
        handle.wait().await;

        let (pings, pongs) = store.state(|s| (s.pings, s.pongs)).await;
        assert_eq!(pings, 1);
        assert_eq!(pongs, 1);
    }

    #[tokio::test]
    async fn completed_handle_returns_immediately() {
        let mut handle = EffectHandle::completed();
        handle
            .wait_with_timeout(Duration::from_millis(50))
            .await
            .expect("completed handle should not block");
    }

    #[tokio::test]
    async fn send_and_wait_for_returns_terminal_action() {
        let store = test_store();

        let result = store
            .send_and_wait_for(
                TestAction::Ping,
                |a| matches!(a, TestAction::Pong),
                Duration::from_secs(1),
            )
            .await
            .unwrap();

        assert_eq!(result, TestAction::Pong);
    }

    #[tokio::test]
    async fn send_and_wait_for_times_out_without_match() {
        let store = test_store();

        let result = store
            .send_and_wait_for(
                TestAction::Bump,
                |a| matches!(a, TestAction::Pong),
                Duration::from_millis(50),
            )
            .await;

        assert!(matches!(result, Err(StoreError::Timeout)));
    }

    #[tokio::test]
    async fn shutdown_rejects_new_actions() {
        let store = test_store();

        store.shutdown(Duration::from_secs(1)).await.unwrap();

        let result = store.send(TestAction::Bump).await;
        assert!(matches!(result, Err(StoreError::ShutdownInProgress)));
    }

    #[tokio::test]
    async fn subscribe_sees_effect_produced_actions() {
        let store = test_store();
        let mut rx = store.subscribe_actions();

        let mut handle = store.send(TestAction::Ping).await.unwrap();
        handle.wait().await;

        let observed = rx.recv().await.unwrap();
        assert_eq!(observed, TestAction::Pong);
    }
}
