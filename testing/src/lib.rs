//! # Quill Testing
//!
//! Testing utilities and helpers for the quill client architecture.
//!
//! This crate provides:
//! - A fluent Given-When-Then harness for reducers
//! - Assertion helpers for effect lists
//! - Mock implementations of environment traits
//!
//! ## Example
//!
//! ```ignore
//! use quill_testing::ReducerTest;
//!
//! ReducerTest::new(PostsReducer::new())
//!     .with_env(mock_environment())
//!     .given_state(PostsState::default())
//!     .when_action(PostsAction::Reset)
//!     .then_state(|state| {
//!         assert_eq!(*state, PostsState::default());
//!     })
//!     .run();
//! ```

/// Fluent reducer test harness
pub mod reducer_test;

/// Mock implementations of environment traits
///
/// Mock implementations for testing.
pub mod mocks {
    use quill_core::environment::ErrorReporter;
    use std::sync::{Arc, Mutex};

    /// Error reporter that captures every report for later assertion
    ///
    /// Reports are stored behind a mutex so the reporter can be cloned into
    /// effects and inspected from the test body afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use quill_testing::mocks::CapturingReporter;
    /// use quill_core::environment::ErrorReporter;
    ///
    /// let reporter = CapturingReporter::new();
    /// reporter.report("posts.fetch", "boom");
    /// assert_eq!(reporter.reports(), vec![("posts.fetch".to_string(), "boom".to_string())]);
    /// ```
    #[derive(Debug, Clone, Default)]
    pub struct CapturingReporter {
        reports: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl CapturingReporter {
        /// Create a new capturing reporter with no recorded reports
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// All `(context, message)` pairs reported so far
        ///
        /// # Panics
        ///
        /// Panics if the internal mutex is poisoned.
        #[must_use]
        #[allow(clippy::expect_used)] // Mutex poison is unrecoverable in tests
        pub fn reports(&self) -> Vec<(String, String)> {
            self.reports
                .lock()
                .expect("reporter mutex poisoned")
                .clone()
        }

        /// Number of reports captured so far
        ///
        /// # Panics
        ///
        /// Panics if the internal mutex is poisoned.
        #[must_use]
        #[allow(clippy::expect_used)] // Mutex poison is unrecoverable in tests
        pub fn len(&self) -> usize {
            self.reports.lock().expect("reporter mutex poisoned").len()
        }

        /// True if nothing has been reported
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    impl ErrorReporter for CapturingReporter {
        #[allow(clippy::expect_used)] // Mutex poison is unrecoverable in tests
        fn report(&self, context: &str, message: &str) {
            self.reports
                .lock()
                .expect("reporter mutex poisoned")
                .push((context.to_string(), message.to_string()));
        }
    }
}

// Re-export commonly used items
pub use mocks::CapturingReporter;
pub use reducer_test::{ReducerTest, assertions};
