//! # Quill API
//!
//! HTTP client wrapper for the quill posts API.
//!
//! This crate provides two pre-configured request channels (`public`,
//! `private`) to a fixed base URL and uniformly translates transport and
//! response failures into a single message value consumable by callers.
//!
//! ## Core Components
//!
//! - **[`ApiConfig`]**: Environment-driven configuration (base URL, timeout)
//! - **[`ApiClient`]**: The two channels plus endpoint groups
//! - **[`PostsClient`]**: The posts REST surface (list, create, update, get, delete)
//! - **[`ApiError`]**: Flat error taxonomy - every failure reduces to a message
//!
//! ## Example
//!
//! ```ignore
//! use quill_api::{ApiClient, ApiConfig};
//!
//! let client = ApiClient::new(ApiConfig::from_env())?;
//! let page = client.posts().list(1).await?;
//! println!("{} posts on page {}", page.results.len(), page.page);
//! ```
//!
//! ## Authorization
//!
//! The private channel consults an optional [`TokenProvider`] and attaches
//! the token as the `authorization` header when one is present. Token expiry
//! checking and refresh-before-request are intentionally not implemented
//! here; session handling is an external concern.

/// Environment-driven configuration
pub mod config;

/// The client and its request channels
pub mod client;

/// Error types for the API client
pub mod error;

/// Posts REST endpoints
pub mod posts;

/// Wire types for the posts API
pub mod types;

pub use client::{ApiClient, StaticToken, TokenProvider};
pub use config::ApiConfig;
pub use error::ApiError;
pub use posts::PostsClient;
pub use types::{ErrorBody, Post, PostDraft, PostId, PostPage, PostPatch};
