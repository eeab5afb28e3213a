//! Quill bootstrap binary
//!
//! Wires the whole stack together: tracing, configuration, the error
//! channel, the HTTP environment, and the single posts store for the
//! process. Drives a short fetch flow so the wiring is observable, then
//! shuts the store down.

use quill_api::{ApiClient, ApiConfig};
use quill_core::environment::ChannelErrorReporter;
use quill_posts::{HttpPostsEnvironment, JsonContentCodec, PostsAction, PostsReducer, PostsState};
use quill_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quill=debug,quill_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration from the environment
    let config = ApiConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Starting quill");

    // The process-wide error channel. The drain task stands in for the
    // view layer, which is the real consumer of surfaced failures.
    let (reporter, mut reports) = ChannelErrorReporter::new();
    let drain = tokio::spawn(async move {
        while let Some(report) = reports.recv().await {
            tracing::error!(context = %report.context, message = %report.message, "Operation failed");
        }
    });

    // Production environment and the single posts store for the process
    let client = ApiClient::new(config)?;
    let environment = HttpPostsEnvironment::new(
        &client,
        Arc::new(JsonContentCodec),
        Arc::new(reporter),
    );
    let store = Store::new(PostsState::default(), PostsReducer::new(), environment);

    // Fetch the first page and report the outcome
    let outcome = store
        .send_and_wait_for(
            PostsAction::Fetch { page: Some(1) },
            PostsAction::is_completion,
            Duration::from_secs(30),
        )
        .await?;

    match outcome {
        PostsAction::FetchSucceeded {
            results,
            page,
            total_pages,
        } => {
            tracing::info!(count = results.len(), page, total_pages, "Fetched posts");
            for post in &results {
                println!("{}", post.id);
            }
        },
        PostsAction::FetchFailed { message } => {
            tracing::warn!(%message, "Fetch failed");
        },
        other => {
            tracing::warn!(?other, "Unexpected completion");
        },
    }

    store.shutdown(Duration::from_secs(5)).await?;
    drain.abort();

    Ok(())
}
