//! Command handlers.
//!
//! Each handler receives the feed source and the output sink explicitly, so
//! tests can drive them with an in-memory feed and a byte buffer.

pub mod completions;
pub mod dockerfile;
pub mod files;
pub mod list;

use anyhow::{Context, Result};
use godist_core::{ReleaseFeed, ReleaseSource};

/// Fetch the feed once; any failure aborts the command.
pub async fn fetch(source: &dyn ReleaseSource) -> Result<ReleaseFeed> {
    source
        .fetch_releases()
        .await
        .with_context(|| format!("Failed to fetch release feed from {}", source.location()))
}
