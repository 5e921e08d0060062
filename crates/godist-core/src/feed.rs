//! Release feed sources.
//!
//! A [`ReleaseSource`] produces a fully decoded [`ReleaseFeed`]. This is the
//! only place in godist that blocks on I/O; the resolver in `godist-schema`
//! works on whatever a source returns.
//!
//! Fetching is a single attempt. Transport and decode failures are returned
//! as-is for the caller to abort on; there is no retry and no cache.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use godist_schema::{Release, ReleaseFeed};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors produced while obtaining the release feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The request could not be sent or the body could not be read.
    #[cfg(feature = "network")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Feed request to {url} failed: HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The body is not a JSON array of release records.
    #[error("Malformed release feed: {0}")]
    Decode(#[from] serde_json::Error),

    /// A saved feed file could not be read.
    #[error("Failed to read feed file {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Something that can produce the release feed.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Where the feed comes from, for log and error messages.
    fn location(&self) -> String;

    /// Fetch and decode the whole feed.
    async fn fetch_releases(&self) -> Result<ReleaseFeed, FeedError>;
}

/// Decode the feed's top-level JSON array.
///
/// Files whose `version` disagrees with their release are kept as they are
/// and reported at `warn` level.
///
/// # Errors
///
/// Returns [`FeedError::Decode`] if the bytes are not a JSON array of
/// release records.
pub fn decode_feed(bytes: &[u8]) -> Result<ReleaseFeed, FeedError> {
    let releases: Vec<Release> = serde_json::from_slice(bytes)?;
    debug!(records = releases.len(), "decoded release feed");

    for release in &releases {
        for file in release.inconsistent_files() {
            warn!(
                release = %release.version,
                file = %file.filename,
                file_version = %file.version,
                "feed file version does not match its release"
            );
        }
    }

    Ok(ReleaseFeed::new(releases))
}

/// The feed served over HTTP(S).
#[cfg(feature = "network")]
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "network")]
impl HttpFeed {
    /// Build a source with its own client, using `timeout` for the whole request.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the TLS backend cannot be initialized.
    pub fn new(url: impl Into<String>, timeout: std::time::Duration) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self::with_client(client, url))
    }

    /// Build a source on top of an existing client.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[cfg(feature = "network")]
#[async_trait]
impl ReleaseSource for HttpFeed {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch_releases(&self) -> Result<ReleaseFeed, FeedError> {
        debug!(url = %self.url, "fetching release feed");
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await?;
        debug!(bytes = bytes.len(), "received release feed");
        decode_feed(&bytes)
    }
}

/// A feed that is already in memory, e.g. loaded from a saved JSON file.
#[derive(Debug, Clone)]
pub struct StaticFeed {
    location: String,
    feed: ReleaseFeed,
}

impl StaticFeed {
    /// Serve `feed` as-is.
    pub fn new(feed: ReleaseFeed) -> Self {
        Self {
            location: "memory".to_string(),
            feed,
        }
    }

    /// Load and decode a saved copy of the feed.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Io`] if the file cannot be read and
    /// [`FeedError::Decode`] if it is not a valid feed.
    pub fn from_path(path: &Path) -> Result<Self, FeedError> {
        let bytes = std::fs::read(path).map_err(|source| FeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            location: path.display().to_string(),
            feed: decode_feed(&bytes)?,
        })
    }
}

#[async_trait]
impl ReleaseSource for StaticFeed {
    fn location(&self) -> String {
        self.location.clone()
    }

    async fn fetch_releases(&self) -> Result<ReleaseFeed, FeedError> {
        Ok(self.feed.clone())
    }
}
