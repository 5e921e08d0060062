//! Core library for godist: where the release feed comes from and how the
//! tool is configured.
//!
//! The resolver itself lives in `godist-schema`; this crate only produces the
//! snapshot it runs on.

/// User-level configuration file.
pub mod config;
/// Release feed sources (HTTP and in-memory).
pub mod feed;
/// Well-known filesystem locations.
pub mod paths;

pub use config::{Config, ConfigError};
#[cfg(feature = "network")]
pub use feed::HttpFeed;
pub use feed::{FeedError, ReleaseSource, StaticFeed, decode_feed};
pub use godist_schema::{Artifact, ArtifactKind, Platform, Release, ReleaseFeed, Sha256Hash};

/// User Agent string for feed requests
pub const USER_AGENT: &str = concat!("godist/", env!("CARGO_PKG_VERSION"));

/// Upstream Go download feed, including unstable and archived releases.
pub const DEFAULT_FEED_URL: &str = "https://golang.org/dl/?mode=json&include=all";

/// Default whole-request timeout for feed downloads, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
