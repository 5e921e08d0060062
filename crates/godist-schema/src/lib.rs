//! Shared types for godist: the release feed model and the platform resolver.
//!
//! Nothing in this crate performs I/O. It expects a feed that has already
//! been fetched and decoded, and answers "what should I download for this
//! platform?" over that snapshot.

/// The decoded feed as a whole.
pub mod feed;
/// Checksum newtype.
pub mod hash;
/// OS / architecture pairs.
pub mod platform;
pub mod release;

// Re-exports
pub use feed::ReleaseFeed;
pub use hash::Sha256Hash;
pub use platform::{Platform, PlatformError};
pub use release::{Artifact, ArtifactKind, Release};
