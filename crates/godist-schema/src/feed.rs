use serde::{Deserialize, Serialize};

use crate::release::{Artifact, Release};

/// The decoded feed: every release record, in the order the feed lists them.
///
/// The upstream feed lists newest releases first, so "first stable" is the
/// current release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseFeed(Vec<Release>);

impl ReleaseFeed {
    /// Wrap already-decoded records.
    pub fn new(releases: Vec<Release>) -> Self {
        Self(releases)
    }

    /// All records in feed order.
    pub fn releases(&self) -> &[Release] {
        &self.0
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the feed has no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records flagged stable, in feed order.
    pub fn stable(&self) -> impl Iterator<Item = &Release> {
        self.0.iter().filter(|r| r.stable)
    }

    /// First record whose version equals `version` exactly.
    pub fn find(&self, version: &str) -> Option<&Release> {
        self.0.iter().find(|r| r.version == version)
    }

    /// Every stable release paired with its selected archive for `(arch, os)`.
    ///
    /// Releases without a match are left out.
    pub fn resolve(&self, arch: &str, os: &str) -> Vec<(&Release, &Artifact)> {
        self.stable()
            .filter_map(|r| r.artifact_for_platform(arch, os).map(|f| (r, f)))
            .collect()
    }
}
