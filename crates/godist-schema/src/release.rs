//! Release records and the platform resolver.
//!
//! A [`Release`] is one entry of the feed's top-level array. The queries on it
//! are pure filters over the decoded snapshot: they borrow, never mutate, and
//! never fail.

use serde::{Deserialize, Serialize};

use crate::hash::Sha256Hash;

/// Category of a downloadable file.
///
/// Only [`ArtifactKind::Archive`] is installable. Other kinds stay in the
/// record but are excluded from every version-level query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Installable compressed package (`.tar.gz` / `.zip`).
    Archive,
    /// Source tarball.
    Source,
    /// Platform installer (`.msi` / `.pkg`).
    Installer,
    /// Any tag this crate does not know about, including an empty one.
    #[default]
    #[serde(other)]
    Other,
}

impl ArtifactKind {
    /// True for the one kind that version queries return.
    pub fn is_archive(self) -> bool {
        self == Self::Archive
    }
}

/// One downloadable file of a release, for one platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artifact {
    /// File name on the download host (e.g. `go1.21.0.linux-amd64.tar.gz`).
    pub filename: String,

    /// Target operating system (e.g. `linux`).
    pub os: String,

    /// Target architecture (e.g. `amd64`).
    pub arch: String,

    /// Version this file belongs to. Expected to equal the parent release's.
    pub version: String,

    /// Published digest; empty while the file is not fully published.
    pub sha256: Sha256Hash,

    /// Size in bytes.
    pub size: u64,

    /// File category.
    pub kind: ArtifactKind,
}

impl Artifact {
    /// Exact match on both platform halves.
    pub fn matches(&self, arch: &str, os: &str) -> bool {
        self.arch == arch && self.os == os
    }

    /// A file is eligible for selection only once its digest is published.
    pub fn is_published(&self) -> bool {
        !self.sha256.is_empty()
    }
}

/// One tracked release line of the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    /// Version identifier, compared by equality only (e.g. `go1.21.0`).
    pub version: String,

    /// Whether the feed marks this release as current.
    pub stable: bool,

    /// Files in feed order.
    pub files: Vec<Artifact>,
}

impl Release {
    /// Archives of this release, or nothing if the release is not stable.
    pub fn stable_files(&self) -> Vec<&Artifact> {
        if !self.stable {
            return Vec::new();
        }
        self.files_for_version(&self.version)
    }

    /// Archives whose own `version` equals `version`, in feed order.
    ///
    /// Works for any release regardless of its stability flag, so it can
    /// serve lookups of older versions.
    pub fn files_for_version(&self, version: &str) -> Vec<&Artifact> {
        self.files
            .iter()
            .filter(|f| f.version == version && f.kind.is_archive())
            .collect()
    }

    /// Select the archive to install on `(arch, os)`.
    ///
    /// Walks [`Release::stable_files`] and returns the first file matching
    /// both platform halves that has a published digest. A miss is `None`;
    /// when several files qualify the earliest one in the feed wins.
    pub fn artifact_for_platform(&self, arch: &str, os: &str) -> Option<&Artifact> {
        first_published(self.stable_files(), arch, os)
    }

    /// Same selection as [`Release::artifact_for_platform`] without the
    /// stability gate, for callers that named this release explicitly.
    pub fn pinned_artifact_for_platform(&self, arch: &str, os: &str) -> Option<&Artifact> {
        first_published(self.files_for_version(&self.version), arch, os)
    }

    /// Files whose `version` disagrees with the release's own.
    ///
    /// The feed promises these are equal but nothing enforces it; such files
    /// are silently invisible to the version queries.
    pub fn inconsistent_files(&self) -> impl Iterator<Item = &Artifact> {
        self.files.iter().filter(move |f| f.version != self.version)
    }
}

fn first_published<'a>(files: Vec<&'a Artifact>, arch: &str, os: &str) -> Option<&'a Artifact> {
    files
        .into_iter()
        .find(|f| f.matches(arch, os) && f.is_published())
}
