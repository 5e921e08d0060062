//! Dockerfile command

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use godist_core::{Platform, ReleaseSource};
use tracing::info;

use crate::render;

/// Options for [`dockerfile`].
#[derive(Debug, Clone, Copy)]
pub struct DockerfileOptions<'a> {
    pub platform: &'a Platform,
    /// Pinned release; `None` picks the newest stable release with a match.
    pub version: Option<&'a str>,
    pub base: &'a str,
    /// Write here instead of to `out`.
    pub output: Option<&'a Path>,
}

/// Render a Dockerfile installing the archive selected for the platform.
pub async fn dockerfile(
    source: &dyn ReleaseSource,
    opts: DockerfileOptions<'_>,
    out: &mut dyn Write,
) -> Result<()> {
    let feed = super::fetch(source).await?;
    let (arch, os) = (opts.platform.arch(), opts.platform.os());

    let (release, file) = match opts.version {
        Some(version) => {
            let release = feed.find(version).with_context(|| {
                format!("Version '{version}' not found in {}", source.location())
            })?;
            let file = release
                .pinned_artifact_for_platform(arch, os)
                .with_context(|| {
                    format!("{version} has no published archive for {}", opts.platform)
                })?;
            (release, file)
        }
        None => feed
            .resolve(arch, os)
            .into_iter()
            .next()
            .with_context(|| {
                format!("No stable release publishes an archive for {}", opts.platform)
            })?,
    };

    let text = render::dockerfile(release, file, opts.base)?;

    match opts.output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), version = %release.version, "wrote Dockerfile");
        }
        None => out.write_all(text.as_bytes())?,
    }
    Ok(())
}
