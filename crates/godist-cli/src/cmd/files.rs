//! Files command

use std::io::Write;

use anyhow::{Context, Result};
use godist_core::ReleaseSource;

use crate::render;

/// Print every archive of `version`, whether or not the release is stable.
pub async fn files(
    source: &dyn ReleaseSource,
    version: &str,
    json: bool,
    quiet: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let feed = super::fetch(source).await?;
    let release = feed
        .find(version)
        .with_context(|| format!("Version '{version}' not found in {}", source.location()))?;

    let archives = release.files_for_version(version);
    if json {
        return render::write_json(out, &archives);
    }

    if archives.is_empty() && !quiet {
        eprintln!("{version} has no archives");
    }

    render::write_lines(out, archives.into_iter().map(|file| (version, file)))
}
