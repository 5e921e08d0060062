//! List command

use std::io::Write;

use anyhow::Result;
use godist_core::{Platform, ReleaseSource};
use tracing::debug;

use crate::render;

/// Print the selected archive of every stable release for `platform`.
///
/// Stable releases with nothing published for the platform are skipped.
pub async fn list(
    source: &dyn ReleaseSource,
    platform: &Platform,
    json: bool,
    quiet: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let feed = super::fetch(source).await?;
    let hits = feed.resolve(platform.arch(), platform.os());
    debug!(%platform, releases = feed.len(), matches = hits.len(), "resolved stable releases");

    if json {
        let files: Vec<_> = hits.iter().map(|&(_, file)| file).collect();
        return render::write_json(out, &files);
    }

    if hits.is_empty() && !quiet {
        eprintln!("No stable release publishes an archive for {platform}");
    }

    render::write_lines(
        out,
        hits.iter().map(|&(release, file)| (release.version.as_str(), file)),
    )
}
