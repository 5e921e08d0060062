//! Text, JSON and Dockerfile rendering of selected artifacts.

use std::io::Write;

use anyhow::{Result, bail};
use godist_core::{Artifact, Release};

/// Base image for generated Dockerfiles; ships `wget` and CA certificates.
pub const DEFAULT_BASE_IMAGE: &str = "buildpack-deps:bookworm-scm";

/// The only OS a generated Dockerfile can install; the base images are Debian.
pub const CONTAINER_OS: &str = "linux";

/// Where archives named in the feed are downloaded from.
pub const DOWNLOAD_BASE_URL: &str = "https://golang.org/dl/";

const GENERATED_WARNING: &str = r#"#
# NOTE: THIS DOCKERFILE IS GENERATED VIA "godist dockerfile"
#
# PLEASE DO NOT EDIT IT DIRECTLY.
#"#;

/// One tab-separated line describing an artifact of `version`.
pub fn format_line(version: &str, file: &Artifact) -> String {
    format!(
        "Version: {version}\tFilename: {}\tOS: {} Arch: {} Size: {}\tSHA256: {}",
        file.filename, file.os, file.arch, file.size, file.sha256
    )
}

/// Write one line per `(version, artifact)` pair.
pub fn write_lines<'a>(
    out: &mut dyn Write,
    rows: impl IntoIterator<Item = (&'a str, &'a Artifact)>,
) -> Result<()> {
    for (version, file) in rows {
        writeln!(out, "{}", format_line(version, file))?;
    }
    Ok(())
}

/// Write the artifacts as a pretty-printed JSON array.
pub fn write_json(out: &mut dyn Write, files: &[&Artifact]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, files)?;
    writeln!(out)?;
    Ok(())
}

/// Render a Dockerfile that downloads, checks and unpacks `file` into `/usr/local/go`.
///
/// The checksum is only embedded for `sha256sum -c` inside the image build;
/// nothing is downloaded here.
pub fn dockerfile(release: &Release, file: &Artifact, base: &str) -> Result<String> {
    if file.os != CONTAINER_OS {
        bail!(
            "{} is a {} archive; Dockerfiles need a {CONTAINER_OS} archive",
            file.filename,
            file.os
        );
    }
    if !file.filename.ends_with(".tar.gz") {
        bail!(
            "{} is not a .tar.gz archive; Dockerfiles can only unpack tarballs",
            file.filename
        );
    }
    let sha256 = file.sha256.validated().map_err(anyhow::Error::msg)?;
    let version = release.version.trim_start_matches("go");

    Ok(format!(
        r#"{GENERATED_WARNING}

FROM {base}

ENV GOLANG_VERSION {version}

RUN set -eux; \
    url='{DOWNLOAD_BASE_URL}{filename}'; \
    sha256='{sha256}'; \
    wget -O go.tgz.tmp "$url"; \
    echo "$sha256 *go.tgz.tmp" | sha256sum -c -; \
    tar -C /usr/local -xzf go.tgz.tmp; \
    rm go.tgz.tmp; \
    /usr/local/go/bin/go version

ENV GOPATH /go
ENV PATH $GOPATH/bin:/usr/local/go/bin:$PATH

WORKDIR $GOPATH
"#,
        filename = file.filename,
    ))
}
