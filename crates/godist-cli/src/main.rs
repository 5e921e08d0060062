//! godist - Go release archive picker

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use godist_cli::cmd;
use godist_cli::cmd::dockerfile::DockerfileOptions;
use godist_cli::{Cli, Commands};
use godist_core::{Config, HttpFeed, ReleaseSource, StaticFeed};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        cmd::completions::completions(shell);
        return Ok(());
    }

    let config = Config::load().context("Failed to load configuration")?;
    let source = feed_source(&cli, &config)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::List { platform, json } => {
            let platform = platform.resolve(&config);
            cmd::list::list(source.as_ref(), &platform, json, cli.quiet, &mut stdout).await
        }
        Commands::Files { version, json } => {
            cmd::files::files(source.as_ref(), &version, json, cli.quiet, &mut stdout).await
        }
        Commands::Dockerfile {
            platform,
            version,
            base,
            output,
        } => {
            let platform = platform.resolve_container(&config);
            let opts = DockerfileOptions {
                platform: &platform,
                version: version.as_deref(),
                base: &base,
                output: output.as_deref(),
            };
            cmd::dockerfile::dockerfile(source.as_ref(), opts, &mut stdout).await
        }
        Commands::Completions { .. } => Ok(()),
    }
}

/// Pick the feed: a saved file, else the URL from flag/env, config, or the default.
fn feed_source(cli: &Cli, config: &Config) -> Result<Box<dyn ReleaseSource>> {
    if let Some(path) = &cli.feed_file {
        let feed = StaticFeed::from_path(path)?;
        return Ok(Box::new(feed));
    }

    let url = cli.url.as_deref().unwrap_or(config.feed_url());
    let feed = HttpFeed::new(url, config.timeout()).context("Failed to build HTTP client")?;
    Ok(Box::new(feed))
}
