//! godist - Go release archive picker
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
//!
//! Reads the Go download feed and tells you which archive to fetch for a
//! platform.
//!
//! # Commands
//!
//! - `godist list`: the selected archive of every stable release
//! - `godist files <VERSION>`: every archive of one release
//! - `godist dockerfile`: a Dockerfile installing the selected archive
//! - `godist completions <SHELL>`: shell completions

pub mod cmd;
pub mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use godist_core::{Config, Platform};

#[derive(Debug, Parser)]
#[command(name = "godist")]
#[command(author, version, about = "godist - pick the right Go release archive for a platform")]
pub struct Cli {
    /// Release feed URL
    #[arg(long, global = true, env = "GODIST_FEED_URL")]
    pub url: Option<String>,

    /// Read the feed from a saved JSON file instead of the network (wins over --url)
    #[arg(long, global = true)]
    pub feed_file: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Target platform overrides. Unset halves come from the config file, then the host.
#[derive(Debug, Clone, Default, Args)]
pub struct PlatformArgs {
    /// Target platform as os/arch (e.g. linux/amd64)
    #[arg(long, conflicts_with_all = ["os", "arch"])]
    pub platform: Option<Platform>,

    /// Target operating system (e.g. linux, darwin, windows)
    #[arg(long)]
    pub os: Option<String>,

    /// Target architecture (e.g. amd64, arm64)
    #[arg(long)]
    pub arch: Option<String>,
}

impl PlatformArgs {
    pub fn resolve(&self, config: &Config) -> Platform {
        self.apply(config.platform())
    }

    /// Platform for a generated Dockerfile: the OS is always `linux` unless
    /// given on the command line, whatever the host or config file say.
    pub fn resolve_container(&self, config: &Config) -> Platform {
        self.apply(config.platform().with_os(render::CONTAINER_OS))
    }

    fn apply(&self, fallback: Platform) -> Platform {
        if let Some(platform) = &self.platform {
            return platform.clone();
        }
        let mut platform = fallback;
        if let Some(os) = &self.os {
            platform = platform.with_os(os.clone());
        }
        if let Some(arch) = &self.arch {
            platform = platform.with_arch(arch.clone());
        }
        platform
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the archive each stable release ships for a platform
    List {
        #[command(flatten)]
        platform: PlatformArgs,
        /// Print JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Show every archive of one release, stable or not
    Files {
        /// Version as spelled in the feed (e.g. go1.22.5)
        version: String,
        /// Print JSON instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Generate a Dockerfile that installs the selected archive
    Dockerfile {
        #[command(flatten)]
        platform: PlatformArgs,
        /// Pin a release instead of using the newest stable one
        #[arg(long)]
        version: Option<String>,
        /// Base image
        #[arg(long, default_value = render::DEFAULT_BASE_IMAGE)]
        base: String,
        /// Write to a file instead of stdout
        #[arg(long, num_args = 0..=1, default_missing_value = "Dockerfile")]
        output: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config_platform() {
        let config = Config {
            os: Some("linux".to_string()),
            arch: Some("amd64".to_string()),
            ..Config::default()
        };
        let args = PlatformArgs {
            arch: Some("arm64".to_string()),
            ..PlatformArgs::default()
        };
        assert_eq!(args.resolve(&config), Platform::new("linux", "arm64"));
    }

    #[test]
    fn platform_flag_parses_os_and_arch() {
        let config = Config {
            os: Some("windows".to_string()),
            ..Config::default()
        };
        let cli = Cli::parse_from(["godist", "list", "--platform", "darwin/arm64"]);
        match cli.command {
            Commands::List { platform, .. } => {
                assert_eq!(platform.resolve(&config), Platform::new("darwin", "arm64"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn malformed_platform_flag_is_rejected() {
        let err = Cli::try_parse_from(["godist", "list", "--platform", "linux"]).unwrap_err();
        assert!(err.to_string().contains("expected 'os/arch'"));

        let err = Cli::try_parse_from(["godist", "list", "--platform", "/amd64"]).unwrap_err();
        assert!(err.to_string().contains("must both be non-empty"));

        assert!(
            Cli::try_parse_from(["godist", "list", "--platform", "linux/amd64", "--os", "darwin"])
                .is_err()
        );
    }

    #[test]
    fn container_platform_ignores_configured_os() {
        let config = Config {
            os: Some("darwin".to_string()),
            arch: Some("arm64".to_string()),
            ..Config::default()
        };
        let args = PlatformArgs::default();
        assert_eq!(args.resolve_container(&config), Platform::new("linux", "arm64"));

        let args = PlatformArgs {
            os: Some("windows".to_string()),
            ..PlatformArgs::default()
        };
        assert_eq!(args.resolve_container(&config), Platform::new("windows", "arm64"));
    }

    #[test]
    fn bare_output_flag_defaults_to_dockerfile() {
        let cli = Cli::parse_from(["godist", "dockerfile", "--output"]);
        match cli.command {
            Commands::Dockerfile { output, .. } => {
                assert_eq!(output, Some(PathBuf::from("Dockerfile")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
