//! CLI integration tests

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Test context with an isolated godist home, so no user config leaks in
struct TestContext {
    temp_dir: TempDir,
    godist_home: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let godist_home = temp_dir.path().join(".godist");
        std::fs::create_dir_all(&godist_home).expect("failed to create godist home");
        Self {
            temp_dir,
            godist_home,
        }
    }

    fn godist_cmd(&self) -> Command {
        let bin_path = env!("CARGO_BIN_EXE_godist");
        let mut cmd = Command::new(bin_path);
        cmd.env("HOME", self.temp_dir.path());
        cmd.env("GODIST_HOME", &self.godist_home);
        cmd.env_remove("GODIST_FEED_URL");
        cmd
    }

    /// `godist --feed-file <fixture>`: never touches the network
    fn offline_cmd(&self) -> Command {
        let mut cmd = self.godist_cmd();
        cmd.arg("--feed-file").arg(fixture());
        cmd
    }
}

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/feed.json")
}

#[test]
fn test_help_command() {
    let ctx = TestContext::new();
    let output = ctx
        .godist_cmd()
        .arg("--help")
        .output()
        .expect("failed to run godist");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_list_linux_amd64() {
    let ctx = TestContext::new();
    let output = ctx
        .offline_cmd()
        .args(["list", "--os", "linux", "--arch", "amd64"])
        .output()
        .expect("failed to run godist");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Version: go1.22.5\tFilename: go1.22.5.linux-amd64.tar.gz\tOS: linux Arch: amd64 Size: 68958945\tSHA256: 904b924d435eaea086515bc63235b192ea441bd8c9b198c507e85009e6e4c7f0",
            "Version: go1.21.12\tFilename: go1.21.12.linux-amd64.tar.gz\tOS: linux Arch: amd64 Size: 66670916\tSHA256: 121ab58632787e18ae0caa8ae285b581f9470d0f6b3defde9e1600e211f583c5",
        ]
    );
}

#[test]
fn test_config_supplies_platform() {
    let ctx = TestContext::new();
    std::fs::write(
        ctx.godist_home.join("config.toml"),
        "os = \"darwin\"\narch = \"arm64\"\n",
    )
    .unwrap();

    let output = ctx
        .offline_cmd()
        .arg("list")
        .output()
        .expect("failed to run godist");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("go1.22.5.darwin-arm64.tar.gz"));
}

#[test]
fn test_files_unknown_version_fails() {
    let ctx = TestContext::new();
    let output = ctx
        .offline_cmd()
        .args(["files", "go0.0"])
        .output()
        .expect("failed to run godist");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Version 'go0.0' not found"));
}

#[test]
fn test_dockerfile_written_to_file() {
    let ctx = TestContext::new();
    let dest = ctx.temp_dir.path().join("Dockerfile");
    let output = ctx
        .offline_cmd()
        .args(["dockerfile", "--os", "linux", "--arch", "arm64", "--output"])
        .arg(&dest)
        .output()
        .expect("failed to run godist");
    assert!(output.status.success());

    let text = std::fs::read_to_string(&dest).expect("Dockerfile should exist");
    assert!(text.contains("ENV GOLANG_VERSION 1.22.5"));
    assert!(text.contains("go1.22.5.linux-arm64.tar.gz"));
}

#[test]
fn test_dockerfile_ignores_configured_os() {
    let ctx = TestContext::new();
    std::fs::write(
        ctx.godist_home.join("config.toml"),
        "os = \"darwin\"\narch = \"arm64\"\n",
    )
    .unwrap();

    let output = ctx
        .offline_cmd()
        .arg("dockerfile")
        .output()
        .expect("failed to run godist");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("url='https://golang.org/dl/go1.22.5.linux-arm64.tar.gz'"));
    assert!(!stdout.contains("darwin"));
}

#[test]
fn test_dockerfile_rejects_darwin_target() {
    let ctx = TestContext::new();
    let output = ctx
        .offline_cmd()
        .args(["dockerfile", "--platform", "darwin/arm64"])
        .output()
        .expect("failed to run godist");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("need a linux archive"));
}

#[test]
fn test_list_platform_flag() {
    let ctx = TestContext::new();
    let output = ctx
        .offline_cmd()
        .args(["list", "--platform", "linux/amd64"])
        .output()
        .expect("failed to run godist");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 2);

    let output = ctx
        .offline_cmd()
        .args(["list", "--platform", "linux"])
        .output()
        .expect("failed to run godist");
    assert!(!output.status.success());
}

#[test]
fn test_missing_feed_file_fails() {
    let ctx = TestContext::new();
    let output = ctx
        .godist_cmd()
        .args(["--feed-file", "/nonexistent/feed.json", "list"])
        .output()
        .expect("failed to run godist");
    assert!(!output.status.success());
}
