/// Target platform as named by the release feed (`GOOS` / `GOARCH` style).
///
/// Both halves are opaque strings compared by exact equality, so values the
/// feed introduces later (`loong64`, `wasip1`, ...) work without changes here.
///
/// # Example
///
/// ```
/// use godist_schema::Platform;
///
/// let platform: Platform = "linux/amd64".parse().unwrap();
/// assert_eq!(platform.os(), "linux");
/// assert_eq!(platform.arch(), "amd64");
/// assert_eq!(platform.to_string(), "linux/amd64");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Platform {
    os: String,
    arch: String,
}

/// Errors that can occur when parsing a [`Platform`] from `os/arch`.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PlatformError {
    /// The input has no `/` separating OS and architecture.
    #[error("Invalid platform '{0}': expected 'os/arch' (e.g. linux/amd64)")]
    MissingSeparator(String),

    /// One of the two components is empty.
    #[error("Invalid platform '{0}': os and arch must both be non-empty")]
    EmptyComponent(String),
}

impl Platform {
    /// Create a platform from feed-style OS and architecture names.
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// The platform this binary is running on, in feed naming.
    pub fn current() -> Self {
        Self::new(
            feed_os(std::env::consts::OS),
            feed_arch(std::env::consts::ARCH),
        )
    }

    /// Operating system name (e.g. `linux`, `darwin`, `windows`).
    pub fn os(&self) -> &str {
        &self.os
    }

    /// Architecture name (e.g. `amd64`, `arm64`).
    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// Replace the OS, keeping the architecture.
    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = os.into();
        self
    }

    /// Replace the architecture, keeping the OS.
    pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = arch.into();
        self
    }
}

/// Map a Rust target OS name onto the feed's naming.
fn feed_os(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

/// Map a Rust target architecture name onto the feed's naming.
fn feed_arch(arch: &str) -> &str {
    match arch {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "x86" => "386",
        "powerpc64" => "ppc64",
        other => other,
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

impl std::str::FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (os, arch) = s
            .split_once('/')
            .ok_or_else(|| PlatformError::MissingSeparator(s.to_string()))?;
        let (os, arch) = (os.trim(), arch.trim());
        if os.is_empty() || arch.is_empty() {
            return Err(PlatformError::EmptyComponent(s.to_string()));
        }
        Ok(Self::new(os, arch))
    }
}
