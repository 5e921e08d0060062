use dirs::home_dir;
use std::path::PathBuf;

/// Returns the godist home directory, or None if the user's home cannot be resolved.
///
/// `GODIST_HOME` overrides the default of `~/.godist`.
pub fn try_godist_home() -> Option<PathBuf> {
    if let Ok(val) = std::env::var("GODIST_HOME") {
        return Some(PathBuf::from(val));
    }
    home_dir().map(|h| h.join(".godist"))
}

/// Config file path: ~/.godist/config.toml
pub fn config_path() -> Option<PathBuf> {
    try_godist_home().map(|h| h.join("config.toml"))
}
