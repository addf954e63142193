//! Path helpers for configuration, state and log files.
//!
//! Platform directories come from the `dirs` crate:
//!
//! - data: `~/.local/share/hacker-stories` (Linux), `~/Library/Application Support/hacker-stories` (macOS)
//! - config: `~/.config/hacker-stories/config.toml` (Linux)

use crate::Config;
use std::path::PathBuf;

/// Directory name used under the platform data and config directories.
const APP_DIR: &str = "hacker-stories";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "HACKER_STORIES_CONFIG";

/// Returns the data directory holding the state file and logs.
///
/// Uses `config.data_dir` when set (with `~` expanded), otherwise the platform
/// data directory. Falls back to `./.hacker-stories` when the platform does not
/// report one.
#[must_use]
pub fn get_data_dir(config: &Config) -> PathBuf {
    if let Some(dir) = &config.data_dir {
        return PathBuf::from(expand_tilde(dir));
    }

    dirs::data_dir().map_or_else(|| PathBuf::from(".hacker-stories"), |dir| dir.join(APP_DIR))
}

/// Returns the path of the persisted state file.
#[must_use]
pub fn get_state_path(config: &Config) -> PathBuf {
    get_data_dir(config).join("state.json")
}

/// Returns the path of the rotating log file.
#[must_use]
pub fn get_log_path(config: &Config) -> PathBuf {
    get_data_dir(config).join("hacker-stories.log")
}

/// Returns the configuration file path, if one can be determined.
///
/// [`CONFIG_ENV`] wins over the platform config directory.
#[must_use]
pub fn get_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(expand_tilde(&path)));
        }
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use hacker_stories::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/path"), "relative/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.to_string();
    };

    if path == "~" {
        home.to_string_lossy().into_owned()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_data_dir_wins() {
        let config = Config {
            data_dir: Some("/var/lib/stories".to_string()),
            ..Config::default()
        };

        assert_eq!(get_data_dir(&config), PathBuf::from("/var/lib/stories"));
        assert_eq!(get_state_path(&config), PathBuf::from("/var/lib/stories/state.json"));
        assert_eq!(get_log_path(&config), PathBuf::from("/var/lib/stories/hacker-stories.log"));
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home.to_string_lossy());
            assert_eq!(expand_tilde("~/notes"), home.join("notes").to_string_lossy());
        }
        assert_eq!(expand_tilde("~user/x"), "~user/x");
    }
}
