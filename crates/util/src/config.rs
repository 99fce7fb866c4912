//! Site configuration for the navigation controller.
//!
//! The configuration is a small JSON document holding the layout breakpoint,
//! the header scroll threshold, and the gallery containers whose images open
//! the lightbox. It lives at `~/.config/finclub/site.json` on most platforms
//! and may be relocated with [`CONFIG_PATH_ENV`]. Every field is optional; a
//! missing file means "use the defaults".

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "FINCLUB_CONFIG_PATH";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "site.json";

/// Viewports at or below this width use compact dropdowns.
pub const DEFAULT_COMPACT_MAX_WIDTH: u32 = 700;

/// Vertical offset beyond which the header is marked as scrolled.
pub const DEFAULT_HEADER_SCROLL_THRESHOLD: f64 = 20.0;

/// Error surfaced when the configuration file cannot be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure other than a missing file.
    #[error("site config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Tunables for the navigation controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Upper bound (inclusive) of the compact layout, in CSS pixels.
    pub compact_max_width: u32,
    /// Scroll offset that toggles the header "scrolled" marker.
    pub header_scroll_threshold: f64,
    /// Class names of containers whose images open the lightbox.
    pub gallery_containers: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            compact_max_width: DEFAULT_COMPACT_MAX_WIDTH,
            header_scroll_threshold: DEFAULT_HEADER_SCROLL_THRESHOLD,
            gallery_containers: vec!["olympiad-gallery".to_string(), "proof-visual".to_string()],
        }
    }
}

impl SiteConfig {
    /// Loads the configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(&default_config_path())
    }

    /// Loads the configuration from `path`. A missing file yields defaults,
    /// as does a file that fails to parse (with a warning).
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded site config");
                    Ok(config)
                }
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        error = %error,
                        "Failed to parse site config; using defaults"
                    );
                    Ok(Self::default())
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Whether `container` is one of the configured gallery containers.
    pub fn is_gallery(&self, container: &str) -> bool {
        self.gallery_containers.iter().any(|name| name == container)
    }
}

/// Resolves the config path, honoring [`CONFIG_PATH_ENV`].
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("finclub")
        .join(CONFIG_FILE_NAME)
}

/// Expands a leading `~` against the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let trimmed = path.trim();
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    match trimmed {
        "~" => home(),
        _ => match trimmed.strip_prefix("~/").or_else(|| trimmed.strip_prefix("~\\")) {
            Some(rest) => home().join(rest),
            None => PathBuf::from(trimmed),
        },
    }
}
