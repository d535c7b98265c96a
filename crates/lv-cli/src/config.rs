//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use lv_core::SegmentConfig;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Inactivity gap in milliseconds that ends a typing session.
    pub typing_timeout_ms: i64,

    /// Render timestamps in UTC instead of local time.
    pub utc: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            typing_timeout_ms: SegmentConfig::default().typing_timeout_ms,
            utc: false,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // LV_TYPING_TIMEOUT_MS, LV_UTC
        figment = figment.merge(Env::prefixed("LV_"));

        figment.extract()
    }

    pub const fn segment_config(&self) -> SegmentConfig {
        SegmentConfig {
            typing_timeout_ms: self.typing_timeout_ms,
        }
    }
}

/// Returns the platform-specific config directory for lv.
///
/// On Linux: `~/.config/lv`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("lv"))
}
