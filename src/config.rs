//! # Configuration
//!
//! Optional YAML settings for the command-line tool.
//!
//! ```yaml
//! prefer-flat: true          # spell accidentals as flats
//! strum-speed: 40            # ms between strings (10-100)
//! volume: 0.7                # 0.0-1.0
//! muted: false
//! shape-library: shapes.yaml # replaces the built-in master shapes
//! ```
//!
//! Every key is optional. Out-of-range numbers are clamped with a warning
//! rather than rejected. A relative `shape-library` path is resolved against
//! the directory of the config file.

use crate::error::FretboardError;
use crate::playback::{
    StrumSettings, DEFAULT_STRUM_SPEED_MS, MAX_STRUM_SPEED_MS, MIN_STRUM_SPEED_MS,
};
use crate::shapes::ShapeLibrary;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Config file as written, before defaults and clamping.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawConfig {
    pub prefer_flat: Option<bool>,
    pub strum_speed: Option<i64>,
    pub volume: Option<f64>,
    pub muted: Option<bool>,
    pub shape_library: Option<PathBuf>,
}

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub prefer_flat: bool,
    pub strum: StrumSettings,
    pub shape_library: Option<PathBuf>,
}

impl Config {
    pub fn from_yaml_str(content: &str) -> Result<Self, FretboardError> {
        if content.trim().is_empty() {
            return Ok(Self::resolve(RawConfig::default()));
        }
        let raw: RawConfig = serde_yaml::from_str(content)
            .map_err(|e| FretboardError::ConfigError(e.to_string()))?;
        Ok(Self::resolve(raw))
    }

    pub fn load(path: &Path) -> Result<Self, FretboardError> {
        let content = fs::read_to_string(path).map_err(|source| FretboardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml_str(&content)?;

        if let (Some(library), Some(dir)) = (config.shape_library.as_mut(), path.parent()) {
            if library.is_relative() {
                *library = dir.join(&*library);
            }
        }

        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    fn resolve(raw: RawConfig) -> Self {
        let strum_speed = match raw.strum_speed {
            Some(speed) => {
                let clamped = speed.clamp(MIN_STRUM_SPEED_MS as i64, MAX_STRUM_SPEED_MS as i64);
                if clamped != speed {
                    warn!(requested = speed, used = clamped, "strum-speed out of range");
                }
                clamped as u32
            }
            None => DEFAULT_STRUM_SPEED_MS,
        };

        let mut strum = StrumSettings::default()
            .with_strum_speed(strum_speed)
            .with_muted(raw.muted.unwrap_or(false));
        if let Some(volume) = raw.volume {
            strum = strum.with_volume(volume);
            if strum.volume != volume {
                warn!(requested = volume, used = strum.volume, "volume out of range");
            }
        }

        Self {
            prefer_flat: raw.prefer_flat.unwrap_or(false),
            strum,
            shape_library: raw.shape_library,
        }
    }

    /// The configured shape library, or the built-in one.
    pub fn shape_library(&self) -> Result<ShapeLibrary, FretboardError> {
        match &self.shape_library {
            Some(path) => ShapeLibrary::from_path(path),
            None => ShapeLibrary::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_yaml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.prefer_flat);
        assert_eq!(config.strum.strum_speed_ms, 40);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_yaml_str(
            "prefer-flat: true\nstrum-speed: 25\nvolume: 0.5\nmuted: true\nshape-library: my.yaml\n",
        )
        .unwrap();
        assert!(config.prefer_flat);
        assert_eq!(config.strum, StrumSettings::new(25, 0.5, true));
        assert_eq!(config.shape_library, Some(PathBuf::from("my.yaml")));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let config = Config::from_yaml_str("strum-speed: -5\nvolume: 3.0\n").unwrap();
        assert_eq!(config.strum.strum_speed_ms, 10);
        assert_eq!(config.strum.volume, 1.0);

        let config = Config::from_yaml_str("strum-speed: 5000\n").unwrap();
        assert_eq!(config.strum.strum_speed_ms, 100);
    }

    #[test]
    fn test_malformed_yaml() {
        let err = Config::from_yaml_str("prefer-flat: [").unwrap_err();
        assert!(matches!(err, FretboardError::ConfigError(_)));

        let err = Config::from_yaml_str("strum-speed: fast\n").unwrap_err();
        assert!(matches!(err, FretboardError::ConfigError(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/fretboard.yaml")).unwrap_err();
        assert!(matches!(err, FretboardError::Io { .. }));
    }

    #[test]
    fn test_builtin_library_by_default() {
        let library = Config::default().shape_library().unwrap();
        assert!(!library.is_empty());
    }
}
