//! Runtime configuration loaded from `~/.nebula/config.yaml`.
//!
//! Every field has a default matching the built-in constants, so a missing
//! file (or a file listing only a few keys) behaves like the stock menu.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{config_error, MenuResult};
use crate::stars::DEFAULT_STAR_COUNT;

pub const DEFAULT_FRAME_RATE: u32 = 60;
pub const DEFAULT_MAX_PARTICLES: usize = 4096;

/// A font file to try at startup and the family name it registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontCandidate {
    pub path: PathBuf,
    pub family: String,
}

impl FontCandidate {
    pub fn new(path: impl Into<PathBuf>, family: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            family: family.into(),
        }
    }
}

/// Built-in font search list, in priority order.
pub fn default_font_candidates() -> Vec<FontCandidate> {
    vec![
        FontCandidate::new("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf", "DejaVu Sans"),
        FontCandidate::new("/usr/share/fonts/TTF/DejaVuSans.ttf", "DejaVu Sans"),
        FontCandidate::new("/System/Library/Fonts/Helvetica.ttc", "Helvetica"),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Fonts to try in order; the first readable one is used
    pub font_candidates: Vec<FontCandidate>,

    /// Target frames per second for the tick subscription
    pub frame_rate: u32,

    /// Number of background stars
    pub star_count: usize,

    /// Upper bound on live particles; `None` leaves the store unbounded
    pub max_particles: Option<usize>,

    /// Emit particles from the active tab every 0.1s
    pub ambient_emission: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            font_candidates: default_font_candidates(),
            frame_rate: DEFAULT_FRAME_RATE,
            star_count: DEFAULT_STAR_COUNT,
            max_particles: Some(DEFAULT_MAX_PARTICLES),
            ambient_emission: true,
        }
    }
}

impl MenuConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MenuResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: MenuConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> MenuResult<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// `~/.nebula/config.yaml`, falling back to the working directory without a home.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".nebula")
            .join("config.yaml")
    }

    /// Loads the config at `path`, or defaults when the file does not exist.
    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> MenuResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn load_or_default() -> MenuResult<Self> {
        Self::load_or_default_from(Self::default_path())
    }

    pub fn validate(&self) -> MenuResult<()> {
        if self.frame_rate == 0 {
            return Err(config_error("frame_rate must be at least 1"));
        }
        if self.max_particles == Some(0) {
            return Err(config_error("max_particles must be at least 1 when set"));
        }
        Ok(())
    }

    /// Time between frame ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MenuError;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = MenuConfig::default();
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.star_count, 200);
        assert_eq!(config.max_particles, Some(4096));
        assert_eq!(config.font_candidates.len(), 3);
        assert!(config.ambient_emission);
        assert_eq!(config.tick_interval().as_micros(), 16_666);
    }

    #[test]
    fn test_tick_interval_matches_frame_rate() {
        for frame_rate in [24, 30, 60, 144] {
            let config = MenuConfig {
                frame_rate,
                ..MenuConfig::default()
            };
            let ticks_per_second = 1.0 / config.tick_interval().as_secs_f64();
            assert!((ticks_per_second - f64::from(frame_rate)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_save_and_load_config() -> MenuResult<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.yaml");

        let original = MenuConfig {
            frame_rate: 30,
            max_particles: None,
            ..MenuConfig::default()
        };
        original.save_to_file(&config_path)?;
        assert!(config_path.exists());

        let loaded = MenuConfig::load_from_file(&config_path)?;
        assert_eq!(loaded, original);
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> MenuResult<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "star_count: 50\n")?;

        let loaded = MenuConfig::load_from_file(&config_path)?;
        assert_eq!(loaded.star_count, 50);
        assert_eq!(loaded.frame_rate, DEFAULT_FRAME_RATE);
        Ok(())
    }

    #[test]
    fn test_zero_frame_rate_rejected() -> MenuResult<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "frame_rate: 0\n")?;

        let err = MenuConfig::load_from_file(&config_path).unwrap_err();
        assert!(matches!(err, MenuError::Config(_)));
        Ok(())
    }
}
