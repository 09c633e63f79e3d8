//! Runtime configuration, read from a TOML file.  Every field has a default, so an empty file (or
//! no file at all) is a valid configuration.
//!
//! ```toml
//! [render]
//! variant = "ring"        # Variant used when none is requested
//! size = 128              # Output size in pixels
//!
//! [portrait]
//! canvas = 200            # Logical side length of dithered portraits
//! grid_size = 2           # Side length of one dither cell
//! contrast = 1.2
//! brightness = 0.05
//! primary = "#f5f5f5"     # Ink colour
//! secondary = "#11011d"   # Background colour
//!
//! [fetch]
//! timeout_secs = 10       # Bound on fetching a portrait's source image
//! ```

use std::{path::Path, path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    color::{hex, parse_hex, ParseColorError},
    compose::MAX_SIZE,
    dither::{DitherConfig, DEFAULT_TIMEOUT},
    patterns::Variant,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub portrait: PortraitConfig,
    pub fetch: FetchConfig,
}

/// Defaults for requests which don't say otherwise
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub variant: String,
    pub size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Avatar.name().to_owned(),
            size: 100,
        }
    }
}

/// Settings for dithered portraits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortraitConfig {
    pub canvas: u32,
    pub grid_size: u32,
    pub contrast: f64,
    pub brightness: f64,
    pub primary: String,
    pub secondary: String,
}

impl Default for PortraitConfig {
    fn default() -> Self {
        let dither = DitherConfig::default();
        Self {
            canvas: 200,
            grid_size: dither.grid_size,
            contrast: dither.contrast,
            brightness: dither.brightness,
            primary: hex(dither.primary),
            secondary: hex(dither.secondary),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Config {
    /// Reads and validates the config file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_owned(), e))?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = self.render.variant.parse::<Variant>() {
            return Err(ConfigError::Validation(format!("render.variant: {}", e)));
        }
        let check_size = |field: &str, value: u32| {
            if (1..=MAX_SIZE).contains(&value) {
                Ok(())
            } else {
                Err(ConfigError::Validation(format!(
                    "{} must be in 1..={}, not {}",
                    field, MAX_SIZE, value
                )))
            }
        };
        check_size("render.size", self.render.size)?;
        check_size("portrait.canvas", self.portrait.canvas)?;
        check_size("portrait.grid_size", self.portrait.grid_size)?;
        if !self.portrait.contrast.is_finite() || !self.portrait.brightness.is_finite() {
            return Err(ConfigError::Validation(
                "portrait.contrast and portrait.brightness must be finite".to_owned(),
            ));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "fetch.timeout_secs must be positive".to_owned(),
            ));
        }
        // Colours are checked by parsing them
        self.dither().map(|_| ())
    }

    /// The vectorizer settings described by the `[portrait]` section
    pub fn dither(&self) -> Result<DitherConfig, ConfigError> {
        let color = |field: &'static str, value: &str| {
            parse_hex(value).map_err(|source| ConfigError::Color { field, source })
        };
        Ok(DitherConfig {
            grid_size: self.portrait.grid_size,
            contrast: self.portrait.contrast,
            brightness: self.portrait.brightness,
            primary: color("portrait.primary", &self.portrait.primary)?,
            secondary: color("portrait.secondary", &self.portrait.secondary)?,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.fetch.timeout_secs)
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),
    #[error("invalid colour for `{field}`")]
    Color {
        field: &'static str,
        #[source]
        source: ParseColorError,
    },
    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use rgb::RGB8;

    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.render.variant, "avatar");
        assert_eq!(config.render.size, 100);
        assert_eq!(config.portrait.canvas, 200);
        assert_eq!(config.dither().unwrap(), DitherConfig::default());
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::from_toml_str(
            "[render]\nvariant = \"ring\"\n\n[portrait]\ngrid_size = 3\nprimary = \"#f00\"\n\n\
             [fetch]\ntimeout_secs = 4",
        )
        .unwrap();
        assert_eq!(config.render.variant, "ring");
        assert_eq!(config.render.size, 100);
        let dither = config.dither().unwrap();
        assert_eq!(dither.grid_size, 3);
        assert_eq!(dither.primary, RGB8::new(255, 0, 0));
        assert_eq!(dither.secondary, DitherConfig::default().secondary);
        assert_eq!(config.timeout(), Duration::from_secs(4));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            Config::from_toml_str("[render]\nvariant = \"hologram\""),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[render]\nsize = 0"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[portrait]\ngrid_size = 0"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            Config::from_toml_str("[portrait]\nsecondary = \"navy\""),
            Err(ConfigError::Color {
                field: "portrait.secondary",
                ..
            })
        ));
        assert!(matches!(
            Config::from_toml_str("[render]\nsize = \"big\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn missing_file() {
        let err = Config::load(Path::new("/no/such/avatars.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }
}
