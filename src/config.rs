//! TOML-based viewer configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::data::annotate::ZoneMode;

/// Top-level viewer configuration parsed from TOML.
///
/// All fields have defaults matching the `uk` preset (the dataset's home
/// viewport). Load from TOML with [`ViewerConfig::from_toml_file`] or use
/// [`ViewerConfig::uk`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewerConfig {
    /// Dataset source parameters.
    #[serde(default)]
    pub data: DataConfig,
    /// Time zone semantics for year derivation.
    #[serde(default)]
    pub time: TimeConfig,
    /// Initial map viewport and theme.
    #[serde(default)]
    pub map: MapConfig,
    /// Year slider bounds.
    #[serde(default)]
    pub slider: SliderConfig,
}

/// Dataset source parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// Path to the GeoJSON dataset.
    pub path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: "wind_farms.json".to_string(),
        }
    }
}

/// Time zone semantics for timestamp→year derivation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeConfig {
    /// Zone mode: `"utc"` or `"fixed"`.
    pub zone: String,
    /// Offset east of UTC in minutes, used when `zone = "fixed"`.
    pub offset_minutes: i32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            zone: "utc".to_string(),
            offset_minutes: 0,
        }
    }
}

impl TimeConfig {
    /// Resolves the configured zone mode.
    ///
    /// Assumes [`ViewerConfig::validate`] has accepted the config; an
    /// unrecognized zone string falls back to UTC.
    pub fn zone_mode(&self) -> ZoneMode {
        if self.zone == "fixed" {
            ZoneMode::FixedOffsetMinutes(self.offset_minutes)
        } else {
            ZoneMode::Utc
        }
    }
}

/// Initial map viewport and theme.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// Initial center longitude (degrees).
    pub center_lon: f64,
    /// Initial center latitude (degrees).
    pub center_lat: f64,
    /// Initial zoom factor (>= 1.0; the visible span is `360° / zoom`).
    pub zoom: f64,
    /// Color theme: `"dark"` or `"light"`.
    pub theme: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lon: -3.2,
            center_lat: 55.0,
            zoom: 5.0,
            theme: "dark".to_string(),
        }
    }
}

/// Year slider bounds. Zero means "derive from the loaded data".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SliderConfig {
    /// Lowest selectable year (0 = earliest year in the data).
    pub min_year: i32,
    /// Highest selectable year (0 = latest year in the data).
    pub max_year: i32,
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"map.zoom"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ViewerConfig {
    /// Returns the default viewport over the UK (the dataset's home region).
    pub fn uk() -> Self {
        Self {
            data: DataConfig::default(),
            time: TimeConfig::default(),
            map: MapConfig::default(),
            slider: SliderConfig::default(),
        }
    }

    /// Returns a continental-scale viewport over Europe.
    pub fn europe() -> Self {
        Self {
            map: MapConfig {
                center_lon: 10.0,
                center_lat: 50.0,
                zoom: 2.0,
                ..MapConfig::default()
            },
            ..Self::uk()
        }
    }

    /// Returns a whole-world viewport.
    pub fn global() -> Self {
        Self {
            map: MapConfig {
                center_lon: 0.0,
                center_lat: 20.0,
                zoom: 1.0,
                ..MapConfig::default()
            },
            ..Self::uk()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["uk", "europe", "global"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "uk" => Ok(Self::uk()),
            "europe" => Ok(Self::europe()),
            "global" => Ok(Self::global()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.data.path.is_empty() {
            errors.push(ConfigError {
                field: "data.path".into(),
                message: "must not be empty".into(),
            });
        }

        let t = &self.time;
        if t.zone != "utc" && t.zone != "fixed" {
            errors.push(ConfigError {
                field: "time.zone".into(),
                message: format!("must be \"utc\" or \"fixed\", got \"{}\"", t.zone),
            });
        }
        // chrono rejects offsets of a day or more
        if t.offset_minutes.abs() >= 24 * 60 {
            errors.push(ConfigError {
                field: "time.offset_minutes".into(),
                message: "must be less than ±1440".into(),
            });
        }

        let m = &self.map;
        if !(-180.0..=180.0).contains(&m.center_lon) {
            errors.push(ConfigError {
                field: "map.center_lon".into(),
                message: "must be in [-180, 180]".into(),
            });
        }
        if !(-90.0..=90.0).contains(&m.center_lat) {
            errors.push(ConfigError {
                field: "map.center_lat".into(),
                message: "must be in [-90, 90]".into(),
            });
        }
        if !m.zoom.is_finite() || m.zoom < 1.0 {
            errors.push(ConfigError {
                field: "map.zoom".into(),
                message: "must be >= 1.0".into(),
            });
        }
        if m.theme != "dark" && m.theme != "light" {
            errors.push(ConfigError {
                field: "map.theme".into(),
                message: format!("must be \"dark\" or \"light\", got \"{}\"", m.theme),
            });
        }

        let s = &self.slider;
        if s.min_year != 0 && s.max_year != 0 && s.min_year > s.max_year {
            errors.push(ConfigError {
                field: "slider.min_year".into(),
                message: "must be <= slider.max_year".into(),
            });
        }

        errors
    }
}
