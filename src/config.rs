//! Chart configuration: orb tolerance, canonical aspect table and the way
//! house numbers are rendered in text.
//!
//! Loaded from TOML; every field is optional and falls back to the default.
//!
//! ```toml
//! orb = 8.0
//! aspects = ["conjunction", "opposition", "trine", "square", "sextile"]
//! house_labels = "named"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::aspects::AspectKind;
use crate::error::{AstrologyError, Result};

/// Orb used unless configured otherwise.
pub const STANDARD_ORB: f64 = 6.0;
/// Wider orb for looser readings.
pub const WIDE_ORB: f64 = 8.0;
/// Exclusive upper bound on the orb. Below it a separation can fall inside at
/// most two adjacent windows, and table order decides between them.
pub const MAX_ORB: f64 = 30.0;

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV_VAR: &str = "ASTRAL_CONFIG";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseLabelStyle {
    /// "10", shown as "House 10" in report text
    #[default]
    Number,
    /// "House 10 (Midheaven)"
    Named,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub orb: f64,
    /// Canonical aspects in the order they are tested.
    pub aspects: Vec<AspectKind>,
    pub house_labels: HouseLabelStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            orb: STANDARD_ORB,
            aspects: AspectKind::ALL.to_vec(),
            house_labels: HouseLabelStyle::Number,
        }
    }
}

impl ChartConfig {
    pub fn with_orb(mut self, orb: f64) -> Self {
        self.orb = orb;
        self
    }

    pub fn with_house_labels(mut self, style: HouseLabelStyle) -> Self {
        self.house_labels = style;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_orb(self.orb)?;
        if self.aspects.is_empty() {
            return Err(AstrologyError::EmptyAspectTable);
        }
        Ok(())
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ChartConfig = toml::from_str(source).map_err(|e| AstrologyError::Config {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| AstrologyError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: ChartConfig = toml::from_str(&source).map_err(|e| AstrologyError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        log::debug!("loaded chart config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Config from the file named by `ASTRAL_CONFIG`, or the default when the
    /// variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

pub(crate) fn validate_orb(orb: f64) -> Result<()> {
    if !orb.is_finite() || orb < 0.0 || orb >= MAX_ORB {
        return Err(AstrologyError::InvalidOrb(orb));
    }
    Ok(())
}
