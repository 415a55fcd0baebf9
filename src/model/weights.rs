use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const W_SIZE: &str = "Size";
pub const W_DENSITY: &str = "Density";
pub const W_HABITABLE_ZONE: &str = "Habitable Zone";
pub const W_MOONS: &str = "Presence of Moons";
pub const W_MAGNETIC: &str = "Magnetic Activity";
pub const W_SYSTEM_AGE: &str = "System Age";
pub const W_WATER: &str = "Water";
pub const W_ATMOSPHERE: &str = "Atmosphere";

pub const PHI_SOLID_SURFACE: &str = "Solid Surface";
pub const PHI_STABLE_ENERGY: &str = "Stable Energy";
pub const PHI_LIFE_COMPOUNDS: &str = "Life Compounds";
pub const PHI_STABLE_ORBIT: &str = "Stable Orbit";

pub const HABITABILITY_KEYS: [&str; 8] = [
    W_SIZE,
    W_DENSITY,
    W_HABITABLE_ZONE,
    W_MOONS,
    W_MAGNETIC,
    W_SYSTEM_AGE,
    W_WATER,
    W_ATMOSPHERE,
];

pub const PHI_KEYS: [&str; 4] = [
    PHI_SOLID_SURFACE,
    PHI_STABLE_ENERGY,
    PHI_LIFE_COMPOUNDS,
    PHI_STABLE_ORBIT,
];

pub const DEFAULT_HABITABILITY_WEIGHT: f64 = 1.0;
pub const DEFAULT_PHI_WEIGHT: f64 = 0.25;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read weight file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid weight JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid weight {group}.{key} = {value}: {reason}")]
    InvalidWeight {
        group: &'static str,
        key: String,
        value: f64,
        reason: &'static str,
    },
    #[error("unknown ESI mode '{0}' (expected 'weights' or 'similarity')")]
    UnknownEsiMode(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EsiMode {
    /// Mean of the Size, Density and Habitable Zone weights.
    #[default]
    Weights,
    /// Weighted geometric mean of Earth-similarity ratios.
    Similarity,
}

impl EsiMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EsiMode::Weights => "weights",
            EsiMode::Similarity => "similarity",
        }
    }
}

impl FromStr for EsiMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weights" => Ok(EsiMode::Weights),
            "similarity" => Ok(EsiMode::Similarity),
            other => Err(ConfigError::UnknownEsiMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    pub habitability: BTreeMap<String, f64>,
    pub phi: BTreeMap<String, f64>,
    pub esi_mode: EsiMode,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            habitability: HABITABILITY_KEYS
                .iter()
                .map(|k| (k.to_string(), DEFAULT_HABITABILITY_WEIGHT))
                .collect(),
            phi: PHI_KEYS
                .iter()
                .map(|k| (k.to_string(), DEFAULT_PHI_WEIGHT))
                .collect(),
            esi_mode: EsiMode::Weights,
        }
    }
}

impl WeightConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let mut config: WeightConfig = serde_json::from_str(text)?;
        config.fill_defaults();
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::info!(
            path = %path.display(),
            esi_mode = config.esi_mode.as_str(),
            "loaded weight configuration"
        );
        Ok(config)
    }

    /// Adds any known key the file left out, with its default value.
    pub fn fill_defaults(&mut self) {
        for key in HABITABILITY_KEYS {
            self.habitability
                .entry(key.to_string())
                .or_insert(DEFAULT_HABITABILITY_WEIGHT);
        }
        for key in PHI_KEYS {
            self.phi.entry(key.to_string()).or_insert(DEFAULT_PHI_WEIGHT);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, &value) in &self.habitability {
            check_weight("habitability", key, value, Some(1.0))?;
            if !HABITABILITY_KEYS.contains(&key.as_str()) {
                tracing::warn!(
                    key = key.as_str(),
                    "unknown habitability weight key; kept but unused"
                );
            }
        }
        for (key, &value) in &self.phi {
            check_weight("phi", key, value, None)?;
            if !PHI_KEYS.contains(&key.as_str()) {
                tracing::warn!(key = key.as_str(), "unknown PHI weight key; kept but unused");
            }
        }
        Ok(())
    }

    pub fn habitability_weight(&self, key: &str) -> Option<f64> {
        self.habitability.get(key).copied()
    }

    pub fn with_esi_mode(mut self, mode: EsiMode) -> Self {
        self.esi_mode = mode;
        self
    }
}

fn check_weight(
    group: &'static str,
    key: &str,
    value: f64,
    max: Option<f64>,
) -> Result<(), ConfigError> {
    let reason = if !value.is_finite() {
        Some("must be finite")
    } else if value < 0.0 {
        Some("must not be negative")
    } else if max.is_some_and(|m| value > m) {
        Some("must not exceed 1")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ConfigError::InvalidWeight {
            group,
            key: key.to_string(),
            value,
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/weights.rs"]
mod tests;
