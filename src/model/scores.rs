use std::collections::BTreeMap;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Discrete colour band attached to every score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreScale {
    HighIsGood,
    LowIsGood,
}

impl ColorLevel {
    pub fn for_percentage(value: f64, scale: ScoreScale) -> Self {
        if !value.is_finite() {
            return ColorLevel::Unavailable;
        }
        match scale {
            ScoreScale::HighIsGood => {
                if value >= 80.0 {
                    ColorLevel::Excellent
                } else if value >= 60.0 {
                    ColorLevel::Good
                } else if value >= 40.0 {
                    ColorLevel::Fair
                } else if value >= 20.0 {
                    ColorLevel::Poor
                } else {
                    ColorLevel::Critical
                }
            }
            ScoreScale::LowIsGood => {
                if value <= 10.0 {
                    ColorLevel::Excellent
                } else if value <= 25.0 {
                    ColorLevel::Good
                } else if value <= 50.0 {
                    ColorLevel::Fair
                } else if value <= 75.0 {
                    ColorLevel::Poor
                } else {
                    ColorLevel::Critical
                }
            }
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            ColorLevel::Excellent => "#4CAF50",
            ColorLevel::Good => "#8BC34A",
            ColorLevel::Fair => "#FFC107",
            ColorLevel::Poor => "#FF9800",
            ColorLevel::Critical => "#F44336",
            ColorLevel::Unavailable => "#757575",
        }
    }
}

impl Serialize for ColorLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreValue {
    Value(f64),
    Unavailable,
}

impl ScoreValue {
    pub fn as_f64(self) -> Option<f64> {
        match self {
            ScoreValue::Value(v) => Some(v),
            ScoreValue::Unavailable => None,
        }
    }
}

impl Serialize for ScoreValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ScoreValue::Value(v) => serializer.serialize_f64(*v),
            ScoreValue::Unavailable => serializer.serialize_str("unavailable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub value: ScoreValue,
    pub color: ColorLevel,
    pub description: Option<String>,
}

impl Score {
    pub fn new(value: f64, scale: ScoreScale) -> Self {
        Self {
            value: ScoreValue::Value(value),
            color: ColorLevel::for_percentage(value, scale),
            description: None,
        }
    }

    pub fn percent(value: f64) -> Self {
        Self::new(value, ScoreScale::HighIsGood)
    }

    pub fn unavailable() -> Self {
        Self {
            value: ScoreValue::Unavailable,
            color: ColorLevel::Unavailable,
            description: None,
        }
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn value(&self) -> Option<f64> {
        self.value.as_f64()
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Score", 3)?;
        st.serialize_field("value", &self.value)?;
        st.serialize_field("color", &self.color)?;
        st.serialize_field("description", &self.description)?;
        st.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreKey {
    Esi,
    Sph,
    Phi,
    Size,
    Density,
    Mass,
    AtmospherePotential,
    LiquidWaterPotential,
    HabitableZonePosition,
    HostStarType,
    SystemAge,
    StarMetallicity,
    OrbitalEccentricity,
    MagneticActivity,
    PresenceOfMoons,
}

impl ScoreKey {
    pub fn label(self) -> &'static str {
        match self {
            ScoreKey::Esi => "ESI",
            ScoreKey::Sph => "SPH",
            ScoreKey::Phi => "PHI",
            ScoreKey::Size => "Size",
            ScoreKey::Density => "Density",
            ScoreKey::Mass => "Mass",
            ScoreKey::AtmospherePotential => "Atmosphere Potential",
            ScoreKey::LiquidWaterPotential => "Liquid Water Potential",
            ScoreKey::HabitableZonePosition => "Habitable Zone Position",
            ScoreKey::HostStarType => "Host Star Type",
            ScoreKey::SystemAge => "System Age",
            ScoreKey::StarMetallicity => "Star Metallicity",
            ScoreKey::OrbitalEccentricity => "Orbital Eccentricity",
            ScoreKey::MagneticActivity => "Magnetic Activity",
            ScoreKey::PresenceOfMoons => "Presence of Moons",
        }
    }
}

pub fn score_key_order() -> &'static [ScoreKey] {
    &[
        ScoreKey::Esi,
        ScoreKey::Sph,
        ScoreKey::Phi,
        ScoreKey::Size,
        ScoreKey::Density,
        ScoreKey::Mass,
        ScoreKey::AtmospherePotential,
        ScoreKey::LiquidWaterPotential,
        ScoreKey::HabitableZonePosition,
        ScoreKey::HostStarType,
        ScoreKey::SystemAge,
        ScoreKey::StarMetallicity,
        ScoreKey::OrbitalEccentricity,
        ScoreKey::MagneticActivity,
        ScoreKey::PresenceOfMoons,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SephiKey {
    Sephi,
    L1Surface,
    L2EscapeVelocity,
    L3HabitableZone,
    L4MagneticField,
}

impl SephiKey {
    pub fn label(self) -> &'static str {
        match self {
            SephiKey::Sephi => "SEPHI",
            SephiKey::L1Surface => "L1 (Surface)",
            SephiKey::L2EscapeVelocity => "L2 (Escape Velocity)",
            SephiKey::L3HabitableZone => "L3 (Habitable Zone)",
            SephiKey::L4MagneticField => "L4 (Magnetic Field)",
        }
    }
}

pub fn sephi_key_order() -> &'static [SephiKey] {
    &[
        SephiKey::Sephi,
        SephiKey::L1Surface,
        SephiKey::L2EscapeVelocity,
        SephiKey::L3HabitableZone,
        SephiKey::L4MagneticField,
    ]
}

/// Ordered score map keyed by a closed key set.
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle<K: Ord> {
    entries: BTreeMap<K, Score>,
}

pub type ScoreBundle = Bundle<ScoreKey>;
pub type SephiBundle = Bundle<SephiKey>;

impl<K: Ord + Copy> Bundle<K> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, key: K, score: Score) {
        self.entries.insert(key, score);
    }

    pub fn get(&self, key: K) -> Option<&Score> {
        self.entries.get(&key)
    }

    pub fn value(&self, key: K) -> Option<f64> {
        self.get(key).and_then(Score::value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &Score)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Ord + Copy> Default for Bundle<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Copy> Extend<(K, Score)> for Bundle<K> {
    fn extend<T: IntoIterator<Item = (K, Score)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl Serialize for ScoreBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(k, v)| (k.label(), v)))
    }
}

impl Serialize for SephiBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(k, v)| (k.label(), v)))
    }
}

/// Qualitative reading of a percentage score.
pub fn describe_score(value: f64) -> &'static str {
    if value >= 70.0 {
        "Likely"
    } else if value >= 40.0 {
        "Possible"
    } else {
        "Unlikely"
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
