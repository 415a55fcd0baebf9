use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::values::to_float_or_none;

pub const PL_NAME: &str = "pl_name";
pub const HOSTNAME: &str = "hostname";
pub const PL_RADE: &str = "pl_rade";
pub const PL_MASSE: &str = "pl_masse";
pub const PL_DENS: &str = "pl_dens";
pub const PL_EQT: &str = "pl_eqt";
pub const PL_ORBSMAX: &str = "pl_orbsmax";
pub const PL_ORBPER: &str = "pl_orbper";
pub const PL_ORBECCEN: &str = "pl_orbeccen";
pub const PL_ORBINCL: &str = "pl_orbincl";
pub const ST_TEFF: &str = "st_teff";
pub const ST_RAD: &str = "st_rad";
pub const ST_MASS: &str = "st_mass";
pub const ST_LUM: &str = "st_lum";
pub const ST_AGE: &str = "st_age";
pub const ST_MET: &str = "st_met";
pub const ST_SPECTYPE: &str = "st_spectype";
pub const SY_DIST: &str = "sy_dist";
pub const HZ_OHZIN: &str = "hz_ohzin";
pub const HZ_CHZIN: &str = "hz_chzin";
pub const HZ_CHZOUT: &str = "hz_chzout";
pub const HZ_OHZOUT: &str = "hz_ohzout";
pub const HZ_TEQA: &str = "hz_teqa";
pub const PL_ESI_HWC: &str = "pl_esi_hwc";
pub const HWC_PHI_CATEGORY: &str = "hwc_phi_category";

/// A single cell of a parameter record.
///
/// `Missing` deserializes from JSON `null`; numbers and strings map onto the
/// other two variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Missing,
    Number(f64),
    Text(String),
}

impl RecordValue {
    /// Parses a raw table cell: empty is missing, numeric text is a number.
    pub fn from_cell(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return RecordValue::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) => RecordValue::Number(v),
            Err(_) => RecordValue::Text(trimmed.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        match self {
            RecordValue::Missing => true,
            RecordValue::Number(v) => v.is_nan(),
            RecordValue::Text(s) => s.trim().is_empty(),
        }
    }
}

impl From<f64> for RecordValue {
    fn from(value: f64) -> Self {
        RecordValue::Number(value)
    }
}

impl From<&str> for RecordValue {
    fn from(value: &str) -> Self {
        RecordValue::Text(value.to_string())
    }
}

/// Flat key/value parameters for one planet, as produced by the merge step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterRecord {
    values: BTreeMap<String, RecordValue>,
}

impl ParameterRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&RecordValue> {
        self.values.get(key)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        to_float_or_none(self.get(key))
    }

    /// Non-empty trimmed text for `key`; numbers are rendered as-is.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            RecordValue::Missing => None,
            RecordValue::Number(v) if v.is_nan() => None,
            RecordValue::Number(v) => Some(v.to_string()),
            RecordValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
        }
    }

    pub fn is_missing(&self, key: &str) -> bool {
        self.get(key).is_none_or(RecordValue::is_missing)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<RecordValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Sets `key` only when the record has no usable value for it.
    pub fn fill_missing(&mut self, key: &str, value: RecordValue) -> bool {
        if value.is_missing() || !self.is_missing(key) {
            return false;
        }
        self.values.insert(key.to_string(), value);
        true
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<RecordValue>> FromIterator<(K, V)> for ParameterRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = ParameterRecord::new();
        for (k, v) in iter {
            record.set(k, v);
        }
        record
    }
}
