use serde::Serialize;

use crate::model::record::{
    HZ_CHZIN, HZ_CHZOUT, HZ_OHZIN, HZ_OHZOUT, HZ_TEQA, HOSTNAME, PL_DENS, PL_EQT, PL_MASSE,
    PL_ORBECCEN, PL_ORBINCL, PL_ORBPER, PL_ORBSMAX, PL_RADE, ParameterRecord, ST_AGE, ST_LUM,
    ST_MASS, ST_MET, ST_RAD, ST_SPECTYPE, ST_TEFF, SY_DIST,
};
use crate::model::thresholds::LIGHT_YEARS_PER_PARSEC;

/// Habitable-zone boundaries from the HZ Gallery catalog, in AU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HabitableZone {
    pub ohz_in: Option<f64>,
    pub chz_in: Option<f64>,
    pub chz_out: Option<f64>,
    pub ohz_out: Option<f64>,
    pub teqa: Option<f64>,
}

impl HabitableZone {
    /// `(ohz_in, chz_in, chz_out, ohz_out)` when all four are known.
    pub fn boundaries(&self) -> Option<(f64, f64, f64, f64)> {
        Some((self.ohz_in?, self.chz_in?, self.chz_out?, self.ohz_out?))
    }
}

/// Typed view of a parameter record. Every numeric field is finite or `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetParams {
    pub hostname: Option<String>,
    pub radius: Option<f64>,
    pub mass: Option<f64>,
    pub density: Option<f64>,
    pub eq_temp: Option<f64>,
    pub semi_major_axis: Option<f64>,
    pub period_days: Option<f64>,
    pub eccentricity: Option<f64>,
    pub inclination: Option<f64>,
    pub st_teff: Option<f64>,
    pub st_rad: Option<f64>,
    pub st_mass: Option<f64>,
    pub st_lum_log: Option<f64>,
    pub st_age: Option<f64>,
    pub st_met: Option<f64>,
    pub spectral_type: Option<String>,
    pub distance_pc: Option<f64>,
    pub habitable_zone: HabitableZone,
}

impl PlanetParams {
    pub fn distance_ly(&self) -> Option<f64> {
        self.distance_pc.map(|pc| pc * LIGHT_YEARS_PER_PARSEC)
    }

    /// First character of the spectral type, e.g. `G` for `G2 V`.
    pub fn spectral_class(&self) -> Option<char> {
        self.spectral_type.as_deref().and_then(|s| s.chars().next())
    }
}

pub fn normalize_record(record: &ParameterRecord) -> PlanetParams {
    let params = PlanetParams {
        hostname: record.text(HOSTNAME),
        radius: record.number(PL_RADE),
        mass: record.number(PL_MASSE),
        // Catalog rows use 0 for "not measured".
        density: record.number(PL_DENS).filter(|d| *d > 0.0),
        eq_temp: record.number(PL_EQT),
        semi_major_axis: record.number(PL_ORBSMAX),
        period_days: record.number(PL_ORBPER),
        eccentricity: record.number(PL_ORBECCEN),
        inclination: record.number(PL_ORBINCL),
        st_teff: record.number(ST_TEFF),
        st_rad: record.number(ST_RAD),
        st_mass: record.number(ST_MASS),
        st_lum_log: record.number(ST_LUM),
        st_age: record.number(ST_AGE),
        st_met: record.number(ST_MET),
        spectral_type: record.text(ST_SPECTYPE),
        distance_pc: record.number(SY_DIST),
        habitable_zone: HabitableZone {
            ohz_in: record.number(HZ_OHZIN),
            chz_in: record.number(HZ_CHZIN),
            chz_out: record.number(HZ_CHZOUT),
            ohz_out: record.number(HZ_OHZOUT),
            teqa: record.number(HZ_TEQA),
        },
    };
    tracing::debug!(
        radius = ?params.radius,
        mass = ?params.mass,
        density = ?params.density,
        eq_temp = ?params.eq_temp,
        st_teff = ?params.st_teff,
        spectral_type = ?params.spectral_type,
        "normalized planet parameters"
    );
    params
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_normalize.rs"]
mod tests;
