pub mod stage1_normalize;
pub mod stage2_classify;
pub mod stage3_travel;
pub mod stage4_indices;
pub mod stage5_sephi;
pub mod stage6_factors;
pub mod stage7_report;

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::model::classification::Classification;
use crate::model::record::{
    HOSTNAME, PL_ORBECCEN, PL_ORBINCL, PL_ORBPER, PL_ORBSMAX, ParameterRecord, ST_AGE, ST_LUM,
    ST_MASS, ST_MET, ST_RAD, ST_TEFF,
};
use crate::model::scores::{Score, ScoreBundle, ScoreKey, SephiBundle, SephiKey};
use crate::model::values::{NOT_AVAILABLE, format_number, format_text, format_value};
use crate::model::weights::{EsiMode, WeightConfig};
use crate::pipeline::stage1_normalize::{HabitableZone, PlanetParams, normalize_record};
use crate::pipeline::stage2_classify::classify_planet;
use crate::pipeline::stage3_travel::{TravelTime, travel_times};
use crate::pipeline::stage4_indices::{
    calculate_esi, calculate_phi, calculate_sph, suggest_phi_weights,
};
use crate::pipeline::stage5_sephi::{SephiInputs, calculate_sephi};
use crate::pipeline::stage6_factors::score_factors;

/// Raw record fields echoed into the report, with their display precision.
pub const DISPLAY_FIELDS: [(&str, usize); 18] = [
    ("pl_rade", 2),
    ("pl_masse", 2),
    ("pl_dens", 2),
    ("pl_eqt", 2),
    ("pl_orbper", 2),
    ("pl_orbsmax", 2),
    ("pl_orbeccen", 3),
    ("pl_orbincl", 2),
    ("sy_dist", 2),
    ("st_teff", 0),
    ("st_rad", 2),
    ("st_mass", 2),
    ("st_lum", 3),
    ("st_age", 2),
    ("st_met", 3),
    ("discoverymethod", 2),
    ("disc_year", 0),
    ("disc_facility", 2),
];

const TEXT_FIELDS: [&str; 2] = ["discoverymethod", "disc_facility"];
const CATALOG_FIELDS: [(&str, usize); 2] = [("pl_esi_hwc", 2), ("hwc_phi_category", 1)];

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub weights: WeightConfig,
    /// Replace the configured PHI sliders with per-planet suggestions.
    pub seed_phi_weights: bool,
}

impl EngineConfig {
    pub fn new(weights: WeightConfig) -> Self {
        Self {
            weights,
            seed_phi_weights: false,
        }
    }

    pub fn with_esi_mode(mut self, mode: EsiMode) -> Self {
        self.weights.esi_mode = mode;
        self
    }

    pub fn with_seeded_phi(mut self, seed: bool) -> Self {
        self.seed_phi_weights = seed;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(WeightConfig::default())
    }
}

/// Ordered `label -> display text` block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoBlock {
    entries: Vec<(&'static str, String)>,
}

impl InfoBlock {
    pub fn push(&mut self, key: &'static str, value: String) {
        self.entries.push((key, value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl Serialize for InfoBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitableZoneSummary {
    pub orbit_au: Option<f64>,
    #[serde(flatten)]
    pub zone: HabitableZone,
    pub description: String,
}

impl HabitableZoneSummary {
    fn new(orbit_au: Option<f64>, zone: HabitableZone) -> Self {
        let description = match zone.boundaries() {
            Some((ohz_in, chz_in, chz_out, ohz_out)) => format!(
                "{} AU (Cons: {}-{} AU, Opt: {}-{} AU, Src: HZ Gallery)",
                format_number(orbit_au, 2),
                format_number(Some(chz_in), 2),
                format_number(Some(chz_out), 2),
                format_number(Some(ohz_in), 2),
                format_number(Some(ohz_out), 2),
            ),
            None => NOT_AVAILABLE.to_string(),
        };
        Self {
            orbit_au,
            zone,
            description,
        }
    }
}

/// Everything computed for one planet. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetReport {
    pub planet_name: String,
    pub classification: Classification,
    pub scores: ScoreBundle,
    pub sephi: SephiBundle,
    pub travel: Vec<TravelTime>,
    pub star_info: InfoBlock,
    pub orbit_info: InfoBlock,
    pub habitable_zone: HabitableZoneSummary,
    pub display_fields: InfoBlock,
    pub phi_weights_used: BTreeMap<String, f64>,
}

impl PlanetReport {
    pub fn score(&self, key: ScoreKey) -> Option<f64> {
        self.scores.value(key)
    }

    pub fn sephi_value(&self) -> Option<f64> {
        self.sephi.value(SephiKey::Sephi)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HabitabilityEngine {
    config: EngineConfig,
}

impl HabitabilityEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Scores one planet. Missing data degrades individual scores and never
    /// fails the call.
    pub fn process_planet(&self, name: &str, record: &ParameterRecord) -> PlanetReport {
        tracing::info!(planet = name, "processing planet");
        let params = normalize_record(record);

        let classification = classify_planet(params.mass, params.radius, params.eq_temp);
        let tags = classification.tags();

        let distance_ly = params.distance_ly();
        let travel = travel_times(distance_ly);
        let star_info = star_info(record, &params, distance_ly);
        let orbit_info = orbit_info(record);
        let habitable_zone =
            HabitableZoneSummary::new(params.semi_major_axis, params.habitable_zone);

        let weights = &self.config.weights;
        let phi_weights_used = if self.config.seed_phi_weights {
            suggest_phi_weights(
                &tags,
                params.spectral_type.as_deref(),
                params.st_age,
                params.eccentricity,
            )
        } else {
            weights.phi.clone()
        };

        let mut scores = ScoreBundle::new();
        scores.insert(ScoreKey::Esi, Score::percent(calculate_esi(&params, weights)));
        scores.insert(ScoreKey::Sph, Score::percent(calculate_sph(params.eq_temp)));
        scores.insert(ScoreKey::Phi, Score::percent(calculate_phi(&phi_weights_used)));
        let factors = score_factors(&params, &classification);
        scores.extend(factors.iter().map(|(k, s)| (k, s.clone())));

        let sephi = calculate_sephi(&sephi_inputs(&params), name).to_bundle();

        let display_fields = display_fields(record);

        tracing::info!(
            planet = name,
            classification = %classification.label(),
            esi = ?scores.value(ScoreKey::Esi),
            sph = ?scores.value(ScoreKey::Sph),
            phi = ?scores.value(ScoreKey::Phi),
            "finished planet"
        );

        PlanetReport {
            planet_name: name.to_string(),
            classification,
            scores,
            sephi,
            travel,
            star_info,
            orbit_info,
            habitable_zone,
            display_fields,
            phi_weights_used,
        }
    }
}

fn sephi_inputs(params: &PlanetParams) -> SephiInputs {
    SephiInputs {
        planet_mass: params.mass,
        planet_radius: params.radius,
        orbital_period: params.period_days,
        stellar_mass: params.st_mass,
        stellar_radius: params.st_rad,
        stellar_teff: params.st_teff,
        system_age: params.st_age,
        planet_density: params.density,
    }
}

fn star_info(
    record: &ParameterRecord,
    params: &PlanetParams,
    distance_ly: Option<f64>,
) -> InfoBlock {
    let mut block = InfoBlock::default();
    block.push("name", format_text(record.get(HOSTNAME)));
    block.push(
        "type",
        params
            .spectral_type
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    );
    block.push("temperature_k", format_value(record.get(ST_TEFF), 0, NOT_AVAILABLE));
    block.push("radius_solar", format_value(record.get(ST_RAD), 2, NOT_AVAILABLE));
    block.push("mass_solar", format_value(record.get(ST_MASS), 2, NOT_AVAILABLE));
    block.push(
        "luminosity_log_solar",
        format_value(record.get(ST_LUM), 3, NOT_AVAILABLE),
    );
    block.push("age_gyr", format_value(record.get(ST_AGE), 2, NOT_AVAILABLE));
    block.push("metallicity_dex", format_value(record.get(ST_MET), 2, NOT_AVAILABLE));
    block.push("distance_ly", format_number(distance_ly, 2));
    block
}

fn orbit_info(record: &ParameterRecord) -> InfoBlock {
    let mut block = InfoBlock::default();
    block.push(
        "semi_major_axis_au",
        format_value(record.get(PL_ORBSMAX), 2, NOT_AVAILABLE),
    );
    block.push(
        "eccentricity",
        format_value(record.get(PL_ORBECCEN), 3, NOT_AVAILABLE),
    );
    block.push("period_days", format_value(record.get(PL_ORBPER), 2, NOT_AVAILABLE));
    block.push(
        "inclination_deg",
        format_value(record.get(PL_ORBINCL), 2, NOT_AVAILABLE),
    );
    block.push(
        "distance_from_star_au",
        format_value(record.get(PL_ORBSMAX), 2, NOT_AVAILABLE),
    );
    block
}

fn display_fields(record: &ParameterRecord) -> InfoBlock {
    let mut block = InfoBlock::default();
    for (key, precision) in DISPLAY_FIELDS {
        let value = if TEXT_FIELDS.contains(&key) {
            format_text(record.get(key))
        } else {
            format_value(record.get(key), precision, NOT_AVAILABLE)
        };
        block.push(key, value);
    }
    for (key, precision) in CATALOG_FIELDS {
        if !record.is_missing(key) {
            block.push(key, format_value(record.get(key), precision, NOT_AVAILABLE));
        }
    }
    block
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
