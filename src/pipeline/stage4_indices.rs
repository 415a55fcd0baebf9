use std::collections::BTreeMap;

use crate::model::classification::ClassTags;
use crate::model::thresholds::{EARTH_DENSITY_G_CM3, EARTH_RADIUS_REF, EARTH_TEQ_REF_K};
use crate::model::values::{clamp_percent, round_to};
use crate::model::weights::{
    DEFAULT_HABITABILITY_WEIGHT, DEFAULT_PHI_WEIGHT, EsiMode, PHI_KEYS, PHI_LIFE_COMPOUNDS,
    PHI_SOLID_SURFACE, PHI_STABLE_ENERGY, PHI_STABLE_ORBIT, W_DENSITY, W_HABITABLE_ZONE, W_SIZE,
    WeightConfig,
};
use crate::pipeline::stage1_normalize::PlanetParams;

const SPH_OPTIMAL_LOW: f64 = 273.15;
const SPH_OPTIMAL_HIGH: f64 = 323.15;
const PHI_SCALE: f64 = 400.0;

fn usable_weight(w: Option<f64>) -> Option<f64> {
    w.filter(|w| w.is_finite() && *w >= 0.0)
}

/// ESI as the mean of the Size, Density and Habitable Zone weights.
pub fn esi_from_weights(weights: &WeightConfig) -> f64 {
    let components: Vec<f64> = [W_SIZE, W_DENSITY, W_HABITABLE_ZONE]
        .iter()
        .filter_map(|k| usable_weight(weights.habitability_weight(k)))
        .collect();
    if components.is_empty() {
        tracing::debug!("no ESI weight components present");
        return 0.0;
    }
    let mean = components.iter().sum::<f64>() / components.len() as f64;
    round_to(clamp_percent(mean * 100.0), 2)
}

/// ESI as the weighted geometric mean of per-parameter similarity to Earth.
pub fn esi_from_similarity(params: &PlanetParams, weights: &WeightConfig) -> f64 {
    let pairs = [
        (params.radius, EARTH_RADIUS_REF, W_SIZE),
        (params.density, EARTH_DENSITY_G_CM3, W_DENSITY),
        (params.eq_temp, EARTH_TEQ_REF_K, W_HABITABLE_ZONE),
    ];
    let mut product = 1.0;
    let mut count = 0usize;
    for (value, earth, key) in pairs {
        let Some(p) = value else {
            continue;
        };
        let weight = usable_weight(weights.habitability_weight(key))
            .unwrap_or(DEFAULT_HABITABILITY_WEIGHT);
        let sum = p + earth;
        let similarity = if sum == 0.0 {
            0.0
        } else {
            (1.0 - ((p - earth) / sum).abs()).max(0.0)
        };
        product *= similarity.powf(weight);
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    let esi = product.powf(1.0 / count as f64) * 100.0;
    round_to(clamp_percent(esi), 2)
}

pub fn calculate_esi(params: &PlanetParams, weights: &WeightConfig) -> f64 {
    let esi = match weights.esi_mode {
        EsiMode::Weights => esi_from_weights(weights),
        EsiMode::Similarity => esi_from_similarity(params, weights),
    };
    tracing::debug!(esi, mode = weights.esi_mode.as_str(), "computed ESI");
    esi
}

/// Surface potential for habitability from equilibrium temperature.
pub fn calculate_sph(eq_temp: Option<f64>) -> f64 {
    let Some(t) = eq_temp else {
        return 0.0;
    };
    let score = if (SPH_OPTIMAL_LOW..=SPH_OPTIMAL_HIGH).contains(&t) {
        let mid = (SPH_OPTIMAL_LOW + SPH_OPTIMAL_HIGH) / 2.0;
        70.0 + (1.0 - (t - mid).abs() / (mid - SPH_OPTIMAL_LOW)) * 30.0
    } else if (250.0..SPH_OPTIMAL_LOW).contains(&t) || (t > SPH_OPTIMAL_HIGH && t <= 373.15) {
        40.0
    } else {
        10.0
    };
    round_to(clamp_percent(score), 2)
}

/// Mean of the four PHI slider weights scaled so equal 0.25 sliders give 100.
/// Keys outside the four sliders are ignored.
pub fn calculate_phi(phi_weights: &BTreeMap<String, f64>) -> f64 {
    let values: Vec<f64> = PHI_KEYS
        .iter()
        .filter_map(|k| usable_weight(phi_weights.get(*k).copied()))
        .collect();
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    round_to(clamp_percent(mean * PHI_SCALE), 2)
}

/// Seeds PHI sliders from what the record says about each factor.
pub fn suggest_phi_weights(
    tags: &ClassTags,
    spectral_type: Option<&str>,
    st_age: Option<f64>,
    eccentricity: Option<f64>,
) -> BTreeMap<String, f64> {
    let solid_surface = if tags.terran_or_superterran() { 0.8 } else { 0.0 };
    let stable_energy = match (spectral_type, st_age) {
        (Some(s), Some(age))
            if (s.starts_with('G') || s.starts_with('K')) && age > 1.0 && age < 8.0 =>
        {
            0.7
        }
        _ => 0.0,
    };
    let stable_orbit = match eccentricity {
        Some(e) if e < 0.2 => 0.9,
        _ => 0.0,
    };
    [
        (PHI_SOLID_SURFACE, solid_surface),
        (PHI_STABLE_ENERGY, stable_energy),
        (PHI_LIFE_COMPOUNDS, 0.0),
        (PHI_STABLE_ORBIT, stable_orbit),
    ]
    .into_iter()
    .map(|(k, presence)| (k.to_string(), DEFAULT_PHI_WEIGHT * presence))
    .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_indices.rs"]
mod tests;
