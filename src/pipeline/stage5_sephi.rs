use std::f64::consts::PI;

use crate::model::scores::{Score, SephiBundle, SephiKey, sephi_key_order};
use crate::model::thresholds::{
    AU_PER_METER, DYNAMO_GAS_GIANT, DYNAMO_ICE_GIANT, DYNAMO_ICE_GIANT_MAX_RADIUS, DYNAMO_ROCKY,
    DYNAMO_ROCKY_MAX_RADIUS, EARLY_MARS, EARTH_DENSITY_G_CM3, ESCAPE_SIGMA_HIGH,
    ESCAPE_SIGMA_LOW, GRAVITATIONAL_CONSTANT, MAGNETIC_SIGMA, MAXIMUM_GREENHOUSE, RECENT_VENUS,
    RUNAWAY_GREENHOUSE, SECONDS_PER_DAY, SIGMA_FLOOR, SOLAR_MASS_KG, SOLAR_TEFF_K,
    TIDAL_LOCK_ALPHA, TIDAL_LOCK_SCALE_AU,
};
use crate::model::values::round_to;

/// Inputs to SEPHI. Planet mass and radius are in Earth units, stellar mass
/// and radius in solar units, period in days and age in Gyr.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SephiInputs {
    pub planet_mass: Option<f64>,
    pub planet_radius: Option<f64>,
    pub orbital_period: Option<f64>,
    pub stellar_mass: Option<f64>,
    pub stellar_radius: Option<f64>,
    pub stellar_teff: Option<f64>,
    pub system_age: Option<f64>,
    pub planet_density: Option<f64>,
}

/// Likelihoods in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SephiComponents {
    pub sephi: f64,
    pub l1_surface: f64,
    pub l2_escape_velocity: f64,
    pub l3_habitable_zone: f64,
    pub l4_magnetic_field: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SephiResult {
    Available(SephiComponents),
    Unavailable { reason: String },
}

impl SephiResult {
    pub fn components(&self) -> Option<&SephiComponents> {
        match self {
            SephiResult::Available(c) => Some(c),
            SephiResult::Unavailable { .. } => None,
        }
    }

    pub fn to_bundle(&self) -> SephiBundle {
        let mut bundle = SephiBundle::new();
        match self {
            SephiResult::Available(c) => {
                bundle.insert(SephiKey::Sephi, Score::percent(round_to(c.sephi, 2)));
                bundle.insert(SephiKey::L1Surface, Score::percent(round_to(c.l1_surface, 1)));
                bundle.insert(
                    SephiKey::L2EscapeVelocity,
                    Score::percent(round_to(c.l2_escape_velocity, 1)),
                );
                bundle.insert(
                    SephiKey::L3HabitableZone,
                    Score::percent(round_to(c.l3_habitable_zone, 1)),
                );
                bundle.insert(
                    SephiKey::L4MagneticField,
                    Score::percent(round_to(c.l4_magnetic_field, 1)),
                );
            }
            SephiResult::Unavailable { .. } => {
                for &key in sephi_key_order() {
                    bundle.insert(key, Score::unavailable());
                }
            }
        }
        bundle
    }
}

fn gaussian(x: f64, mu: f64, sigma: f64) -> f64 {
    (-0.5 * ((x - mu) / sigma).powi(2)).exp()
}

fn floor_sigma(sigma: f64) -> f64 {
    if sigma == 0.0 { SIGMA_FLOOR } else { sigma }
}

fn surface_likelihood(pm: f64, pr: f64) -> f64 {
    let mu1 = pm.powf(0.27);
    let mu2 = pm.powf(0.5);
    let sigma = floor_sigma((mu2 - mu1) / 3.0);
    if pr <= mu1 {
        1.0
    } else if pr < mu2 {
        gaussian(pr, mu1, sigma)
    } else {
        0.0
    }
}

fn escape_velocity_likelihood(pm: f64, pr: f64) -> f64 {
    let gravity = pm / pr.powi(2);
    let v_rel = (gravity * pr).sqrt();
    if v_rel < 1.0 {
        gaussian(v_rel, 1.0, floor_sigma(ESCAPE_SIGMA_LOW))
    } else {
        gaussian(v_rel, 1.0, floor_sigma(ESCAPE_SIGMA_HIGH))
    }
}

/// Semi-major axis in AU from Kepler's third law.
pub fn semi_major_axis_au(stellar_mass: f64, period_days: f64) -> f64 {
    let mass_kg = stellar_mass * SOLAR_MASS_KG;
    let period_s = period_days * SECONDS_PER_DAY;
    let a_m = (GRAVITATIONAL_CONSTANT * mass_kg * period_s.powi(2) / (4.0 * PI.powi(2))).cbrt();
    a_m * AU_PER_METER
}

fn habitable_zone_likelihood(a: f64, sr: f64, st: f64) -> f64 {
    let luminosity = sr.powi(2) * (st / SOLAR_TEFF_K).powi(4);
    let d1 = RECENT_VENUS.distance_au(luminosity, st);
    let d2 = RUNAWAY_GREENHOUSE.distance_au(luminosity, st);
    let d3 = MAXIMUM_GREENHOUSE.distance_au(luminosity, st);
    let d4 = EARLY_MARS.distance_au(luminosity, st);
    tracing::debug!(a, d1, d2, d3, d4, "habitable zone limits");

    let sigma_inner = floor_sigma((d2 - d1) / 3.0);
    let sigma_outer = floor_sigma((d4 - d3) / 3.0);
    if d2 <= a && a <= d3 {
        1.0
    } else if a < d2 {
        if a < d1 { 0.0 } else { gaussian(a, d2, sigma_inner) }
    } else if a > d4 {
        0.0
    } else {
        gaussian(a, d3, sigma_outer)
    }
}

fn magnetic_likelihood(
    l1: f64,
    a: f64,
    pm: f64,
    pr: f64,
    sm: f64,
    sa: f64,
    density: Option<f64>,
) -> f64 {
    let rho = density.unwrap_or(EARTH_DENSITY_G_CM3 * pm / pr.powi(3));
    let a_lock = sm.cbrt()
        * (rho / EARTH_DENSITY_G_CM3).powf(-1.0 / 3.0)
        * (sa / 10.0).powf(1.0 / 6.0)
        * TIDAL_LOCK_SCALE_AU;
    let locked = a <= a_lock;

    let (alpha, rho0, r0, flux) = if l1 > 0.5 {
        let alpha = if locked { TIDAL_LOCK_ALPHA } else { 1.0 };
        (alpha, 1.0, pr, pr)
    } else {
        let regime = if pr <= DYNAMO_ROCKY_MAX_RADIUS {
            DYNAMO_ROCKY
        } else if pr <= DYNAMO_ICE_GIANT_MAX_RADIUS {
            DYNAMO_ICE_GIANT
        } else {
            DYNAMO_GAS_GIANT
        };
        (1.0, regime.rho0, regime.r0_factor * pr, regime.flux_factor * pr)
    };
    let moment = alpha * rho0.sqrt() * r0.powf(10.0 / 3.0) * flux.cbrt();
    tracing::debug!(a_lock, locked, moment, "magnetic moment estimate");
    if moment >= 1.0 {
        1.0
    } else {
        gaussian(moment, 1.0, floor_sigma(MAGNETIC_SIGMA))
    }
}

fn positive(name: &'static str, value: Option<f64>) -> Result<f64, String> {
    match value {
        Some(v) if v > 0.0 => Ok(v),
        Some(v) => Err(format!("{name} is not positive ({v})")),
        None => Err(format!("{name} is missing")),
    }
}

fn checked_inputs(inputs: &SephiInputs) -> Result<[f64; 7], String> {
    Ok([
        positive("pl_masse", inputs.planet_mass)?,
        positive("pl_rade", inputs.planet_radius)?,
        positive("pl_orbper", inputs.orbital_period)?,
        positive("st_mass", inputs.stellar_mass)?,
        positive("st_rad", inputs.stellar_radius)?,
        positive("st_teff", inputs.stellar_teff)?,
        positive("st_age", inputs.system_age)?,
    ])
}

/// Statistical-likelihood Exo-Planetary Habitability Index.
///
/// Fails closed: if any of the seven core inputs is missing or not positive
/// the result is `Unavailable`.
pub fn calculate_sephi(inputs: &SephiInputs, planet_name: &str) -> SephiResult {
    let [pm, pr, po, sm, sr, st, sa] = match checked_inputs(inputs) {
        Ok(values) => values,
        Err(reason) => {
            tracing::warn!(planet = planet_name, %reason, "SEPHI calculation skipped");
            return SephiResult::Unavailable { reason };
        }
    };

    let l1 = surface_likelihood(pm, pr);
    let l2 = escape_velocity_likelihood(pm, pr);
    let a = semi_major_axis_au(sm, po);
    let l3 = habitable_zone_likelihood(a, sr, st);
    let density = inputs.planet_density.filter(|d| *d > 0.0);
    let l4 = magnetic_likelihood(l1, a, pm, pr, sm, sa, density);

    let product = l1 * l2 * l3 * l4;
    let sephi = if product > 0.0 { product.powf(0.25) } else { 0.0 };
    let components = SephiComponents {
        sephi: sephi * 100.0,
        l1_surface: l1 * 100.0,
        l2_escape_velocity: l2 * 100.0,
        l3_habitable_zone: l3 * 100.0,
        l4_magnetic_field: l4 * 100.0,
    };
    tracing::info!(
        planet = planet_name,
        sephi = round_to(components.sephi, 2),
        l1 = round_to(components.l1_surface, 1),
        l2 = round_to(components.l2_escape_velocity, 1),
        l3 = round_to(components.l3_habitable_zone, 1),
        l4 = round_to(components.l4_magnetic_field, 1),
        "computed SEPHI"
    );
    SephiResult::Available(components)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_sephi.rs"]
mod tests;
