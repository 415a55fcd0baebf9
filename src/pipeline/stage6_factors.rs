use crate::model::classification::{Classification, ClassTags};
use crate::model::scores::{Score, ScoreBundle, ScoreKey, ScoreScale, describe_score};
use crate::model::thresholds::{BOND_ALBEDO, KELVIN_OFFSET, SOLAR_RADIUS_AU};
use crate::pipeline::stage1_normalize::{HabitableZone, PlanetParams};

const BOILING_POINT_K: f64 = 373.15;
const WATER_TOO_HOT_K: f64 = 1000.0;

fn absent() -> Score {
    Score::percent(0.0).with_description("Unknown")
}

pub fn size_score(radius: Option<f64>, tags: &ClassTags) -> Score {
    let Some(r) = radius else {
        return Score::percent(0.0);
    };
    let value = if tags.terran && (0.8..=1.5).contains(&r) {
        100.0
    } else if (tags.small_rocky() && (0.5..0.8).contains(&r))
        || (tags.terran && r > 1.5 && r <= 2.0)
        || (tags.superterran && r <= 2.5)
    {
        90.0
    } else if (tags.superterran && r > 2.5 && r <= 4.5) || (tags.neptunian && r <= 5.0) {
        70.0
    } else {
        30.0
    };
    Score::percent(value)
}

pub fn density_score(density: Option<f64>, tags: &ClassTags) -> Score {
    let Some(d) = density else {
        return Score::percent(0.0);
    };
    let value = if tags.terran && (4.5..=6.5).contains(&d) {
        100.0
    } else if tags.terran_or_superterran() && ((3.0..4.5).contains(&d) || (d > 6.5 && d <= 8.0)) {
        90.0
    } else if (tags.small_rocky() || tags.superterran) && (d < 3.0 || d > 8.0) {
        70.0
    } else {
        50.0
    };
    Score::percent(value)
}

pub fn mass_score(mass: Option<f64>, tags: &ClassTags) -> Score {
    let Some(m) = mass else {
        return Score::percent(0.0);
    };
    let value = if tags.terran && (0.8..=1.5).contains(&m) {
        100.0
    } else if (tags.small_rocky() && (0.1..0.8).contains(&m))
        || (tags.terran && m > 1.5 && m <= 2.0)
        || (tags.superterran && m <= 5.0)
    {
        90.0
    } else if (tags.superterran && m > 5.0 && m <= 10.0) || (tags.neptunian && m <= 20.0) {
        70.0
    } else {
        30.0
    };
    Score::percent(value)
}

/// Equilibrium temperature from the host star, assuming a Bond albedo of 0.3.
pub fn estimate_equilibrium_temperature(params: &PlanetParams) -> Option<f64> {
    let teff = params.st_teff.filter(|t| *t > 0.0)?;
    let st_rad = params.st_rad.filter(|r| *r > 0.0)?;
    let a = params.semi_major_axis.filter(|a| *a > 0.0)?;
    let radius_au = st_rad * SOLAR_RADIUS_AU;
    Some(teff * (radius_au / (2.0 * a)).sqrt() * (1.0 - BOND_ALBEDO).powf(0.25))
}

/// Temperature used for the atmosphere and water factors: measured when
/// present, else estimated from the star.
pub fn surface_temperature(params: &PlanetParams) -> Option<f64> {
    params.eq_temp.or_else(|| {
        let estimated = estimate_equilibrium_temperature(params);
        if let Some(t) = estimated {
            tracing::debug!(temperature = t, "estimated equilibrium temperature from host star");
        }
        estimated
    })
}

fn temperature_value(temp: f64) -> f64 {
    if temp > KELVIN_OFFSET && temp <= BOILING_POINT_K {
        90.0
    } else if (200.0..=KELVIN_OFFSET).contains(&temp) || (temp > BOILING_POINT_K && temp <= 450.0) {
        50.0
    } else {
        20.0
    }
}

pub fn atmosphere_score(temp: Option<f64>) -> Score {
    let Some(t) = temp else {
        return absent();
    };
    let value = temperature_value(t);
    Score::percent(value).with_description(describe_score(value))
}

pub fn water_score(temp: Option<f64>) -> Score {
    let Some(t) = temp else {
        return absent();
    };
    let value = temperature_value(t);
    let description = if t > WATER_TOO_HOT_K {
        "Unlikely (Too Hot)"
    } else {
        describe_score(value)
    };
    Score::percent(value).with_description(description)
}

pub fn habitable_zone_score(
    orbit: Option<f64>,
    zone: &HabitableZone,
    st_lum_log: Option<f64>,
) -> Score {
    let value = match (orbit, zone.boundaries(), st_lum_log) {
        (Some(a), Some((ohz_in, chz_in, chz_out, ohz_out)), _) => {
            if chz_in <= a && a <= chz_out {
                95.0
            } else if (ohz_in <= a && a < chz_in) || (chz_out < a && a <= ohz_out) {
                65.0
            } else {
                20.0
            }
        }
        (Some(a), None, Some(lum_log)) => {
            let lum = 10f64.powf(lum_log);
            let inner = (lum / 1.1).sqrt();
            let outer = (lum / 0.53).sqrt();
            if inner <= a && a <= outer { 80.0 } else { 25.0 }
        }
        _ => 10.0,
    };
    Score::percent(value)
}

pub fn host_star_score(spectral_class: Option<char>) -> Score {
    let value = match spectral_class {
        None => 0.0,
        Some('G') => 95.0,
        Some('K') => 85.0,
        Some('F') => 70.0,
        Some('M') => 60.0,
        Some(_) => 30.0,
    };
    Score::percent(value)
}

pub fn system_age_score(age: Option<f64>) -> Score {
    let value = match age {
        None => 0.0,
        Some(a) if (1.0..=8.0).contains(&a) => 90.0,
        Some(a) if (0.5..1.0).contains(&a) || (a > 8.0 && a <= 10.0) => 60.0,
        Some(_) => 30.0,
    };
    Score::percent(value)
}

pub fn metallicity_score(met: Option<f64>) -> Score {
    let value = match met {
        None => 0.0,
        Some(m) if (-0.5..=0.5).contains(&m) => 90.0,
        Some(m) if (-1.0..-0.5).contains(&m) || (m > 0.5 && m <= 1.0) => 60.0,
        Some(_) => 30.0,
    };
    Score::percent(value)
}

pub fn eccentricity_score(ecc: Option<f64>) -> Score {
    let value = match ecc {
        None => 0.0,
        Some(e) if e <= 0.1 => 95.0,
        Some(e) if e <= 0.3 => 70.0,
        Some(e) if e <= 0.5 => 40.0,
        Some(_) => 10.0,
    };
    Score::new(value, ScoreScale::LowIsGood)
}

fn magnetic_description(value: f64) -> &'static str {
    if value >= 70.0 {
        "High"
    } else if value >= 40.0 {
        "Moderate"
    } else if value > 0.0 {
        "Low"
    } else {
        "Unknown"
    }
}

pub fn magnetic_activity_score(
    mass: Option<f64>,
    tags: &ClassTags,
    spectral_class: Option<char>,
) -> Score {
    let value = match mass {
        Some(m) => {
            let base: f64 = if m >= 50.0 {
                85.0
            } else if (0.5..10.0).contains(&m) && tags.terran_or_superterran() {
                80.0
            } else if (10.0..50.0).contains(&m) {
                70.0
            } else if (0.1..0.5).contains(&m) {
                50.0
            } else {
                20.0
            };
            if spectral_class == Some('M') {
                (base - 20.0).max(0.0)
            } else {
                base
            }
        }
        None => match spectral_class {
            Some('G') | Some('K') => 60.0,
            Some('F') => 50.0,
            Some('M') => 40.0,
            Some(_) => 30.0,
            None => 0.0,
        },
    };
    Score::percent(value).with_description(magnetic_description(value))
}

pub fn moons_score(mass: Option<f64>, orbit: Option<f64>) -> Score {
    let (value, description) = match mass {
        None => (0.0, "Unlikely"),
        Some(m) if m >= 10.0 => {
            if orbit.is_none_or(|a| a >= 0.5) {
                (90.0, "Likely")
            } else {
                (60.0, "Possible")
            }
        }
        Some(m) if m >= 0.5 => {
            if orbit.is_some_and(|a| a >= 1.0) {
                (75.0, "Highly Possible")
            } else {
                (50.0, "Possible")
            }
        }
        Some(_) => (20.0, "Unlikely"),
    };
    Score::percent(value).with_description(description)
}

/// The eleven per-factor scores for one planet.
pub fn score_factors(params: &PlanetParams, classification: &Classification) -> ScoreBundle {
    let tags = classification.tags();
    let spectral_class = params.spectral_class();
    let temperature = surface_temperature(params);

    let mut bundle = ScoreBundle::new();
    bundle.insert(ScoreKey::Size, size_score(params.radius, &tags));
    bundle.insert(ScoreKey::Density, density_score(params.density, &tags));
    bundle.insert(ScoreKey::Mass, mass_score(params.mass, &tags));
    bundle.insert(ScoreKey::AtmospherePotential, atmosphere_score(temperature));
    bundle.insert(ScoreKey::LiquidWaterPotential, water_score(temperature));
    bundle.insert(
        ScoreKey::HabitableZonePosition,
        habitable_zone_score(params.semi_major_axis, &params.habitable_zone, params.st_lum_log),
    );
    bundle.insert(ScoreKey::HostStarType, host_star_score(spectral_class));
    bundle.insert(ScoreKey::SystemAge, system_age_score(params.st_age));
    bundle.insert(ScoreKey::StarMetallicity, metallicity_score(params.st_met));
    bundle.insert(ScoreKey::OrbitalEccentricity, eccentricity_score(params.eccentricity));
    bundle.insert(
        ScoreKey::MagneticActivity,
        magnetic_activity_score(params.mass, &tags, spectral_class),
    );
    bundle.insert(
        ScoreKey::PresenceOfMoons,
        moons_score(params.mass, params.semi_major_axis),
    );

    for (key, score) in bundle.iter() {
        tracing::debug!(factor = key.label(), value = ?score.value(), "factor score");
    }
    bundle
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_factors.rs"]
mod tests;
