use crate::model::classification::{Classification, MassClass, TemperatureClass};

const ROCKY_RADIUS_LIMIT: f64 = 1.5;
const ROCKY_EXPONENT: f64 = 0.3;
const GASEOUS_EXPONENT: f64 = 0.5;

/// Mass in Earth masses implied by a radius in Earth radii.
pub fn estimate_mass_from_radius(radius: f64) -> f64 {
    if radius < ROCKY_RADIUS_LIMIT {
        radius.powf(1.0 / ROCKY_EXPONENT)
    } else {
        radius.powf(1.0 / GASEOUS_EXPONENT)
    }
}

/// Mass and temperature class for a planet. Never fails; missing inputs map
/// to the unknown classes.
pub fn classify_planet(
    mass: Option<f64>,
    radius: Option<f64>,
    temp: Option<f64>,
) -> Classification {
    let (mass_used, mass_estimated) = match (mass, radius) {
        (Some(m), _) => (Some(m), false),
        (None, Some(r)) if r > 0.0 => {
            let estimated = estimate_mass_from_radius(r);
            tracing::debug!(radius = r, mass = estimated, "estimated mass from radius");
            (Some(estimated), true)
        }
        _ => (None, false),
    };

    let classification = Classification {
        mass_class: MassClass::from_mass(mass_used),
        temperature_class: TemperatureClass::from_temperature(temp),
        mass_used,
        mass_estimated,
    };
    tracing::debug!(label = %classification.label(), "classified planet");
    classification
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_classify.rs"]
mod tests;
