//! Physical constants, reference values and habitable-zone fits shared by
//! the scoring stages.

pub const EARTH_DENSITY_G_CM3: f64 = 5.51;
pub const EARTH_RADIUS_REF: f64 = 1.0;
pub const EARTH_TEQ_REF_K: f64 = 255.0;

pub const SOLAR_TEFF_K: f64 = 5778.0;
pub const SOLAR_MASS_KG: f64 = 1.989e30;
pub const SOLAR_RADIUS_AU: f64 = 0.00465047;
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;
pub const SECONDS_PER_DAY: f64 = 86400.0;
pub const AU_PER_METER: f64 = 6.68459e-12;
pub const LIGHT_YEARS_PER_PARSEC: f64 = 3.26156;

pub const BOND_ALBEDO: f64 = 0.3;
pub const KELVIN_OFFSET: f64 = 273.15;

/// Used in place of a Gaussian width that collapses to zero.
pub const SIGMA_FLOOR: f64 = 0.1;

/// Reference temperature of the effective-flux polynomials.
pub const HZ_TEFF_PIVOT_K: f64 = 5780.0;

/// Quartic fit of the effective stellar flux at one habitable-zone limit,
/// in powers of `teff - 5780`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HzLimit {
    pub s_eff_sun: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub distance_scale: f64,
}

impl HzLimit {
    pub fn effective_flux(&self, teff: f64) -> f64 {
        let t = teff - HZ_TEFF_PIVOT_K;
        self.s_eff_sun + self.a * t + self.b * t.powi(2) + self.c * t.powi(3) + self.d * t.powi(4)
    }

    /// Orbital distance in AU of this limit, or 0 when the flux fit is not
    /// positive.
    pub fn distance_au(&self, luminosity: f64, teff: f64) -> f64 {
        let s_eff = self.effective_flux(teff);
        if s_eff > 0.0 {
            (luminosity / s_eff).sqrt() * self.distance_scale
        } else {
            0.0
        }
    }
}

pub const RECENT_VENUS: HzLimit = HzLimit {
    s_eff_sun: 1.766,
    a: 1.335e-4,
    b: 3.151e-9,
    c: -3.348e-12,
    d: 5.733e-16,
    distance_scale: 0.68,
};

pub const RUNAWAY_GREENHOUSE: HzLimit = HzLimit {
    s_eff_sun: 1.038,
    a: 1.246e-4,
    b: 2.874e-9,
    c: -3.06e-12,
    d: 5.279e-16,
    distance_scale: 1.0,
};

pub const MAXIMUM_GREENHOUSE: HzLimit = HzLimit {
    s_eff_sun: 0.3438,
    a: 5.894e-5,
    b: 1.628e-9,
    c: -1.698e-12,
    d: 2.92e-16,
    distance_scale: 1.0,
};

pub const EARLY_MARS: HzLimit = HzLimit {
    s_eff_sun: 0.3179,
    a: 5.451e-5,
    b: 1.526e-9,
    c: -1.598e-12,
    d: 2.747e-16,
    distance_scale: 1.35,
};

/// Interior-structure regime used for the magnetic moment estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamoRegime {
    pub rho0: f64,
    pub r0_factor: f64,
    pub flux_factor: f64,
}

pub const DYNAMO_ROCKY: DynamoRegime = DynamoRegime {
    rho0: 0.45,
    r0_factor: 1.8,
    flux_factor: 4.0,
};

pub const DYNAMO_ICE_GIANT: DynamoRegime = DynamoRegime {
    rho0: 0.18,
    r0_factor: 4.8,
    flux_factor: 20.0,
};

pub const DYNAMO_GAS_GIANT: DynamoRegime = DynamoRegime {
    rho0: 0.16,
    r0_factor: 16.0,
    flux_factor: 100.0,
};

pub const DYNAMO_ROCKY_MAX_RADIUS: f64 = 5.0;
pub const DYNAMO_ICE_GIANT_MAX_RADIUS: f64 = 15.0;
pub const TIDAL_LOCK_ALPHA: f64 = 0.05;
pub const TIDAL_LOCK_SCALE_AU: f64 = 0.06;

/// Escape-velocity Gaussian widths below and above the Earth value.
pub const ESCAPE_SIGMA_LOW: f64 = 1.0 / 3.0;
pub const ESCAPE_SIGMA_HIGH: f64 = (8.66 - 1.0) / 3.0;
pub const MAGNETIC_SIGMA: f64 = 1.0 / 3.0;

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
