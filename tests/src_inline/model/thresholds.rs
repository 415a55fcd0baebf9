use super::*;

#[test]
fn test_solar_habitable_zone_ordering() {
    let l = 1.0;
    let d1 = RECENT_VENUS.distance_au(l, SOLAR_TEFF_K);
    let d2 = RUNAWAY_GREENHOUSE.distance_au(l, SOLAR_TEFF_K);
    let d3 = MAXIMUM_GREENHOUSE.distance_au(l, SOLAR_TEFF_K);
    let d4 = EARLY_MARS.distance_au(l, SOLAR_TEFF_K);
    assert!(d1 < d2 && d2 < d3 && d3 < d4);
    assert!(d2 < 1.0 && d3 > 1.0);
}

#[test]
fn test_non_positive_flux_gives_zero_distance() {
    let limit = HzLimit {
        s_eff_sun: -1.0,
        a: 0.0,
        b: 0.0,
        c: 0.0,
        d: 0.0,
        distance_scale: 1.0,
    };
    assert_eq!(limit.distance_au(1.0, 5780.0), 0.0);
}
