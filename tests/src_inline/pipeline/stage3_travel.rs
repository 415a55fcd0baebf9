use super::*;

#[test]
fn test_travel_times_ten_light_years() {
    let t = travel_times(Some(10.0));
    assert_eq!(t.len(), 3);
    assert_eq!(t[0].label, "Current tech (~0.0057% c)");
    assert_eq!(t[0].time, "175438.6 years");
    assert_eq!(t[1].time, "50.0 years");
    assert_eq!(t[2].time, "10.0 years");
}

#[test]
fn test_travel_times_invalid_distance() {
    for d in [None, Some(0.0), Some(-4.0), Some(f64::NAN)] {
        let t = travel_times(d);
        assert!(t.iter().all(|x| x.time == "N/A"));
    }
}
