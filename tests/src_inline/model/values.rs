use super::*;

#[test]
fn test_to_float_or_none_cases() {
    assert_eq!(to_float_or_none(None), None);
    assert_eq!(to_float_or_none(Some(&RecordValue::Missing)), None);
    assert_eq!(to_float_or_none(Some(&RecordValue::Number(f64::NAN))), None);
    assert_eq!(to_float_or_none(Some(&RecordValue::Number(f64::INFINITY))), None);
    assert_eq!(to_float_or_none(Some(&RecordValue::from("abc"))), None);
    assert_eq!(to_float_or_none(Some(&RecordValue::from("   "))), None);
    assert_eq!(to_float_or_none(Some(&RecordValue::from("N/A"))), None);
    assert_eq!(to_float_or_none(Some(&RecordValue::from("nan"))), None);
    assert_eq!(to_float_or_none(Some(&RecordValue::Number(3.14))), Some(3.14));
    assert_eq!(to_float_or_none(Some(&RecordValue::from(" 42 "))), Some(42.0));
}

#[test]
fn test_format_value() {
    assert_eq!(format_value(None, 2, "N/A"), "N/A");
    assert_eq!(format_value(Some(&RecordValue::Missing), 2, "--"), "--");
    assert_eq!(format_value(Some(&RecordValue::Number(3.14159)), 2, "N/A"), "3.14");
    assert_eq!(format_value(Some(&RecordValue::from("42")), 2, "N/A"), "42.00");
    assert_eq!(format_value(Some(&RecordValue::from("abc")), 2, "N/A"), "N/A");
    assert_eq!(format_value(Some(&RecordValue::Number(5778.4)), 0, "N/A"), "5778");
}

#[test]
fn test_format_text() {
    assert_eq!(format_text(Some(&RecordValue::from(" G2V "))), "G2V");
    assert_eq!(format_text(Some(&RecordValue::from(""))), "N/A");
    assert_eq!(format_text(None), "N/A");
}

#[test]
fn test_clamp_and_round() {
    assert_eq!(clamp_percent(140.0), 100.0);
    assert_eq!(clamp_percent(-3.0), 0.0);
    assert_eq!(clamp_percent(f64::NAN), 0.0);
    assert_eq!(round_to(87.8234, 2), 87.82);
    assert_eq!(round_to(87.86, 1), 87.9);
}
