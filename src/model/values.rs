use crate::model::record::RecordValue;

pub const NOT_AVAILABLE: &str = "N/A";

/// Coerces a record cell to a finite float.
///
/// Missing cells, NaN, infinities, blank text and text that does not parse
/// all come back as `None`.
pub fn to_float_or_none(value: Option<&RecordValue>) -> Option<f64> {
    let parsed = match value? {
        RecordValue::Missing => None,
        RecordValue::Number(v) => Some(*v),
        RecordValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                match trimmed.parse::<f64>() {
                    Ok(v) => Some(v),
                    Err(_) => {
                        tracing::debug!(value = trimmed, "could not convert value to float");
                        None
                    }
                }
            }
        }
    };
    parsed.filter(|v| v.is_finite())
}

/// Formats a record cell with `precision` decimals, or `default` when it has
/// no numeric value.
pub fn format_value(value: Option<&RecordValue>, precision: usize, default: &str) -> String {
    match to_float_or_none(value) {
        Some(v) => format!("{:.*}", precision, v),
        None => default.to_string(),
    }
}

pub fn format_number(value: Option<f64>, precision: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{:.*}", precision, v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Display form for free-text cells (star names, spectral types).
pub fn format_text(value: Option<&RecordValue>) -> String {
    match value {
        Some(RecordValue::Text(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(RecordValue::Number(v)) if v.is_finite() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/values.rs"]
mod tests;
