use serde::Serialize;

use crate::model::values::NOT_AVAILABLE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelScenario {
    pub label: &'static str,
    pub fraction_of_c: f64,
}

pub const TRAVEL_SCENARIOS: [TravelScenario; 3] = [
    TravelScenario {
        label: "Current tech (~0.0057% c)",
        fraction_of_c: 0.000057,
    },
    TravelScenario {
        label: "20% speed of light",
        fraction_of_c: 0.20,
    },
    TravelScenario {
        label: "Near light speed (0.9999c)",
        fraction_of_c: 0.9999,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelTime {
    pub label: &'static str,
    pub time: String,
}

/// Travel time at each scenario speed, formatted as `"{years:.1} years"`.
pub fn travel_times(distance_ly: Option<f64>) -> Vec<TravelTime> {
    let distance = distance_ly.filter(|d| d.is_finite() && *d > 0.0);
    if distance.is_none() {
        tracing::debug!(?distance_ly, "travel times unavailable");
    }
    TRAVEL_SCENARIOS
        .iter()
        .map(|scenario| TravelTime {
            label: scenario.label,
            time: match distance {
                Some(d) => format!("{:.1} years", d / scenario.fraction_of_c),
                None => NOT_AVAILABLE.to_string(),
            },
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_travel.rs"]
mod tests;
