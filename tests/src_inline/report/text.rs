use super::*;
use crate::model::record::ParameterRecord;
use crate::model::weights::WeightConfig;
use crate::pipeline::HabitabilityEngine;
use crate::report::named_stats;

fn report(name: &str, radius: f64, temp: f64) -> PlanetReport {
    let record: ParameterRecord = [("pl_rade", radius), ("pl_masse", radius), ("pl_eqt", temp)]
        .into_iter()
        .collect();
    HabitabilityEngine::default().process_planet(name, &record)
}

#[test]
fn test_planet_text_sections() {
    let text = render_planet_text(&report("Gliese 12 b", 1.0, 288.0));
    assert!(text.starts_with("Gliese 12 b\n===========\n"));
    let sections = [
        "Indices\n",
        "SEPHI\n",
        "Host star\n",
        "Orbit\n",
        "Travel time\n",
        "Parameters\n",
    ];
    for section in sections {
        assert!(text.contains(section), "missing {section}");
    }
    assert!(text.contains("Habitable zone: N/A"));
    assert!(text.contains("unavailable"));
}

#[test]
fn test_report_ranks_by_esi() {
    let planets = vec![report("Beta", 1.0, 288.0), report("Alpha", 1.0, 288.0)];
    let weights = WeightConfig::default();
    let data = SummaryData {
        tool: "lifesearch",
        tool_version: "0.1.0",
        n_planets: planets.len(),
        weights: &weights,
        indices: vec![named_stats("ESI", &[])],
        classifications: Default::default(),
        planets: &planets,
    };
    let text = render_report_text(&data);
    assert!(text.contains("Planets scored: 2"));
    assert!(text.contains("ESI median: unavailable (p10 unavailable, p90 unavailable, n=0)"));
    assert!(text.contains("3. Classes\nnone\n"));
    let alpha = text.find("  1. Alpha").unwrap();
    let beta = text.find("  2. Beta").unwrap();
    assert!(alpha < beta);
}
