use crate::model::scores::{Score, ScoreKey, score_key_order, sephi_key_order};
use crate::pipeline::PlanetReport;
use crate::report::{SummaryData, format_score};

fn score_line(label: &str, score: Option<&Score>) -> String {
    match score {
        Some(s) => {
            let mut line = format!(
                "  {:<26} {:>11}  {}",
                label,
                format_score(s.value()),
                s.color.hex()
            );
            if let Some(desc) = &s.description {
                line.push_str(&format!("  ({})", desc));
            }
            line.push('\n');
            line
        }
        None => format!("  {:<26} {:>11}\n", label, "unavailable"),
    }
}

pub fn render_planet_text(report: &PlanetReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", report.planet_name));
    out.push_str(&format!("{}\n", "=".repeat(report.planet_name.chars().count().max(1))));
    out.push_str(&format!("Classification: {}\n", report.classification.label()));
    out.push_str(&format!(
        "Habitable zone: {}\n\n",
        report.habitable_zone.description
    ));

    out.push_str("Indices\n");
    for &key in score_key_order() {
        out.push_str(&score_line(key.label(), report.scores.get(key)));
    }
    out.push('\n');

    out.push_str("SEPHI\n");
    for &key in sephi_key_order() {
        out.push_str(&score_line(key.label(), report.sephi.get(key)));
    }
    out.push('\n');

    out.push_str("Host star\n");
    for (k, v) in report.star_info.iter() {
        out.push_str(&format!("  {:<22} {}\n", k, v));
    }
    out.push('\n');

    out.push_str("Orbit\n");
    for (k, v) in report.orbit_info.iter() {
        out.push_str(&format!("  {:<22} {}\n", k, v));
    }
    out.push('\n');

    out.push_str("Travel time\n");
    for t in &report.travel {
        out.push_str(&format!("  {:<28} {}\n", t.label, t.time));
    }
    out.push('\n');

    out.push_str("Parameters\n");
    for (k, v) in report.display_fields.iter() {
        out.push_str(&format!("  {:<22} {}\n", k, v));
    }
    out
}

pub fn render_report_text(data: &SummaryData<'_>) -> String {
    let mut out = String::new();

    out.push_str("Exoplanet Habitability Report\n");
    out.push_str("=============================\n\n");

    out.push_str("1. Run\n");
    out.push_str(&format!("Planets scored: {}\n", data.n_planets));
    out.push_str(&format!("ESI mode: {}\n\n", data.weights.esi_mode.as_str()));

    out.push_str("2. Index distribution\n");
    for stats in &data.indices {
        out.push_str(&format!(
            "{} median: {} (p10 {}, p90 {}, n={})\n",
            stats.name,
            format_score(stats.median),
            format_score(stats.p10),
            format_score(stats.p90),
            stats.n
        ));
    }
    out.push('\n');

    out.push_str("3. Classes\n");
    if data.classifications.is_empty() {
        out.push_str("none\n");
    }
    for (label, count) in &data.classifications {
        out.push_str(&format!("{}: {}\n", label, count));
    }
    out.push('\n');

    out.push_str("4. Ranking by ESI\n");
    let mut ranked: Vec<&PlanetReport> = data.planets.iter().collect();
    ranked.sort_by(|a, b| {
        let ea = a.score(ScoreKey::Esi).unwrap_or(0.0);
        let eb = b.score(ScoreKey::Esi).unwrap_or(0.0);
        eb.partial_cmp(&ea)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.planet_name.cmp(&b.planet_name))
    });
    for (i, p) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {}  ESI {}  SPH {}  PHI {}  SEPHI {}\n",
            i + 1,
            p.planet_name,
            format_score(p.score(ScoreKey::Esi)),
            format_score(p.score(ScoreKey::Sph)),
            format_score(p.score(ScoreKey::Phi)),
            format_score(p.sephi_value())
        ));
    }
    out.push('\n');

    out.push_str("5. Planets\n\n");
    for p in data.planets {
        out.push_str(&render_planet_text(p));
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
