use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::model::scores::{ScoreKey, score_key_order, sephi_key_order};
use crate::model::weights::WeightConfig;
use crate::pipeline::PlanetReport;
use crate::report::json::render_summary_json;
use crate::report::text::{render_planet_text, render_report_text};
use crate::report::{ReportError, SummaryData, format_score, named_stats, slugify};

pub const TOOL_NAME: &str = "lifesearch";
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone)]
pub struct Stage7Input<'a> {
    pub planets: &'a [PlanetReport],
    pub weights: &'a WeightConfig,
}

/// Paths written by [`write_reports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReports {
    pub scores_tsv: PathBuf,
    pub summary_json: PathBuf,
    pub report_txt: PathBuf,
    pub planet_reports: Vec<PathBuf>,
}

pub fn write_reports(
    input: &Stage7Input<'_>,
    out_dir: &Path,
) -> Result<WrittenReports, ReportError> {
    create_dir(out_dir)?;

    let scores_tsv = out_dir.join("scores.tsv");
    write_scores_tsv(input.planets, &scores_tsv)?;

    let summary = build_summary(input);
    let summary_json = out_dir.join("summary.json");
    write_text(&summary_json, &render_summary_json(&summary)?)?;

    let report_txt = out_dir.join("report.txt");
    write_text(&report_txt, &render_report_text(&summary))?;

    let planets_dir = out_dir.join("planets");
    create_dir(&planets_dir)?;
    let mut planet_reports = Vec::with_capacity(input.planets.len());
    let mut used: BTreeMap<String, usize> = BTreeMap::new();
    for planet in input.planets {
        let slug = unique_slug(&mut used, &planet.planet_name);
        let path = planets_dir.join(format!("{slug}.txt"));
        write_text(&path, &render_planet_text(planet))?;
        planet_reports.push(path);
    }

    tracing::info!(
        out_dir = %out_dir.display(),
        planets = input.planets.len(),
        "reports written"
    );
    Ok(WrittenReports {
        scores_tsv,
        summary_json,
        report_txt,
        planet_reports,
    })
}

fn unique_slug(used: &mut BTreeMap<String, usize>, name: &str) -> String {
    let base = slugify(name);
    let count = used.entry(base.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        base
    } else {
        format!("{}_{}", base, count)
    }
}

fn build_summary<'a>(input: &Stage7Input<'a>) -> SummaryData<'a> {
    let collect = |key: ScoreKey| -> Vec<f64> {
        input
            .planets
            .iter()
            .filter_map(|p| p.score(key))
            .collect()
    };
    let sephi: Vec<f64> = input
        .planets
        .iter()
        .filter_map(PlanetReport::sephi_value)
        .collect();

    let mut classifications = BTreeMap::new();
    for p in input.planets {
        *classifications.entry(p.classification.label()).or_insert(0usize) += 1;
    }

    SummaryData {
        tool: TOOL_NAME,
        tool_version: TOOL_VERSION,
        n_planets: input.planets.len(),
        weights: input.weights,
        indices: vec![
            named_stats("ESI", &collect(ScoreKey::Esi)),
            named_stats("SPH", &collect(ScoreKey::Sph)),
            named_stats("PHI", &collect(ScoreKey::Phi)),
            named_stats("SEPHI", &sephi),
        ],
        classifications,
        planets: input.planets,
    }
}

fn write_scores_tsv(planets: &[PlanetReport], path: &Path) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut w = BufWriter::new(file);

    let mut header = vec!["planet".to_string(), "classification".to_string()];
    header.extend(score_key_order().iter().map(|k| k.label().to_string()));
    header.extend(sephi_key_order().iter().map(|k| k.label().to_string()));
    writeln!(w, "{}", header.join("\t")).map_err(|e| io_error(path, e))?;

    let mut order: Vec<&PlanetReport> = planets.iter().collect();
    order.sort_by(|a, b| a.planet_name.cmp(&b.planet_name));

    for p in order {
        let mut row = vec![sanitize(&p.planet_name), p.classification.label()];
        row.extend(score_key_order().iter().map(|&k| format_score(p.scores.value(k))));
        row.extend(sephi_key_order().iter().map(|&k| format_score(p.sephi.value(k))));
        writeln!(w, "{}", row.join("\t")).map_err(|e| io_error(path, e))?;
    }
    w.flush().map_err(|e| io_error(path, e))
}

fn sanitize(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}

fn create_dir(path: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(path).map_err(|e| io_error(path, e))
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut w = BufWriter::new(file);
    w.write_all(contents.as_bytes())
        .and_then(|_| w.flush())
        .map_err(|e| io_error(path, e))
}

fn io_error(path: &Path, source: std::io::Error) -> ReportError {
    ReportError::Io {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_report.rs"]
mod tests;
