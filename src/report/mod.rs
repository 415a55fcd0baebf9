pub mod json;
pub mod text;

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::model::weights::WeightConfig;
use crate::pipeline::PlanetReport;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode report JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedStats {
    pub name: &'static str,
    pub n: usize,
    pub median: Option<f64>,
    pub p10: Option<f64>,
    pub p90: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData<'a> {
    pub tool: &'static str,
    pub tool_version: &'static str,
    pub n_planets: usize,
    pub weights: &'a WeightConfig,
    pub indices: Vec<NamedStats>,
    pub classifications: BTreeMap<String, usize>,
    pub planets: &'a [PlanetReport],
}

pub fn format_score(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "unavailable".to_string(),
    }
}

pub fn quantile_indexed(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    Some(sorted[idx])
}

pub fn median(values: &[f64]) -> Option<f64> {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[f64]) -> Option<f64> {
    quantile_indexed(values, 0.10)
}

pub fn p90(values: &[f64]) -> Option<f64> {
    quantile_indexed(values, 0.90)
}

pub fn named_stats(name: &'static str, values: &[f64]) -> NamedStats {
    NamedStats {
        name,
        n: values.len(),
        median: median(values),
        p10: p10(values),
        p90: p90(values),
    }
}

/// File-name-safe form of a planet name: lowercase ASCII alphanumerics
/// joined by single underscores.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    if out.is_empty() {
        out.push_str("planet");
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
