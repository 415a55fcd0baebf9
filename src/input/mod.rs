use std::path::Path;

use thiserror::Error;

pub mod catalogs;
pub mod overrides;
pub mod planets;
pub mod reader;
pub mod table;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {path} line {line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },
    #[error("{path} has no '{column}' column")]
    MissingColumn { path: String, column: String },
}

impl InputError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Join key for planet names across sources: lowercase, only ASCII
/// alphanumerics, `-` and single spaces.
pub fn normalize_name(name: &str) -> String {
    let kept: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mod.rs"]
mod tests;
