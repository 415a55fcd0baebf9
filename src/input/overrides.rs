use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;

use crate::input::planets::PlanetTable;
use crate::input::reader::open_maybe_gz;
use crate::input::{InputError, normalize_name};
use crate::model::record::RecordValue;

/// User parameter overrides keyed by normalized planet name.
///
/// One planet per line: `Kepler-452 b: pl_rade=2.4; st_age=6`. Values that
/// parse as numbers are stored as numbers, everything else as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    by_planet: BTreeMap<String, BTreeMap<String, RecordValue>>,
}

impl Overrides {
    pub fn parse(text: &str) -> Self {
        let mut overrides = Overrides::default();
        for (idx, line) in text.lines().enumerate() {
            overrides.parse_line(line, idx + 1);
        }
        overrides
    }

    pub fn load(path: &Path) -> Result<Self, InputError> {
        let reader = open_maybe_gz(path)?;
        let mut overrides = Overrides::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| InputError::io(path, e))?;
            overrides.parse_line(&line, idx + 1);
        }
        tracing::info!(path = %path.display(), planets = overrides.len(), "loaded overrides");
        Ok(overrides)
    }

    fn parse_line(&mut self, line: &str, line_no: usize) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }
        let Some((planet, params)) = line.split_once(':') else {
            tracing::warn!(line = line_no, "override line has no ':'; skipping");
            return;
        };
        let key = normalize_name(planet);
        if key.is_empty() {
            tracing::warn!(line = line_no, "override line has no planet name; skipping");
            return;
        }
        let entry = self.by_planet.entry(key).or_default();
        for param in params.split(';') {
            let Some((name, value)) = param.split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            entry.insert(name.to_string(), RecordValue::from_cell(value));
        }
    }

    pub fn get(&self, planet_name: &str) -> Option<&BTreeMap<String, RecordValue>> {
        self.by_planet.get(&normalize_name(planet_name))
    }

    /// Writes overrides into matching planets, replacing existing values.
    /// Returns how many planets were touched.
    pub fn apply(&self, planets: &mut PlanetTable) -> usize {
        let mut applied = 0;
        for (name, record) in planets.iter_mut() {
            let Some(values) = self.get(name) else {
                continue;
            };
            for (key, value) in values {
                record.set(key.as_str(), value.clone());
            }
            tracing::info!(planet = name, keys = values.len(), "applied parameter overrides");
            applied += 1;
        }
        applied
    }

    pub fn len(&self) -> usize {
        self.by_planet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_planet.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/overrides.rs"]
mod tests;
