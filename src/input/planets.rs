use std::collections::BTreeMap;
use std::path::Path;

use crate::input::table::{Table, read_table};
use crate::input::{InputError, normalize_name};
use crate::model::record::{PL_NAME, ParameterRecord, RecordValue};

/// Planet records in file order, each carrying its display name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanetTable {
    planets: Vec<(String, ParameterRecord)>,
    index: BTreeMap<String, usize>,
}

impl PlanetTable {
    /// Adds a planet; a later row with the same normalized name replaces the
    /// earlier one in place.
    pub fn insert(&mut self, name: String, record: ParameterRecord) {
        let key = normalize_name(&name);
        match self.index.get(&key) {
            Some(&idx) => {
                tracing::warn!(planet = %name, "duplicate planet row; keeping the last one");
                self.planets[idx] = (name, record);
            }
            None => {
                self.index.insert(key, self.planets.len());
                self.planets.push((name, record));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParameterRecord> {
        self.index
            .get(&normalize_name(name))
            .map(|&idx| &self.planets[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterRecord)> {
        self.planets.iter().map(|(n, r)| (n.as_str(), r))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut ParameterRecord)> {
        self.planets.iter_mut().map(|(n, r)| (n.as_str(), r))
    }

    /// Keeps only the planets whose normalized names are in `names`.
    pub fn retain_names(&mut self, names: &[String]) {
        let wanted: Vec<String> = names.iter().map(|n| normalize_name(n)).collect();
        for name in names {
            if self.get(name).is_none() {
                tracing::warn!(planet = %name, "requested planet not found in input");
            }
        }
        let kept: Vec<(String, ParameterRecord)> = std::mem::take(&mut self.planets)
            .into_iter()
            .filter(|(n, _)| wanted.contains(&normalize_name(n)))
            .collect();
        *self = kept.into_iter().collect();
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

impl FromIterator<(String, ParameterRecord)> for PlanetTable {
    fn from_iter<T: IntoIterator<Item = (String, ParameterRecord)>>(iter: T) -> Self {
        let mut table = PlanetTable::default();
        for (name, record) in iter {
            table.insert(name, record);
        }
        table
    }
}

pub fn load_planets(path: &Path) -> Result<PlanetTable, InputError> {
    let table = read_table(path)?;
    let planets = planets_from_table(&table, path)?;
    tracing::info!(path = %path.display(), planets = planets.len(), "loaded planet records");
    Ok(planets)
}

pub fn planets_from_table(table: &Table, path: &Path) -> Result<PlanetTable, InputError> {
    let name_col = table.require_column(PL_NAME, path)?;
    let mut planets = PlanetTable::default();

    for row in 0..table.len() {
        let name = table.cell(row, name_col).trim();
        if name.is_empty() {
            tracing::warn!(row = row + 1, "row has no planet name; skipping");
            continue;
        }
        let mut record = ParameterRecord::new();
        for (col, header) in table.headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            if col == name_col {
                record.set(header.as_str(), name);
            } else {
                record.set(header.as_str(), RecordValue::from_cell(table.cell(row, col)));
            }
        }
        planets.insert(name.to_string(), record);
    }
    Ok(planets)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/planets.rs"]
mod tests;
