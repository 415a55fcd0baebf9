use std::collections::BTreeMap;
use std::path::Path;

use crate::input::planets::PlanetTable;
use crate::input::table::{Table, read_table};
use crate::input::{InputError, normalize_name};
use crate::model::record::{
    HWC_PHI_CATEGORY, HZ_CHZIN, HZ_CHZOUT, HZ_OHZIN, HZ_OHZOUT, HZ_TEQA, PL_EQT, PL_ESI_HWC,
    PL_MASSE, PL_ORBECCEN, PL_ORBPER, PL_ORBSMAX, PL_RADE, ParameterRecord, RecordValue, ST_AGE,
};
use crate::model::thresholds::KELVIN_OFFSET;

pub const HWC_NAME_COLUMN: &str = "P_NAME";
pub const HZ_GALLERY_NAME_COLUMN: &str = "PLANET";

/// Catalog column, record key and unit conversion.
type ColumnMap = (&'static str, &'static str, fn(f64) -> f64);

fn identity(v: f64) -> f64 {
    v
}

fn celsius_to_kelvin(v: f64) -> f64 {
    v + KELVIN_OFFSET
}

fn fraction_to_percent(v: f64) -> f64 {
    v * 100.0
}

const HWC_FILL_COLUMNS: [ColumnMap; 7] = [
    ("P_MASS", PL_MASSE, identity),
    ("P_RADIUS", PL_RADE, identity),
    ("P_PERIOD", PL_ORBPER, identity),
    ("P_SEMI_MAJOR_AXIS", PL_ORBSMAX, identity),
    ("P_ECCENTRICITY", PL_ORBECCEN, identity),
    ("P_SURFACE_TEMP_C", PL_EQT, celsius_to_kelvin),
    ("S_AGE", ST_AGE, identity),
];

const HWC_ESI_COLUMN: ColumnMap = ("P_ESI", PL_ESI_HWC, fraction_to_percent);
const HWC_HABITABLE_COLUMN: &str = "P_HABITABLE";

const HZ_GALLERY_FILL_COLUMNS: [ColumnMap; 5] = [
    ("OHZIN", HZ_OHZIN, identity),
    ("CHZIN", HZ_CHZIN, identity),
    ("CHZOUT", HZ_CHZOUT, identity),
    ("OHZOUT", HZ_OHZOUT, identity),
    ("TEQA", HZ_TEQA, identity),
];

/// Values one catalog row contributes to a planet record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogEntry {
    /// Applied only where the record has no value.
    pub fill: BTreeMap<&'static str, f64>,
    /// Always applied.
    pub overwrite: BTreeMap<&'static str, f64>,
}

impl CatalogEntry {
    /// Returns the number of keys written.
    pub fn apply(&self, record: &mut ParameterRecord) -> usize {
        let mut written = 0;
        for (&key, &value) in &self.fill {
            if record.fill_missing(key, RecordValue::Number(value)) {
                written += 1;
            }
        }
        for (&key, &value) in &self.overwrite {
            record.set(key, value);
            written += 1;
        }
        written
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Hwc,
    HzGallery,
}

impl CatalogKind {
    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::Hwc => "HWC",
            CatalogKind::HzGallery => "HZ Gallery",
        }
    }

    fn name_column(self) -> &'static str {
        match self {
            CatalogKind::Hwc => HWC_NAME_COLUMN,
            CatalogKind::HzGallery => HZ_GALLERY_NAME_COLUMN,
        }
    }
}

/// Local catalog keyed by normalized planet name.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    kind: CatalogKind,
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn load(kind: CatalogKind, path: &Path) -> Result<Self, InputError> {
        let table = read_table(path)?;
        let catalog = Self::from_table(kind, &table, path)?;
        tracing::info!(
            catalog = kind.label(),
            path = %path.display(),
            entries = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn from_table(
        kind: CatalogKind,
        table: &Table,
        path: &Path,
    ) -> Result<Self, InputError> {
        let name_col = table.require_column(kind.name_column(), path)?;
        let mut entries = BTreeMap::new();
        for row in 0..table.len() {
            let key = normalize_name(table.cell(row, name_col));
            if key.is_empty() {
                continue;
            }
            if entries.contains_key(&key) {
                tracing::debug!(
                    catalog = kind.label(),
                    planet = %key,
                    "duplicate catalog row ignored"
                );
                continue;
            }
            let entry = match kind {
                CatalogKind::Hwc => hwc_entry(table, row),
                CatalogKind::HzGallery => hz_gallery_entry(table, row),
            };
            entries.insert(key, entry);
        }
        Ok(Self { kind, entries })
    }

    pub fn get(&self, planet_name: &str) -> Option<&CatalogEntry> {
        self.entries.get(&normalize_name(planet_name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges matching entries into `planets`; returns how many planets matched.
    pub fn merge_into(&self, planets: &mut PlanetTable) -> usize {
        let mut matched = 0;
        for (name, record) in planets.iter_mut() {
            match self.get(name) {
                Some(entry) => {
                    let written = entry.apply(record);
                    matched += 1;
                    tracing::debug!(
                        catalog = self.kind.label(),
                        planet = name,
                        written,
                        "merged catalog entry"
                    );
                }
                None => {
                    tracing::debug!(catalog = self.kind.label(), planet = name, "no catalog entry");
                }
            }
        }
        matched
    }
}

fn numeric_cell(table: &Table, row: usize, column: &str) -> Option<f64> {
    let col = table.column(column)?;
    match RecordValue::from_cell(table.cell(row, col)) {
        RecordValue::Number(v) if v.is_finite() => Some(v),
        RecordValue::Text(raw) => {
            tracing::warn!(column, value = %raw, "could not convert catalog value");
            None
        }
        _ => None,
    }
}

fn map_columns(
    table: &Table,
    row: usize,
    columns: &[ColumnMap],
    out: &mut BTreeMap<&'static str, f64>,
) {
    for &(column, key, convert) in columns {
        if let Some(v) = numeric_cell(table, row, column) {
            out.insert(key, convert(v));
        }
    }
}

/// HWC `P_HABITABLE` flag as a PHI category.
pub fn phi_category(habitable: f64) -> f64 {
    if habitable == 0.0 {
        0.0
    } else if habitable == 1.0 {
        0.5
    } else {
        1.0
    }
}

fn hwc_entry(table: &Table, row: usize) -> CatalogEntry {
    let mut entry = CatalogEntry::default();
    map_columns(table, row, &HWC_FILL_COLUMNS, &mut entry.fill);
    map_columns(table, row, &[HWC_ESI_COLUMN], &mut entry.overwrite);
    if let Some(flag) = numeric_cell(table, row, HWC_HABITABLE_COLUMN) {
        entry.overwrite.insert(HWC_PHI_CATEGORY, phi_category(flag));
    }
    entry
}

fn hz_gallery_entry(table: &Table, row: usize) -> CatalogEntry {
    let mut entry = CatalogEntry::default();
    map_columns(table, row, &HZ_GALLERY_FILL_COLUMNS, &mut entry.fill);
    entry
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/catalogs.rs"]
mod tests;
