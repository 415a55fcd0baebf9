use std::io::Read;
use std::path::Path;

use crate::input::InputError;
use crate::input::reader::{is_gzip, open_maybe_gz};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    /// `.csv` (optionally gzipped) is comma separated; everything else is tab.
    pub fn for_path(path: &Path) -> Self {
        let stem = if is_gzip(path) {
            path.file_stem().map(Path::new)
        } else {
            Some(path)
        };
        let is_csv = stem
            .and_then(|p| p.extension())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv { Delimiter::Comma } else { Delimiter::Tab }
    }

    fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str, path: &Path) -> Result<usize, InputError> {
        self.column(name).ok_or_else(|| InputError::MissingColumn {
            path: path.display().to_string(),
            column: name.to_string(),
        })
    }

    /// Cell at `(row, col)`, empty when the row is short.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn read_table(path: &Path) -> Result<Table, InputError> {
    let reader = open_maybe_gz(path)?;
    parse_table(reader, Delimiter::for_path(path), path)
}

/// Reads a header row and data rows. `#` lines are comments, rows may be
/// shorter or longer than the header, and only comma tables honour quotes.
pub fn parse_table<R: Read>(
    reader: R,
    delimiter: Delimiter,
    path: &Path,
) -> Result<Table, InputError> {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(delimiter.as_byte())
        .comment(Some(b'#'))
        .flexible(true)
        .has_headers(true);
    if delimiter == Delimiter::Tab {
        builder.quoting(false);
    }
    let mut rdr = builder.from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(InputError::Parse {
            path: path.display().to_string(),
            line: 1,
            message: "table has no header row".to_string(),
        });
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| csv_error(path, e))?;
        if record.len() > headers.len() {
            tracing::debug!(
                line = record.position().map(|p| p.line()),
                fields = record.len(),
                columns = headers.len(),
                "row has more fields than header"
            );
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read table"
    );
    Ok(Table { headers, rows })
}

fn csv_error(path: &Path, err: csv::Error) -> InputError {
    let line = err.position().map(|p| p.line() as usize).unwrap_or(0);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => InputError::io(path, source),
        _ => InputError::Parse {
            path: path.display().to_string(),
            line,
            message,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table.rs"]
mod tests;
