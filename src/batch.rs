use crate::error::{Error, Result};
use crate::{Extraction, NameParser};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Column holding the free-text owner names.
pub const DEFAULT_COLUMN: &str = "homeowner";

/// One CSV row keyed by header name.
pub type Row = HashMap<String, String>;

/// Extraction result for one input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRow {
    /// 1-based data row number, header excluded.
    pub row: usize,
    pub homeowner: String,
    pub people: Extraction,
}

impl ParsedRow {
    pub fn new(row: usize, homeowner: &str, parser: &NameParser) -> Self {
        Self {
            row,
            homeowner: homeowner.to_string(),
            people: parser.extract_name_components(homeowner),
        }
    }
}

/// Load every data row of the CSV file at `path`.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    read_table(path).map(|(_, rows)| rows)
}

fn read_table(path: &Path) -> Result<(Vec<String>, Vec<Row>)> {
    if path.as_os_str().is_empty() || !path.is_file() {
        return Err(Error::InvalidInput(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Row = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(row);
    }

    info!(path = %path.display(), rows = rows.len(), "loaded homeowner file");

    Ok((headers, rows))
}

/// Loads a homeowner CSV and runs every row through a [`NameParser`].
#[derive(Debug, Clone)]
pub struct Importer {
    path: PathBuf,
    column: String,
}

impl Importer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            column: DEFAULT_COLUMN.to_string(),
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.path = path.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// Validate the path and read its rows.
    pub fn load(&self) -> Result<Vec<Row>> {
        let (headers, rows) = read_table(&self.path)?;

        if !headers.iter().any(|h| *h == self.column) {
            return Err(Error::MissingColumn {
                column: self.column.clone(),
                path: self.path.clone(),
            });
        }

        Ok(rows)
    }

    /// Load the file and extract names from every row, in file order.
    ///
    /// Rows with a short record and no value in the name column parse as
    /// an empty field.
    pub fn run(&self, parser: &NameParser) -> Result<Vec<ParsedRow>> {
        let rows = self.load()?;

        let parsed = rows
            .par_iter()
            .enumerate()
            .map(|(index, row)| {
                let homeowner = row.get(&self.column).map(String::as_str).unwrap_or_default();
                ParsedRow::new(index + 1, homeowner, parser)
            })
            .collect();

        Ok(parsed)
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new(PathBuf::new())
    }
}
