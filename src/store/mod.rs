use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

mod json;
mod sqlite;
#[cfg(test)]
mod tests;

pub use json::JsonWorkbook;
pub use sqlite::SqliteWorkbook;

/// A tabular store addressed by sheet name, with header row 1.
pub trait Workbook {
    fn describe(&self) -> String;

    fn sheet_names(&self) -> Result<Vec<String>>;

    /// `Ok(None)` when the sheet does not exist; `Err` when the store could not be read.
    fn read_sheet(&self, name: &str) -> Result<Option<SheetGrid>>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Blank,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<serde_json::Value>),
    /// Any other JSON cell (e.g. an object); rendered as its JSON text.
    Other(serde_json::Value),
}

impl CellValue {
    /// Trimmed display text, as a spreadsheet would render the cell.
    pub fn text(&self) -> String {
        match self {
            Self::Blank => String::new(),
            Self::Bool(value) => value.to_string(),
            Self::Number(value) => format_number(*value),
            Self::Text(value) => value.trim().to_string(),
            Self::List(items) if items.is_empty() => String::new(),
            Self::List(items) => serde_json::to_string(items).unwrap_or_default(),
            Self::Other(value) => value.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text().is_empty()
    }
}

pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    row_number: usize,
    fields: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new(row_number: usize, fields: BTreeMap<String, CellValue>) -> Self {
        Self { row_number, fields }
    }

    pub fn row_number(&self) -> usize {
        self.row_number
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.fields.get(field)
    }

    pub fn text(&self, field: &str) -> String {
        self.get(field).map(CellValue::text).unwrap_or_default()
    }

    pub fn fields_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a CellValue)> + 'a {
        self.fields
            .iter()
            .filter(move |(name, _)| name.starts_with(prefix))
            .map(|(name, value)| (name.as_str(), value))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Record>,
}

impl SheetGrid {
    /// Builds a sheet from a raw 2-D grid whose first row holds the headers.
    pub fn from_values(values: Vec<Vec<CellValue>>) -> Self {
        let mut values = values.into_iter();
        let Some(header_row) = values.next() else {
            return Self::default();
        };

        let columns = header_row.iter().map(CellValue::text).collect::<Vec<String>>();
        let headers = columns
            .iter()
            .filter(|name| !name.is_empty())
            .cloned()
            .collect::<Vec<String>>();

        let rows = values
            .enumerate()
            .filter(|(_, cells)| cells.iter().any(|cell| !cell.is_blank()))
            .map(|(index, cells)| {
                let mut cells = cells.into_iter();
                let mut fields = BTreeMap::new();
                for column in &columns {
                    let cell = cells.next().unwrap_or_default();
                    if column.is_empty() {
                        continue;
                    }
                    fields.insert(column.clone(), cell);
                }
                Record::new(index + 2, fields)
            })
            .collect();

        Self { headers, rows }
    }
}

/// Accepts plain paths as well as `file://` references.
pub fn normalize_workbook_ref(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let path = trimmed
        .strip_prefix("file://localhost")
        .or_else(|| trimmed.strip_prefix("file://"))
        .unwrap_or(trimmed);
    PathBuf::from(path)
}

pub fn open_workbook(path: &Path) -> Result<Box<dyn Workbook>> {
    if !path.exists() {
        bail!("workbook not found: {}", path.display());
    }

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        Ok(Box::new(JsonWorkbook::open(path)?))
    } else {
        Ok(Box::new(SqliteWorkbook::open(path)?))
    }
}
