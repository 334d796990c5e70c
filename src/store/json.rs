use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{CellValue, SheetGrid, Workbook};

#[derive(Debug, Deserialize)]
struct JsonWorkbookFile {
    sheets: BTreeMap<String, Vec<Vec<CellValue>>>,
}

/// Workbook exported as `{"sheets": {"<name>": [[headers...], [cells...]]}}`.
pub struct JsonWorkbook {
    sheets: BTreeMap<String, Vec<Vec<CellValue>>>,
    label: String,
}

impl JsonWorkbook {
    pub fn open(path: &Path) -> Result<Self> {
        let raw = fs::read(path)
            .with_context(|| format!("failed to read workbook: {}", path.display()))?;
        let file: JsonWorkbookFile = serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse workbook: {}", path.display()))?;

        Ok(Self {
            sheets: file.sheets,
            label: path.display().to_string(),
        })
    }

    #[cfg(test)]
    pub fn from_value(value: serde_json::Value, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        let file: JsonWorkbookFile = serde_json::from_value(value)
            .with_context(|| format!("failed to parse workbook: {label}"))?;

        Ok(Self {
            sheets: file.sheets,
            label,
        })
    }
}

impl Workbook for JsonWorkbook {
    fn describe(&self) -> String {
        format!("json:{}", self.label)
    }

    fn sheet_names(&self) -> Result<Vec<String>> {
        Ok(self.sheets.keys().cloned().collect())
    }

    fn read_sheet(&self, name: &str) -> Result<Option<SheetGrid>> {
        Ok(self
            .sheets
            .get(name)
            .map(|values| SheetGrid::from_values(values.clone())))
    }
}
