use super::*;

/// Every registered sheet as read for one health run; `None` marks an absent sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkbookSnapshot {
    sheets: BTreeMap<String, Option<SheetGrid>>,
}

impl WorkbookSnapshot {
    pub fn from_sheets<I>(sheets: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<SheetGrid>)>,
    {
        Self {
            sheets: sheets.into_iter().collect(),
        }
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetGrid> {
        self.sheets.get(name).and_then(Option::as_ref)
    }

    pub fn rows(&self, name: &str) -> &[Record] {
        self.sheet(name)
            .map(|grid| grid.rows.as_slice())
            .unwrap_or_default()
    }
}

/// Reads all data rows of a sheet. Absent or unreadable sheets yield an empty list.
pub fn load_all(workbook: &dyn Workbook, sheet_name: &str) -> Vec<Record> {
    match workbook.read_sheet(sheet_name) {
        Ok(Some(grid)) => grid.rows,
        Ok(None) => {
            debug!(sheet = sheet_name, "sheet absent; treating as empty");
            Vec::new()
        }
        Err(err) => {
            warn!(sheet = sheet_name, error = %err, "sheet unreadable; treating as empty");
            Vec::new()
        }
    }
}

/// Reads every registered sheet once. A read failure aborts the run so an outage is
/// never reported as a clean, empty sheet.
pub fn load_snapshot(workbook: &dyn Workbook) -> Result<WorkbookSnapshot> {
    let mut sheets = Vec::with_capacity(SHEET_SCHEMAS.len());

    for schema in SHEET_SCHEMAS {
        let grid = workbook.read_sheet(schema.name).with_context(|| {
            format!(
                "failed to read sheet {} from {}",
                schema.name,
                workbook.describe()
            )
        })?;

        match &grid {
            Some(grid) => info!(
                sheet = schema.name,
                headers = grid.headers.len(),
                rows = grid.rows.len(),
                "loaded sheet"
            ),
            None => warn!(sheet = schema.name, "sheet missing from workbook"),
        }

        sheets.push((schema.name.to_string(), grid));
    }

    Ok(WorkbookSnapshot::from_sheets(sheets))
}
