use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::SheetsArgs;
use crate::commands::health::{SHEET_SCHEMAS, load_all, schema_for};
use crate::store::{normalize_workbook_ref, open_workbook};

pub fn run(args: SheetsArgs) -> Result<()> {
    let workbook_path = normalize_workbook_ref(&args.workbook);
    info!(workbook = %workbook_path.display(), "sheet listing requested");

    let workbook = open_workbook(&workbook_path)?;
    let names = workbook
        .sheet_names()
        .with_context(|| format!("failed to list sheets in {}", workbook.describe()))?;

    for name in &names {
        let rows = load_all(workbook.as_ref(), name).len();
        match schema_for(name) {
            Some(schema) => info!(
                sheet = %name,
                rows,
                key = schema.kind.key_field(),
                required_headers = schema.required.len(),
                "registered sheet"
            ),
            None => warn!(sheet = %name, rows, "sheet not in schema registry"),
        }
    }

    for schema in SHEET_SCHEMAS {
        if !names.iter().any(|name| name == schema.name) {
            warn!(sheet = schema.name, "registered sheet missing from workbook");
        }
    }

    info!(sheet_count = names.len(), "sheet listing completed");
    Ok(())
}
