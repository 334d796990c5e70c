use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};

use super::{CellValue, SheetGrid, Workbook};

/// Workbook stored as a SQLite database: one table per sheet, column names as headers.
pub struct SqliteWorkbook {
    connection: Connection,
    label: String,
}

impl SqliteWorkbook {
    pub fn open(path: &Path) -> Result<Self> {
        let connection = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("failed to open workbook read-only: {}", path.display()))?;

        Ok(Self::from_connection(connection, path.display().to_string()))
    }

    pub fn from_connection(connection: Connection, label: impl Into<String>) -> Self {
        Self {
            connection,
            label: label.into(),
        }
    }

    fn table_exists(&self, name: &str) -> Result<bool> {
        let found = self
            .connection
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 LIMIT 1",
                params![name],
                |_| Ok(1_i64),
            )
            .optional()
            .with_context(|| format!("failed to probe sheet {name} in {}", self.label))?;
        Ok(found.is_some())
    }
}

impl Workbook for SqliteWorkbook {
    fn describe(&self) -> String {
        format!("sqlite:{}", self.label)
    }

    fn sheet_names(&self) -> Result<Vec<String>> {
        let mut statement = self.connection.prepare(
            "
            SELECT name
            FROM sqlite_master
            WHERE type = 'table'
              AND name NOT LIKE 'sqlite_%'
            ORDER BY name ASC
            ",
        )?;
        let names = statement
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<String>>>()
            .with_context(|| format!("failed to list sheets in {}", self.label))?;
        Ok(names)
    }

    fn read_sheet(&self, name: &str) -> Result<Option<SheetGrid>> {
        if !self.table_exists(name)? {
            return Ok(None);
        }

        let sql = format!("SELECT * FROM {}", quote_identifier(name));
        let mut statement = self
            .connection
            .prepare(&sql)
            .with_context(|| format!("failed to prepare read of sheet {name}"))?;

        let header_row = statement
            .column_names()
            .into_iter()
            .map(|column| CellValue::Text(column.to_string()))
            .collect::<Vec<CellValue>>();
        let column_count = header_row.len();

        let mut values = vec![header_row];
        let mut rows = statement
            .query([])
            .with_context(|| format!("failed to read sheet {name}"))?;
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(column_count);
            for index in 0..column_count {
                cells.push(cell_from_sqlite(row.get_ref(index)?));
            }
            values.push(cells);
        }

        Ok(Some(SheetGrid::from_values(values)))
    }
}

fn cell_from_sqlite(value: ValueRef<'_>) -> CellValue {
    match value {
        ValueRef::Null => CellValue::Blank,
        ValueRef::Integer(value) => CellValue::Number(value as f64),
        ValueRef::Real(value) => CellValue::Number(value),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            CellValue::Text(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
