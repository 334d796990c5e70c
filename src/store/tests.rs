use rusqlite::Connection;
use serde_json::json;

use super::*;

#[test]
fn sheet_grid_skips_blank_rows_and_blank_headers() {
    let grid = SheetGrid::from_values(vec![
        vec![
            CellValue::Text(" courseId ".to_string()),
            CellValue::Text(String::new()),
            CellValue::Text("order".to_string()),
        ],
        vec![
            CellValue::Text("c1".to_string()),
            CellValue::Text("ignored".to_string()),
            CellValue::Number(1.0),
        ],
        vec![CellValue::Blank, CellValue::Text("   ".to_string()), CellValue::Blank],
        vec![CellValue::Text("c2".to_string())],
    ]);

    assert_eq!(grid.headers, vec!["courseId", "order"]);
    assert_eq!(grid.rows.len(), 2);
    assert_eq!(grid.rows[0].text("courseId"), "c1");
    assert_eq!(grid.rows[0].text("order"), "1");
    assert!(grid.rows[0].get("").is_none());
    assert_eq!(grid.rows[1].row_number(), 4);
    assert_eq!(grid.rows[1].get("order"), Some(&CellValue::Blank));
}

#[test]
fn cell_text_matches_spreadsheet_display() {
    assert_eq!(CellValue::Number(2.0).text(), "2");
    assert_eq!(CellValue::Number(2.5).text(), "2.5");
    assert_eq!(CellValue::Text("  a ".to_string()).text(), "a");
    assert!(CellValue::List(Vec::new()).is_blank());
    assert!(!CellValue::Number(0.0).is_blank());
}

#[test]
fn normalize_workbook_ref_strips_file_scheme() {
    assert_eq!(
        normalize_workbook_ref(" file:///tmp/catalog.sqlite "),
        PathBuf::from("/tmp/catalog.sqlite")
    );
    assert_eq!(
        normalize_workbook_ref("data/catalog.json"),
        PathBuf::from("data/catalog.json")
    );
}

#[test]
fn json_workbook_reads_native_cells() {
    let workbook = JsonWorkbook::from_value(
        json!({
            "sheets": {
                "Questions": [
                    ["questionId", "choices_fr", "correctIndex"],
                    ["q1", ["A", "B"], 1],
                    ["q2", null, "0"]
                ]
            }
        }),
        "inline",
    )
    .expect("workbook should parse");

    assert_eq!(workbook.sheet_names().expect("names"), vec!["Questions"]);
    assert!(workbook.read_sheet("Lessons").expect("read").is_none());

    let grid = workbook
        .read_sheet("Questions")
        .expect("read")
        .expect("sheet should exist");
    assert_eq!(grid.rows.len(), 2);
    assert_eq!(
        grid.rows[0].get("choices_fr"),
        Some(&CellValue::List(vec![json!("A"), json!("B")]))
    );
    assert_eq!(grid.rows[0].text("correctIndex"), "1");
    assert!(grid.rows[1].get("choices_fr").expect("cell").is_blank());
}

#[test]
fn sqlite_workbook_maps_tables_to_sheets() {
    let connection = Connection::open_in_memory().expect("in-memory DB should open");
    connection
        .execute_batch(
            "
            CREATE TABLE Courses (courseId TEXT, moduleId TEXT, \"order\" INTEGER);
            INSERT INTO Courses VALUES ('c1', 'm1', 1);
            INSERT INTO Courses VALUES (NULL, '', NULL);
            INSERT INTO Courses VALUES ('c2', 'm1', 2);
            ",
        )
        .expect("fixture should load");

    let workbook = SqliteWorkbook::from_connection(connection, "memory");
    assert_eq!(workbook.sheet_names().expect("names"), vec!["Courses"]);
    assert!(workbook.read_sheet("Lessons").expect("read").is_none());

    let grid = workbook
        .read_sheet("Courses")
        .expect("read")
        .expect("sheet should exist");
    assert_eq!(grid.headers, vec!["courseId", "moduleId", "order"]);
    assert_eq!(grid.rows.len(), 2);
    assert_eq!(grid.rows[1].text("courseId"), "c2");
    assert_eq!(grid.rows[1].text("order"), "2");
    assert_eq!(grid.rows[1].row_number(), 4);
}

#[test]
fn json_workbook_keeps_object_cells_as_json_text() {
    let workbook = JsonWorkbook::from_value(
        json!({
            "sheets": {
                "Domains": [
                    ["domainId", "name_fr"],
                    ["d1", {"x": 1}]
                ]
            }
        }),
        "inline",
    )
    .expect("object cells should parse");

    let grid = workbook
        .read_sheet("Domains")
        .expect("read")
        .expect("sheet should exist");
    assert_eq!(
        grid.rows[0].get("name_fr"),
        Some(&CellValue::Other(json!({"x": 1})))
    );
    assert_eq!(grid.rows[0].text("name_fr"), "{\"x\":1}");
}
