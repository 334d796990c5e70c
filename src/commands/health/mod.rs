use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cli::{HealthArgs, ReportLang};
use crate::model::{
    Finding, FindingDetails, FindingGroup, FindingLevel, GroupedReport, HealthCounts,
    HealthReport, HealthReportManifest, PresentedFinding, SheetStatus,
};
use crate::store::{
    CellValue, Record, SheetGrid, Workbook, normalize_workbook_ref, open_workbook,
};
use crate::util::{report_timestamp, workbook_sha256, write_report_json};

const DISPLAY_LIMIT: usize = 20;
const REPORT_MANIFEST_VERSION: u32 = 1;
const REPORT_LANG_ENV: &str = "CATALOG_HEALTH_LANG";
const RESOURCE_COLUMNS: [&str; 3] = ["resources_fr", "resources_en", "resources_ar"];
const FILES_URL_COLUMN: &str = "filesUrl";

mod content_checks;
mod entities;
mod field_parsers;
mod findings;
mod integrity;
mod lesson_checks;
mod loader;
mod localize;
mod output;
mod report;
mod run;
mod schema_registry;
mod structure_checks;

use self::content_checks::*;
use self::entities::*;
use self::field_parsers::*;
use self::findings::*;
use self::integrity::*;
use self::lesson_checks::*;
use self::localize::*;
use self::output::*;
use self::report::*;
use self::structure_checks::*;

pub use self::loader::{WorkbookSnapshot, load_all, load_snapshot};
pub use self::run::run;
pub use self::schema_registry::{EntityKind, SHEET_SCHEMAS, schema_for};
