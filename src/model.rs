use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingLevel {
    Err,
    Warn,
}

impl FindingLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Err => "err",
            Self::Warn => "warn",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub level: FindingLevel,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<FindingDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetStatus {
    pub exists: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    pub missing_headers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_optional_headers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCounts {
    pub domains: usize,
    pub modules: usize,
    pub courses: usize,
    pub lessons: usize,
    pub quizzes: usize,
    pub questions: usize,
    pub lessons_with_video: usize,
    pub lessons_with_resources: usize,
    pub resource_issues: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub ok: bool,
    pub sheets: BTreeMap<String, SheetStatus>,
    pub counts: HealthCounts,
    pub checks: Vec<Finding>,
    pub summary_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentedFinding {
    pub level: FindingLevel,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FindingDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingGroup {
    pub key: String,
    pub label: String,
    pub error_count: usize,
    pub warning_count: usize,
    pub findings: Vec<PresentedFinding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedReport {
    pub ok: bool,
    pub lang: String,
    pub error_count: usize,
    pub warning_count: usize,
    pub summary_notes: Vec<String>,
    pub groups: Vec<FindingGroup>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReportManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub workbook: String,
    pub workbook_sha256: Option<String>,
    pub report: HealthReport,
    pub grouped: GroupedReport,
}
