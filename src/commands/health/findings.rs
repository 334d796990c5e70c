use super::*;

/// Collects findings in emission order. The run never stops on an `err`.
#[derive(Debug, Default)]
pub struct Findings {
    checks: Vec<Finding>,
}

impl Findings {
    pub fn err(
        &mut self,
        code: impl Into<String>,
        message: impl Into<String>,
        details: FindingDetails,
    ) {
        self.push(FindingLevel::Err, code.into(), message.into(), details);
    }

    pub fn warn(
        &mut self,
        code: impl Into<String>,
        message: impl Into<String>,
        details: FindingDetails,
    ) {
        self.push(FindingLevel::Warn, code.into(), message.into(), details);
    }

    pub fn has_errors(&self) -> bool {
        self.checks
            .iter()
            .any(|check| check.level == FindingLevel::Err)
    }

    pub fn into_checks(self) -> Vec<Finding> {
        self.checks
    }

    fn push(
        &mut self,
        level: FindingLevel,
        code: String,
        message: String,
        details: FindingDetails,
    ) {
        debug!(level = level.as_str(), code = %code, "finding recorded");
        let details = if details == FindingDetails::default() {
            None
        } else {
            Some(details)
        };
        self.checks.push(Finding {
            level,
            code,
            message,
            details,
        });
    }
}

pub fn capped(values: &[String]) -> Vec<String> {
    values.iter().take(DISPLAY_LIMIT).cloned().collect()
}

pub fn sheet_details(sheet: &str, values: &[String]) -> FindingDetails {
    FindingDetails {
        sheet: Some(sheet.to_string()),
        values: capped(values),
        ..FindingDetails::default()
    }
}

pub fn lesson_details(
    lesson: &Lesson,
    column: Option<&str>,
    values: Vec<String>,
) -> FindingDetails {
    FindingDetails {
        sheet: Some(EntityKind::Lesson.sheet_name().to_string()),
        entity_id: Some(lesson.display_id()),
        column: column.map(ToOwned::to_owned),
        values,
    }
}
