use super::*;

pub const ALL_PASSED_NOTE: &str = "All core checks passed.";
pub const SOME_FAILED_NOTE: &str = "Some checks failed.";

pub struct IntegrityChecker {
    patterns: ContentPatterns,
}

impl IntegrityChecker {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: ContentPatterns::compile()?,
        })
    }

    /// Runs every rule family over the snapshot and reports all findings; data problems
    /// never short-circuit the run.
    pub fn run_health_check(&self, snapshot: &WorkbookSnapshot) -> HealthReport {
        let mut findings = Findings::default();

        let sheets = check_sheet_schemas(snapshot, &mut findings);
        let catalog = Catalog::narrow(snapshot, &usable_kinds(&sheets));

        check_unique_ids(&catalog, &mut findings);
        check_parent_links(&catalog, &mut findings);
        check_answer_bounds(&catalog.questions, &mut findings);
        let lesson_stats = check_lessons(&catalog.lessons, &self.patterns, &mut findings);
        check_bilingual_titles(&catalog, &mut findings);

        let counts = HealthCounts {
            lessons_with_video: lesson_stats.with_video,
            lessons_with_resources: lesson_stats.with_resources,
            resource_issues: lesson_stats.resource_issues,
            ..catalog.counts()
        };

        let ok = !findings.has_errors();
        let note = if ok { ALL_PASSED_NOTE } else { SOME_FAILED_NOTE };

        HealthReport {
            ok,
            sheets,
            counts,
            checks: findings.into_checks(),
            summary_notes: vec![note.to_string()],
        }
    }
}
