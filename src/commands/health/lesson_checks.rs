use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LessonStats {
    pub with_video: usize,
    pub with_resources: usize,
    pub resource_issues: usize,
}

pub fn check_lessons(
    lessons: &[Lesson],
    patterns: &ContentPatterns,
    findings: &mut Findings,
) -> LessonStats {
    let mut stats = LessonStats::default();

    for lesson in lessons {
        check_lesson_html(lesson, patterns, findings);

        if check_lesson_video(lesson, patterns, findings) {
            stats.with_video += 1;
        }

        let resources = check_lesson_resources(lesson, patterns, findings);
        stats.resource_issues += resources.issues;
        if resources.has_any {
            stats.with_resources += 1;
        }
    }

    stats
}

fn check_lesson_html(lesson: &Lesson, patterns: &ContentPatterns, findings: &mut Findings) {
    let flagged = lesson
        .content_html
        .iter()
        .filter(|(_, html)| patterns.has_dangerous_html(html))
        .map(|(column, _)| column.clone())
        .collect::<Vec<String>>();
    if flagged.is_empty() {
        return;
    }

    findings.err(
        "DANGEROUS_HTML",
        format!(
            "Lesson {}: dangerous HTML detected (<script/on*/javascript:)",
            lesson.display_id()
        ),
        lesson_details(lesson, None, flagged),
    );
}

/// Returns whether the lesson carries a video.
fn check_lesson_video(
    lesson: &Lesson,
    patterns: &ContentPatterns,
    findings: &mut Findings,
) -> bool {
    let url = lesson.video_url.as_str();
    if url.is_empty() {
        return false;
    }

    let kind = patterns.video_type(url);
    debug!(lesson = %lesson.display_id(), kind = kind.as_str(), "classified lesson video");

    let details = || lesson_details(lesson, Some("videoUrl"), vec![url.to_string()]);
    if !patterns.is_http(url) {
        findings.warn(
            "VIDEO_URL_NOT_HTTP",
            format!("Lesson {}: videoUrl is not http(s)", lesson.display_id()),
            details(),
        );
    } else if kind == VideoKind::Link {
        findings.warn(
            "VIDEO_URL_FALLBACK",
            format!(
                "Lesson {}: videoUrl not recognized for embed (will fallback to open link)",
                lesson.display_id()
            ),
            details(),
        );
    }

    true
}

#[derive(Debug, Default)]
struct ResourceOutcome {
    has_any: bool,
    issues: usize,
}

fn check_lesson_resources(
    lesson: &Lesson,
    patterns: &ContentPatterns,
    findings: &mut Findings,
) -> ResourceOutcome {
    let mut outcome = ResourceOutcome::default();

    for (column, raw) in &lesson.resources {
        if raw.is_blank() {
            continue;
        }

        match parse_resources(raw) {
            Err(err) => {
                findings.warn(
                    "RESOURCES_BAD_JSON",
                    format!("Lesson {}: resources JSON parse error", lesson.display_id()),
                    lesson_details(lesson, Some(column.as_str()), vec![err.detail]),
                );
                outcome.issues += 1;
            }
            Ok(items) => {
                check_resource_column(lesson, column, &items, patterns, findings, &mut outcome)
            }
        }
    }

    if !lesson.files_url.is_empty() {
        outcome.has_any = true;
        if !patterns.is_http(&lesson.files_url) {
            findings.warn(
                "RESOURCE_URL_NOT_HTTP",
                format!(
                    "Lesson {}: resource URL not http(s) -> {}",
                    lesson.display_id(),
                    lesson.files_url
                ),
                lesson_details(lesson, Some(FILES_URL_COLUMN), vec![lesson.files_url.clone()]),
            );
            outcome.issues += 1;
        }
    }

    outcome
}

/// Duplicate URLs are only meaningful within one language column.
fn check_resource_column(
    lesson: &Lesson,
    column: &str,
    items: &[ResourceLink],
    patterns: &ContentPatterns,
    findings: &mut Findings,
    outcome: &mut ResourceOutcome,
) {
    let lesson_id = lesson.display_id();
    let mut seen = HashSet::new();

    for item in items {
        outcome.has_any = true;
        let url = item.url.trim();
        let label = item.label.trim();

        if url.is_empty() {
            findings.err(
                "RESOURCE_MISSING_URL",
                format!("Lesson {lesson_id}: resource missing URL"),
                lesson_details(lesson, Some(column), non_empty(label)),
            );
            outcome.issues += 1;
            continue;
        }

        let details = || lesson_details(lesson, Some(column), vec![url.to_string()]);
        if !patterns.is_http(url) {
            findings.warn(
                "RESOURCE_URL_NOT_HTTP",
                format!("Lesson {lesson_id}: resource URL not http(s) -> {url}"),
                details(),
            );
            outcome.issues += 1;
        }
        if label.is_empty() {
            findings.warn(
                "RESOURCE_MISSING_LABEL",
                format!("Lesson {lesson_id}: resource missing label for {url}"),
                details(),
            );
            outcome.issues += 1;
        }
        if !seen.insert(url) {
            findings.warn(
                "RESOURCE_DUP_URL",
                format!("Lesson {lesson_id}: duplicate resource URL -> {url}"),
                details(),
            );
            outcome.issues += 1;
        }
    }
}

fn non_empty(value: &str) -> Vec<String> {
    if value.is_empty() {
        Vec::new()
    } else {
        vec![value.to_string()]
    }
}
