use super::*;

pub fn check_sheet_schemas(
    snapshot: &WorkbookSnapshot,
    findings: &mut Findings,
) -> BTreeMap<String, SheetStatus> {
    let mut sheets = BTreeMap::new();

    for schema in SHEET_SCHEMAS {
        let Some(grid) = snapshot.sheet(schema.name) else {
            findings.err(
                "MISSING_SHEET",
                format!("Missing sheet: {}", schema.name),
                sheet_details(schema.name, &[]),
            );
            sheets.insert(
                schema.name.to_string(),
                SheetStatus {
                    exists: false,
                    headers: None,
                    missing_headers: to_owned_list(schema.required),
                    missing_optional_headers: None,
                },
            );
            continue;
        };

        let missing = absent_headers(schema.required, &grid.headers);
        let missing_optional = absent_headers(schema.optional, &grid.headers);

        if !missing.is_empty() {
            findings.err(
                "MISSING_HEADERS",
                format!(
                    "Missing required headers in {}: {}",
                    schema.name,
                    missing.join(", ")
                ),
                sheet_details(schema.name, &missing),
            );
        }
        if !missing_optional.is_empty() {
            findings.warn(
                "MISSING_OPTIONAL_HEADERS",
                format!(
                    "Optional headers missing in {}: {}",
                    schema.name,
                    missing_optional.join(", ")
                ),
                sheet_details(schema.name, &missing_optional),
            );
        }

        sheets.insert(
            schema.name.to_string(),
            SheetStatus {
                exists: true,
                headers: Some(grid.headers.clone()),
                missing_headers: missing,
                missing_optional_headers: Some(missing_optional),
            },
        );
    }

    sheets
}

/// Kinds whose sheet exists with every required header; everything else loads as empty.
pub fn usable_kinds(sheets: &BTreeMap<String, SheetStatus>) -> HashSet<EntityKind> {
    SHEET_SCHEMAS
        .iter()
        .filter(|schema| {
            sheets
                .get(schema.name)
                .map(|status| status.exists && status.missing_headers.is_empty())
                .unwrap_or(false)
        })
        .map(|schema| schema.kind)
        .collect()
}

fn absent_headers(expected: &[&str], present: &[String]) -> Vec<String> {
    expected
        .iter()
        .filter(|header| !present.iter().any(|name| name.as_str() == **header))
        .map(|header| header.to_string())
        .collect()
}

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn check_unique_ids(catalog: &Catalog, findings: &mut Findings) {
    check_unique(&catalog.domains, findings);
    check_unique(&catalog.modules, findings);
    check_unique(&catalog.courses, findings);
    check_unique(&catalog.lessons, findings);
    check_unique(&catalog.quizzes, findings);
    check_unique(&catalog.questions, findings);
}

fn check_unique<T: Entity>(entities: &[T], findings: &mut Findings) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for entity in entities {
        let id = entity.id();
        if id.is_empty() {
            continue;
        }
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id.to_string());
        }
    }

    if duplicates.is_empty() {
        return;
    }

    let kind = T::KIND;
    findings.err(
        kind.duplicate_code(),
        format!(
            "Duplicate ID in {} ({}): {}",
            kind.sheet_name(),
            kind.key_field(),
            capped(&duplicates).join(", ")
        ),
        sheet_details(kind.sheet_name(), &duplicates),
    );
}

pub fn check_parent_links(catalog: &Catalog, findings: &mut Findings) {
    let domain_ids = id_set(&catalog.domains);
    let module_ids = id_set(&catalog.modules);
    let course_ids = id_set(&catalog.courses);
    let lesson_ids = id_set(&catalog.lessons);
    let quiz_ids = id_set(&catalog.quizzes);

    report_orphans(
        &catalog.modules,
        |module| domain_ids.contains(module.domain_id.as_str()),
        findings,
    );
    report_orphans(
        &catalog.courses,
        |course| course_has_parent(course, &module_ids, &domain_ids),
        findings,
    );
    report_orphans(
        &catalog.lessons,
        |lesson| course_ids.contains(lesson.course_id.as_str()),
        findings,
    );
    report_orphans(
        &catalog.quizzes,
        |quiz| lesson_ids.contains(quiz.lesson_id.as_str()),
        findings,
    );
    report_orphans(
        &catalog.questions,
        |question| quiz_ids.contains(question.quiz_id.as_str()),
        findings,
    );
}

/// Courses hang off a module; rows written before modules existed point at a domain directly.
fn course_has_parent(
    course: &Course,
    module_ids: &HashSet<&str>,
    domain_ids: &HashSet<&str>,
) -> bool {
    if !course.module_id.is_empty() {
        return module_ids.contains(course.module_id.as_str());
    }
    !course.legacy_domain_id.is_empty() && domain_ids.contains(course.legacy_domain_id.as_str())
}

fn id_set<T: Entity>(entities: &[T]) -> HashSet<&str> {
    entities
        .iter()
        .map(|entity| entity.id())
        .filter(|id| !id.is_empty())
        .collect()
}

fn report_orphans<T, F>(children: &[T], has_parent: F, findings: &mut Findings)
where
    T: Entity,
    F: Fn(&T) -> bool,
{
    let Some((parent, parent_field)) = T::KIND.parent() else {
        return;
    };

    let orphans = children
        .iter()
        .filter(|child| !has_parent(*child))
        .map(|child| child.display_id())
        .collect::<Vec<String>>();
    if orphans.is_empty() {
        return;
    }

    let kind = T::KIND;
    let label = kind.sheet_name();
    findings.err(
        format!("{}_BAD_{}", kind.code_stem(), parent.code_stem()),
        format!(
            "{label} with unknown {parent_field}: {}",
            capped(&orphans).join(", ")
        ),
        sheet_details(label, &orphans),
    );
}
