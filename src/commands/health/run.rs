use super::*;

pub fn run(args: HealthArgs) -> Result<()> {
    let workbook_path = normalize_workbook_ref(&args.workbook);
    let lang = resolve_report_lang(args.lang);

    info!(
        workbook = %workbook_path.display(),
        lang = lang.as_str(),
        "health check requested"
    );

    let report = get_health(&workbook_path)?;
    let localizer = MessageLocalizer::new(lang)?;
    let grouped = assemble_report(&report, &localizer);

    if let Some(report_path) = &args.report_path {
        let manifest = HealthReportManifest {
            manifest_version: REPORT_MANIFEST_VERSION,
            generated_at: report_timestamp(),
            workbook: workbook_path.display().to_string(),
            workbook_sha256: fingerprint_workbook(&workbook_path),
            report: report.clone(),
            grouped: grouped.clone(),
        };
        write_report_json(report_path, &manifest)?;
        info!(path = %report_path.display(), "wrote health report");
    }

    if args.json {
        write_json_report(&report)?;
    } else {
        write_text_report(&report, &grouped)?;
    }

    info!(
        ok = report.ok,
        errors = grouped.error_count,
        warnings = grouped.warning_count,
        lessons_with_video = report.counts.lessons_with_video,
        lessons_with_resources = report.counts.lessons_with_resources,
        resource_issues = report.counts.resource_issues,
        "health check completed"
    );

    if args.strict && !report.ok {
        bail!(
            "health check failed with {} error(s); see findings above",
            grouped.error_count
        );
    }

    Ok(())
}

/// Opens the workbook, reads every registered sheet once and validates the snapshot.
pub fn get_health(workbook_path: &Path) -> Result<HealthReport> {
    let checker = IntegrityChecker::new()?;
    let workbook = open_workbook(workbook_path)?;
    let snapshot = load_snapshot(workbook.as_ref())?;
    Ok(checker.run_health_check(&snapshot))
}

fn fingerprint_workbook(path: &Path) -> Option<String> {
    match workbook_sha256(path) {
        Ok(digest) => Some(digest),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "workbook fingerprint unavailable");
            None
        }
    }
}

fn resolve_report_lang(requested: Option<ReportLang>) -> ReportLang {
    requested.unwrap_or_else(|| parse_report_lang(std::env::var(REPORT_LANG_ENV).ok().as_deref()))
}

pub fn parse_report_lang(value: Option<&str>) -> ReportLang {
    match value.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
        Some("fr") => ReportLang::Fr,
        Some("ar") => ReportLang::Ar,
        _ => ReportLang::En,
    }
}
