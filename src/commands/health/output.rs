use super::*;

pub fn write_json_report(report: &HealthReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut output, report)
        .context("failed to serialize health report json output")?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

pub fn write_text_report(report: &HealthReport, grouped: &GroupedReport) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());

    writeln!(
        output,
        "Overall: {} ({} errors, {} warnings)",
        if grouped.ok { "OK" } else { "FAILED" },
        grouped.error_count,
        grouped.warning_count
    )?;
    for note in &grouped.summary_notes {
        writeln!(output, "\t{note}")?;
    }

    writeln!(output, "Sheets:")?;
    for (name, status) in &report.sheets {
        let state = if !status.exists {
            "missing"
        } else if status.missing_headers.is_empty() {
            "ok"
        } else {
            "incomplete"
        };
        let missing = if status.missing_headers.is_empty() {
            "-".to_string()
        } else {
            status.missing_headers.join(", ")
        };
        writeln!(output, "\t{name}\t{state}\t{missing}")?;
    }

    writeln!(output, "Findings: {}", report.checks.len())?;
    for group in &grouped.groups {
        writeln!(output, "\t{} ({})", group.label, group.findings.len())?;
        for finding in &group.findings {
            writeln!(
                output,
                "\t\t{}\t{}\t{}",
                finding.level.as_str(),
                finding.code,
                finding.message
            )?;
        }
    }

    let counts = &report.counts;
    writeln!(
        output,
        "Counts: domains={} modules={} courses={} lessons={} quizzes={} questions={}",
        counts.domains,
        counts.modules,
        counts.courses,
        counts.lessons,
        counts.quizzes,
        counts.questions,
    )?;
    writeln!(
        output,
        "\tlessonsWithVideo={} lessonsWithResources={} resourceIssues={}",
        counts.lessons_with_video,
        counts.lessons_with_resources,
        counts.resource_issues,
    )?;

    output.flush()?;
    Ok(())
}
