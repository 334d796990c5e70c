use super::*;

/// Presentation buckets. Declaration order is alphabetical by key so grouped output
/// sorts the same way in every language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Courses,
    General,
    Html,
    Lessons,
    Questions,
    Quizzes,
    Resources,
    Sheets,
    Video,
}

impl GroupKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Courses => "courses",
            Self::General => "general",
            Self::Html => "html",
            Self::Lessons => "lessons",
            Self::Questions => "questions",
            Self::Quizzes => "quizzes",
            Self::Resources => "resources",
            Self::Sheets => "sheets",
            Self::Video => "video",
        }
    }

    pub fn label(self, lang: ReportLang) -> &'static str {
        match (self, lang) {
            (Self::Resources, ReportLang::Fr) => "Ressources",
            (Self::Resources, ReportLang::En) => "Resources",
            (Self::Resources, ReportLang::Ar) => "الموارد",
            (Self::Video, ReportLang::Fr) => "Vidéo",
            (Self::Video, ReportLang::En) => "Video",
            (Self::Video, ReportLang::Ar) => "الفيديو",
            (Self::Html, _) => "HTML",
            (Self::Lessons, ReportLang::Fr) => "Leçons",
            (Self::Lessons, ReportLang::En) => "Lessons",
            (Self::Lessons, ReportLang::Ar) => "الدروس",
            (Self::Quizzes, ReportLang::Fr) => "Quiz",
            (Self::Quizzes, ReportLang::En) => "Quizzes",
            (Self::Quizzes, ReportLang::Ar) => "الاختبارات",
            (Self::Questions, ReportLang::Ar) => "الأسئلة",
            (Self::Questions, _) => "Questions",
            (Self::Courses, ReportLang::Fr) => "Cours",
            (Self::Courses, ReportLang::En) => "Courses",
            (Self::Courses, ReportLang::Ar) => "الدورات",
            (Self::Sheets, ReportLang::Ar) => "الأوراق",
            (Self::Sheets, _) => "Sheets",
            (Self::General, ReportLang::Fr) => "Général",
            (Self::General, ReportLang::En) => "General",
            (Self::General, ReportLang::Ar) => "عام",
        }
    }
}

/// Buckets a finding by its code, falling back to the message for codes that name no topic.
pub fn group_key(code: &str, message: &str) -> GroupKey {
    let code = code.to_ascii_uppercase();
    let code_buckets = [
        ("RESOURCE", GroupKey::Resources),
        ("VIDEO", GroupKey::Video),
        ("HTML", GroupKey::Html),
        ("LESSON", GroupKey::Lessons),
        ("QUIZ", GroupKey::Quizzes),
        ("QUESTION", GroupKey::Questions),
        ("COURSE", GroupKey::Courses),
        ("SHEET", GroupKey::Sheets),
        ("HEADER", GroupKey::Sheets),
    ];
    if let Some((_, key)) = code_buckets
        .iter()
        .find(|(needle, _)| code.contains(*needle))
    {
        return *key;
    }

    if message.to_ascii_lowercase().contains("lesson") {
        GroupKey::Lessons
    } else {
        GroupKey::General
    }
}

pub fn assemble_report(report: &HealthReport, localizer: &MessageLocalizer) -> GroupedReport {
    let lang = localizer.lang();
    let mut buckets = BTreeMap::<GroupKey, Vec<&Finding>>::new();
    for finding in &report.checks {
        buckets
            .entry(group_key(&finding.code, &finding.message))
            .or_default()
            .push(finding);
    }

    let groups = buckets
        .into_iter()
        .map(|(key, findings)| FindingGroup {
            key: key.as_str().to_string(),
            label: key.label(lang).to_string(),
            error_count: count_level(findings.iter().copied(), FindingLevel::Err),
            warning_count: count_level(findings.iter().copied(), FindingLevel::Warn),
            findings: findings
                .into_iter()
                .map(|finding| PresentedFinding {
                    level: finding.level,
                    code: finding.code.clone(),
                    message: localizer.localize(&finding.message),
                    details: finding.details.clone(),
                })
                .collect(),
        })
        .collect::<Vec<FindingGroup>>();

    GroupedReport {
        ok: report.ok,
        lang: lang.as_str().to_string(),
        error_count: count_level(report.checks.iter(), FindingLevel::Err),
        warning_count: count_level(report.checks.iter(), FindingLevel::Warn),
        summary_notes: report
            .summary_notes
            .iter()
            .map(|note| localizer.localize(note))
            .collect(),
        groups,
    }
}

fn count_level<'a>(findings: impl Iterator<Item = &'a Finding>, level: FindingLevel) -> usize {
    findings.filter(|finding| finding.level == level).count()
}
