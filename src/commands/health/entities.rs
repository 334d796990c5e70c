use super::*;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Localized {
    pub fr: String,
    pub en: String,
}

impl Localized {
    pub fn from_record(record: &Record, stem: &str) -> Self {
        Self {
            fr: record.text(&format!("{stem}_fr")),
            en: record.text(&format!("{stem}_en")),
        }
    }

    /// Arabic is optional; French and English are expected everywhere.
    pub fn has_fr_and_en(&self) -> bool {
        !self.fr.is_empty() && !self.en.is_empty()
    }
}

/// A catalog row narrowed from its sheet once the sheet's required headers are known present.
pub trait Entity: Sized {
    const KIND: EntityKind;

    fn from_record(record: &Record) -> Self;

    fn id(&self) -> &str;

    fn row_number(&self) -> usize;

    fn titles(&self) -> &Localized;

    /// The key, or the sheet row when the key cell is blank.
    fn display_id(&self) -> String {
        if self.id().is_empty() {
            format!("row {}", self.row_number())
        } else {
            self.id().to_string()
        }
    }
}

#[derive(Debug, Clone)]
pub struct Domain {
    pub domain_id: String,
    pub row_number: usize,
    pub name: Localized,
}

#[derive(Debug, Clone)]
pub struct Module {
    pub module_id: String,
    pub domain_id: String,
    pub row_number: usize,
    pub title: Localized,
}

#[derive(Debug, Clone)]
pub struct Course {
    pub course_id: String,
    pub module_id: String,
    pub legacy_domain_id: String,
    pub row_number: usize,
    pub title: Localized,
}

#[derive(Debug, Clone)]
pub struct Lesson {
    pub lesson_id: String,
    pub course_id: String,
    pub row_number: usize,
    pub title: Localized,
    pub content_html: Vec<(String, String)>,
    pub video_url: String,
    pub files_url: String,
    pub resources: Vec<(String, CellValue)>,
}

#[derive(Debug, Clone)]
pub struct Quiz {
    pub quiz_id: String,
    pub lesson_id: String,
    pub row_number: usize,
    pub title: Localized,
}

#[derive(Debug, Clone)]
pub struct Question {
    pub question_id: String,
    pub quiz_id: String,
    pub row_number: usize,
    pub prompt: Localized,
    pub choices: Vec<(String, Vec<String>)>,
    pub correct_index_raw: String,
    pub correct_index: Option<i64>,
}

impl Entity for Domain {
    const KIND: EntityKind = EntityKind::Domain;

    fn from_record(record: &Record) -> Self {
        Self {
            domain_id: record.text("domainId"),
            row_number: record.row_number(),
            name: Localized::from_record(record, Self::KIND.title_stem()),
        }
    }

    fn id(&self) -> &str {
        &self.domain_id
    }

    fn row_number(&self) -> usize {
        self.row_number
    }

    fn titles(&self) -> &Localized {
        &self.name
    }
}

impl Entity for Module {
    const KIND: EntityKind = EntityKind::Module;

    fn from_record(record: &Record) -> Self {
        Self {
            module_id: record.text("moduleId"),
            domain_id: record.text("domainId"),
            row_number: record.row_number(),
            title: Localized::from_record(record, Self::KIND.title_stem()),
        }
    }

    fn id(&self) -> &str {
        &self.module_id
    }

    fn row_number(&self) -> usize {
        self.row_number
    }

    fn titles(&self) -> &Localized {
        &self.title
    }
}

impl Entity for Course {
    const KIND: EntityKind = EntityKind::Course;

    fn from_record(record: &Record) -> Self {
        Self {
            course_id: record.text("courseId"),
            module_id: record.text("moduleId"),
            legacy_domain_id: record.text("domainId"),
            row_number: record.row_number(),
            title: Localized::from_record(record, Self::KIND.title_stem()),
        }
    }

    fn id(&self) -> &str {
        &self.course_id
    }

    fn row_number(&self) -> usize {
        self.row_number
    }

    fn titles(&self) -> &Localized {
        &self.title
    }
}

impl Entity for Lesson {
    const KIND: EntityKind = EntityKind::Lesson;

    fn from_record(record: &Record) -> Self {
        Self {
            lesson_id: record.text("lessonId"),
            course_id: record.text("courseId"),
            row_number: record.row_number(),
            title: Localized::from_record(record, Self::KIND.title_stem()),
            content_html: record
                .fields_with_prefix("contentHtml_")
                .map(|(column, value)| (column.to_string(), value.text()))
                .collect(),
            video_url: record.text("videoUrl"),
            files_url: record.text(FILES_URL_COLUMN),
            resources: RESOURCE_COLUMNS
                .iter()
                .map(|column| {
                    let raw = record.get(column).cloned().unwrap_or_default();
                    (column.to_string(), raw)
                })
                .collect(),
        }
    }

    fn id(&self) -> &str {
        &self.lesson_id
    }

    fn row_number(&self) -> usize {
        self.row_number
    }

    fn titles(&self) -> &Localized {
        &self.title
    }
}

impl Entity for Quiz {
    const KIND: EntityKind = EntityKind::Quiz;

    fn from_record(record: &Record) -> Self {
        Self {
            quiz_id: record.text("quizId"),
            lesson_id: record.text("lessonId"),
            row_number: record.row_number(),
            title: Localized::from_record(record, Self::KIND.title_stem()),
        }
    }

    fn id(&self) -> &str {
        &self.quiz_id
    }

    fn row_number(&self) -> usize {
        self.row_number
    }

    fn titles(&self) -> &Localized {
        &self.title
    }
}

impl Entity for Question {
    const KIND: EntityKind = EntityKind::Question;

    fn from_record(record: &Record) -> Self {
        let correct_index_raw = record.text("correctIndex");
        Self {
            question_id: record.text("questionId"),
            quiz_id: record.text("quizId"),
            row_number: record.row_number(),
            prompt: Localized::from_record(record, Self::KIND.title_stem()),
            choices: record
                .fields_with_prefix("choices_")
                .map(|(column, value)| (column.to_string(), parse_choices(value)))
                .collect(),
            correct_index: parse_leading_int(&correct_index_raw),
            correct_index_raw,
        }
    }

    fn id(&self) -> &str {
        &self.question_id
    }

    fn row_number(&self) -> usize {
        self.row_number
    }

    fn titles(&self) -> &Localized {
        &self.prompt
    }
}

/// Typed view of the usable sheets. Sheets that are absent or missing required
/// headers contribute no entities.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub domains: Vec<Domain>,
    pub modules: Vec<Module>,
    pub courses: Vec<Course>,
    pub lessons: Vec<Lesson>,
    pub quizzes: Vec<Quiz>,
    pub questions: Vec<Question>,
}

impl Catalog {
    pub fn narrow(snapshot: &WorkbookSnapshot, usable: &HashSet<EntityKind>) -> Self {
        Self {
            domains: narrow_sheet(snapshot, usable),
            modules: narrow_sheet(snapshot, usable),
            courses: narrow_sheet(snapshot, usable),
            lessons: narrow_sheet(snapshot, usable),
            quizzes: narrow_sheet(snapshot, usable),
            questions: narrow_sheet(snapshot, usable),
        }
    }

    pub fn counts(&self) -> HealthCounts {
        HealthCounts {
            domains: self.domains.len(),
            modules: self.modules.len(),
            courses: self.courses.len(),
            lessons: self.lessons.len(),
            quizzes: self.quizzes.len(),
            questions: self.questions.len(),
            ..HealthCounts::default()
        }
    }
}

fn narrow_sheet<T: Entity>(snapshot: &WorkbookSnapshot, usable: &HashSet<EntityKind>) -> Vec<T> {
    if !usable.contains(&T::KIND) {
        return Vec::new();
    }

    snapshot
        .rows(T::KIND.sheet_name())
        .iter()
        .map(T::from_record)
        .collect()
}
