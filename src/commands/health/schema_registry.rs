#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Domain,
    Module,
    Course,
    Lesson,
    Quiz,
    Question,
}

impl EntityKind {
    pub fn sheet_name(self) -> &'static str {
        match self {
            Self::Domain => "Domains",
            Self::Module => "Modules",
            Self::Course => "Courses",
            Self::Lesson => "Lessons",
            Self::Quiz => "Quizzes",
            Self::Question => "Questions",
        }
    }

    pub fn key_field(self) -> &'static str {
        match self {
            Self::Domain => "domainId",
            Self::Module => "moduleId",
            Self::Course => "courseId",
            Self::Lesson => "lessonId",
            Self::Quiz => "quizId",
            Self::Question => "questionId",
        }
    }

    /// Parent kind and the child column holding its key.
    pub fn parent(self) -> Option<(EntityKind, &'static str)> {
        match self {
            Self::Domain => None,
            Self::Module => Some((Self::Domain, "domainId")),
            Self::Course => Some((Self::Module, "moduleId")),
            Self::Lesson => Some((Self::Course, "courseId")),
            Self::Quiz => Some((Self::Lesson, "lessonId")),
            Self::Question => Some((Self::Quiz, "quizId")),
        }
    }

    /// Column stem of the multilingual display text (`<stem>_fr`, `<stem>_en`, `<stem>_ar`).
    pub fn title_stem(self) -> &'static str {
        match self {
            Self::Domain => "name",
            Self::Question => "question",
            _ => "title",
        }
    }

    pub fn code_stem(self) -> &'static str {
        match self {
            Self::Domain => "DOMAIN",
            Self::Module => "MODULE",
            Self::Course => "COURSE",
            Self::Lesson => "LESSON",
            Self::Quiz => "QUIZ",
            Self::Question => "QUESTION",
        }
    }

    pub fn plural_label(self) -> &'static str {
        match self {
            Self::Domain => "domains",
            Self::Module => "modules",
            Self::Course => "courses",
            Self::Lesson => "lessons",
            Self::Quiz => "quizzes",
            Self::Question => "questions",
        }
    }

    pub fn duplicate_code(self) -> String {
        format!("DUP_{}_ID", self.code_stem())
    }

    pub fn bilingual_code(self) -> String {
        format!("MISSING_{}_BILINGUAL", self.code_stem())
    }
}

#[derive(Debug)]
pub struct SheetSchema {
    pub name: &'static str,
    pub kind: EntityKind,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

pub const SHEET_SCHEMAS: &[SheetSchema] = &[
    SheetSchema {
        name: "Domains",
        kind: EntityKind::Domain,
        required: &[
            "domainId",
            "name_fr",
            "name_en",
            "description_fr",
            "description_en",
            "order",
        ],
        optional: &["name_ar", "description_ar", "icon", "isActive"],
    },
    SheetSchema {
        name: "Modules",
        kind: EntityKind::Module,
        required: &[
            "moduleId",
            "domainId",
            "title_fr",
            "title_en",
            "description_fr",
            "description_en",
            "order",
        ],
        optional: &["title_ar", "description_ar", "icon", "isActive"],
    },
    SheetSchema {
        name: "Courses",
        kind: EntityKind::Course,
        required: &[
            "courseId",
            "moduleId",
            "title_fr",
            "title_en",
            "description_fr",
            "description_en",
            "level",
            "order",
        ],
        optional: &["title_ar", "description_ar", "isActive"],
    },
    SheetSchema {
        name: "Lessons",
        kind: EntityKind::Lesson,
        required: &[
            "lessonId",
            "courseId",
            "title_fr",
            "title_en",
            "contentHtml_fr",
            "contentHtml_en",
            "videoUrl",
            "filesUrl",
            "order",
        ],
        optional: &[
            "title_ar",
            "contentHtml_ar",
            "resources_fr",
            "resources_en",
            "resources_ar",
        ],
    },
    SheetSchema {
        name: "Quizzes",
        kind: EntityKind::Quiz,
        required: &["quizId", "lessonId", "title_fr", "title_en", "passingScore"],
        optional: &["title_ar"],
    },
    SheetSchema {
        name: "Questions",
        kind: EntityKind::Question,
        required: &[
            "questionId",
            "quizId",
            "question_fr",
            "question_en",
            "choices_fr",
            "choices_en",
            "correctIndex",
            "explanation_fr",
            "explanation_en",
        ],
        optional: &["question_ar", "choices_ar", "explanation_ar"],
    },
];

pub fn schema_for(sheet_name: &str) -> Option<&'static SheetSchema> {
    SHEET_SCHEMAS
        .iter()
        .find(|schema| schema.name == sheet_name)
}
