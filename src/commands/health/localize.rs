use super::*;

type TemplateTable = &'static [(&'static str, &'static str)];

const FR_TEMPLATES: TemplateTable = &[
    (r"(?i)^Missing sheet:\s*(.+)$", "Feuille manquante : ${1}"),
    (
        r"(?i)^Missing required headers in ([^:]+):\s*(.+)$",
        "En-têtes requis manquants dans ${1} : ${2}",
    ),
    (
        r"(?i)^Optional headers missing in ([^:]+):\s*(.+)$",
        "En-têtes optionnels manquants dans ${1} : ${2}",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*duplicate resource URL\s*->\s*(.+)$",
        "Leçon ${1} : URL de ressource dupliquée → ${2}",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*resource URL not http\(s\)\s*->\s*(.+)$",
        "Leçon ${1} : URL de ressource invalide (http/https) → ${2}",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*resource missing label for\s+(.+)$",
        "Leçon ${1} : libellé manquant pour la ressource → ${2}",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*resource missing URL$",
        "Leçon ${1} : URL de ressource manquante",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*resources JSON parse error$",
        "Leçon ${1} : erreur d'analyse JSON des ressources",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*videoUrl is not http\(s\)$",
        "Leçon ${1} : l'URL de la vidéo n'est pas en http(s)",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*videoUrl not recognized for embed.*$",
        "Leçon ${1} : vidéo non intégrable (ouverture du lien en secours)",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*dangerous HTML detected.*$",
        "Leçon ${1} : HTML dangereux détecté (<script/on*/javascript:)",
    ),
    (r"(?i)^Duplicate ID in ([^:]+):\s*(.+)$", "ID dupliqué dans ${1} : ${2}"),
    (
        r"(?i)^Questions with invalid correctIndex:\s*(.+)$",
        "Questions avec correctIndex invalide : ${1}",
    ),
    (
        r"(?i)^(\w+) with unknown (\w+):\s*(.+)$",
        "${1} avec ${2} inconnu : ${3}",
    ),
    (
        r"(?i)^Some (\w+) missing FR/EN (\w+):\s*(.+)$",
        "${1} sans ${2} FR/EN : ${3}",
    ),
    (
        r"(?i)^All core checks passed\.$",
        "Tous les contrôles essentiels sont validés.",
    ),
    (r"(?i)^Some checks failed\.$", "Certains contrôles ont échoué."),
];

const AR_TEMPLATES: TemplateTable = &[
    (r"(?i)^Missing sheet:\s*(.+)$", "الورقة مفقودة: ${1}"),
    (
        r"(?i)^Missing required headers in ([^:]+):\s*(.+)$",
        "أعمدة إلزامية ناقصة في ${1}: ${2}",
    ),
    (
        r"(?i)^Optional headers missing in ([^:]+):\s*(.+)$",
        "أعمدة اختيارية ناقصة في ${1}: ${2}",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*duplicate resource URL\s*->\s*(.+)$",
        "الدرس ${1}: رابط مورد مكرر → ${2}",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*resource URL not http\(s\)\s*->\s*(.+)$",
        "الدرس ${1}: رابط غير صالح (http/https) → ${2}",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*resource missing label for\s+(.+)$",
        "الدرس ${1}: عنوان المورد ناقص → ${2}",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*resource missing URL$",
        "الدرس ${1}: رابط المورد ناقص",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*resources JSON parse error$",
        "الدرس ${1}: خطأ في تحليل JSON للموارد",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*videoUrl is not http\(s\)$",
        "الدرس ${1}: رابط الفيديو ليس http(s)",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*videoUrl not recognized for embed.*$",
        "الدرس ${1}: الفيديو غير قابل للتضمين (سيتم فتح الرابط)",
    ),
    (
        r"(?i)^Lesson\s+([^:]+):\s*dangerous HTML detected.*$",
        "الدرس ${1}: تم اكتشاف HTML خطير (<script/on*/javascript:)",
    ),
    (r"(?i)^Duplicate ID in ([^:]+):\s*(.+)$", "معرّف مكرر في ${1}: ${2}"),
    (
        r"(?i)^Questions with invalid correctIndex:\s*(.+)$",
        "أسئلة ذات correctIndex غير صالح: ${1}",
    ),
    (
        r"(?i)^(\w+) with unknown (\w+):\s*(.+)$",
        "${1} ذات ${2} غير معروف: ${3}",
    ),
    (
        r"(?i)^Some (\w+) missing FR/EN (\w+):\s*(.+)$",
        "${1} ينقصها ${2} بالفرنسية/الإنجليزية: ${3}",
    ),
    (
        r"(?i)^All core checks passed\.$",
        "تم اجتياز جميع الفحوصات الأساسية.",
    ),
    (r"(?i)^Some checks failed\.$", "فشلت بعض الفحوصات."),
];

struct MessageTemplate {
    pattern: Regex,
    replacement: &'static str,
}

/// Rewrites English finding messages into the report language. Unmatched messages
/// pass through unchanged.
pub struct MessageLocalizer {
    lang: ReportLang,
    templates: Vec<MessageTemplate>,
}

impl MessageLocalizer {
    pub fn new(lang: ReportLang) -> Result<Self> {
        let table: TemplateTable = match lang {
            ReportLang::En => &[],
            ReportLang::Fr => FR_TEMPLATES,
            ReportLang::Ar => AR_TEMPLATES,
        };

        let templates = table
            .iter()
            .map(|(source, replacement)| {
                let pattern = Regex::new(source).with_context(|| {
                    format!("failed to compile {} message template: {source}", lang.as_str())
                })?;
                Ok(MessageTemplate {
                    pattern,
                    replacement: *replacement,
                })
            })
            .collect::<Result<Vec<MessageTemplate>>>()?;

        Ok(Self { lang, templates })
    }

    pub fn lang(&self) -> ReportLang {
        self.lang
    }

    pub fn localize(&self, message: &str) -> String {
        let mut text = message.trim().to_string();
        for template in &self.templates {
            if template.pattern.is_match(&text) {
                text = template
                    .pattern
                    .replace(&text, template.replacement)
                    .into_owned();
            }
        }
        text
    }
}
