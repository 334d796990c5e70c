use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    pub label: String,
    pub url: String,
}

/// Returned instead of a list when a `[`-prefixed resource cell is not valid JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceParseError {
    pub detail: String,
}

impl fmt::Display for ResourceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resources JSON parse error: {}", self.detail)
    }
}

impl std::error::Error for ResourceParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoKind {
    None,
    YouTube,
    Vimeo,
    GoogleDrive,
    Mp4,
    Link,
}

impl VideoKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::YouTube => "youtube",
            Self::Vimeo => "vimeo",
            Self::GoogleDrive => "gdrive",
            Self::Mp4 => "mp4",
            Self::Link => "link",
        }
    }
}

/// Decodes a choices cell. Priority: native list, JSON array, `|` split, `,` split.
pub fn parse_choices(raw: &CellValue) -> Vec<String> {
    match raw {
        CellValue::List(items) => items.iter().map(json_value_text).collect(),
        other => parse_choices_text(&other.text()),
    }
}

pub fn parse_choices_text(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.starts_with('[') {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
            return items.iter().map(json_value_text).collect();
        }
    }

    let delimiter = if trimmed.contains('|') { '|' } else { ',' };
    trimmed
        .split(delimiter)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Decodes a resources cell: native list, JSON array, or `label::url|label::url`.
/// JSON items other than `{label, url}` objects decode with a blank URL.
pub fn parse_resources(raw: &CellValue) -> Result<Vec<ResourceLink>, ResourceParseError> {
    match raw {
        CellValue::List(items) => Ok(items.iter().map(resource_from_json).collect()),
        other => parse_resources_text(&other.text()),
    }
}

pub fn parse_resources_text(raw: &str) -> Result<Vec<ResourceLink>, ResourceParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::Array(items)) => return Ok(items.iter().map(resource_from_json).collect()),
            Ok(_) => {}
            Err(err) => {
                return Err(ResourceParseError {
                    detail: err.to_string(),
                });
            }
        }
    }

    Ok(trimmed
        .split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once("::") {
            Some((label, url)) => ResourceLink {
                label: label.trim().to_string(),
                url: url.trim().to_string(),
            },
            None => ResourceLink {
                label: segment.to_string(),
                url: segment.to_string(),
            },
        })
        .collect())
}

fn resource_from_json(item: &Value) -> ResourceLink {
    match item {
        Value::Object(fields) => ResourceLink {
            label: fields.get("label").map(json_field_text).unwrap_or_default(),
            url: fields.get("url").map(json_field_text).unwrap_or_default(),
        },
        _ => ResourceLink {
            label: String::new(),
            url: String::new(),
        },
    }
}

fn json_value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn json_field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.trim().to_string(),
        other => other.to_string(),
    }
}

/// Reads an integer the way a lenient spreadsheet formula would: optional sign, then
/// leading digits; anything after the digits is ignored.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value = rest[..digits_len].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// URL and HTML classifiers, compiled once per health run.
pub struct ContentPatterns {
    http: Regex,
    youtube: Regex,
    vimeo: Regex,
    gdrive: Regex,
    mp4: Regex,
    script_tag: Regex,
    event_handler: Regex,
    javascript_scheme: Regex,
}

impl ContentPatterns {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            http: compile_pattern(r"(?i)^https?://", "http scheme")?,
            youtube: compile_pattern(
                r"(?i)youtu\.be/|youtube\.com/watch\?v=|youtube\.com/embed/",
                "youtube url",
            )?,
            vimeo: compile_pattern(r"(?i)vimeo\.com/", "vimeo url")?,
            gdrive: compile_pattern(r"(?i)drive\.google\.com/", "google drive url")?,
            mp4: compile_pattern(r"(?i)\.mp4(\?|$)", "mp4 url")?,
            script_tag: compile_pattern(r"(?i)<\s*script\b", "script tag")?,
            event_handler: compile_pattern(r#"(?i)on[a-z]+\s*=\s*["']"#, "event handler")?,
            javascript_scheme: compile_pattern(r"(?i)javascript:", "javascript scheme")?,
        })
    }

    pub fn is_http(&self, url: &str) -> bool {
        self.http.is_match(url.trim())
    }

    pub fn video_type(&self, url: &str) -> VideoKind {
        let url = url.trim();
        if url.is_empty() {
            VideoKind::None
        } else if self.youtube.is_match(url) {
            VideoKind::YouTube
        } else if self.vimeo.is_match(url) {
            VideoKind::Vimeo
        } else if self.gdrive.is_match(url) {
            VideoKind::GoogleDrive
        } else if self.mp4.is_match(url) {
            VideoKind::Mp4
        } else {
            VideoKind::Link
        }
    }

    /// Conservative gate: false positives are acceptable.
    pub fn has_dangerous_html(&self, html: &str) -> bool {
        self.script_tag.is_match(html)
            || self.event_handler.is_match(html)
            || self.javascript_scheme.is_match(html)
    }
}

fn compile_pattern(pattern: &str, name: &str) -> Result<Regex> {
    Regex::new(pattern).with_context(|| format!("failed to compile {name} regex"))
}
