//! Extraction strategies: named, ordered sources for each `JobRecord` field.
//!
//! Each strategy looks at a parsed `Page` and either finds a value or returns
//! `None`. `build_record` walks `STRATEGIES` in order and keeps the first
//! non-blank value per field, recording which strategy produced it.

use html_escape::decode_html_entities;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use serde_json::{Map, Value};

use super::record::{JobRecord, RecordField};

/// Class carried by the `<script>` that holds a server-embedded React
/// component payload (Bizneo / JobCenter boards put the posting there).
pub const EMBEDDED_COMPONENT_SELECTOR: &str = "script.js-react-on-rails-component";

/// Elements whose text is never shown to a reader.
const INVISIBLE_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// A fetched page, parsed once and shared by all strategies.
pub struct Page {
    document: Html,
    embedded_job: Option<Map<String, Value>>,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let embedded_job = embedded_job_object(&document);
        Self {
            document,
            embedded_job,
        }
    }

    fn embedded_job_field(&self, key: &str) -> Option<String> {
        let value = self.embedded_job.as_ref()?.get(key)?.as_str()?;
        Some(decode_html_entities(value).into_owned())
    }
}

pub struct Strategy {
    pub name: &'static str,
    pub field: RecordField,
    extract: fn(&Page) -> Option<String>,
}

impl Strategy {
    pub fn apply(&self, page: &Page) -> Option<String> {
        (self.extract)(page).filter(|v| !v.trim().is_empty())
    }
}

/// All strategies, in precedence order within each field.
pub static STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "title-element",
        field: RecordField::Title,
        extract: title_element,
    },
    Strategy {
        name: "meta-description",
        field: RecordField::MetaDescription,
        extract: meta_description,
    },
    Strategy {
        name: "og-description",
        field: RecordField::OgDescription,
        extract: og_description,
    },
    Strategy {
        name: "embedded-job-description",
        field: RecordField::JobDescription,
        extract: embedded_job_description,
    },
    Strategy {
        name: "embedded-job-requirements",
        field: RecordField::JobRequirements,
        extract: embedded_job_requirements,
    },
    Strategy {
        name: "visible-text",
        field: RecordField::Text,
        extract: visible_text,
    },
];

/// Where one field's value came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSource {
    pub field: RecordField,
    /// Winning strategy, `None` when every strategy came back empty.
    pub strategy: Option<&'static str>,
    pub chars: usize,
}

pub type ExtractionTrace = Vec<FieldSource>;

/// Reduces the strategy table over `page` into a record and its provenance.
pub fn build_record(url: &str, page: &Page) -> (JobRecord, ExtractionTrace) {
    let mut record = JobRecord::new(url);
    let mut trace = Vec::with_capacity(RecordField::ALL.len());

    for field in RecordField::ALL {
        let found = STRATEGIES
            .iter()
            .filter(|s| s.field == field)
            .find_map(|s| s.apply(page).map(|value| (s.name, value)));

        match found {
            Some((name, value)) => {
                trace.push(FieldSource {
                    field,
                    strategy: Some(name),
                    chars: value.chars().count(),
                });
                record.set(field, value);
            }
            None => trace.push(FieldSource {
                field,
                strategy: None,
                chars: 0,
            }),
        }
    }

    (record, trace)
}

fn first_element<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    let mut matches = document.select(&selector);
    matches.next()
}

fn first_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
    let element = first_element(document, selector)?;
    Some(element.value().attr(attr)?.trim().to_string())
}

fn title_element(page: &Page) -> Option<String> {
    let title = first_element(&page.document, "title")?;
    Some(title.text().collect::<String>().trim().to_string())
}

fn meta_description(page: &Page) -> Option<String> {
    first_attr(&page.document, r#"meta[name="description"]"#, "content")
}

fn og_description(page: &Page) -> Option<String> {
    first_attr(&page.document, r#"meta[property="og:description"]"#, "content")
}

fn embedded_job_description(page: &Page) -> Option<String> {
    page.embedded_job_field("description")
}

fn embedded_job_requirements(page: &Page) -> Option<String> {
    page.embedded_job_field("min_requirements")
}

fn visible_text(page: &Page) -> Option<String> {
    let mut chunks = Vec::new();
    for node in page.document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| INVISIBLE_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            chunks.push(&**text);
        }
    }
    Some(collapse_whitespace(&chunks.join(" ")))
}

/// The `job` object inside the embedded component payload, if the page has
/// one. Absent, empty or malformed payloads all yield `None`.
fn embedded_job_object(document: &Html) -> Option<Map<String, Value>> {
    let script = first_element(document, EMBEDDED_COMPONENT_SELECTOR)?;
    let raw = script.text().collect::<String>();
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(raw).ok()? {
        Value::Object(mut payload) => match payload.remove("job")? {
            Value::Object(job) => Some(job),
            _ => None,
        },
        _ => None,
    }
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIZNEO_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>
    Ingeniero/a de Datos - ITENE
  </title>
  <meta name="description" content="  Buscamos ingeniero de datos para proyectos de I+D.  ">
  <meta property="og:description" content="Oferta de empleo en Paterna">
  <style>body { color: red; }</style>
</head>
<body>
  <h1>Ingeniero/a de Datos</h1>
  <p>Trabajarás   con
     Python y Spark.</p>
  <script class="js-react-on-rails-component" type="application/json">
    {"component":"JobPage","job":{"description":"&lt;p&gt;Dise&ntilde;o de pipelines&lt;/p&gt;","min_requirements":"Python &amp; SQL"}}
  </script>
  <script>window.analytics = true;</script>
</body>
</html>"#;

    fn record_for(html: &str) -> (JobRecord, ExtractionTrace) {
        build_record("https://jobs.example/1", &Page::parse(html))
    }

    #[test]
    fn test_title_is_trimmed() {
        let (record, _) = record_for(BIZNEO_PAGE);
        assert_eq!(record.title, "Ingeniero/a de Datos - ITENE");
    }

    #[test]
    fn test_meta_description_equals_trimmed_content_attribute() {
        let (record, _) = record_for(BIZNEO_PAGE);
        assert_eq!(
            record.meta_description,
            "Buscamos ingeniero de datos para proyectos de I+D."
        );
        assert_eq!(record.og_description, "Oferta de empleo en Paterna");
    }

    #[test]
    fn test_embedded_job_fields_are_entity_decoded() {
        let (record, _) = record_for(BIZNEO_PAGE);
        assert_eq!(record.job_description, "<p>Diseño de pipelines</p>");
        assert_eq!(record.job_requirements, "Python & SQL");
    }

    #[test]
    fn test_visible_text_collapses_whitespace_and_skips_scripts() {
        let (record, _) = record_for(BIZNEO_PAGE);
        assert!(record
            .text
            .contains("Ingeniero/a de Datos Trabajarás con Python y Spark."));
        assert!(!record.text.contains("window.analytics"));
        assert!(!record.text.contains("color: red"));
        assert!(!record.text.contains("min_requirements"));
        assert!(!record.text.contains("  "));
    }

    #[test]
    fn test_missing_embedded_script_leaves_job_fields_empty() {
        let html = r#"<html><head><title>Backend Developer</title></head>
            <body><p>Rust, Postgres</p></body></html>"#;
        let (record, trace) = record_for(html);
        assert_eq!(record.job_description, "");
        assert_eq!(record.job_requirements, "");
        assert_eq!(record.title, "Backend Developer");

        let description = trace
            .iter()
            .find(|s| s.field == RecordField::JobDescription)
            .unwrap();
        assert_eq!(description.strategy, None);
        assert_eq!(description.chars, 0);
    }

    #[test]
    fn test_malformed_embedded_json_is_silently_ignored() {
        let html = r#"<html><body>
            <script class="js-react-on-rails-component">{"job": {"description": "trunc</script>
            <p>Texto visible</p></body></html>"#;
        let (record, _) = record_for(html);
        assert_eq!(record.job_description, "");
        assert_eq!(record.job_requirements, "");
        assert_eq!(record.text, "Texto visible");
    }

    #[test]
    fn test_embedded_json_without_job_object_is_ignored() {
        for payload in [
            r#"{"component":"Other"}"#,
            r#"{"job":"not an object"}"#,
            r#"[{"job":{"description":"x"}}]"#,
            "",
        ] {
            let html = format!(
                r#"<html><body><script class="js-react-on-rails-component">{payload}</script></body></html>"#
            );
            let (record, _) = record_for(&html);
            assert_eq!(record.job_description, "", "payload: {payload}");
        }
    }

    #[test]
    fn test_script_without_marker_class_is_not_used() {
        let html = r#"<html><body><script type="application/json">
            {"job":{"description":"hidden","min_requirements":"hidden"}}</script></body></html>"#;
        let (record, _) = record_for(html);
        assert_eq!(record.job_description, "");
    }

    #[test]
    fn test_bare_document_yields_empty_record() {
        let (record, trace) = record_for("<html></html>");
        assert!(record.is_empty());
        assert_eq!(record.url, "https://jobs.example/1");
        assert!(trace.iter().all(|s| s.strategy.is_none()));
    }

    #[test]
    fn test_trace_names_winning_strategy_and_length() {
        let (_, trace) = record_for(BIZNEO_PAGE);
        assert_eq!(trace.len(), RecordField::ALL.len());

        let requirements = trace
            .iter()
            .find(|s| s.field == RecordField::JobRequirements)
            .unwrap();
        assert_eq!(requirements.strategy, Some("embedded-job-requirements"));
        assert_eq!(requirements.chars, "Python & SQL".chars().count());
    }

    #[test]
    fn test_first_element_takes_first_match_and_tolerates_bad_selectors() {
        let document = Html::parse_document(
            r#"<html><head><meta name="description" content="primera">
            <meta name="description" content="segunda"></head></html>"#,
        );
        assert_eq!(
            first_attr(&document, r#"meta[name="description"]"#, "content").as_deref(),
            Some("primera")
        );
        assert!(first_element(&document, "meta[").is_none());
        assert!(first_element(&document, "article").is_none());
    }

    #[test]
    fn test_every_field_has_a_strategy() {
        for field in RecordField::ALL {
            assert!(STRATEGIES.iter().any(|s| s.field == field), "{field:?}");
        }
    }
}
