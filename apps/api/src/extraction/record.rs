//! `JobRecord`: the normalized result of extracting one job-posting page.

use serde::{Deserialize, Serialize};

/// A field of `JobRecord` derived from page content (everything but `url`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    Title,
    MetaDescription,
    OgDescription,
    JobDescription,
    JobRequirements,
    Text,
}

impl RecordField {
    pub const ALL: [RecordField; 6] = [
        RecordField::Title,
        RecordField::MetaDescription,
        RecordField::OgDescription,
        RecordField::JobDescription,
        RecordField::JobRequirements,
        RecordField::Text,
    ];

    /// Label used when the record is rendered into a prompt.
    pub fn label(self) -> &'static str {
        match self {
            RecordField::Title => "Title",
            RecordField::MetaDescription => "Meta_Description",
            RecordField::OgDescription => "Og_Description",
            RecordField::JobDescription => "Job_Description",
            RecordField::JobRequirements => "Job_Requirements",
            RecordField::Text => "Text",
        }
    }
}

/// Structured text pulled from a single job posting. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub url: String,
    pub title: String,
    pub meta_description: String,
    pub og_description: String,
    pub job_description: String,
    pub job_requirements: String,
    /// Full visible text of the page, whitespace-collapsed.
    pub text: String,
}

impl JobRecord {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: RecordField) -> &str {
        match field {
            RecordField::Title => &self.title,
            RecordField::MetaDescription => &self.meta_description,
            RecordField::OgDescription => &self.og_description,
            RecordField::JobDescription => &self.job_description,
            RecordField::JobRequirements => &self.job_requirements,
            RecordField::Text => &self.text,
        }
    }

    pub(crate) fn set(&mut self, field: RecordField, value: String) {
        let slot = match field {
            RecordField::Title => &mut self.title,
            RecordField::MetaDescription => &mut self.meta_description,
            RecordField::OgDescription => &mut self.og_description,
            RecordField::JobDescription => &mut self.job_description,
            RecordField::JobRequirements => &mut self.job_requirements,
            RecordField::Text => &mut self.text,
        };
        *slot = value;
    }

    /// True when nothing but the URL is populated. Callers must treat this
    /// as an extraction failure and not send the record to the model.
    pub fn is_empty(&self) -> bool {
        RecordField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// `(label, value)` pairs for every non-empty field, URL first.
    pub fn labeled_fields(&self) -> Vec<(&'static str, &str)> {
        std::iter::once(("Url", self.url.as_str()))
            .chain(RecordField::ALL.iter().map(|f| (f.label(), self.get(*f))))
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }
}
