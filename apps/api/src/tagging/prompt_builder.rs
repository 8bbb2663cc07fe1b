//! Prompt Builder: renders a `JobRecord` and the requested ceilings into the
//! single user message sent to the model.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::JobRecord;
use crate::tagging::prompts::{
    FORMAT_RULES, OUTPUT_BLOCKS_TEMPLATE, PROMPT_HEADER, VACANCY_CLOSE, VACANCY_OPEN,
};

/// Upper bounds on how many terms the model is asked for, per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagLimits {
    #[serde(default = "default_max_titles")]
    pub max_titles: u32,
    #[serde(default = "default_max_companies")]
    pub max_companies: u32,
    #[serde(default = "default_max_keywords")]
    pub max_keywords: u32,
}

pub const MAX_TITLES_RANGE: (u32, u32) = (1, 30);
pub const MAX_COMPANIES_RANGE: (u32, u32) = (1, 20);
pub const MAX_KEYWORDS_RANGE: (u32, u32) = (1, 50);

fn default_max_titles() -> u32 {
    15
}

fn default_max_companies() -> u32 {
    10
}

fn default_max_keywords() -> u32 {
    20
}

impl Default for TagLimits {
    fn default() -> Self {
        Self {
            max_titles: default_max_titles(),
            max_companies: default_max_companies(),
            max_keywords: default_max_keywords(),
        }
    }
}

impl TagLimits {
    /// Range check for request input. `build_prompt` does not call this.
    pub fn validate(&self) -> Result<(), AppError> {
        let checks = [
            ("max_titles", self.max_titles, MAX_TITLES_RANGE),
            ("max_companies", self.max_companies, MAX_COMPANIES_RANGE),
            ("max_keywords", self.max_keywords, MAX_KEYWORDS_RANGE),
        ];
        for (name, value, (min, max)) in checks {
            if !(min..=max).contains(&value) {
                return Err(AppError::Validation(format!(
                    "{name} must be between {min} and {max}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Builds the full prompt: role, output categories, format rules, then the
/// vacancy wrapped in `<vacante>` markers.
pub fn build_prompt(record: &JobRecord, limits: &TagLimits) -> String {
    let blocks = OUTPUT_BLOCKS_TEMPLATE
        .replace("{max_titles}", &limits.max_titles.to_string())
        .replace("{max_companies}", &limits.max_companies.to_string())
        .replace("{max_keywords}", &limits.max_keywords.to_string());

    format!(
        "{PROMPT_HEADER}{blocks}{FORMAT_RULES}{VACANCY_OPEN}\n{}\n{VACANCY_CLOSE}",
        render_record(record)
    )
}

/// `Label: value` lines for the non-empty fields of `record`.
fn render_record(record: &JobRecord) -> String {
    record
        .labeled_fields()
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}
