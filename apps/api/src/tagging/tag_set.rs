//! `TagSet`: the five bilingual term lists produced for one posting.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tagging::coercion::to_list;
use crate::tagging::TagError;

/// Keys the model is asked to emit, in output order.
pub const TAG_KEYS: [&str; 5] = [
    "cargos_es",
    "cargos_en",
    "empresas",
    "palabras_clave_es",
    "palabras_clave_en",
];

/// Every element is trimmed and non-empty; any list may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagSet {
    /// Job titles and synonyms, Spanish.
    pub cargos_es: Vec<String>,
    /// Job titles, English.
    pub cargos_en: Vec<String>,
    /// Employers where suitable candidates tend to work.
    pub empresas: Vec<String>,
    /// Skills, certifications and tools, Spanish. May contain AND/OR terms.
    pub palabras_clave_es: Vec<String>,
    /// Skills, certifications and tools, English.
    pub palabras_clave_en: Vec<String>,
}

impl TagSet {
    /// Parses the model's raw reply.
    ///
    /// Only a reply that is not a JSON object fails. Missing or oddly-shaped
    /// keys degrade to empty lists.
    pub fn from_response(raw: &str) -> Result<Self, TagError> {
        let trimmed = raw.trim();
        let data: Value =
            serde_json::from_str(trimmed).map_err(|e| TagError::ResponseFormat {
                raw: trimmed.to_string(),
                reason: e.to_string(),
            })?;

        let Value::Object(data) = data else {
            return Err(TagError::ResponseFormat {
                raw: trimmed.to_string(),
                reason: "expected a JSON object".to_string(),
            });
        };

        Ok(TagSet {
            cargos_es: to_list(data.get("cargos_es")),
            cargos_en: to_list(data.get("cargos_en")),
            empresas: to_list(data.get("empresas")),
            palabras_clave_es: to_list(data.get("palabras_clave_es")),
            palabras_clave_en: to_list(data.get("palabras_clave_en")),
        })
    }

    /// `(key, terms)` for each category, in `TAG_KEYS` order.
    pub fn categories(&self) -> [(&'static str, &[String]); 5] {
        [
            (TAG_KEYS[0], self.cargos_es.as_slice()),
            (TAG_KEYS[1], self.cargos_en.as_slice()),
            (TAG_KEYS[2], self.empresas.as_slice()),
            (TAG_KEYS[3], self.palabras_clave_es.as_slice()),
            (TAG_KEYS[4], self.palabras_clave_en.as_slice()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.categories().iter().all(|(_, terms)| terms.is_empty())
    }
}
